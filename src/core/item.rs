//! Carousel items and the catalogs they are loaded from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::file_manager::FileManager;
use crate::core::image_format::ImageFormat;
use crate::error::{CarouselError, Result};

/// One entry of the carousel: a caption and a reference to its image.
///
/// Missing fields deserialize as empty strings and are carried through
/// unchanged; an empty image reference simply renders without a picture.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, alias = "productName")]
    pub display_name: String,
    #[serde(default, alias = "url")]
    pub image_url: String,
}

impl Item {
    pub fn new(display_name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            image_url: image_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

/// Directory holding `path`; a bare file name lives in the working directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// An ordered item sequence plus the directory its relative image paths hang off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    base_dir: Option<PathBuf>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, base_dir: Option<PathBuf>) -> Self {
        Self { items, base_dir }
    }

    /// Loads a catalog from a TOML/JSON file, an image directory, or a single
    /// image (which loads its whole folder).
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = if path.is_dir() {
            Self::from_directory(path)?
        } else if path.is_file() && ImageFormat::is_supported(path) {
            Self::from_directory(parent_dir(path))?
        } else {
            Self::from_file(path)?
        };

        info!(
            "loaded catalog from {} ({} items)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_directory(dir: &Path) -> Result<Self> {
        let paths = FileManager::scan_directory(dir).map_err(|e| {
            CarouselError::Catalog(format!("failed to scan {}: {e}", dir.display()))
        })?;
        Ok(Self::new(
            FileManager::items_from_paths(&paths),
            Some(dir.to_path_buf()),
        ))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CarouselError::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let items = match ext.as_deref() {
            Some("toml") => Self::parse_toml(&content)?,
            Some("json") => Self::parse_json(&content)?,
            _ => {
                return Err(CarouselError::Catalog(format!(
                    "{} is not a .toml or .json catalog",
                    path.display()
                )))
            }
        };

        Ok(Self::new(items, Some(parent_dir(path).to_path_buf())))
    }

    pub fn parse_toml(content: &str) -> Result<Vec<Item>> {
        let catalog: TomlCatalog = toml::from_str(content)
            .map_err(|e| CarouselError::Catalog(format!("failed to parse TOML: {e}")))?;
        Ok(catalog.items)
    }

    pub fn parse_json(content: &str) -> Result<Vec<Item>> {
        let catalog: JsonCatalog = serde_json::from_str(content)
            .map_err(|e| CarouselError::Catalog(format!("failed to parse JSON: {e}")))?;
        Ok(match catalog {
            JsonCatalog::List(items) | JsonCatalog::Wrapped { items } => items,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image_format::ImageSource;

    #[test]
    fn parse_toml_items_in_order() {
        let items = Catalog::parse_toml(
            r#"
[[items]]
display_name = "Chair"
image_url = "img/chair.png"

[[items]]
display_name = "Lamp"
image_url = "https://cdn.example.com/lamp.jpg"
"#,
        )
        .unwrap();
        assert_eq!(
            items,
            vec![
                Item::new("Chair", "img/chair.png"),
                Item::new("Lamp", "https://cdn.example.com/lamp.jpg"),
            ]
        );
    }

    #[test]
    fn parse_toml_without_items_is_empty() {
        assert!(Catalog::parse_toml("").unwrap().is_empty());
    }

    #[test]
    fn parse_json_accepts_product_field_names() {
        let items = Catalog::parse_json(
            r#"[{"productName": "Sofa", "url": "sofa.jpg"}, {"display_name": "Rug", "image_url": "rug.png"}]"#,
        )
        .unwrap();
        assert_eq!(items[0], Item::new("Sofa", "sofa.jpg"));
        assert_eq!(items[1], Item::new("Rug", "rug.png"));
    }

    #[test]
    fn parse_json_wrapped_object() {
        let items = Catalog::parse_json(r#"{"items": [{"display_name": "Desk"}]}"#).unwrap();
        assert_eq!(items, vec![Item::new("Desk", "")]);
    }

    #[test]
    fn parse_json_garbage_is_catalog_error() {
        let err = Catalog::parse_json("{not json").unwrap_err();
        assert!(matches!(err, CarouselError::Catalog(_)));
    }

    #[test]
    fn load_file_records_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.json");
        fs::write(&path, r#"[{"display_name": "A", "image_url": "a.png"}]"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.base_dir(), Some(dir.path()));
    }

    #[test]
    fn load_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.yaml");
        fs::write(&path, "items: []").unwrap();

        assert!(matches!(
            Catalog::load(&path),
            Err(CarouselError::Catalog(_))
        ));
    }

    #[test]
    fn load_missing_file_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(&dir.path().join("nope.toml")),
            Err(CarouselError::Catalog(_))
        ));
    }

    #[test]
    fn load_directory_and_single_image_agree() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.png"), b"x").unwrap();
        fs::write(dir.path().join("two.png"), b"x").unwrap();

        let from_dir = Catalog::load(dir.path()).unwrap();
        let from_image = Catalog::load(&dir.path().join("two.png")).unwrap();
        assert_eq!(from_dir, from_image);
        assert_eq!(from_dir.items()[0].display_name, "one");
    }

    #[test]
    fn directory_items_resolve_to_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let photos = dir.path().join("photos");
        fs::create_dir(&photos).unwrap();
        fs::write(photos.join("a.png"), b"x").unwrap();

        let catalog = Catalog::load(&photos).unwrap();
        let source = ImageSource::resolve(&catalog.items()[0].image_url, catalog.base_dir());
        assert_eq!(source, ImageSource::Local(photos.join("a.png")));
        match source {
            ImageSource::Local(path) => assert!(path.is_file()),
            other => panic!("expected a local image, got {other:?}"),
        }
    }

    #[test]
    fn directory_items_do_not_repeat_a_relative_base() {
        let items = FileManager::items_from_paths(&[PathBuf::from("photos/a.png")]);
        let catalog = Catalog::new(items, Some(PathBuf::from("photos")));
        assert_eq!(
            ImageSource::resolve(&catalog.items()[0].image_url, catalog.base_dir()),
            ImageSource::Local(PathBuf::from("photos/a.png"))
        );
    }

    #[test]
    fn folder_without_images_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert!(catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn bare_file_name_lives_in_working_directory() {
        assert_eq!(parent_dir(Path::new("a.png")), Path::new("."));
        assert_eq!(parent_dir(Path::new("slides.toml")), Path::new("."));
        assert_eq!(parent_dir(Path::new("photos/a.png")), Path::new("photos"));
        assert_eq!(
            ImageSource::resolve("a.png", Some(parent_dir(Path::new("a.png")))),
            ImageSource::Local(PathBuf::from("./a.png"))
        );
    }
}
