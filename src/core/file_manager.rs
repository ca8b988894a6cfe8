use std::fs;
use std::path::{Path, PathBuf};

use crate::core::image_format::ImageFormat;
use crate::core::item::Item;

pub struct FileManager;

impl FileManager {
    pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut image_paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        Ok(image_paths)
    }

    /// One item per image: the file stem is the caption, the file name the image
    /// reference. References are relative to the scanned directory.
    pub fn items_from_paths(paths: &[PathBuf]) -> Vec<Item> {
        paths
            .iter()
            .map(|p| {
                let display_name = p
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let file_name = p
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Item::new(display_name, file_name)
            })
            .collect()
    }

    pub fn get_catalog_file_filter() -> (&'static str, Vec<&'static str>) {
        ("Catalog", vec!["toml", "json"])
    }

    pub fn get_supported_file_filter() -> (&'static str, Vec<&'static str>) {
        ("Image", ImageFormat::get_supported_extensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_keeps_sorted_supported_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "notes.txt", "c.webp"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = FileManager::scan_directory(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.webp"]);
    }

    #[test]
    fn scan_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileManager::scan_directory(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn items_use_file_stem_as_caption() {
        let items = FileManager::items_from_paths(&[PathBuf::from("/shots/sunset.beach.png")]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_name, "sunset.beach");
        assert_eq!(items[0].image_url, "sunset.beach.png");
    }
}
