use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
    Tiff,
    Webp,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }

    pub fn get_supported_extensions() -> Vec<&'static str> {
        vec!["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"]
    }
}

/// Where a slide's image reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file on disk, already resolved against the catalog directory.
    Local(PathBuf),
    /// An `http(s)` URL. Never fetched.
    Remote(String),
    /// An empty reference.
    Missing,
}

impl ImageSource {
    /// Resolves an item's `image_url` into a source.
    ///
    /// Relative paths are joined onto `base_dir` when one is known.
    pub fn resolve(image_url: &str, base_dir: Option<&Path>) -> Self {
        let url = image_url.trim();
        if url.is_empty() {
            return ImageSource::Missing;
        }

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ImageSource::Remote(url.to_string());
        }

        let raw = url.strip_prefix("file://").unwrap_or(url);
        let path = PathBuf::from(raw);
        match base_dir {
            Some(base) if path.is_relative() => ImageSource::Local(base.join(path)),
            _ => ImageSource::Local(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("Tif"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::from_extension("svg"), None);
    }

    #[test]
    fn supported_paths() {
        assert!(ImageFormat::is_supported(Path::new("/a/b/photo.webp")));
        assert!(!ImageFormat::is_supported(Path::new("/a/b/notes.txt")));
        assert!(!ImageFormat::is_supported(Path::new("/a/b/noext")));
    }

    #[test]
    fn resolve_remote_urls() {
        assert_eq!(
            ImageSource::resolve("https://images.example.com/a.jpg", None),
            ImageSource::Remote("https://images.example.com/a.jpg".to_string())
        );
        assert!(matches!(
            ImageSource::resolve("HTTP://x/y.png", Some(Path::new("/tmp"))),
            ImageSource::Remote(_)
        ));
    }

    #[test]
    fn resolve_relative_against_base_dir() {
        assert_eq!(
            ImageSource::resolve("img/a.png", Some(Path::new("/catalogs"))),
            ImageSource::Local(PathBuf::from("/catalogs/img/a.png"))
        );
        assert_eq!(
            ImageSource::resolve("img/a.png", None),
            ImageSource::Local(PathBuf::from("img/a.png"))
        );
    }

    #[test]
    fn resolve_file_urls_and_absolute_paths() {
        assert_eq!(
            ImageSource::resolve("file:///srv/a.png", Some(Path::new("/catalogs"))),
            ImageSource::Local(PathBuf::from("/srv/a.png"))
        );
        assert_eq!(
            ImageSource::resolve("/srv/b.png", Some(Path::new("/catalogs"))),
            ImageSource::Local(PathBuf::from("/srv/b.png"))
        );
    }

    #[test]
    fn resolve_blank_is_missing() {
        assert_eq!(ImageSource::resolve("   ", None), ImageSource::Missing);
    }
}
