use std::path::Path;
use std::sync::Arc;

use egui::ColorImage;
use thiserror::Error;

use crate::config::config::MAX_TEXTURE_SIZE;
use crate::core::image_format::{ImageFormat, ImageSource};

pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError>;
    fn supports_format(&self, format: &ImageFormat) -> bool;
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("unsupported format")]
    UnsupportedFormat,
    #[error("remote image {0} is not fetched")]
    Remote(String),
    #[error("no image reference")]
    Missing,
}

pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError> {
        use image::ImageReader;

        let reader = ImageReader::open(path)?.with_guessed_format()?;

        let img = reader.decode()
            .map_err(|e| LoadError::Decode(e.to_string()))?;

        let [max_w, max_h] = MAX_TEXTURE_SIZE;
        let img = if img.width() > max_w || img.height() > max_h {
            img.resize(max_w, max_h, image::imageops::FilterType::Triangle)
        } else {
            img
        };

        let rgba_img = img.to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw()))
    }

    fn supports_format(&self, _format: &ImageFormat) -> bool {
        true
    }
}

/// Picks a loader by file format. Cheap to clone into worker threads.
#[derive(Clone)]
pub struct ImageLoaderFactory {
    loaders: Arc<Vec<Box<dyn ImageLoader>>>,
}

impl Default for ImageLoaderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoaderFactory {
    pub fn new() -> Self {
        Self {
            loaders: Arc::new(vec![Box::new(RasterImageLoader)]),
        }
    }

    pub fn load_image(&self, source: &ImageSource) -> Result<ColorImage, LoadError> {
        let path = match source {
            ImageSource::Local(path) => path,
            ImageSource::Remote(url) => return Err(LoadError::Remote(url.clone())),
            ImageSource::Missing => return Err(LoadError::Missing),
        };

        let format = ImageFormat::from_path(path).ok_or(LoadError::UnsupportedFormat)?;
        self.loaders
            .iter()
            .find(|loader| loader.supports_format(&format))
            .ok_or(LoadError::UnsupportedFormat)?
            .load(path)
    }
}
