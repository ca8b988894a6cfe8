//! Error types shared across the carousel.

use thiserror::Error;

/// Errors raised while setting up or driving the carousel.
///
/// Navigation itself never fails; these cover the edges around it: loading
/// configuration and catalogs, exporting markup, and starting the window.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// Configuration is invalid, or a required control has nothing bound to it.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog file or directory could not be turned into items.
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The native window failed to start.
    #[error("UI error: {0}")]
    Ui(String),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
