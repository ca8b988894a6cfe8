pub const BTN_OPEN: &str = "Open";
pub const BTN_OPEN_FOLDER: &str = "Folder";
pub const BTN_EXPORT: &str = "Export HTML";
pub const BTN_PREV: &str = "Previous";
pub const BTN_NEXT: &str = "Next";
pub const BTN_FULLSCREEN: &str = "Fullscreen";
pub const BTN_ABOUT: &str = "About";
pub const BTN_CLOSE: &str = "Close";

pub const TEXT_OPEN_CATALOG: &str = "Open a catalog or an image folder to start";
pub const TEXT_ARROWS: &str = "Use the arrow keys or the toolbar to move between slides";
pub const TEXT_F11_FULLSCREEN: &str = "F11 toggles fullscreen, Esc leaves it";
pub const TEXT_LOADING_IMG: &str = "Loading image...";
pub const TEXT_IMG_UNAVAILABLE: &str = "Image unavailable";
pub const TEXT_EXPORTED: &str = "Exported to ";
pub const TEXT_INFOAPP: &str = "A small image carousel with keyboard navigation.";
pub const TEXT_LICENSE: &str = "License: MIT";
