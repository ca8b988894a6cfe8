pub const APP_NAME: &str = "Image Carousel";
pub const APP_ID: &str = "image-carousel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
pub const DEFAULT_MIN_WINDOW_SIZE: [f32; 2] = [400.0, 300.0];

// Decoded images larger than this are downscaled before upload.
pub const MAX_TEXTURE_SIZE: [u32; 2] = [1920, 1080];

pub const DOT_RADIUS: f32 = 5.0;
pub const DOT_SPACING: f32 = 8.0;
pub const CAPTION_FONT_SIZE: f32 = 20.0;
