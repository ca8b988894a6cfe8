//! User settings loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::config::*;
use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog opened at startup when none is given on the command line.
    pub catalog: Option<PathBuf>,
    pub window: WindowSettings,
    pub controls: ControlSettings,
    pub preload: PreloadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_SIZE[0],
            height: DEFAULT_WINDOW_SIZE[1],
            min_width: DEFAULT_MIN_WINDOW_SIZE[0],
            min_height: DEFAULT_MIN_WINDOW_SIZE[1],
        }
    }
}

/// Key names as understood by `egui::Key::from_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub forward: Vec<String>,
    pub backward: Vec<String>,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            forward: vec!["ArrowRight".to_string()],
            backward: vec!["ArrowLeft".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadSettings {
    /// Neighbours decoded ahead on each side of the active slide.
    pub range: usize,
    /// Decoder threads; 0 picks one per CPU.
    pub workers: usize,
    pub cache_size: usize,
}

impl Default for PreloadSettings {
    fn default() -> Self {
        Self {
            range: 1,
            workers: 0,
            cache_size: 5,
        }
    }
}

impl PreloadSettings {
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)
            .map_err(|e| CarouselError::Config(format!("failed to parse TOML: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CarouselError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Explicit path if given, else the per-user config file if present,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_path(path)?, Some(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Ok((Self::load_from_path(&path)?, Some(path))),
            _ => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        if w.width <= 0.0 || w.height <= 0.0 || w.min_width <= 0.0 || w.min_height <= 0.0 {
            return Err(CarouselError::Config(
                "window sizes must be positive".to_string(),
            ));
        }
        if w.min_width > w.width || w.min_height > w.height {
            return Err(CarouselError::Config(format!(
                "minimum window size {}x{} exceeds initial size {}x{}",
                w.min_width, w.min_height, w.width, w.height
            )));
        }

        let window = 2 * self.preload.range + 1;
        if self.preload.cache_size < window {
            return Err(CarouselError::Config(format!(
                "preload.cache_size ({}) must hold the preload window ({window})",
                self.preload.cache_size
            )));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_ID).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.controls.forward, vec!["ArrowRight"]);
        assert_eq!(settings.controls.backward, vec!["ArrowLeft"]);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
catalog = "slides.toml"

[controls]
forward = ["ArrowRight", "Space"]

[preload]
range = 2
"#,
        )
        .unwrap();
        assert_eq!(settings.catalog, Some(PathBuf::from("slides.toml")));
        assert_eq!(settings.controls.forward, vec!["ArrowRight", "Space"]);
        assert_eq!(settings.controls.backward, vec!["ArrowLeft"]);
        assert_eq!(settings.preload.range, 2);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn cache_smaller_than_window_is_rejected() {
        let err = Settings::from_toml("[preload]\nrange = 3\ncache_size = 4\n").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }

    #[test]
    fn bad_window_sizes_are_rejected() {
        assert!(Settings::from_toml("[window]\nwidth = 0.0\n").is_err());
        assert!(Settings::from_toml("[window]\nwidth = 300.0\n").is_err());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        assert!(matches!(
            Settings::from_toml("this is not toml {{{"),
            Err(CarouselError::Config(_))
        ));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(Settings::load(Some(&missing)).is_err());

        std::fs::write(&missing, "[logging]\nlevel = \"debug\"\n").unwrap();
        let (settings, source) = Settings::load(Some(&missing)).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(source, Some(missing));
    }

    #[test]
    fn zero_workers_means_one_per_cpu() {
        let preload = PreloadSettings::default();
        assert_eq!(preload.worker_count(), num_cpus::get());
        let preload = PreloadSettings {
            workers: 3,
            ..PreloadSettings::default()
        };
        assert_eq!(preload.worker_count(), 3);
    }
}
