//! Keyboard triggers for navigation.

use egui::{Event, Key};

use crate::config::settings::ControlSettings;
use crate::error::{CarouselError, Result};
use crate::ui::navigation_manager::Direction;

/// A key together with the name it was configured under.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    key: Key,
    name: String,
}

/// Keys that move the carousel, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    forward: Vec<Binding>,
    backward: Vec<Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![Binding {
                key: Key::ArrowRight,
                name: "ArrowRight".to_string(),
            }],
            backward: vec![Binding {
                key: Key::ArrowLeft,
                name: "ArrowLeft".to_string(),
            }],
        }
    }
}

fn resolve(names: &[String], control: &str) -> Result<Vec<Binding>> {
    if names.is_empty() {
        return Err(CarouselError::Config(format!(
            "no key bound to {control} navigation"
        )));
    }
    names
        .iter()
        .map(|name| {
            let name = name.trim();
            Key::from_name(name)
                .map(|key| Binding {
                    key,
                    name: name.to_string(),
                })
                .ok_or_else(|| {
                    CarouselError::Config(format!("unknown key '{name}' in controls.{control}"))
                })
        })
        .collect()
}

impl KeyBindings {
    /// Fails when either direction ends up without a key, when a name is not a
    /// known key, or when one key is bound to both directions.
    pub fn from_settings(controls: &ControlSettings) -> Result<Self> {
        let forward = resolve(&controls.forward, "forward")?;
        let backward = resolve(&controls.backward, "backward")?;

        for binding in &forward {
            if let Some(other) = backward.iter().find(|b| b.key == binding.key) {
                return Err(CarouselError::Config(format!(
                    "key '{}' is bound to both forward and backward (as '{}')",
                    binding.name, other.name
                )));
            }
        }

        Ok(Self { forward, backward })
    }

    pub fn direction_for(&self, key: Key) -> Option<Direction> {
        if self.forward.iter().any(|b| b.key == key) {
            Some(Direction::Forward)
        } else if self.backward.iter().any(|b| b.key == key) {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// Navigation requested by this frame's events, in delivery order.
    ///
    /// Every press counts, auto-repeat included; releases are ignored.
    pub fn directions(&self, events: &[Event]) -> Vec<Direction> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key, pressed: true, ..
                } => self.direction_for(*key),
                _ => None,
            })
            .collect()
    }

    pub fn forward_label(&self) -> String {
        label(&self.forward)
    }

    pub fn backward_label(&self) -> String {
        label(&self.backward)
    }
}

/// Hover text for a button, in the names the user configured.
fn label(bindings: &[Binding]) -> String {
    bindings
        .iter()
        .map(|b| b.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}
