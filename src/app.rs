use std::path::Path;

use tracing::info;

use crate::config::config::*;
use crate::config::settings::Settings;
use crate::core::item::Catalog;
use crate::core::markup;
use crate::error::{CarouselError, Result};
use crate::ui::input::KeyBindings;
use crate::ui::navigation_manager::NavigationManager;
use crate::ui::viewer::CarouselApp;

pub fn run(settings: &Settings, bindings: KeyBindings, catalog: Catalog) -> Result<()> {
    let app = CarouselApp::new(settings, bindings, catalog)?;

    let window = &settings.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height]),
        ..Default::default()
    };

    info!("opening window");
    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| CarouselError::Ui(e.to_string()))
}

/// Renders `catalog` in its initial state and writes the markup to `path`.
pub fn export_html(catalog: &Catalog, path: &Path) -> Result<()> {
    let mut navigation = NavigationManager::new();
    navigation.render(catalog.items());

    std::fs::write(
        path,
        markup::render_document(navigation.slides(), navigation.pagination()),
    )?;
    info!(
        "exported {} slides to {}",
        navigation.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Item;

    #[test]
    fn export_writes_initial_state() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("carousel.html");
        let catalog = Catalog::new(
            vec![Item::new("A", "a.png"), Item::new("B", "b.png"), Item::new("C", "c.png")],
            None,
        );

        export_html(&catalog, &out).unwrap();
        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<section class=\"slide-container\">"));
        assert!(html.contains(r#"data-id="0" class="slide active""#));
        assert!(html.contains(r#"data-id="1" class="slide next""#));
        assert!(html.contains(r#"data-id="2" class="slide last""#));
        assert_eq!(html.matches("pagination-active").count(), 1);
    }

    #[test]
    fn export_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("carousel.html");
        let err = export_html(&Catalog::default(), &out).unwrap_err();
        assert!(matches!(err, CarouselError::Io(_)));
    }
}
