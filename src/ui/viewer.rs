use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use egui::{Align2, Color32, FontId, TextureHandle, TextureOptions};
use rfd::FileDialog;
use tracing::{debug, error, info};

use crate::config::config::*;
use crate::config::settings::Settings;
use crate::core::file_manager::FileManager;
use crate::core::image_cache::ImageCache;
use crate::core::image_format::ImageSource;
use crate::core::item::Catalog;
use crate::core::markup;
use crate::core::preload_manager::PreloadManager;
use crate::error::Result;
use crate::i18n::en::*;
use crate::ui::input::KeyBindings;
use crate::ui::navigation_manager::{Direction, NavigationManager};

pub struct CarouselApp {
    navigation: NavigationManager,
    sources: Vec<ImageSource>,
    bindings: KeyBindings,
    image_cache: ImageCache<TextureHandle>,
    failed: HashSet<usize>,
    preload_manager: PreloadManager,
    fullscreen: bool,
    show_about: bool,
    status: Option<String>,
}

impl CarouselApp {
    pub fn new(settings: &Settings, bindings: KeyBindings, catalog: Catalog) -> Result<Self> {
        let preload_manager = PreloadManager::new(
            settings.preload.range,
            settings.preload.worker_count(),
        )?;

        let mut app = Self {
            navigation: NavigationManager::new(),
            sources: Vec::new(),
            bindings,
            image_cache: ImageCache::new(settings.preload.cache_size),
            failed: HashSet::new(),
            preload_manager,
            fullscreen: false,
            show_about: false,
            status: None,
        };
        app.set_catalog(catalog);
        Ok(app)
    }

    /// Renders a new catalog, replacing the current slides.
    fn set_catalog(&mut self, catalog: Catalog) {
        self.navigation.render(catalog.items());
        self.sources = catalog
            .items()
            .iter()
            .map(|item| ImageSource::resolve(&item.image_url, catalog.base_dir()))
            .collect();
        self.image_cache.clear();
        self.failed.clear();
        self.preload_manager.reset();
        info!(
            slides = self.navigation.len(),
            generation = self.preload_manager.generation(),
            "carousel rendered"
        );
    }

    fn open_catalog(&mut self, path: &Path) {
        match Catalog::load(path) {
            Ok(catalog) => {
                self.set_catalog(catalog);
                self.status = None;
            }
            Err(e) => {
                error!("failed to open {}: {e}", path.display());
                self.status = Some(e.to_string());
            }
        }
    }

    fn export_html(&mut self, path: &Path) {
        let html = markup::render_document(self.navigation.slides(), self.navigation.pagination());
        match std::fs::write(path, html) {
            Ok(()) => {
                info!("exported carousel to {}", path.display());
                self.status = Some(format!("{TEXT_EXPORTED}{}", path.display()));
            }
            Err(e) => {
                error!("failed to export to {}: {e}", path.display());
                self.status = Some(e.to_string());
            }
        }
    }

    fn advance(&mut self, direction: Direction) {
        self.navigation.advance(direction);
    }

    fn receive_images(&mut self, ctx: &egui::Context) {
        let loaded_images = self.preload_manager.process_loaded_images();
        if loaded_images.is_empty() {
            return;
        }

        let received = loaded_images.len();
        for loaded in loaded_images {
            match loaded.result {
                Ok(color_image) => {
                    let texture = ctx.load_texture(
                        format!("slide_{}", loaded.index),
                        color_image,
                        TextureOptions::LINEAR,
                    );
                    self.image_cache.insert(loaded.index, texture);
                }
                Err(_) => {
                    self.failed.insert(loaded.index);
                }
            }
        }
        debug!(received, cached = self.image_cache.len(), "slide images received");
    }

    fn preload(&mut self, ctx: &egui::Context) {
        let Some(active) = self.navigation.active_index() else {
            return;
        };

        let cache = &self.image_cache;
        let failed = &self.failed;
        self.preload_manager.preload_images_around_index(&self.sources, active, |index| {
            cache.contains(index) || failed.contains(&index)
        });

        if !cache.contains(active) && !failed.contains(&active) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (directions, escape, f11) = ctx.input(|i| {
            (
                self.bindings.directions(&i.events),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F11),
            )
        });

        for direction in directions {
            self.advance(direction);
        }

        if escape && self.fullscreen {
            self.set_fullscreen(ctx, false);
        }
        if f11 {
            self.set_fullscreen(ctx, !self.fullscreen);
        }
    }

    fn set_fullscreen(&mut self, ctx: &egui::Context, fullscreen: bool) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        self.fullscreen = fullscreen;
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui);
                ui.separator();
                self.show_navigation_controls(ui);
                ui.separator();
                self.show_view_controls(ui, ctx);
                self.show_slide_info(ui);
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button(format!("📂 {}", BTN_OPEN)).clicked() {
            let (catalog_name, catalog_ext) = FileManager::get_catalog_file_filter();
            let (image_name, image_ext) = FileManager::get_supported_file_filter();
            if let Some(path) = FileDialog::new()
                .add_filter(catalog_name, &catalog_ext)
                .add_filter(image_name, &image_ext)
                .pick_file()
            {
                self.open_catalog(&path);
            }
        }

        if ui.button(format!("🗁 {}", BTN_OPEN_FOLDER)).clicked() {
            if let Some(dir) = FileDialog::new().pick_folder() {
                self.open_catalog(&dir);
            }
        }

        if ui
            .add_enabled(!self.navigation.is_empty(), egui::Button::new(format!("💾 {}", BTN_EXPORT)))
            .clicked()
        {
            if let Some(path) = FileDialog::new()
                .add_filter("HTML", &["html"])
                .set_file_name("carousel.html")
                .save_file()
            {
                self.export_html(&path);
            }
        }
    }

    fn show_navigation_controls(&mut self, ui: &mut egui::Ui) {
        let can_navigate = self.navigation.can_navigate();

        if ui
            .add_enabled(can_navigate, egui::Button::new(format!("⬅ {}", BTN_PREV)))
            .on_hover_text(self.bindings.backward_label())
            .clicked()
        {
            self.advance(Direction::Backward);
        }

        if ui
            .add_enabled(can_navigate, egui::Button::new(format!("➡ {}", BTN_NEXT)))
            .on_hover_text(self.bindings.forward_label())
            .clicked()
        {
            self.advance(Direction::Forward);
        }
    }

    fn show_view_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if ui.button(format!("🖥 {}", BTN_FULLSCREEN)).clicked() {
            self.set_fullscreen(ctx, true);
        }

        if ui.button(format!("ℹ {}", BTN_ABOUT)).clicked() {
            self.show_about = true;
        }
    }

    fn show_slide_info(&self, ui: &mut egui::Ui) {
        if let (Some(slide), Some(position)) = (
            self.navigation.active_slide(),
            self.navigation.pagination().position_label(),
        ) {
            ui.separator();
            ui.label(position);
            ui.label(&slide.item().display_name);
        }

        if let Some(status) = &self.status {
            ui.separator();
            ui.weak(status);
        }
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        egui::Window::new(BTN_ABOUT)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(APP_NAME);
                    ui.label(format!("v{}", APP_VERSION));
                    ui.add_space(10.0);
                    ui.label(TEXT_INFOAPP);
                    ui.label(TEXT_LICENSE);
                });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    if ui.button(BTN_CLOSE).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn show_pagination(&self, ctx: &egui::Context) {
        let pagination = self.navigation.pagination();
        if pagination.is_empty() {
            return;
        }
        let dots = pagination.dots();

        egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
            let step = DOT_RADIUS * 2.0 + DOT_SPACING;
            let width = step * pagination.len() as f32 - DOT_SPACING;

            ui.vertical_centered(|ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(width, DOT_RADIUS * 2.0 + 8.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();
                let current = ui.visuals().selection.bg_fill;
                let idle = ui.visuals().weak_text_color();

                for (i, dot) in dots.iter().enumerate() {
                    let center = egui::pos2(
                        rect.left() + DOT_RADIUS + step * i as f32,
                        rect.center().y,
                    );
                    painter.circle_filled(center, DOT_RADIUS, if dot.current { current } else { idle });
                }
            });
        });
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(slide) = self.navigation.active_slide() else {
                self.show_placeholder_text(ui);
                return;
            };
            let index = slide.index();
            let caption = slide.item().display_name.clone();

            let texture = self.image_cache.get(index).cloned();
            let failed = self.failed.contains(&index);
            self.render_slide(ui, index, &caption, texture.as_ref(), failed);
        });
    }

    /// Image scaled to fit, caption band along its bottom edge, index in the corner.
    fn render_slide(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        caption: &str,
        texture: Option<&TextureHandle>,
        failed: bool,
    ) {
        let area = ui.available_rect_before_wrap();
        ui.allocate_rect(area, egui::Sense::hover());

        let frame = match texture {
            Some(texture) => {
                let image_size = texture.size_vec2();
                let scale = (area.width() / image_size.x)
                    .min(area.height() / image_size.y)
                    .min(1.0);
                let rect = egui::Rect::from_center_size(area.center(), image_size * scale);
                egui::Image::from_texture(texture)
                    .fit_to_exact_size(rect.size())
                    .paint_at(ui, rect);
                rect
            }
            None => {
                let text = if failed { TEXT_IMG_UNAVAILABLE } else { TEXT_LOADING_IMG };
                ui.painter().text(
                    area.center(),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(16.0),
                    ui.visuals().weak_text_color(),
                );
                area
            }
        };

        let painter = ui.painter();
        let band_height = CAPTION_FONT_SIZE * 2.0;
        let band = egui::Rect::from_min_max(
            egui::pos2(frame.left(), frame.bottom() - band_height),
            frame.right_bottom(),
        );
        painter.rect_filled(band, 0.0, Color32::from_black_alpha(160));
        painter.text(
            band.center(),
            Align2::CENTER_CENTER,
            caption,
            FontId::proportional(CAPTION_FONT_SIZE),
            Color32::WHITE,
        );

        painter.text(
            frame.left_top() + egui::vec2(8.0, 8.0),
            Align2::LEFT_TOP,
            index.to_string(),
            FontId::monospace(14.0),
            Color32::WHITE,
        );
    }

    fn show_placeholder_text(&self, ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(TEXT_OPEN_CATALOG);
            ui.label(TEXT_ARROWS);
            ui.label(TEXT_F11_FULLSCREEN);
        });
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_images(ctx);
        self.handle_keyboard_input(ctx);

        if !self.fullscreen {
            self.show_toolbar(ctx);
        }
        self.show_pagination(ctx);
        self.show_about_dialog(ctx);
        self.show_main_content(ctx);

        self.preload(ctx);
    }
}
