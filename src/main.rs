#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod config;
mod core;
mod error;
mod i18n;
mod logging;
mod ui;

use std::process::ExitCode;

use tracing::{error, info, warn};

use crate::config::settings::Settings;
use crate::core::item::Catalog;
use crate::error::Result;
use crate::ui::input::KeyBindings;

fn start(args: cli::Args, settings: Settings) -> Result<()> {
    let bindings = KeyBindings::from_settings(&settings.controls)?;

    let catalog = match args.catalog.as_deref().or(settings.catalog.as_deref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    if catalog.is_empty() {
        warn!("catalog has no items, the carousel starts empty");
    }

    if let Some(out) = &args.export_html {
        return app::export_html(&catalog, out);
    }
    app::run(&settings, bindings, catalog)
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (settings, source) = match Settings::load(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(args.log_level.as_deref().unwrap_or("info"));
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.log_level.as_deref().unwrap_or(&settings.logging.level));
    info!("{} v{} starting", config::config::APP_NAME, config::config::APP_VERSION);
    match &source {
        Some(path) => info!("config loaded from {}", path.display()),
        None => info!("no config file, using defaults"),
    }

    match start(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
