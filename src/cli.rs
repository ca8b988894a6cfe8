use std::path::PathBuf;

use clap::Parser;

/// Image carousel with keyboard navigation and pagination.
#[derive(Parser, Debug)]
#[command(name = "image-carousel", version, about)]
pub struct Args {
    /// Catalog to open: a .toml or .json file, an image folder, or an image inside one.
    pub catalog: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write the rendered carousel as HTML to this file and exit.
    #[arg(long, value_name = "PATH")]
    pub export_html: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
