use tracing_subscriber::EnvFilter;

/// A bare level applies to this crate only, leaving dependencies at `warn`.
/// Anything with a `=` is taken as a full filter directive.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("warn,image_carousel={level}")
    }
}

/// `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive(level)))
        .unwrap_or_else(|_| EnvFilter::new(directive("info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
