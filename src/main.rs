//! locandine main entrypoint.

use locandine::run;
use locandine::ui::messages::error;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr, filtered by `LOCANDINE_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOCANDINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
