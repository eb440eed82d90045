//! Block Catalog - Main Entry Point

use block_catalog::app::application::run_app;
use block_catalog::logging;
use block_catalog::state::settings::CatalogSettings;

fn main() {
    if let Err(e) = logging::init() {
        logging::init_stderr_only();
        tracing::warn!(error = %e, "File logging unavailable, using stderr only");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Block Catalog...");

    let settings = CatalogSettings::load_or_default();
    run_app(settings);
}
