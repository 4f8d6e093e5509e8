//! Cybiko archive binary.

use clap::Parser;
use cyarchive_server::{create_router, AppState, ArchiveConfig, Args, Templates};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "cyarchive={0},cyarchive_server={0},cyarchive_catalog={0},tower_http=info",
                    args.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ArchiveConfig::from(&args);
    info!(
        listen = %config.listen_addr,
        static_dir = %config.static_dir.display(),
        "Starting Cybiko archive"
    );

    // Load the catalog before listening; a partial catalog is never served
    let resources = config.resources_dir();
    let catalog = match cyarchive_catalog::load(&resources) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(path = %err.path().display(), error = %err, "Failed to load catalog");
            return Err(err.into());
        }
    };
    info!(
        games = catalog.len(),
        pages = catalog.max_page(),
        resources = %resources.display(),
        "Catalog loaded"
    );

    let templates = match Templates::load(config.template_dir.as_deref()) {
        Ok(templates) => templates,
        Err(err) => {
            error!(error = %err, "Failed to load templates");
            return Err(err.into());
        }
    };

    // Create router
    let state = AppState::new(catalog, templates, config.clone());
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("Archive listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
