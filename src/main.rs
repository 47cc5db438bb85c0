use bingmaps_uri::error::Result;
use bingmaps_uri::launcher::{show_map, CommandDispatcher};
use bingmaps_uri::types::MapStyle;
use bingmaps_uri::uri_builder::BingMapsUri;

use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut uri = BingMapsUri::new();
    uri.set_center_point(47.6, -122.3)
        .query("coffee")
        .set_zoom_level(12.0)?
        .set_map_style(MapStyle::Road)
        .show_traffic(true);

    println!("{uri}");

    if env::args().any(|arg| arg == "--launch") {
        info!("Launching map application");
        let dispatcher = Arc::new(CommandDispatcher::from_env());
        // Waits for the handler to start, its outcome is only logged
        if let Err(e) = show_map(dispatcher, &uri).await {
            warn!("Launcher task failed: {e}");
        }
    }

    Ok(())
}
