//! Serve command - expose the dataset over HTTP.

use std::path::PathBuf;

use colored::Colorize;

use super::load_store;
use crate::server::{
    app::{self, ServerConfig},
    state::AppState,
};

pub fn run(
    data: PathBuf,
    host: String,
    port: u16,
    allowed_origins: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // The dataset must load before anything is bound; a failure here is fatal
    let store = load_store(&data).map_err(|e| {
        tracing::error!("Failed to load dataset {}: {}", data.display(), e);
        e
    })?;

    let state = AppState::new(store);
    let config = ServerConfig {
        host,
        port,
        allowed_origins,
    };

    let url = format!("http://{}:{}", config.host, config.port);
    println!();
    println!(
        "{} {}",
        "Starting exam score API at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Data: {}", data.display());
    println!("  Records: {}", state.store.len());
    if config.allowed_origins.is_empty() {
        println!("  Origins: any");
    } else {
        println!("  Origins: {}", config.allowed_origins.join(", "));
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, config))
}
