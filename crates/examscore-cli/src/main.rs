//! examscore CLI - exam score lookup and statistics.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            allowed_origins,
        } => commands::serve::run(cli.data, host, port, allowed_origins),

        Commands::Info { json } => commands::info::run(cli.data, json),

        Commands::Lookup { sbds, json } => commands::lookup::run(cli.data, sbds, json),

        Commands::Range { min, max, json } => commands::range::run(cli.data, min, max, json),

        Commands::Council { code, json } => commands::council::run(cli.data, code, json),

        Commands::Top { limit, json } => commands::top::run(cli.data, limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
