use std::path::PathBuf;

use bus_sign::Config;
use bus_sign::metlink::{MetlinkClient, MetlinkConfig};
use bus_sign::web::{AppState, SignSettings, create_router};
use clap::Parser;
use tracing::{info, warn};

/// Serve the bus sign over HTTP.
#[derive(Parser)]
#[command(name = "bus-sign")]
struct Args {
    /// Metlink stop id (default: METLINK_STOP_ID or 7958)
    #[arg(long)]
    stop_id: Option<String>,

    /// Departures to show (default: METLINK_LIMIT or 2)
    #[arg(long)]
    limit: Option<usize>,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port (default: METLINK_PORT or 8765)
    #[arg(long)]
    port: Option<u16>,

    /// HTML refresh seconds (default: METLINK_REFRESH_SECONDS or 15)
    #[arg(long)]
    refresh: Option<u32>,

    /// Settings file read after the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() {
    bus_sign::logging::init("info");

    let args = Args::parse();
    let config = Config::load(&args.env_file);

    let mut sign = SignSettings::from(&config);
    if let Some(stop_id) = args.stop_id {
        sign.stop_id = stop_id;
    }
    if let Some(limit) = args.limit {
        sign.limit = limit.max(1);
    }
    if let Some(refresh) = args.refresh {
        sign.refresh_secs = refresh.max(1);
    }
    let port = args.port.unwrap_or(config.port);

    // Without a key the server still starts; sign requests report the problem.
    let metlink = match config.api_key() {
        Ok(key) => Some(
            MetlinkClient::new(MetlinkConfig::new(key)).expect("Failed to create Metlink client"),
        ),
        Err(e) => {
            warn!("{e}: sign requests will fail until it is set");
            None
        }
    };

    info!(stop_id = %sign.stop_id, limit = sign.limit, "starting sign server");
    let state = AppState::new(metlink, sign);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), port))
        .await
        .expect("Failed to bind sign server");

    println!("Serving sign at http://{}:{port}/", args.bind);
    println!("Text endpoint:  http://{}:{port}/sign.txt", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
        .expect("Sign server failed");

    println!("\nStopping.");
}
