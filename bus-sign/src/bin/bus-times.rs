//! Print the bus sign for a stop.
//!
//! - `bus-times`              show the default stop
//! - `bus-times 7958`         show stop 7958
//! - `bus-times pick [query]` choose a stop from the catalog first

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use bus_sign::metlink::{MetlinkClient, MetlinkConfig, normalize_predictions};
use bus_sign::sign::render_sign;
use bus_sign::stops::{StopTarget, pick_interactive, sign_label};
use bus_sign::{Config, Error};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bus-times")]
struct Args {
    /// Stop id, or `pick` to choose one interactively
    stop: Option<String>,

    /// Filter for `pick`
    query: Option<String>,

    /// Number of departures to show (default: METLINK_LIMIT or 2)
    #[arg(long)]
    limit: Option<usize>,

    /// Disable coloured sign-style output
    #[arg(long)]
    no_style: bool,

    /// Settings file read after the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    bus_sign::logging::init("warn");

    let args = Args::parse();
    let config = Config::load(&args.env_file);

    let Ok(api_key) = config.api_key() else {
        eprint!("{}", bus_sign::config::MISSING_KEY_HELP);
        eprintln!("Settings file: {}", args.env_file.display());
        return ExitCode::from(2);
    };

    let styled =
        !args.no_style && io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let limit = args.limit.unwrap_or(config.limit).max(1);
    let stop = args.stop.unwrap_or_else(|| config.stop_id.clone());

    match run(api_key, &stop, args.query.as_deref(), limit, styled).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    api_key: &str,
    stop: &str,
    query: Option<&str>,
    limit: usize,
    styled: bool,
) -> Result<String, Error> {
    let client = MetlinkClient::new(MetlinkConfig::new(api_key))?;

    let (stop_id, picked) = match StopTarget::from_arg(stop) {
        StopTarget::Pick => {
            let input = io::BufReader::new(io::stdin());
            let picked = pick_interactive(&client, query, input, io::stdout()).await?;
            println!("Selected stop_id: {}", picked.stop_id);
            (picked.stop_id.clone(), Some(picked))
        }
        StopTarget::Stop(stop_id) => (stop_id, None),
    };

    let payload = client.fetch_predictions(&stop_id, limit).await?;
    let predictions = normalize_predictions(&payload)?;
    let stop_label = sign_label(picked.as_ref(), predictions.stop_label);

    Ok(render_sign(
        &stop_label,
        &stop_id,
        &predictions.departures,
        limit,
        styled,
    ))
}
