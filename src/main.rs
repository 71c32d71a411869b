//! wpspin - WPS PIN generator
//!
//! Prints the WPS PINs suggested for a MAC address, or every known PIN
//! with `--get-all`.

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wpspin::algorithms::find;
use wpspin::config::{Config, OutputFormat};
use wpspin::{generate_pins_for, registry, MacAddress, PinRecord, Selection};

#[derive(Parser, Debug)]
#[command(author, version, about = "WPS PIN generator", long_about = None)]
#[command(after_help = "Example: wpspin 11:22:33:44:55:66")]
struct Cli {
    /// Target MAC address, e.g. 11:22:33:44:55:66
    #[arg(required_unless_present = "list_algorithms")]
    mac: Option<String>,

    /// Get all PIN codes in addition to the suggested ones
    #[arg(short = 'A', long)]
    get_all: bool,

    /// Leave out static vendor default PINs
    #[arg(long)]
    no_static: bool,

    /// Generate the PIN of a single algorithm
    #[arg(short, long, value_name = "ID", conflicts_with = "get_all")]
    algo: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// List registered algorithms and exit
    #[arg(long)]
    list_algorithms: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    mac: MacAddress,
    pins: &'a [PinRecord],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    tracing::debug!("Configuration loaded: {:?}", config);

    let json = cli.json || config.output.format == OutputFormat::Json;

    if cli.list_algorithms {
        for algo in registry() {
            println!("{:<14} {:<7} {}", algo.id, algo.mode(), algo.name);
        }
        return Ok(());
    }

    let Some(input) = cli.mac.as_deref() else {
        anyhow::bail!("MAC address is required");
    };
    let mac = MacAddress::parse(input)?;

    let pins = match cli.algo.as_deref() {
        Some(id) => vec![PinRecord::from_algorithm(find(id)?, mac)],
        None => {
            let selection = if cli.get_all {
                Selection::All
            } else {
                Selection::Suggested
            };
            let include_static = config.output.include_static && !cli.no_static;
            generate_pins_for(mac, selection, include_static)
        }
    };

    if json {
        let report = Report { mac, pins: &pins };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if pins.is_empty() {
        println!("No PINs found — try to get all PINs (-A)");
    } else {
        println!("Found {} PIN(s)", pins.len());
        println!("{:<10} {}", "PIN", "Name");
        for pin in &pins {
            println!("{:<10} {}", pin.pin, pin.name);
        }
    }

    Ok(())
}
