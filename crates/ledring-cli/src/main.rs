use anyhow::{Context, Result};
use clap::Parser;
use ledring_export::eagle::eagle_script;
use ledring_layout::{place_leds, AttributeTable, RingConfig};
use tracing_subscriber::EnvFilter;

/// Generate the EAGLE placement script for the LED ring board.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log the computed placements to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = RingConfig::default();
    let attributes = AttributeTable::default();

    let leds = place_leds(&config).context("Failed to place LEDs")?;
    tracing::debug!(
        count = leds.len(),
        radius = config.radius,
        "placed led ring"
    );
    if cli.debug {
        let table = serde_json::to_string_pretty(&leds)
            .context("Failed to serialize placements")?;
        tracing::debug!("placements:\n{table}");
    }

    // stdout carries only the script; diagnostics stay on stderr.
    print!("{}", eagle_script(&leds, &attributes));

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
