use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use natal::ephemeris::{EphemerisConfig, EphemerisGateway, SwissEphemerisAdapter, TableEphemeris};
use natal::time::TzfLookup;
use natal::{health, BirthInput, NatalService};
use natal_config::NatalConfig;

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart calculator")]
struct Cli {
    /// Config file (default: configs/natal.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Planet, angle and house placements as JSON
    Chart(ChartArgs),
    /// Readable report with the big six and major aspects
    Report {
        #[command(flatten)]
        args: ChartArgs,
        /// Print only the summary text instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Liveness check
    Health,
}

#[derive(Args)]
struct ChartArgs {
    /// Birth date, e.g. 1992-02-17
    #[arg(long)]
    date: String,
    /// Local birth time, e.g. 14:32 or "2:32 PM"; omit if unknown
    #[arg(long)]
    time: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Place label shown in the report
    #[arg(long, default_value = "")]
    place: String,
    /// Precomputed positions (JSON) instead of the Swiss Ephemeris
    #[arg(long)]
    table: Option<PathBuf>,
}

impl ChartArgs {
    fn birth_input(&self) -> BirthInput {
        BirthInput {
            date: self.date.clone(),
            time: self.time.clone(),
            latitude: self.lat,
            longitude: self.lon,
            place_name: self.place.clone(),
        }
    }
}

// --- ENTRY POINT ---
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => natal_config::load_config_from(path)?,
        None => natal_config::load_config()?,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match cli.command {
        Commands::Health => {
            println!("{}", serde_json::to_string_pretty(&health())?);
        }
        Commands::Chart(args) => {
            let ephemeris = open_ephemeris(&config, args.table.as_ref())?;
            let service = NatalService::new(ephemeris.as_ref(), TzfLookup::new());
            let chart = service.chart(&args.birth_input())?;
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Commands::Report { args, text } => {
            let ephemeris = open_ephemeris(&config, args.table.as_ref())?;
            let service = NatalService::new(ephemeris.as_ref(), TzfLookup::new());
            let report = service.report(&args.birth_input())?;
            if text {
                print!("{}", report.summary);
            } else {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    Ok(())
}

// --- PROVIDERS ---
fn open_ephemeris(
    config: &NatalConfig,
    table: Option<&PathBuf>,
) -> anyhow::Result<Box<dyn EphemerisGateway>> {
    if let Some(path) = table {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read ephemeris table {}", path.display()))?;
        let table = TableEphemeris::from_json(&text)
            .with_context(|| format!("Invalid ephemeris table {}", path.display()))?;
        log::info!("Using precomputed ephemeris table {}", path.display());
        return Ok(Box::new(table));
    }

    let eph = &config.ephemeris;
    let adapter = SwissEphemerisAdapter::new(&EphemerisConfig {
        path: eph.path.clone(),
        min_year: eph.min_year,
        max_year: eph.max_year,
    })?;
    log::info!("Using Swiss Ephemeris at {}", adapter.ephemeris_path().display());
    Ok(Box::new(adapter))
}
