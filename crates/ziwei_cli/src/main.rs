mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ziwei_analysis::{
    analyze_palace, calculate_yearly_fortune, chart_report, detect_patterns,
    generate_star_readings,
};
use ziwei_base::{BirthData, Chart, Gender, compute_chart};
use ziwei_config::{OutputFormat, ZiweiConfig};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    /// Configuration file (default: ./ziwei.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format, overrides the configuration file
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args)]
struct BirthArgs {
    /// Birth year
    #[arg(long, allow_negative_numbers = true)]
    year: i32,
    /// Lunar month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: u8,
    /// Lunar day (1-31)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=31))]
    day: u8,
    /// Hour (0-23)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=23))]
    hour: u8,
    /// Minute (0-59)
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=59))]
    minute: u8,
    /// male or female (default from config)
    #[arg(long)]
    gender: Option<Gender>,
    /// Degrees east (default from config)
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,
    /// Degrees north (default from config)
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a chart and list every palace with its stars
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Detect formations (格局) on the chart
    Patterns {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Star readings chosen by strength
    Readings {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Score and interpret all twelve palaces
    Palaces {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Yearly fortune for a target year
    Fortune {
        #[command(flatten)]
        birth: BirthArgs,
        /// Calendar year to evaluate
        #[arg(long, allow_negative_numbers = true)]
        target_year: i32,
    },
    /// Every analysis bundled together
    Report {
        #[command(flatten)]
        birth: BirthArgs,
        /// Calendar year for the fortune section
        #[arg(long, allow_negative_numbers = true)]
        target_year: i32,
    },
}

impl Commands {
    fn birth(&self) -> &BirthArgs {
        match self {
            Self::Chart { birth }
            | Self::Patterns { birth }
            | Self::Readings { birth }
            | Self::Palaces { birth }
            | Self::Fortune { birth, .. }
            | Self::Report { birth, .. } => birth,
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Merge command-line birth flags over the configured defaults.
fn birth_data(args: &BirthArgs, config: &mut ZiweiConfig) -> Result<BirthData, String> {
    if let Some(gender) = args.gender {
        config.birth.gender = gender;
    }
    if let Some(lon) = args.longitude {
        config.birth.longitude = lon;
    }
    if let Some(lat) = args.latitude {
        config.birth.latitude = lat;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(
        BirthData::new(args.year, args.month, args.day, args.hour, config.birth.gender)
            .with_minute(args.minute)
            .with_location(config.birth.longitude, config.birth.latitude),
    )
}

fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => print!("{}", text(value)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
    let mut config = ZiweiConfig::discover(cli.config.as_deref(), &cwd).map_err(|e| e.to_string())?;
    init_logging(&config.logging.filter);

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let birth = birth_data(cli.command.birth(), &mut config)?;
    let chart: Chart = compute_chart(&birth);
    tracing::debug!(id = %chart.id, "chart computed");

    match cli.command {
        Commands::Chart { .. } => emit(format, &chart, render::chart),
        Commands::Patterns { .. } => emit(format, &detect_patterns(&chart), |p| render::patterns(p)),
        Commands::Readings { .. } => {
            emit(format, &generate_star_readings(&chart), |r| render::readings(r))
        }
        Commands::Palaces { .. } => {
            let analyses: Vec<_> = chart.palaces.iter().filter_map(analyze_palace).collect();
            emit(format, &analyses, |a| render::palaces(a))
        }
        Commands::Fortune { target_year, .. } => {
            let fortune = calculate_yearly_fortune(&chart, target_year).map_err(|e| e.to_string())?;
            emit(format, &fortune, render::fortune)
        }
        Commands::Report { target_year, .. } => {
            let report = chart_report(&chart, target_year).map_err(|e| e.to_string())?;
            emit(format, &report, render::report)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
