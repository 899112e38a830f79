use clap::{Parser, Subcommand};
use promo_lift_core::{AppConfig, ConfigLoader};
use promo_lift_data::CsvDataSource;
use std::path::{Path, PathBuf};

mod commands;

use commands::{
    DailyArgs, LiftArgs, OperationsArgs, PromoArgs, ReportArgs, RoiArgs, TrendsArgs,
};

#[derive(Parser)]
#[command(name = "promo-lift")]
#[command(about = "Promotion attribution and sales analytics", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = "config/Config.toml")]
    config: PathBuf,

    /// Configuration profile overlay (loads config/Config.{profile}.toml)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Optional log file path (logs to file instead of stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare sales made during promotions with normal sales
    Promo(PromoArgs),
    /// Rank product categories by their lift during promotions
    Lift(LiftArgs),
    /// Compare average daily sales on promo and normal days
    Daily(DailyArgs),
    /// Show revenue by region, yearly volume and monthly growth
    Trends(TrendsArgs),
    /// Show return on marketing spend per campaign type
    Roi(RoiArgs),
    /// Show stockout rates and delivery performance
    Operations(OperationsArgs),
    /// Run every analysis and print the full report
    Report(ReportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref())?;

    let config = load_config(&cli.config, cli.profile.as_deref())?;
    let source = CsvDataSource::new(config.data.clone());

    match &cli.command {
        Commands::Promo(args) => commands::run_promo(args, &config, &source)?,
        Commands::Lift(args) => commands::run_lift(args, &config, &source)?,
        Commands::Daily(args) => commands::run_daily(args, &config, &source)?,
        Commands::Trends(args) => commands::run_trends(args, &config, &source)?,
        Commands::Roi(args) => commands::run_roi(args, &config, &source)?,
        Commands::Operations(args) => commands::run_operations(args, &config, &source)?,
        Commands::Report(args) => commands::run_report(args, &config, &source)?,
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        // stdout carries the report, logs go to stderr
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn load_config(path: &Path, profile: Option<&str>) -> anyhow::Result<AppConfig> {
    let config = match profile {
        Some(profile) => {
            tracing::info!("Loading configuration with profile: {}", profile);
            ConfigLoader::load_profile_from(path, profile)?
        }
        None => ConfigLoader::load_from(path)?,
    };

    tracing::info!(
        "Sales from {}, promotions from {}",
        config.data.sales_path.display(),
        config.data.promotions_path.display()
    );
    Ok(config)
}
