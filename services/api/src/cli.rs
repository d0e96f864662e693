use crate::commands::{
    run_analyze, run_catalog, run_level, run_report, AnalyzeArgs, CatalogArgs, LevelArgs,
    ReportArgs,
};
use crate::infra::load_catalog;
use crate::server;
use clap::{Args, Parser, Subcommand};
use shot_coach::coaching::FlawCatalog;
use shot_coach::config::AppConfig;
use shot_coach::error::AppError;
use shot_coach::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shot-coach",
    about = "Detect shooting form flaws and build coaching reports",
    version
)]
struct Cli {
    /// Flaw catalog JSON to use instead of APP_CATALOG_PATH or the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze a measurement CSV end to end
    Analyze(AnalyzeArgs),
    /// Build a coaching report for a known set of flaw ids
    Report(ReportArgs),
    /// Map a 0-100 score onto a shooter level
    Level(LevelArgs),
    /// Validate the flaw catalog and print a summary
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Analyze(args) => run_analyze(offline_catalog(&config)?, args),
        Command::Report(args) => run_report(offline_catalog(&config)?, args),
        Command::Level(args) => run_level(offline_catalog(&config)?, args),
        Command::Catalog(args) => run_catalog(offline_catalog(&config)?, args),
    }
}

fn offline_catalog(config: &AppConfig) -> Result<FlawCatalog, AppError> {
    telemetry::init(&config.telemetry)?;
    load_catalog(config.catalog.path.as_deref())
}
