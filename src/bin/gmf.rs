use std::io;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use gene_model_finder::app::{App, SelectOptions};
use gene_model_finder::domain::SelectionMode;
use gene_model_finder::error::FinderError;
use gene_model_finder::mash::SystemMashClient;
use gene_model_finder::output;

#[derive(Parser)]
#[command(name = "gmf")]
#[command(about = "Find the best-matching reference gene model(s) for a query sequence")]
#[command(version, author)]
struct Cli {
    /// Path to a sequence file in .fasta (.fna) format
    query: Utf8PathBuf,

    /// 'standard' outputs every model tied with the best score (= lowest
    /// mash distance); 'best_n' outputs the best n models
    #[arg(short, long, value_enum, default_value_t = SelectionMode::Standard)]
    mode: SelectionMode,

    /// The number of models to output when running in 'best_n' mode
    #[arg(short, default_value_t = 1)]
    n: usize,

    /// The maximum mash distance to report
    #[arg(short = 'd', long, default_value_t = 0.3)]
    max_dist: f64,

    /// Path to the gene models directory
    #[arg(long, default_value = "data/models")]
    models_path: Utf8PathBuf,

    /// Path to the mash sketch file of the references
    #[arg(long, default_value = "data/reference.msh")]
    sketches_path: Utf8PathBuf,

    /// Check that there is a gene model for each reference
    #[arg(short, long)]
    check: bool,

    /// Enable verbose mode
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(finder) = report.downcast_ref::<FinderError>() {
            return ExitCode::from(map_exit_code(finder));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &FinderError) -> u8 {
    match error {
        FinderError::MissingModels { .. } => 2,
        FinderError::ExternalTool { .. } | FinderError::MissingTool(_) => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(SystemMashClient::new());
    let options = SelectOptions {
        mode: cli.mode,
        n: cli.n,
        max_dist: cli.max_dist,
        check: cli.check,
    };
    let hits = app.select_models(&cli.query, &cli.models_path, &cli.sketches_path, options)?;

    let mut stdout = io::stdout().lock();
    output::write_hits(&mut stdout, &hits).into_diagnostic()?;
    Ok(())
}
