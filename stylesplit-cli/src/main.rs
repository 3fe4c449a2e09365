use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use stylesplit_cli::{errors::Result, run, RunConfig};
use stylesplit_core::{load_config, Config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The monolithic stylesheet to split into per-component files
    source: Option<PathBuf>,

    /// The directory where the generated component files are written
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to a stylesplit.toml config file
    ///
    /// Defaults to ./stylesplit.toml when that file exists, otherwise the
    /// built-in defaults are used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leftover files to remove once the split has finished
    ///
    /// Overrides the config file's cleanup list when given. Targets that no
    /// longer exist are skipped.
    #[arg(long, num_args(1))]
    cleanup: Vec<PathBuf>,
}

fn main() -> Result<()> {
    stylesplit_cli::tracing::install_tracing()?;

    let cli = Cli::parse();
    let run_config = make_run_config(&cli)?;

    run(&run_config)
}

fn make_run_config(cli: &Cli) -> Result<RunConfig> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let default_path = Path::new("stylesplit.toml");
            if default_path.exists() {
                load_config(default_path)?
            } else {
                Config::default()
            }
        }
    };

    let source = cli
        .source
        .clone()
        .or_else(|| config.source.clone())
        .context("No source stylesheet given on the command line or in the config file")?;

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .context("No output directory given on the command line or in the config file")?;

    let cleanup = if cli.cleanup.is_empty() {
        config.cleanup.clone()
    } else {
        cli.cleanup.clone()
    };

    Ok(RunConfig {
        source,
        output_dir,
        cleanup,
        config,
    })
}
