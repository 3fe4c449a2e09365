use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

pub use stylesplit_core::Config;
use stylesplit_core::split_stylesheet;

mod internal_prelude {
    pub use crate::errors::*;
    pub use anyhow::Context as _;
    pub use tracing::*;
}
use internal_prelude::*;

pub mod errors {
    pub use anyhow::{Error, Result};
}

pub mod tracing {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    use crate::internal_prelude::*;

    pub fn install_tracing() -> Result<()> {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .without_time();
        let filter_layer = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info,stylesplit_cli=debug,stylesplit_core=debug"))?;

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .init();

        Ok(())
    }
}

/// The config-file settings merged with their command line overrides.
pub struct RunConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub cleanup: Vec<PathBuf>,
    pub config: Config,
}

pub fn run(run_config: &RunConfig) -> Result<()> {
    info!("Running stylesplit");

    let contents = fs::read_to_string(&run_config.source)
        .with_context(|| format!("Failed to read {}", run_config.source.display()))?;

    let components = split_stylesheet(&contents, &run_config.config);

    for component in &components {
        let file_path = run_config
            .output_dir
            .join(format!("{}.css", component.filename));

        let mut file = BufWriter::new(
            File::create(&file_path)
                .with_context(|| format!("Failed to create {}", file_path.display()))?,
        );
        file.write_all(
            component
                .render(&run_config.config.banner_project)
                .as_bytes(),
        )?;

        info!("Created: {}.css for {}", component.filename, component.raw_name);
    }

    for target in &run_config.cleanup {
        if target.exists() {
            fs::remove_file(target)
                .with_context(|| format!("Failed to remove {}", target.display()))?;
            info!("Removed: {}", target.display());
        } else {
            debug!("Cleanup target already gone: {}", target.display());
        }
    }

    info!("Extraction complete!");

    Ok(())
}
