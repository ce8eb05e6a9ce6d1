//! `serve` command - run the board server on a tokio runtime

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use hexboard_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8003")]
    pub port: u16,

    /// Directory containing the board page and its assets
    #[arg(long, default_value = "hexboard/web")]
    pub static_dir: PathBuf,
}

impl ServerArgs {
    fn to_config(&self) -> Result<ServerConfig> {
        check_static_dir(&self.static_dir)?;

        Ok(ServerConfig {
            port: self.port,
            static_dir: self.static_dir.to_string_lossy().to_string(),
        })
    }
}

pub fn run(args: ServerArgs) -> Result<()> {
    let config = args.to_config()?;
    tracing::info!("Starting HEXBOARD server on port {}", config.port);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}

/// A missing asset directory only costs the page; a file in its place is a typo
fn check_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. API routes will still be served.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}
