//! line-sticker-dl - command-line front end
//!
//! Parses flags into a [`Config`], installs the log subscriber and runs the pipeline
//! for a single pack.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use line_sticker_dl::{Config, DownloadOptions, HttpConfig, PackDownloader, PackageId};

/// LINE Sticker Downloader
#[derive(Parser, Debug)]
#[command(name = "line-sticker-dl")]
#[command(about = "Download a LINE sticker pack with its manifests", long_about = None)]
#[command(version)]
struct Cli {
    /// LINE package ID from the store
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    package_id: u64,

    /// Download to this folder
    #[arg(long, default_value = "output", env = "LINE_STICKER_OUTPUT")]
    output: PathBuf,

    /// Always download static PNGs
    #[arg(long = "static")]
    prefer_static: bool,

    /// Override existing stickers
    #[arg(long)]
    force: bool,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, env = "LINE_STICKER_TIMEOUT", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

impl Cli {
    fn into_config(self) -> (PackageId, Config) {
        let config = Config {
            download: DownloadOptions {
                output_root: self.output,
                prefer_static: self.prefer_static,
                overwrite_existing: self.force,
            },
            http: HttpConfig {
                timeout: self.timeout.map(Duration::from_secs),
                ..Default::default()
            },
            ..Default::default()
        };
        (PackageId::new(self.package_id), config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (package_id, config) = Cli::parse().into_config();
    tracing::info!("LINE Sticker Downloader v{}", env!("CARGO_PKG_VERSION"));

    let result = match PackDownloader::new(config) {
        Ok(downloader) => downloader.run(package_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(package_id = %package_id, error = %e, "Download aborted");
            ExitCode::FAILURE
        }
    }
}
