mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use nrkpod_catalog::{CatalogClient, CatalogError};
use nrkpod_core::config::{DEFAULT_CATALOG_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_MANIFEST_BASE_URL};
use nrkpod_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "nrkpod-cli")]
#[command(about = "Build RSS feeds for NRK radio podcasts")]
struct Cli {
    /// Line-delimited file of show ids (overrides NRKPOD_SHOWS_PATH)
    #[arg(long, value_name = "PATH")]
    shows: Option<PathBuf>,

    /// Directory the `{show}.rss` files are written to (overrides NRKPOD_OUTPUT_DIR)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Process only this show; repeat for several. Replaces the show list file.
    #[arg(long = "show", value_name = "ID")]
    show_ids: Vec<String>,
}

impl Cli {
    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(path) = &self.shows {
            config.shows_path.clone_from(path);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
    }

    fn show_list(&self, config: &AppConfig) -> Vec<String> {
        if self.show_ids.is_empty() {
            nrkpod_core::load_show_list(&config.shows_path)
        } else {
            self.show_ids.clone()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, invalid_settings) = nrkpod_core::load_app_config();
    cli.apply_to(&mut config);

    let (env_filter, filter_error) = build_env_filter(&config.log_level);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    for e in &invalid_settings {
        tracing::warn!(error = %e, "ignoring invalid setting; using its default");
    }
    if let Some(e) = filter_error {
        tracing::warn!(
            log_level = %config.log_level,
            error = %e,
            "invalid log level; using {DEFAULT_LOG_LEVEL}"
        );
    }

    let shows = cli.show_list(&config);
    let client = build_client(&mut config)?;

    tracing::info!(
        shows = shows.len(),
        output_dir = %config.output_dir.display(),
        "starting feed run"
    );
    pipeline::run(&client, &config, &shows).await;

    Ok(())
}

/// `RUST_LOG` when set, else the configured level, else [`DEFAULT_LOG_LEVEL`].
/// The second value is the parse error of an unusable configured level.
fn build_env_filter(log_level: &str) -> (EnvFilter, Option<ParseError>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    match EnvFilter::try_new(log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
    }
}

/// Builds the HTTP client. A configured endpoint that is not an absolute
/// http(s) URL is replaced by the stock endpoint.
fn build_client(config: &mut AppConfig) -> anyhow::Result<CatalogClient> {
    match CatalogClient::from_config(config) {
        Err(e @ CatalogError::InvalidBaseUrl { .. }) => {
            tracing::warn!(error = %e, "invalid endpoint setting; using the stock endpoints");
            config.catalog_base_url = DEFAULT_CATALOG_BASE_URL.to_string();
            config.manifest_base_url = DEFAULT_MANIFEST_BASE_URL.to_string();
            Ok(CatalogClient::from_config(config)?)
        }
        result => Ok(result?),
    }
}

#[cfg(test)]
mod tests;
