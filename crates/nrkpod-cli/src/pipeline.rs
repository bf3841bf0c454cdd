//! Per-show feed generation: fetch pages, resolve playback, render, write.
//!
//! Shows are processed one after another. Per-show failures are logged and
//! counted rather than propagated so a single bad show does not abort the
//! run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use nrkpod_catalog::{flatten_pages, CatalogClient};
use nrkpod_core::AppConfig;

/// What happened to a single show.
#[derive(Debug)]
pub(crate) enum ShowOutcome {
    Written { path: PathBuf, items: usize },
    /// The catalog returned no episodes; nothing was written.
    Skipped,
    Failed(anyhow::Error),
}

/// Show ids grouped by outcome, in processing order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

/// Runs the pipeline for every show in `shows`.
///
/// Sleeps `config.inter_show_delay_ms` after each written feed when another
/// show follows. Skipped and failed shows move straight on.
pub(crate) async fn run(client: &CatalogClient, config: &AppConfig, shows: &[String]) -> RunSummary {
    let mut summary = RunSummary::default();

    for (index, show_id) in shows.iter().enumerate() {
        match process_show(client, config, show_id).await {
            ShowOutcome::Written { path, items } => {
                tracing::info!(show = %show_id, items, path = %path.display(), "wrote feed");
                summary.written.push(show_id.clone());

                let has_next = index + 1 < shows.len();
                if has_next && config.inter_show_delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(config.inter_show_delay_ms)).await;
                }
            }
            ShowOutcome::Skipped => {
                tracing::warn!(show = %show_id, "no episodes found; skipping show");
                summary.skipped.push(show_id.clone());
            }
            ShowOutcome::Failed(e) => {
                tracing::error!(show = %show_id, error = %format!("{e:#}"), "feed generation failed");
                summary.failed.push(show_id.clone());
            }
        }
    }

    if summary.failed.is_empty() {
        tracing::info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            "feed run finished"
        );
    } else {
        tracing::warn!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            failed = summary.failed.len(),
            failed_shows = ?summary.failed,
            "feed run finished with failures"
        );
    }

    summary
}

/// Builds and writes the feed for one show.
pub(crate) async fn process_show(
    client: &CatalogClient,
    config: &AppConfig,
    show_id: &str,
) -> ShowOutcome {
    let delay_ms = config.inter_request_delay_ms();

    let pages = client.fetch_all_pages(show_id, delay_ms).await;
    let episodes = flatten_pages(pages);
    if episodes.is_empty() {
        return ShowOutcome::Skipped;
    }
    tracing::info!(show = %show_id, episodes = episodes.len(), "resolving playback urls");

    let resolved = client.resolve_playback_urls(episodes, delay_ms).await;
    let document = match nrkpod_feed::render_feed(&resolved) {
        Ok(Some(document)) => document,
        Ok(None) => return ShowOutcome::Skipped,
        Err(e) => return ShowOutcome::Failed(e.into()),
    };

    match write_feed(&config.output_dir, show_id, &document).await {
        Ok(path) => ShowOutcome::Written {
            path,
            items: resolved.len(),
        },
        Err(e) => ShowOutcome::Failed(e),
    }
}

/// Path of the feed file for `show_id`: `{output_dir}/{show_id}.rss`.
pub(crate) fn feed_path(output_dir: &Path, show_id: &str) -> PathBuf {
    output_dir.join(format!("{show_id}.rss"))
}

async fn write_feed(output_dir: &Path, show_id: &str, document: &str) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let path = feed_path(output_dir, show_id);
    tokio::fs::write(&path, document)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
