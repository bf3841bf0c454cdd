//! Per-episode playback resolution for `CatalogClient`.

use std::time::Duration;

use nrkpod_core::{Episode, ResolvedEpisode};

use super::CatalogClient;

impl CatalogClient {
    /// Looks up the playback URL of every episode, in order.
    ///
    /// Returns exactly one [`ResolvedEpisode`] per input episode, in input
    /// order. An episode whose manifest cannot be fetched or holds no audio
    /// asset gets `playback_url: None`; the loop always continues.
    ///
    /// `inter_request_delay_ms` is slept between manifest requests.
    pub async fn resolve_playback_urls(
        &self,
        episodes: Vec<Episode>,
        inter_request_delay_ms: u64,
    ) -> Vec<ResolvedEpisode> {
        let total = episodes.len();
        let mut resolved = Vec::with_capacity(total);

        for (index, episode) in episodes.into_iter().enumerate() {
            if index > 0 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let playback_url = if episode.episode_id.is_empty() {
                tracing::warn!(
                    position = index + 1,
                    title = %episode.titles.title,
                    "episode has no id; leaving it without playback url"
                );
                None
            } else {
                match self.fetch_playback_url(&episode.episode_id).await {
                    Ok(url) => {
                        tracing::debug!(
                            episode_id = %episode.episode_id,
                            position = index + 1,
                            total,
                            "resolved playback url"
                        );
                        Some(url)
                    }
                    Err(e) => {
                        tracing::warn!(
                            episode_id = %episode.episode_id,
                            error = %e,
                            "failed to resolve playback url; leaving it empty"
                        );
                        None
                    }
                }
            };

            resolved.push(ResolvedEpisode::new(episode, playback_url));
        }

        let failed = resolved.iter().filter(|r| !r.is_resolved()).count();
        tracing::info!(total, failed, "playback resolution finished");
        resolved
    }
}
