use std::path::PathBuf;

/// Runtime settings for a feed-generation run.
///
/// Every field has a default (see [`crate::config`]), so a run with no
/// environment configured behaves exactly like the stock pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base of the episode-listing endpoint; `/{show}/episodes` is appended.
    pub catalog_base_url: String,
    /// Base of the playback manifest endpoint; `/{episode_id}` is appended.
    pub manifest_base_url: String,
    pub shows_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
    /// Upper bound on catalog and manifest requests per second. Always `>= 1`.
    pub requests_per_second: u32,
    pub inter_show_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Fixed pause between consecutive requests: `1000 / requests_per_second` ms.
    #[must_use]
    pub fn inter_request_delay_ms(&self) -> u64 {
        1000 / u64::from(self.requests_per_second.max(1))
    }
}
