pub mod app_config;
pub mod config;
pub mod episode;
pub mod shows;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use episode::{Episode, EpisodeLinks, ImageCandidate, Link, ResolvedEpisode, Titles};
pub use shows::{default_show_list, load_show_list, parse_show_list, read_show_list, DEFAULT_SHOWS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read show list {path}: {source}")]
    ShowListIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
