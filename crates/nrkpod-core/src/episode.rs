//! Episode model decoded from the podcast catalog endpoint.
//!
//! ## Observed shape
//!
//! Each entry of `_embedded.episodes[]` carries far more than the feed needs
//! (usage rights, badges, progress links). Only the fields below are decoded;
//! everything else is ignored.
//!
//! Any field the feed uses may be absent or `null` on older episodes (most
//! often `subtitle`, `duration` and the image lists). Those become empty
//! strings / empty lists here, so rendering never has to guard a lookup.
//!
//! `date` and `duration` are kept as the raw strings the catalog sends
//! (e.g. `"2024-03-01T05:00:00Z"` and `"PT42M17S"`); the feed passes them
//! through unchanged.

use serde::{Deserialize, Deserializer};

/// One episode from a catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Episode {
    /// Key for the playback manifest endpoint (e.g. `"l_8a5f3c2e-0b1d-4c7e"`).
    #[serde(deserialize_with = "null_as_default")]
    pub episode_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub titles: Titles,

    #[serde(deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,

    /// Episode artwork in several sizes.
    #[serde(deserialize_with = "null_as_default")]
    pub image: Vec<ImageCandidate>,

    /// Show artwork in several sizes. Repeated on every episode.
    #[serde(deserialize_with = "null_as_default")]
    pub square_image: Vec<ImageCandidate>,

    /// Title of the show this episode belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub original_title: String,

    #[serde(rename = "_links", deserialize_with = "null_as_default")]
    pub links: EpisodeLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Titles {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageCandidate {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EpisodeLinks {
    #[serde(deserialize_with = "null_as_default")]
    pub share: Link,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
}

impl Episode {
    /// Widest episode image, or `None` if the episode has no usable image.
    #[must_use]
    pub fn best_image(&self) -> Option<&ImageCandidate> {
        widest(&self.image)
    }

    /// Widest show image, or `None` if the episode carries no usable show image.
    #[must_use]
    pub fn best_square_image(&self) -> Option<&ImageCandidate> {
        widest(&self.square_image)
    }

    /// Public share link of the episode.
    #[must_use]
    pub fn share_link(&self) -> &str {
        &self.links.share.href
    }
}

/// Picks the candidate with the largest width. The first one wins a tie so the
/// result does not depend on how the catalog happens to order equal sizes.
fn widest(candidates: &[ImageCandidate]) -> Option<&ImageCandidate> {
    candidates
        .iter()
        .reduce(|best, c| if c.width > best.width { c } else { best })
        .filter(|c| !c.url.is_empty())
}

/// An episode paired with the outcome of its playback lookup.
///
/// `playback_url` is `None` when the manifest could not be fetched or held no
/// audio asset. The episode still produces a feed item in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEpisode {
    pub episode: Episode,
    pub playback_url: Option<String>,
}

impl ResolvedEpisode {
    #[must_use]
    pub fn new(episode: Episode, playback_url: Option<String>) -> Self {
        Self {
            episode,
            playback_url,
        }
    }

    /// The playback URL, or `""` if unresolved.
    #[must_use]
    pub fn playback_url(&self) -> &str {
        self.playback_url.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.playback_url.is_some()
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "episode_test.rs"]
mod tests;
