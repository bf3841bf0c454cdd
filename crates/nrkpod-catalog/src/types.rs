//! Response types for the catalog and playback manifest endpoints.
//!
//! ### Catalog page
//! `GET {catalog}/{show}/episodes` wraps the episode list in a HAL envelope:
//! `{"_links": {...}, "_embedded": {"episodes": [...]}}`. The envelope and the
//! list are required; a body without them is treated as a failed page. The
//! individual episodes are lenient (see [`nrkpod_core::episode`]).
//!
//! ### Manifest
//! `GET {manifest}/{episode_id}` returns a large playback document. Only
//! `playable.assets[].url` matters. Episodes that are not playable (expired
//! rights, geo-blocked) come back with `"playable": null` and a populated
//! `nonPlayable` object instead, so every level here is optional.

use nrkpod_core::Episode;
use serde::Deserialize;

/// One page from the episode-listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedEpisodes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedEpisodes {
    pub episodes: Vec<Episode>,
}

impl CatalogPage {
    #[must_use]
    pub fn episodes(&self) -> &[Episode] {
        &self.embedded.episodes
    }

    #[must_use]
    pub fn into_episodes(self) -> Vec<Episode> {
        self.embedded.episodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.embedded.episodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.embedded.episodes.is_empty()
    }
}

/// Top-level playback manifest for one episode.
#[derive(Debug, Deserialize)]
pub struct ManifestResponse {
    #[serde(default)]
    pub playable: Option<Playable>,
}

#[derive(Debug, Deserialize)]
pub struct Playable {
    #[serde(default)]
    pub assets: Option<Vec<ManifestAsset>>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestAsset {
    #[serde(default)]
    pub url: Option<String>,
}

impl ManifestResponse {
    /// URL of the first asset, if the manifest has one with a non-empty URL.
    #[must_use]
    pub fn first_audio_url(&self) -> Option<&str> {
        self.playable
            .as_ref()?
            .assets
            .as_deref()?
            .first()?
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn catalog_page_decodes_embedded_episodes() {
        let page: CatalogPage = serde_json::from_value(json!({
            "_links": { "self": { "href": "/radio/catalog/podcast/demo/episodes?page=1" } },
            "_embedded": {
                "episodes": [
                    { "episodeId": "e1", "titles": { "title": "One" } },
                    { "episodeId": "e2", "titles": { "title": "Two" } }
                ]
            }
        }))
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.episodes()[1].episode_id, "e2");
    }

    #[test]
    fn catalog_page_without_embedded_is_an_error() {
        let result = serde_json::from_value::<CatalogPage>(json!({ "_links": {} }));
        assert!(result.is_err());
    }

    #[test]
    fn manifest_first_audio_url_takes_first_asset() {
        let manifest: ManifestResponse = serde_json::from_value(json!({
            "playable": {
                "duration": "PT30M",
                "assets": [
                    { "url": "https://cdn.example/e1_0_192.mp3", "format": "MP3", "mimeType": "audio/mpeg" },
                    { "url": "https://cdn.example/e1_0_128.mp3", "format": "MP3", "mimeType": "audio/mpeg" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(
            manifest.first_audio_url(),
            Some("https://cdn.example/e1_0_192.mp3")
        );
    }

    #[test]
    fn manifest_not_playable_has_no_url() {
        let manifest: ManifestResponse = serde_json::from_value(json!({
            "playable": null,
            "nonPlayable": { "reason": "notransmissionrights" }
        }))
        .unwrap();
        assert!(manifest.first_audio_url().is_none());
    }

    #[test]
    fn manifest_empty_or_missing_assets_has_no_url() {
        let empty: ManifestResponse =
            serde_json::from_value(json!({ "playable": { "assets": [] } })).unwrap();
        assert!(empty.first_audio_url().is_none());

        let missing: ManifestResponse =
            serde_json::from_value(json!({ "playable": {} })).unwrap();
        assert!(missing.first_audio_url().is_none());

        let blank: ManifestResponse =
            serde_json::from_value(json!({ "playable": { "assets": [{ "url": "" }] } })).unwrap();
        assert!(blank.first_audio_url().is_none());
    }
}
