//! HTTP client for the podcast catalog and playback manifest endpoints.

mod fetch_all;
mod resolve;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::pagination::PAGE_SIZE;
use crate::types::{CatalogPage, ManifestResponse};

/// Client for the catalog (episode listing) and manifest (playback) services.
///
/// Every request carries `Accept: */*` and `Accept-Language: en-US,en;q=0.5`.
/// Each request is attempted once; single-request methods return typed
/// errors, the multi-request loops in [`Self::fetch_all_pages`] and
/// [`Self::resolve_playback_urls`] degrade instead of failing.
pub struct CatalogClient {
    client: Client,
    catalog_base: Url,
    manifest_base: Url,
}

impl CatalogClient {
    /// Creates a client for the given endpoint bases.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if either base is not an
    /// absolute http(s) URL, or [`CatalogError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        catalog_base_url: &str,
        manifest_base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            catalog_base: parse_base_url(catalog_base_url)?,
            manifest_base: parse_base_url(manifest_base_url)?,
        })
    }

    /// Creates a client from the run configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &nrkpod_core::AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.catalog_base_url,
            &config.manifest_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches one page of a show's episode listing (1-based `page`).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::UnexpectedStatus`] on any non-2xx status.
    /// - [`CatalogError::EmptyBody`] if the body is empty.
    /// - [`CatalogError::Deserialize`] if the body is not a catalog page.
    pub async fn fetch_episode_page(
        &self,
        show_id: &str,
        page: u32,
    ) -> Result<CatalogPage, CatalogError> {
        let url = self.episodes_url(show_id, page)?;
        self.get_json(url, &format!("catalog page {page} of {show_id}"))
            .await
    }

    /// Fetches the playback manifest of one episode and returns the URL of
    /// its first audio asset.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_episode_page`], plus
    /// [`CatalogError::NoAudioAsset`] when the manifest has no usable asset.
    pub async fn fetch_playback_url(&self, episode_id: &str) -> Result<String, CatalogError> {
        let url = self.manifest_url(episode_id)?;
        let manifest: ManifestResponse = self
            .get_json(url, &format!("manifest of {episode_id}"))
            .await?;

        manifest
            .first_audio_url()
            .map(str::to_owned)
            .ok_or_else(|| CatalogError::NoAudioAsset {
                episode_id: episode_id.to_owned(),
            })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, CatalogError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(CatalogError::EmptyBody {
                url: url.to_string(),
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// `{catalog}/{show_id}/episodes?pageSize=50&sort=desc&page={page}`
    fn episodes_url(&self, show_id: &str, page: u32) -> Result<Url, CatalogError> {
        let mut url = append_segments(&self.catalog_base, &[show_id, "episodes"])?;
        url.query_pairs_mut()
            .append_pair("pageSize", &PAGE_SIZE.to_string())
            .append_pair("sort", "desc")
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    /// `{manifest}/{episode_id}`
    fn manifest_url(&self, episode_id: &str) -> Result<Url, CatalogError> {
        append_segments(&self.manifest_base, &[episode_id])
    }
}

fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBaseUrl {
        base_url: raw.to_owned(),
        reason,
    };

    let url = Url::parse(raw.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an absolute http(s) URL".to_owned()));
    }
    Ok(url)
}

/// Appends percent-encoded path segments to `base`.
fn append_segments(base: &Url, segments: &[&str]) -> Result<Url, CatalogError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| CatalogError::InvalidBaseUrl {
            base_url: base.to_string(),
            reason: "URL cannot be a base".to_owned(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
