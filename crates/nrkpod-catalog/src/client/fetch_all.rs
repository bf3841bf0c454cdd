//! Multi-page episode listing for `CatalogClient`.

use std::time::Duration;

use crate::pagination::{is_last_page, MAX_PAGES};
use crate::types::CatalogPage;

use super::CatalogClient;

impl CatalogClient {
    /// Fetches every page of a show's episode listing.
    ///
    /// Requests pages `1, 2, 3, ...` until a page holds fewer than
    /// [`crate::PAGE_SIZE`] episodes; that short page is included.
    ///
    /// `inter_request_delay_ms` is slept between page requests (not before
    /// the first one).
    ///
    /// **Keep-what-you-have semantics**: when a page request fails (network,
    /// status, empty or malformed body) paging stops and the pages fetched so
    /// far are returned. The failure is logged, not returned, so the result
    /// may be empty.
    pub async fn fetch_all_pages(
        &self,
        show_id: &str,
        inter_request_delay_ms: u64,
    ) -> Vec<CatalogPage> {
        let mut pages: Vec<CatalogPage> = Vec::new();
        let mut page_number = 1u32;

        loop {
            if page_number > MAX_PAGES {
                tracing::warn!(
                    show = show_id,
                    max_pages = MAX_PAGES,
                    "catalog page limit reached; stopping pagination"
                );
                break;
            }

            if page_number > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            tracing::debug!(show = show_id, page = page_number, "fetching catalog page");
            let page = match self.fetch_episode_page(show_id, page_number).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        show = show_id,
                        page = page_number,
                        pages_kept = pages.len(),
                        error = %e,
                        "catalog page failed; keeping pages fetched so far"
                    );
                    break;
                }
            };

            let episode_count = page.len();
            tracing::info!(
                show = show_id,
                page = page_number,
                episodes = episode_count,
                "fetched catalog page"
            );
            pages.push(page);

            if is_last_page(episode_count) {
                break;
            }
            page_number += 1;
        }

        pages
    }
}
