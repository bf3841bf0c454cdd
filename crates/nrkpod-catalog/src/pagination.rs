//! Page-number pagination for the episode-listing endpoint.
//!
//! The catalog is requested newest-first with a fixed page size and a
//! 1-based `page` query parameter. There is no total count or next link in
//! the response: a page holding fewer than [`PAGE_SIZE`] episodes is the last
//! one. A show with an exact multiple of [`PAGE_SIZE`] episodes therefore
//! ends with an empty page (or a failed request past the end).

use nrkpod_core::Episode;

use crate::types::CatalogPage;

/// Episodes requested per page.
pub const PAGE_SIZE: usize = 50;

/// Hard stop for a server that never returns a short page.
pub const MAX_PAGES: u32 = 1000;

/// Returns `true` when a page with `episode_count` episodes ends the listing.
#[must_use]
pub fn is_last_page(episode_count: usize) -> bool {
    episode_count < PAGE_SIZE
}

/// Concatenates the episodes of all pages, preserving page and episode order.
#[must_use]
pub fn flatten_pages(pages: Vec<CatalogPage>) -> Vec<Episode> {
    pages.into_iter().flat_map(CatalogPage::into_episodes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmbeddedEpisodes;

    fn page(ids: &[&str]) -> CatalogPage {
        CatalogPage {
            embedded: EmbeddedEpisodes {
                episodes: ids
                    .iter()
                    .map(|id| Episode {
                        episode_id: (*id).to_string(),
                        ..Default::default()
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn full_page_is_not_last() {
        assert!(!is_last_page(50));
    }

    #[test]
    fn short_page_is_last() {
        assert!(is_last_page(49));
        assert!(is_last_page(1));
    }

    #[test]
    fn empty_page_is_last() {
        assert!(is_last_page(0));
    }

    #[test]
    fn flatten_keeps_order_across_pages() {
        let episodes = flatten_pages(vec![page(&["a", "b"]), page(&[]), page(&["c"])]);
        let ids: Vec<&str> = episodes.iter().map(|e| e.episode_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn flatten_no_pages_is_empty() {
        assert!(flatten_pages(Vec::new()).is_empty());
    }
}
