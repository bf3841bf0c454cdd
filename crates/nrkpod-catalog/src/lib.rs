pub mod client;
pub mod error;
pub mod pagination;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use pagination::{flatten_pages, is_last_page, MAX_PAGES, PAGE_SIZE};
pub use types::{CatalogPage, ManifestAsset, ManifestResponse, Playable};
