pub mod error;
pub mod escape;
pub mod guid;
pub mod render;

pub use error::FeedError;
pub use escape::escape_xml;
pub use guid::item_guid;
pub use render::{render_feed, FeedItem, FeedWriter, ShowHeader};
