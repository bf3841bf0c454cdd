//! RSS 2.0 podcast feed assembly.
//!
//! A document is a header built from the first episode (the catalog repeats
//! show metadata on every episode), one `<item>` per resolved episode, and the
//! closing `</channel></rss>`. Element text and attribute values are escaped
//! with [`escape_xml`] and handed to the writer pre-escaped, so the writer
//! never escapes them a second time. The same input always produces
//! byte-identical output.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use nrkpod_core::{Episode, ResolvedEpisode};

use crate::error::FeedError;
use crate::escape::escape_xml;
use crate::guid::item_guid;

pub const SHOW_TITLE_PREFIX: &str = "CUSTOM: ";
pub const LANGUAGE: &str = "no";
pub const COPYRIGHT: &str = "NRK © 2022";
pub const CATEGORY: &str = "Comedy";
pub const CHANNEL_IMAGE_SIZE: u32 = 144;
pub const ENCLOSURE_MIME_TYPE: &str = "audio/mpeg";

const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";
const INDENT_SIZE: usize = 4;

/// Escaped show-level fields for the `<channel>` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowHeader {
    pub title: String,
    pub link: String,
    /// Widest show image, empty when the catalog sent none.
    pub image_url: String,
}

impl ShowHeader {
    #[must_use]
    pub fn from_episode(episode: &Episode) -> Self {
        Self {
            title: escape_xml(&episode.original_title),
            link: escape_xml(episode.share_link()),
            image_url: episode
                .best_square_image()
                .map(|img| escape_xml(&img.url))
                .unwrap_or_default(),
        }
    }
}

/// Escaped and derived fields of one `<item>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    /// Raw catalog date, not reformatted.
    pub pub_date: String,
    /// Escaped playback URL; empty when the episode did not resolve.
    pub enclosure_url: String,
    /// Raw catalog duration, not reformatted.
    pub duration: String,
    pub image_url: Option<String>,
    /// Derived from the unescaped playback URL, then escaped for output.
    pub guid: String,
}

impl FeedItem {
    #[must_use]
    pub fn from_resolved(resolved: &ResolvedEpisode) -> Self {
        let episode = &resolved.episode;
        let playback_url = resolved.playback_url();
        Self {
            title: escape_xml(&episode.titles.title),
            description: escape_xml(&episode.titles.subtitle),
            pub_date: episode.date.clone(),
            enclosure_url: escape_xml(playback_url),
            duration: episode.duration.clone(),
            image_url: episode.best_image().map(|img| escape_xml(&img.url)),
            guid: escape_xml(&item_guid(playback_url)),
        }
    }
}

/// Streams one feed document into memory.
///
/// Call [`Self::header`] once, [`Self::item`] per episode, then
/// [`Self::finish`] to close the channel and take the document.
pub struct FeedWriter {
    writer: Writer<Vec<u8>>,
}

impl Default for FeedWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE),
        }
    }

    /// Writes the XML declaration, the `<rss>` root and the channel metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Write`] if an event cannot be written.
    pub fn header(&mut self, header: &ShowHeader) -> Result<(), FeedError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:itunes", ITUNES_NAMESPACE));
        rss.push_attribute(("xmlns:android", ANDROID_NAMESPACE));
        self.writer.write_event(Event::Start(rss))?;
        self.start("channel")?;

        self.text_element("title", &format!("{SHOW_TITLE_PREFIX}{}", header.title))?;
        self.text_element("link", &header.link)?;
        self.text_element("language", LANGUAGE)?;
        self.text_element("copyright", COPYRIGHT)?;
        self.text_element("category", CATEGORY)?;

        let size = CHANNEL_IMAGE_SIZE.to_string();
        self.start("image")?;
        self.text_element("title", &header.title)?;
        self.text_element("url", &header.image_url)?;
        self.text_element("link", &header.link)?;
        self.text_element("width", &size)?;
        self.text_element("height", &size)?;
        self.end("image")
    }

    /// Writes one `<item>`. The `<itunes:image>` element is omitted when the
    /// episode has no image.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Write`] if an event cannot be written.
    pub fn item(&mut self, item: &FeedItem) -> Result<(), FeedError> {
        self.start("item")?;
        self.text_element("title", &item.title)?;
        self.text_element("description", &item.description)?;
        self.text_element("pubDate", &item.pub_date)?;

        let mut enclosure = BytesStart::new("enclosure");
        enclosure.push_attribute((b"url".as_slice(), item.enclosure_url.as_bytes()));
        enclosure.push_attribute(("type", ENCLOSURE_MIME_TYPE));
        self.writer.write_event(Event::Empty(enclosure))?;

        self.text_element("itunes:duration", &item.duration)?;

        if let Some(url) = &item.image_url {
            let mut image = BytesStart::new("itunes:image");
            image.push_attribute((b"href".as_slice(), url.as_bytes()));
            self.writer.write_event(Event::Empty(image))?;
        }

        let mut guid = BytesStart::new("guid");
        guid.push_attribute(("isPermaLink", "false"));
        self.writer.write_event(Event::Start(guid))?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(item.guid.as_str())))?;
        self.end("guid")?;

        self.end("item")
    }

    /// Writes every item in input order.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Write`] if an event cannot be written.
    pub fn items(&mut self, episodes: &[ResolvedEpisode]) -> Result<(), FeedError> {
        episodes
            .iter()
            .try_for_each(|resolved| self.item(&FeedItem::from_resolved(resolved)))
    }

    /// Closes `<channel>` and `<rss>` and returns the document, ending in a
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Write`] if the closing tags cannot be written, or
    /// [`FeedError::Utf8`] if the buffer is not valid UTF-8.
    pub fn finish(mut self) -> Result<String, FeedError> {
        self.end("channel")?;
        self.end("rss")?;

        let mut document = String::from_utf8(self.writer.into_inner())?;
        document.push('\n');
        Ok(document)
    }

    fn start(&mut self, name: &str) -> Result<(), FeedError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), FeedError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// `<name>text</name>` on one line. `escaped` is written verbatim, and an
    /// empty text event keeps the end tag next to the start tag.
    fn text_element(&mut self, name: &str, escaped: &str) -> Result<(), FeedError> {
        self.start(name)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escaped)))?;
        self.end(name)
    }
}

/// Renders the complete feed document.
///
/// Returns `Ok(None)` for an empty episode list: there is no show metadata to
/// build a header from, and an empty feed is never written.
///
/// # Errors
///
/// Returns a [`FeedError`] if the XML writer fails.
pub fn render_feed(episodes: &[ResolvedEpisode]) -> Result<Option<String>, FeedError> {
    let Some(first) = episodes.first() else {
        return Ok(None);
    };

    let mut feed = FeedWriter::new();
    feed.header(&ShowHeader::from_episode(&first.episode))?;
    feed.items(episodes)?;
    feed.finish().map(Some)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
