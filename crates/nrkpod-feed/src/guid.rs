//! Stable item identifiers derived from playback URLs.
//!
//! Audio files are served as `.../{id}_0_{bitrate}.mp3` (e.g.
//! `l_8a5f3c2e_0_192.mp3`). The part before `_0_` identifies the episode and
//! stays the same when the CDN host or bitrate changes, which makes it usable
//! as a non-permalink `<guid>`.

const VARIANT_MARKER: &str = "_0_";
const AUDIO_EXTENSION: &str = ".mp3";

/// Derives the feed item identifier from a playback URL.
///
/// Takes the last `/`-separated segment, cuts it at the first `_0_`, and
/// removes every `.mp3`. An empty URL gives an empty identifier.
#[must_use]
pub fn item_guid(playback_url: &str) -> String {
    let last_segment = playback_url.rsplit('/').next().unwrap_or_default();
    let stem = last_segment
        .split_once(VARIANT_MARKER)
        .map_or(last_segment, |(head, _)| head);
    stem.replace(AUDIO_EXTENSION, "")
}
