//! RSS parser for Google News search feeds.

use anyhow::Result;
use rss::Channel;

/// Decodes an RSS 2.0 [`Channel`] from raw feed bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a well-formed RSS document.
pub fn parse_feed(bytes: &[u8]) -> Result<Channel> {
    Ok(Channel::read_from(bytes)?)
}
