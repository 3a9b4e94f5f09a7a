//! Derives normalized news records from a parsed feed.

use rss::{Channel, Item};
use serde::{Deserialize, Serialize};

use crate::sentiment::{Sentiment, SentimentLexicon};

/// Number of feed entries kept per run.
pub const DEFAULT_RECORD_LIMIT: usize = 6;

/// Character count of a summary before the ellipsis suffix.
pub const SUMMARY_CHAR_LIMIT: usize = 100;

/// Emitted when an entry carries no description (Korean: "please connect
/// the AI summary service").
pub const NO_SUMMARY_PLACEHOLDER: &str = "AI 요약 서비스를 연결해주세요.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    pub sentiment: Sentiment,
}

impl NewsRecord {
    /// Builds one record from one feed item.
    ///
    /// Title, link, and publication timestamp are copied verbatim; missing
    /// fields become empty strings. The summary is derived per [`summarize`].
    pub fn from_item(item: &Item, lexicon: &SentimentLexicon) -> Self {
        let title = item.title().unwrap_or_default().to_string();
        let sentiment = lexicon.classify(&title);

        NewsRecord {
            title,
            link: item.link().unwrap_or_default().to_string(),
            published: item.pub_date().unwrap_or_default().to_string(),
            summary: summarize(item.description()),
            sentiment,
        }
    }
}

/// Maps the first `limit` items of `channel`, in feed order, to records.
pub fn extract_records(
    channel: &Channel,
    lexicon: &SentimentLexicon,
    limit: usize,
) -> Vec<NewsRecord> {
    channel
        .items()
        .iter()
        .take(limit)
        .map(|item| NewsRecord::from_item(item, lexicon))
        .collect()
}

/// Derives the summary text for an entry.
///
/// With a description present: markup is stripped, the first
/// [`SUMMARY_CHAR_LIMIT`] characters are kept, and a literal `...` is
/// appended. Without one, the fixed placeholder is returned.
pub fn summarize(description: Option<&str>) -> String {
    match description {
        Some(html) => {
            let text = strip_html(html);
            let head: String = text.chars().take(SUMMARY_CHAR_LIMIT).collect();
            format!("{head}...")
        }
        None => NO_SUMMARY_PLACEHOLDER.to_string(),
    }
}

/// Strips HTML tags and decodes the common entities, collapsing whitespace.
fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    // &amp; must decode last, or double-escaped text decodes twice
    result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
