//! Keyword-based sentiment tagging for article titles.

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Marker substrings used to label a title.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "positive": ["상승", "급등", "호재"],
///   "negative": ["하락", "급락", "악재"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: vec!["상승".into(), "급등".into(), "호재".into()],
            negative: vec!["하락".into(), "급락".into(), "악재".into()],
        }
    }
}

impl SentimentLexicon {
    /// Loads a lexicon from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Labels `title` by substring match.
    ///
    /// Positive markers are checked before negative ones: a title containing
    /// both kinds of marker is labeled positive.
    pub fn classify(&self, title: &str) -> Sentiment {
        if self.positive.iter().any(|m| title.contains(m.as_str())) {
            Sentiment::Positive
        } else if self.negative.iter().any(|m| title.contains(m.as_str())) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}
