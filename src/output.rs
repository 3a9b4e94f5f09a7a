//! Persistence for extracted news records.
//!
//! The output is a pretty-printed JSON array consumed by the front-end;
//! each run fully overwrites the previous file.

use anyhow::Result;
use tracing::debug;

use crate::extractor::NewsRecord;
use std::fs;
use std::path::Path;

/// Writes `records` as a 2-space-indented JSON array to `path`.
///
/// Non-ASCII text is emitted literally, not escaped. Parent directories are
/// created if absent, and an existing file is replaced.
pub fn write_records(path: &str, records: &[NewsRecord]) -> Result<()> {
    debug!(path, count = records.len(), "Writing records");

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;
    use std::env;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_record() -> NewsRecord {
        NewsRecord {
            title: "정부지원금 급등 소식".to_string(),
            link: "https://news.example.com/1".to_string(),
            published: "Mon, 01 Jan 2024 09:00:00 GMT".to_string(),
            summary: "AI 요약 서비스를 연결해주세요.".to_string(),
            sentiment: Sentiment::Positive,
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let path = temp_path("news_crawler_test_dirs/nested/news.json");
        let _ = fs::remove_dir_all(temp_path("news_crawler_test_dirs"));

        write_records(&path, &[sample_record()]).unwrap();
        assert!(Path::new(&path).exists());

        fs::remove_dir_all(temp_path("news_crawler_test_dirs")).unwrap();
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let path = temp_path("news_crawler_test_roundtrip.json");
        let records = vec![sample_record()];

        write_records(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // Korean text must survive unescaped
        assert!(content.contains("정부지원금 급등 소식"));
        assert!(!content.contains("\\u"));
        // 2-space indentation
        assert!(content.contains("\n  {") || content.contains("  \"title\""));

        let parsed: Vec<NewsRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, records);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_record_keys_are_exact() {
        let path = temp_path("news_crawler_test_keys.json");
        write_records(&path, &[sample_record()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let obj = value[0].as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["link", "published", "sentiment", "summary", "title"]);
        assert_eq!(value[0]["sentiment"], "positive");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_overwrites_previous_run() {
        let path = temp_path("news_crawler_test_overwrite.json");

        write_records(&path, &[sample_record(), sample_record()]).unwrap();
        write_records(&path, &[]).unwrap();

        let parsed: Vec<NewsRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());

        fs::remove_file(&path).unwrap();
    }
}
