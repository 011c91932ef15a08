//! Post result log, one JSON file per post attempt.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub success: bool,
    pub channel: String,
    pub content: String,
    pub post_url: Option<String>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl PostRecord {
    pub fn succeeded(channel: &str, content: &str, post_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            success: true,
            channel: channel.to_string(),
            content: content.to_string(),
            post_url,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(channel: &str, content: &str, error: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            success: false,
            channel: channel.to_string(),
            content: content.to_string(),
            post_url: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, record: &PostRecord) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let name = format!(
            "{}_{}_{}.json",
            record.timestamp.format("%Y%m%dT%H%M%S"),
            record.channel,
            record.id.simple()
        );
        let path = self.dir.join(name);
        std::fs::write(&path, serde_json::to_string_pretty(record)?)?;
        tracing::debug!("Saved post result to {}", path.display());
        Ok(path)
    }

    /// Most recent records first. Unreadable files are skipped.
    pub fn recent(&self, limit: usize) -> Result<Vec<PostRecord>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let parsed = std::fs::read_to_string(&path)
                .map_err(crate::error::Error::from)
                .and_then(|s| serde_json::from_str::<PostRecord>(&s).map_err(Into::into));
            match parsed {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_save_and_list_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("post_results"));

        let mut older = PostRecord::succeeded("x", "first", Some("https://x.com/i/1".to_string()));
        older.timestamp = Utc::now() - Duration::minutes(5);
        let newer = PostRecord::failed("linkedin", "second", "not authorized");

        store.save(&older).unwrap();
        store.save(&newer).unwrap();

        let records = store.recent(10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], newer);
        assert_eq!(records[1], older);

        assert_eq!(store.recent(1).unwrap(), vec![newer]);
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("nope"));
        assert!(store.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_garbage_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path());
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        store.save(&PostRecord::succeeded("x", "ok", None)).unwrap();
        assert_eq!(store.recent(5).unwrap().len(), 1);
    }
}
