// Shared accumulator for discovered URLs

use crate::{TOOL_NAME, VERSION};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use url::Url;

/// Metadata fixed at scan start and carried into every snapshot.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub target: Url,
    pub mode: String,
    pub threads: usize,
    pub delay: Duration,
    pub started_at: Instant,
}

impl SessionInfo {
    pub fn new(target: Url, mode: impl Into<String>, threads: usize, delay: Duration) -> Self {
        Self {
            target,
            mode: mode.into(),
            threads,
            delay,
            started_at: Instant::now(),
        }
    }
}

/// Point-in-time copy of the findings plus scan metadata.
///
/// Field names are the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    pub tool: String,
    pub version: String,
    pub target: String,
    pub mode: String,
    pub threads: usize,
    pub delay: f64,
    pub total_found: usize,
    pub results: Vec<String>,
    pub timestamp: String,
}

#[derive(Default)]
struct Findings {
    urls: Vec<String>,
    seen: HashSet<String>,
}

/// Append-only, duplicate-free list of hits behind a single lock.
pub struct ResultStore {
    info: SessionInfo,
    findings: Mutex<Findings>,
}

impl ResultStore {
    pub fn new(info: SessionInfo) -> Self {
        Self {
            info,
            findings: Mutex::new(Findings::default()),
        }
    }

    pub fn info(&self) -> &SessionInfo {
        &self.info
    }

    pub fn elapsed(&self) -> Duration {
        self.info.started_at.elapsed()
    }

    /// Record a hit. Returns `false` if the URL was already recorded.
    pub async fn append(&self, url: &str) -> bool {
        let mut findings = self.findings.lock().await;
        if !findings.seen.insert(url.to_string()) {
            return false;
        }
        findings.urls.push(url.to_string());
        true
    }

    pub async fn len(&self) -> usize {
        self.findings.lock().await.urls.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Copy out everything recorded so far. Safe to call while probes are
    /// still appending.
    pub async fn snapshot(&self) -> ResultSnapshot {
        let results = self.findings.lock().await.urls.clone();

        ResultSnapshot {
            tool: TOOL_NAME.to_string(),
            version: VERSION.to_string(),
            target: self.info.target.to_string(),
            mode: self.info.mode.clone(),
            threads: self.info.threads,
            delay: self.info.delay.as_secs_f64(),
            total_found: results.len(),
            results,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn test_store() -> ResultStore {
        let target = Url::parse("http://example.com").unwrap();
        ResultStore::new(SessionInfo::new(target, "quick", 4, Duration::from_millis(100)))
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = test_store();
        assert!(store.append("http://example.com/b/").await);
        assert!(store.append("http://example.com/a/").await);

        let snapshot = store.snapshot().await;
        assert_eq!(
            snapshot.results,
            vec!["http://example.com/b/", "http://example.com/a/"]
        );
        assert_eq!(snapshot.total_found, 2);
    }

    #[tokio::test]
    async fn test_duplicate_append_is_ignored() {
        let store = test_store();
        assert!(store.append("http://example.com/admin/").await);
        assert!(!store.append("http://example.com/admin/").await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_snapshot_metadata() {
        let store = test_store();
        let snapshot = store.snapshot().await;

        assert_eq!(snapshot.tool, "VesstoR");
        assert_eq!(snapshot.version, VERSION);
        assert_eq!(snapshot.target, "http://example.com/");
        assert_eq!(snapshot.mode, "quick");
        assert_eq!(snapshot.threads, 4);
        assert!((snapshot.delay - 0.1).abs() < f64::EPSILON);
        assert_eq!(snapshot.total_found, 0);
        assert!(snapshot.results.is_empty());
        // %Y-%m-%d %H:%M:%S
        assert_eq!(snapshot.timestamp.len(), 19);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_later_appends() {
        let store = test_store();
        store.append("http://example.com/one/").await;
        let before = store.snapshot().await;
        store.append("http://example.com/two/").await;

        assert_eq!(before.results.len(), 1);
        assert_eq!(store.snapshot().await.results.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_appends() {
        let store = Arc::new(test_store());
        let mut handles = Vec::new();

        for i in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(&format!("http://example.com/{}/", i)).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap());
        }

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.total_found, 64);
        let unique: HashSet<_> = snapshot.results.iter().collect();
        assert_eq!(unique.len(), 64);
    }
}
