use serde::{Deserialize, Serialize};

/// Classification of a single probe.
///
/// Only `Hit` ever reaches the result store; the other variants are counted
/// and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// The target answered 200 for this URL.
    Hit { url: String, status_code: u16 },
    /// A 200 for a URL the store already held, e.g. `admin` after `/admin`.
    Duplicate { url: String, status_code: u16 },
    /// The target answered with any other status.
    Miss { url: String, status_code: u16 },
    /// The request never produced a status (connect failure, timeout,
    /// malformed response, unjoinable candidate).
    Error { url: String, reason: String },
}

impl ProbeOutcome {
    pub fn url(&self) -> &str {
        match self {
            ProbeOutcome::Hit { url, .. }
            | ProbeOutcome::Duplicate { url, .. }
            | ProbeOutcome::Miss { url, .. }
            | ProbeOutcome::Error { url, .. } => url,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ProbeOutcome::Hit { .. })
    }
}

/// Counters collected by the scheduler over a whole scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub waves: usize,
    pub probed: usize,
    pub hits: usize,
    pub duplicates: usize,
    pub misses: usize,
    pub errors: usize,
}

impl ScanStats {
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.probed += 1;
        match outcome {
            ProbeOutcome::Hit { .. } => self.hits += 1,
            ProbeOutcome::Duplicate { .. } => self.duplicates += 1,
            ProbeOutcome::Miss { .. } => self.misses += 1,
            ProbeOutcome::Error { .. } => self.errors += 1,
        }
    }
}
