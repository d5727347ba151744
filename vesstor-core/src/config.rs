// Validated scan settings

use crate::error::{CoreError, Result};
use crate::wordlist::Mode;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_THREADS: usize = 10;
pub const DEFAULT_DELAY_SECS: f64 = 0.1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_OUTPUT_DIR: &str = "VesstoR_Results";

/// Everything a scan needs, checked before any request is made.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub target: Url,
    pub mode: Mode,
    pub threads: usize,
    pub delay: Duration,
    pub timeout: Duration,
    pub output_dir: PathBuf,
    pub show_progress_bars: bool,
}

impl ScanConfig {
    pub fn new(target: &str, mode: Mode, threads: usize, delay_secs: f64) -> Result<Self> {
        let target = normalize_target(target)?;

        if threads == 0 {
            return Err(CoreError::InvalidConcurrency(threads));
        }
        let delay = Duration::try_from_secs_f64(delay_secs)
            .map_err(|_| CoreError::InvalidDelay(delay_secs))?;

        Ok(Self {
            target,
            mode,
            threads,
            delay,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            show_progress_bars: true,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_progress_bars(mut self, show: bool) -> Self {
        self.show_progress_bars = show;
        self
    }
}

/// Parse a target, defaulting to plain HTTP when no scheme is given.
pub fn normalize_target(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::InvalidTarget(raw.to_string(), "empty".to_string()));
    }

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| CoreError::InvalidTarget(raw.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoreError::InvalidTarget(
            raw.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(CoreError::InvalidTarget(raw.to_string(), "missing host".to_string()));
    }

    Ok(url)
}
