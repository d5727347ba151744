// Single-candidate HTTP probing

use crate::TOOL_NAME;
use crate::error::{Result, ScanError};
use crate::result::ProbeOutcome;
use crate::store::ResultStore;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);
const MAX_REDIRECTS: usize = 10;

/// Called once for every newly recorded hit with the URL and status.
pub type HitCallback = std::sync::Arc<dyn Fn(&str, u16) + Send + Sync>;

/// One request against one URL, classified.
///
/// Implementations must absorb every transport failure into
/// [`ProbeOutcome::Error`]; nothing here is allowed to fail the scan.
pub trait Probe: Send + Sync + 'static {
    fn probe(&self, url: Url) -> impl Future<Output = ProbeOutcome> + Send;
}

/// GET prober backed by a shared reqwest client (one cookie session for the
/// whole scan).
#[derive(Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("{}-Scanner", TOOL_NAME))
            .timeout(timeout)
            .cookie_store(true)
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    fn probe(&self, url: Url) -> impl Future<Output = ProbeOutcome> + Send {
        async move {
            let url_str = url.to_string();
            match self.client.get(url).send().await {
                Ok(response) if response.status() == StatusCode::OK => ProbeOutcome::Hit {
                    url: url_str,
                    status_code: StatusCode::OK.as_u16(),
                },
                Ok(response) => ProbeOutcome::Miss {
                    url: url_str,
                    status_code: response.status().as_u16(),
                },
                Err(e) => ProbeOutcome::Error {
                    url: url_str,
                    reason: e.to_string(),
                },
            }
        }
    }
}

/// Join a candidate onto the base as a directory: surrounding slashes are
/// stripped and exactly one trailing slash is appended.
pub fn build_probe_url(base: &Url, candidate: &str) -> Result<Url> {
    let segment = format!("{}/", candidate.trim_matches('/'));
    base.join(&segment)
        .map_err(|e| ScanError::InvalidUrl(format!("Cannot join '{}' onto {}: {}", candidate, base, e)))
}

/// Run one candidate end to end: build the URL, probe it, record a hit,
/// then hold the slot for `delay` whatever the outcome.
///
/// A 200 for a URL the store already holds comes back as
/// [`ProbeOutcome::Duplicate`] and does not fire `on_hit`.
pub async fn execute_probe<P: Probe>(
    probe: &P,
    base: &Url,
    candidate: &str,
    store: &ResultStore,
    on_hit: Option<&HitCallback>,
    delay: Duration,
) -> ProbeOutcome {
    let outcome = match build_probe_url(base, candidate) {
        Ok(url) => probe.probe(url).await,
        Err(e) => ProbeOutcome::Error {
            url: candidate.to_string(),
            reason: e.to_string(),
        },
    };

    let outcome = match outcome {
        ProbeOutcome::Hit { url, status_code } => {
            if store.append(&url).await {
                if let Some(callback) = on_hit {
                    callback(&url, status_code);
                }
                ProbeOutcome::Hit { url, status_code }
            } else {
                debug!("Already recorded {}", url);
                ProbeOutcome::Duplicate { url, status_code }
            }
        }
        ProbeOutcome::Miss { url, status_code } => {
            debug!("Miss {} ({})", url, status_code);
            ProbeOutcome::Miss { url, status_code }
        }
        ProbeOutcome::Error { url, reason } => {
            debug!("Probe error for {}: {}", url, reason);
            ProbeOutcome::Error { url, reason }
        }
        other => other,
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    outcome
}
