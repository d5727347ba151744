use crate::error::{Result, ScanError};
use crate::probe::{HitCallback, Probe, execute_probe};
use crate::result::ScanStats;
use crate::store::ResultStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info};
use url::Url;

/// Called after every finished probe with the running probe count.
pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;
/// Called when a wave is launched with its index and size.
pub type WaveCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Sizes of the waves a candidate list of `total` entries is cut into.
pub fn plan_waves(total: usize, width: usize) -> Vec<usize> {
    if width == 0 {
        return Vec::new();
    }
    (0..total)
        .step_by(width)
        .map(|start| width.min(total - start))
        .collect()
}

/// Barrier-synchronized prober.
///
/// Candidates are cut into consecutive waves of `width`. Every probe in a
/// wave runs as its own task and the next wave is only formed once all of
/// them have been joined, so at most `width` probes are ever in flight.
pub struct WaveScheduler<P: Probe> {
    probe: Arc<P>,
    width: usize,
    delay: Duration,
    hit_callback: Option<HitCallback>,
    progress_callback: Option<ProgressCallback>,
    wave_callback: Option<WaveCallback>,
}

impl<P: Probe> WaveScheduler<P> {
    pub fn new(probe: P, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(ScanError::InvalidConfig(
                "concurrency width must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            probe: Arc::new(probe),
            width,
            delay: Duration::ZERO,
            hit_callback: None,
            progress_callback: None,
            wave_callback: None,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_hit_callback(mut self, callback: HitCallback) -> Self {
        self.hit_callback = Some(callback);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn with_wave_callback(mut self, callback: WaveCallback) -> Self {
        self.wave_callback = Some(callback);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Probe every candidate once against `base`, appending hits to `store`.
    ///
    /// Dropping the returned future aborts the wave in flight; whatever was
    /// appended before that stays in the store.
    pub async fn run(
        &self,
        base: &Url,
        candidates: &[String],
        store: Arc<ResultStore>,
    ) -> Result<ScanStats> {
        info!(
            "Starting scan of {} with {} candidates, width {}",
            base,
            candidates.len(),
            self.width
        );

        let mut stats = ScanStats::default();

        for (wave_index, wave) in candidates.chunks(self.width).enumerate() {
            if let Some(ref callback) = self.wave_callback {
                callback(wave_index, wave.len());
            }
            debug!("Launching wave {} ({} probes)", wave_index, wave.len());

            let mut tasks = JoinSet::new();
            for candidate in wave {
                let probe = self.probe.clone();
                let store = store.clone();
                let hit_callback = self.hit_callback.clone();
                let base = base.clone();
                let candidate = candidate.clone();
                let delay = self.delay;

                tasks.spawn(async move {
                    execute_probe(
                        probe.as_ref(),
                        &base,
                        &candidate,
                        &store,
                        hit_callback.as_ref(),
                        delay,
                    )
                    .await
                });
            }

            // Barrier: the next wave is not formed until this one is joined.
            while let Some(joined) = tasks.join_next().await {
                let outcome = joined?;
                stats.record(&outcome);

                if let Some(ref callback) = self.progress_callback {
                    callback(stats.probed);
                }
            }

            stats.waves += 1;
            debug!("Wave {} joined", wave_index);
        }

        info!(
            "Scan of {} complete: {} probes in {} waves, {} hits",
            base, stats.probed, stats.waves, stats.hits
        );
        Ok(stats)
    }
}
