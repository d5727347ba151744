// Directory scan orchestration: store, scheduler, interrupt handling, output

use crate::config::ScanConfig;
use crate::error::Result;
use crate::interrupt::{InterruptCoordinator, InterruptReport, Supervised};
use crate::persist::{ResultWriter, SavedPaths};
use crate::report::hit_line;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use vesstor_scanner::{
    HitCallback, HttpProbe, ProgressCallback, ResultSnapshot, ResultStore, ScanStats,
    SessionInfo, WaveScheduler,
};

/// How a scan ended.
#[derive(Debug)]
pub enum ScanOutcome {
    Completed {
        snapshot: ResultSnapshot,
        saved: SavedPaths,
        stats: ScanStats,
        elapsed: Duration,
    },
    Interrupted(InterruptReport),
}

impl ScanOutcome {
    pub fn snapshot(&self) -> &ResultSnapshot {
        match self {
            ScanOutcome::Completed { snapshot, .. } => snapshot,
            ScanOutcome::Interrupted(report) => &report.snapshot,
        }
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, ScanOutcome::Interrupted(_))
    }
}

fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map(|style| style.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Run a full scan of `config.target` over `candidates`.
///
/// Hits are printed as they land. If `interrupt` resolves first, whatever
/// the store holds at that moment is written (best effort) and the scan is
/// abandoned; otherwise the final snapshot is written once and a write
/// failure is returned as an error.
pub async fn execute_scan<S>(
    config: &ScanConfig,
    candidates: Vec<String>,
    interrupt: S,
) -> Result<ScanOutcome>
where
    S: Future<Output = ()>,
{
    let store = Arc::new(ResultStore::new(SessionInfo::new(
        config.target.clone(),
        config.mode.as_str(),
        config.threads,
        config.delay,
    )));
    let writer = ResultWriter::new(&config.output_dir);
    let coordinator = InterruptCoordinator::new(store.clone(), writer.clone());

    let pb = config
        .show_progress_bars
        .then(|| Arc::new(progress_bar(candidates.len())));

    let hit_pb = pb.clone();
    let hit_callback: HitCallback = Arc::new(move |url: &str, status_code: u16| {
        let line = hit_line(url, status_code);
        match hit_pb {
            Some(ref pb) => pb.println(line),
            None => println!("{}", line),
        }
    });

    let mut scheduler = WaveScheduler::new(HttpProbe::with_timeout(config.timeout)?, config.threads)?
        .with_delay(config.delay)
        .with_hit_callback(hit_callback);

    if let Some(ref pb) = pb {
        let pb_clone = pb.clone();
        let progress_callback: ProgressCallback = Arc::new(move |done: usize| {
            pb_clone.set_position(done as u64);
        });
        scheduler = scheduler.with_progress_callback(progress_callback);
    }

    let scan = scheduler.run(&config.target, &candidates, store.clone());

    match coordinator.supervise(scan, interrupt).await {
        Supervised::Finished(stats) => {
            if let Some(ref pb) = pb {
                pb.finish_and_clear();
            }
            let stats = stats?;
            coordinator.complete();

            let snapshot = store.snapshot().await;
            let saved = writer.write(&snapshot)?;

            Ok(ScanOutcome::Completed {
                snapshot,
                saved,
                stats,
                elapsed: store.elapsed(),
            })
        }
        Supervised::Interrupted(report) => {
            if let Some(ref pb) = pb {
                pb.abandon();
            }
            // The coordinator is local to this call, so it is always the
            // first to interrupt.
            let report = match report {
                Some(report) => report,
                None => InterruptReport {
                    snapshot: store.snapshot().await,
                    saved: None,
                },
            };
            Ok(ScanOutcome::Interrupted(report))
        }
    }
}
