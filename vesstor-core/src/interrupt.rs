// Persist-on-interrupt handling for a running scan

use crate::persist::{ResultWriter, SavedPaths};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{info, warn};
use vesstor_scanner::{ResultSnapshot, ResultStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScanState {
    Scanning = 0,
    Interrupted = 1,
    Terminated = 2,
}

impl ScanState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ScanState::Scanning,
            1 => ScanState::Interrupted,
            _ => ScanState::Terminated,
        }
    }
}

/// What an interrupt managed to save.
#[derive(Debug, Clone)]
pub struct InterruptReport {
    pub snapshot: ResultSnapshot,
    /// `None` when the write failed; the failure is logged, not returned.
    pub saved: Option<SavedPaths>,
}

/// How a supervised scan ended.
#[derive(Debug)]
pub enum Supervised<T> {
    Finished(T),
    /// `None` if another caller had already taken the interrupt path.
    Interrupted(Option<InterruptReport>),
}

/// Shares the scan's result store with the shutdown path so an interrupt can
/// persist whatever has been found so far.
pub struct InterruptCoordinator {
    store: Arc<ResultStore>,
    writer: ResultWriter,
    state: AtomicU8,
}

impl InterruptCoordinator {
    pub fn new(store: Arc<ResultStore>, writer: ResultWriter) -> Self {
        Self {
            store,
            writer,
            state: AtomicU8::new(ScanState::Scanning as u8),
        }
    }

    pub fn state(&self) -> ScanState {
        ScanState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Take the interrupt path: snapshot, best-effort write, terminate.
    ///
    /// Only the first call while scanning does anything; later calls (or
    /// calls after [`complete`](Self::complete)) return `None`.
    pub async fn interrupt(&self) -> Option<InterruptReport> {
        if self
            .state
            .compare_exchange(
                ScanState::Scanning as u8,
                ScanState::Interrupted as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_err()
        {
            return None;
        }

        let snapshot = self.store.snapshot().await;
        info!(
            "Interrupt received, persisting {} findings",
            snapshot.total_found
        );

        let saved = match self.writer.write(&snapshot) {
            Ok(paths) => Some(paths),
            Err(e) => {
                warn!("Could not save results after interrupt: {}", e);
                None
            }
        };

        self.state.store(ScanState::Terminated as u8, Ordering::SeqCst);
        Some(InterruptReport { snapshot, saved })
    }

    /// Mark a normal finish so a late interrupt has nothing left to do.
    /// Returns `false` if an interrupt got there first.
    pub fn complete(&self) -> bool {
        self.state
            .compare_exchange(
                ScanState::Scanning as u8,
                ScanState::Terminated as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Drive `scan` until it finishes or `signal` resolves, whichever is
    /// first. On the signal the scan future is dropped, abandoning any probes
    /// still in flight.
    pub async fn supervise<F, S>(&self, scan: F, signal: S) -> Supervised<F::Output>
    where
        F: Future,
        S: Future<Output = ()>,
    {
        tokio::select! {
            output = scan => Supervised::Finished(output),
            _ = signal => Supervised::Interrupted(self.interrupt().await),
        }
    }
}
