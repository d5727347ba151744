pub mod error;
pub mod probe;
pub mod result;
pub mod scheduler;
pub mod store;

pub use error::ScanError;
pub use probe::{HitCallback, HttpProbe, Probe, build_probe_url, execute_probe};
pub use result::{ProbeOutcome, ScanStats};
pub use scheduler::{ProgressCallback, WaveCallback, WaveScheduler, plan_waves};
pub use store::{ResultSnapshot, ResultStore, SessionInfo};

pub const TOOL_NAME: &str = "VesstoR";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
