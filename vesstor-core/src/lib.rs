pub mod config;
pub mod error;
pub mod interrupt;
pub mod persist;
pub mod report;
pub mod scan;
pub mod wordlist;

pub use config::ScanConfig;
pub use error::CoreError;
pub use interrupt::{InterruptCoordinator, InterruptReport, ScanState, Supervised};
pub use persist::{ResultWriter, SavedPaths};
pub use scan::{ScanOutcome, execute_scan};
pub use wordlist::{CandidateSource, Mode, SecLists, WordlistFile};

use colored::Colorize;
use vesstor_scanner::{TOOL_NAME, VERSION};

const LOGO: &str = r"
__     __            _        ____
\ \   / /__  ___ ___| |_ ___ |  _ \
 \ \ / / _ \/ __/ __| __/ _ \| |_) |
  \ V /  __/\__ \__ \ || (_) |  _ <
   \_/ \___||___/___/\__\___/|_| \_\
";

pub fn print_banner() {
    println!("{}", LOGO.bright_magenta().bold());
    println!(
        "  {} v{} - directory scanner\n",
        TOOL_NAME.bold(),
        VERSION
    );
}
