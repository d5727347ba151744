// Console output for scans

use crate::config::ScanConfig;
use colored::Colorize;
use std::path::Path;
use std::time::Duration;
use vesstor_scanner::{ResultSnapshot, ScanStats};

const RULE_WIDTH: usize = 79;

pub fn separator() -> String {
    "═".repeat(RULE_WIDTH).bright_black().to_string()
}

/// Block printed before the first wave.
pub fn scan_header(config: &ScanConfig, entries: usize, wordlist: Option<&Path>) -> String {
    let mut header = String::new();
    header.push_str(&separator());
    header.push('\n');

    let mut lines = vec![
        format!("Target   : {}", config.target),
        format!("Mode     : {}", config.mode),
        format!("Threads  : {}", config.threads),
        format!("Delay    : {}", config.delay.as_secs_f64()),
        format!("Entries  : {}", entries),
    ];
    if let Some(path) = wordlist {
        lines.push(format!("Wordlist : {}", path.display()));
    }
    for line in lines {
        header.push_str(&line.cyan().to_string());
        header.push('\n');
    }

    header.push_str(&separator());
    header.push('\n');
    header
}

pub fn hit_line(url: &str, status_code: u16) -> String {
    format!("{}{}", format!("[{}] ➜ ", status_code).green(), url)
}

pub fn interrupt_notice() -> String {
    "[!] Scan interrupted. Saving results...".red().to_string()
}

/// Block printed after a completed scan.
pub fn scan_summary(snapshot: &ResultSnapshot, stats: &ScanStats, elapsed: Duration) -> String {
    let mut summary = String::new();
    summary.push_str(&separator());
    summary.push('\n');
    summary.push_str(
        &format!("[✔] Scan Completed in {:.2} sec", elapsed.as_secs_f64())
            .green()
            .to_string(),
    );
    summary.push('\n');
    summary.push_str(&format!("[+] Total Found: {}", snapshot.total_found).green().to_string());
    summary.push('\n');
    summary.push_str(
        &format!("[+] Probes: {} in {} waves", stats.probed, stats.waves)
            .bright_black()
            .to_string(),
    );
    summary.push('\n');
    summary.push_str(&separator());
    summary.push('\n');
    summary
}

pub fn saved_notice(output_dir: &Path) -> String {
    format!("[+] Results saved in folder: {}", output_dir.display())
        .green()
        .to_string()
}
