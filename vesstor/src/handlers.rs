use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use vesstor_core::config::{DEFAULT_DELAY_SECS, DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS};
use vesstor_core::report::{interrupt_notice, saved_notice, scan_header, scan_summary};
use vesstor_core::wordlist::load_wordlist;
use vesstor_core::{
    CandidateSource, Mode, ScanConfig, ScanOutcome, SecLists, WordlistFile, execute_scan,
};
use vesstor_scanner::{TOOL_NAME, VERSION};

/// Exit status after an interrupted scan.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

pub fn version_line() -> String {
    format!("{} Version {}", TOOL_NAME, VERSION)
}

pub fn mode_from_flags(quick: bool, deep: bool) -> Mode {
    if quick {
        Mode::Quick
    } else if deep {
        Mode::Deep
    } else {
        Mode::Default
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Build the validated scan configuration from parsed arguments.
pub fn build_config(args: &ArgMatches) -> Result<ScanConfig> {
    let url = args
        .get_one::<String>("url")
        .context("--url is required")?;
    let mode = mode_from_flags(args.get_flag("quick"), args.get_flag("deep"));
    let threads = *args.get_one::<usize>("threads").unwrap_or(&DEFAULT_THREADS);
    let delay = *args.get_one::<f64>("delay").unwrap_or(&DEFAULT_DELAY_SECS);
    let timeout = *args
        .get_one::<u64>("timeout")
        .unwrap_or(&DEFAULT_TIMEOUT_SECS);

    let mut config = ScanConfig::new(url, mode, threads, delay)?
        .with_timeout(Duration::from_secs(timeout))
        .with_progress_bars(!args.get_flag("no-progress"));

    if let Some(output_dir) = args.get_one::<String>("output-dir") {
        config = config.with_output_dir(expand_path(output_dir));
    }

    Ok(config)
}

/// An explicit `--wordlist` wins over the SecLists tier lookup.
pub fn candidate_source(args: &ArgMatches) -> Box<dyn CandidateSource> {
    if let Some(wordlist) = args.get_one::<String>("wordlist") {
        Box::new(WordlistFile::new(expand_path(wordlist)))
    } else {
        let root = args
            .get_one::<String>("seclists")
            .map(|s| expand_path(s))
            .unwrap_or_default();
        Box::new(SecLists::new(root))
    }
}

/// Resolves once the process receives Ctrl+C. If the handler cannot be
/// installed it never resolves.
pub async fn ctrl_c_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Run a scan from the command line. Returns the process exit code.
pub async fn handle_scan(args: &ArgMatches) -> Result<i32> {
    let config = build_config(args)?;

    let source = candidate_source(args);
    let wordlist = source
        .locate(config.mode)
        .context("No usable wordlist")?;
    println!(
        "{}",
        format!(
            "[+] Using wordlist: {}",
            wordlist
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| wordlist.display().to_string())
        )
        .green()
    );
    let candidates = load_wordlist(&wordlist).context("Failed to load wordlist")?;
    debug!("Loaded {} candidates from {}", candidates.len(), wordlist.display());

    print!("{}", scan_header(&config, candidates.len(), Some(&wordlist)));
    println!("{}", "\n[+] Scan Started...\n".yellow());

    let interrupt = async {
        ctrl_c_signal().await;
        eprintln!("\n{}", interrupt_notice());
    };
    let outcome = execute_scan(&config, candidates, interrupt)
        .await
        .context("Scan failed")?;

    match outcome {
        ScanOutcome::Completed {
            snapshot,
            stats,
            elapsed,
            ..
        } => {
            print!("{}", scan_summary(&snapshot, &stats, elapsed));
            println!("\n{}", saved_notice(&config.output_dir));
            Ok(0)
        }
        ScanOutcome::Interrupted(report) => {
            if report.saved.is_some() {
                eprintln!("{}", saved_notice(&config.output_dir));
            }
            Ok(INTERRUPTED_EXIT_CODE)
        }
    }
}
