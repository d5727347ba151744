// Candidate sources: SecLists tiers or an explicit wordlist file

use crate::error::{CoreError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const SECLISTS_BASE: &str = "/usr/share/seclists/Discovery/Web-Content";

/// Candidate density tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    Quick,
    #[default]
    Default,
    Deep,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Quick => "quick",
            Mode::Default => "default",
            Mode::Deep => "deep",
        }
    }

    /// Wordlist file names for this tier, most preferred first.
    pub fn wordlist_files(&self) -> &'static [&'static str] {
        match self {
            Mode::Quick => &["common.txt", "raft-small-directories.txt"],
            Mode::Default => &["raft-medium-directories.txt", "directory-list-2.3-medium.txt"],
            Mode::Deep => &["raft-large-directories.txt", "directory-list-2.3-big.txt"],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supplies the ordered candidate list for a tier.
pub trait CandidateSource {
    /// The file that will be read for `mode`, or a fatal error if there is none.
    fn locate(&self, mode: Mode) -> Result<PathBuf>;

    fn candidates(&self, mode: Mode) -> Result<Vec<String>> {
        load_wordlist(&self.locate(mode)?)
    }
}

/// Tiered lookup under a SecLists `Discovery/Web-Content` directory.
#[derive(Debug, Clone)]
pub struct SecLists {
    root: PathBuf,
}

impl SecLists {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SecLists {
    fn default() -> Self {
        Self::new(SECLISTS_BASE)
    }
}

impl CandidateSource for SecLists {
    fn locate(&self, mode: Mode) -> Result<PathBuf> {
        if !self.root.is_dir() {
            return Err(CoreError::SecListsMissing(self.root.clone()));
        }

        mode.wordlist_files()
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| CoreError::WordlistNotFound {
                mode: mode.to_string(),
                root: self.root.clone(),
            })
    }
}

/// A single user-supplied wordlist, used whatever the tier.
#[derive(Debug, Clone)]
pub struct WordlistFile {
    path: PathBuf,
}

impl WordlistFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for WordlistFile {
    fn locate(&self, _mode: Mode) -> Result<PathBuf> {
        if self.path.is_file() {
            Ok(self.path.clone())
        } else {
            Err(CoreError::WordlistRead {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
        }
    }
}

/// Load wordlist from file
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Invalid UTF-8
/// is replaced rather than rejected. An empty result is not an error.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| CoreError::WordlistRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .map(String::from)
        .collect())
}
