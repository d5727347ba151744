// Writes scan snapshots to disk as JSON and plain text

use crate::error::{CoreError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use vesstor_scanner::{ResultSnapshot, TOOL_NAME};

/// Where a snapshot for one target ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPaths {
    pub json: PathBuf,
    pub text: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn paths_for(&self, target: &Url) -> SavedPaths {
        let stem = file_stem(target);
        SavedPaths {
            json: self.output_dir.join(format!("{}.json", stem)),
            text: self.output_dir.join(format!("{}.txt", stem)),
        }
    }

    /// Write both artifacts, replacing any previous output for the same host.
    pub fn write(&self, snapshot: &ResultSnapshot) -> Result<SavedPaths> {
        let target = Url::parse(&snapshot.target).map_err(|e| {
            CoreError::InvalidTarget(snapshot.target.clone(), e.to_string())
        })?;
        let paths = self.paths_for(&target);

        fs::create_dir_all(&self.output_dir).map_err(|source| CoreError::Persist {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut json = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        snapshot.serialize(&mut serializer)?;
        fs::write(&paths.json, json).map_err(|source| CoreError::Persist {
            path: paths.json.clone(),
            source,
        })?;

        let text: String = snapshot
            .results
            .iter()
            .map(|url| format!("{}\n", url))
            .collect();
        fs::write(&paths.text, text).map_err(|source| CoreError::Persist {
            path: paths.text.clone(),
            source,
        })?;

        Ok(paths)
    }

    /// Read a JSON artifact back.
    pub fn load(path: &Path) -> Result<ResultSnapshot> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// `VesstoR_<host>`, with `:<port>` appended when the target names a
/// non-default port.
pub fn file_stem(target: &Url) -> String {
    let host = target.host_str().unwrap_or("unknown");
    match target.port() {
        Some(port) => format!("{}_{}:{}", TOOL_NAME, host, port),
        None => format!("{}_{}", TOOL_NAME, host),
    }
}
