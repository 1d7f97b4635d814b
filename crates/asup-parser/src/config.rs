//! Parser configuration, loadable from TOML and overlaid by CLI flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use asup_log_tools::{ExceptionsOverlay, ExtractOptions};
use serde::Deserialize;

/// Top-level configuration for one parser run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParserConfig {
    /// ASUP bundle directories, each holding an `array_log.tgz`.
    #[serde(default)]
    pub asup_folders: Vec<PathBuf>,
    /// Host-info CSV destination.
    #[serde(default = "default_output_csv")]
    pub output_csv: PathBuf,
    /// Multipath CSV destination.
    #[serde(default = "default_multipath_csv")]
    pub multipath_csv: PathBuf,
    /// Log destination. None logs to stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Staging root; wiped at the start of every bundle.
    #[serde(default = "default_temp_folder")]
    pub temp_folder: PathBuf,
    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json_logs: bool,
    /// Bound on each external decompression call. 0 disables the bound.
    #[serde(default = "default_decompress_timeout")]
    pub decompress_timeout_secs: u64,
    /// Source overlaid onto the `blacklistExceptions` section.
    #[serde(default)]
    pub exceptions_overlay: ExceptionsOverlay,
}

fn default_output_csv() -> PathBuf {
    PathBuf::from("/auto/share/asupparser/hi_phase1.csv")
}

fn default_multipath_csv() -> PathBuf {
    PathBuf::from("/auto/share/asupparser/hi_phase1_multipath.csv")
}

fn default_temp_folder() -> PathBuf {
    PathBuf::from("/tmp/asupparser")
}

fn default_decompress_timeout() -> u64 {
    300
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            asup_folders: Vec::new(),
            output_csv: default_output_csv(),
            multipath_csv: default_multipath_csv(),
            log_file: None,
            temp_folder: default_temp_folder(),
            json_logs: false,
            decompress_timeout_secs: default_decompress_timeout(),
            exceptions_overlay: ExceptionsOverlay::default(),
        }
    }
}

impl ParserConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            exceptions_overlay: self.exceptions_overlay,
        }
    }

    pub fn decompress_timeout(&self) -> Option<Duration> {
        match self.decompress_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
