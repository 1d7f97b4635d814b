//! Command-line flags for `asupparser`.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use crate::config::ParserConfig;

/// Extract host configuration data from ASUP bundles into CSV tables.
#[derive(Debug, Parser)]
#[command(name = "asupparser", version, about)]
pub struct Cli {
    /// ASUP bundle directories to parse
    #[arg(long = "asup-folder", visible_alias = "asup", value_name = "DIR", num_args = 1..)]
    pub asup_folders: Vec<PathBuf>,

    /// Host-info CSV output file
    #[arg(long = "output-csv", visible_alias = "out", value_name = "FILE")]
    pub output_csv: Option<PathBuf>,

    /// Multipath CSV output file
    #[arg(long = "multipath-csv", visible_alias = "multipath", value_name = "FILE")]
    pub multipath_csv: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", visible_alias = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Staging directory, wiped for every bundle
    #[arg(long = "temp-folder", visible_alias = "temp", value_name = "DIR")]
    pub temp_folder: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Build the run configuration: flags over the config file over defaults.
    pub fn resolve(&self) -> anyhow::Result<ParserConfig> {
        let base = match &self.config {
            Some(path) => ParserConfig::from_file(path)?,
            None => ParserConfig::default(),
        };
        let config = self.overlay(base);
        if config.asup_folders.is_empty() {
            bail!("no ASUP folder given (use --asup-folder or asup_folders in the config file)");
        }
        Ok(config)
    }

    /// Apply every flag that was given on top of `config`.
    pub fn overlay(&self, mut config: ParserConfig) -> ParserConfig {
        if !self.asup_folders.is_empty() {
            config.asup_folders = self.asup_folders.clone();
        }
        if let Some(path) = &self.output_csv {
            config.output_csv = path.clone();
        }
        if let Some(path) = &self.multipath_csv {
            config.multipath_csv = path.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(path) = &self.temp_folder {
            config.temp_folder = path.clone();
        }
        if self.json_logs {
            config.json_logs = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("asupparser").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn long_flags_and_aliases() {
        let cli = parse(&[
            "--asup", "/a", "/b", "--out", "/o.csv", "--multipath", "/m.csv", "--log", "/l.log",
            "--temp", "/t",
        ]);
        assert_eq!(cli.asup_folders, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(cli.output_csv, Some(PathBuf::from("/o.csv")));
        assert_eq!(cli.multipath_csv, Some(PathBuf::from("/m.csv")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/l.log")));
        assert_eq!(cli.temp_folder, Some(PathBuf::from("/t")));
        assert!(!cli.json_logs);
    }

    #[test]
    fn flags_only_use_defaults_for_the_rest() {
        let config = parse(&["--asup-folder", "/data/b1"]).resolve().unwrap();
        assert_eq!(config.asup_folders, vec![PathBuf::from("/data/b1")]);
        assert_eq!(config.output_csv, ParserConfig::default().output_csv);
        assert_eq!(config.temp_folder, PathBuf::from("/tmp/asupparser"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asupparser.toml");
        std::fs::write(
            &path,
            "asup_folders = [\"/cfg/b1\"]\noutput_csv = \"/cfg/out.csv\"\ntemp_folder = \"/cfg/tmp\"\n",
        )
        .unwrap();
        let config = parse(&["--config", path.to_str().unwrap(), "--out", "/cli/out.csv"])
            .resolve()
            .unwrap();
        assert_eq!(config.asup_folders, vec![PathBuf::from("/cfg/b1")]);
        assert_eq!(config.output_csv, PathBuf::from("/cli/out.csv"));
        assert_eq!(config.temp_folder, PathBuf::from("/cfg/tmp"));
    }

    #[test]
    fn missing_asup_folder_is_an_error() {
        assert!(parse(&[]).resolve().is_err());
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["asupparser", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
