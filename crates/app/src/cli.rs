//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use duproprio_core::{Config, Result};

#[derive(Parser, Debug)]
#[command(name = "duproprio")]
#[command(version, about = "Browse and list properties, no agents required")]
pub struct Cli {
    /// Directory holding users, properties and the session
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Resolve configuration: `--data-dir` beats the config file, which beats defaults
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => match Config::default_path() {
                Ok(path) => Config::load_or_default(&path)?,
                Err(e) => {
                    tracing::warn!(error = %e, "No config directory, using defaults");
                    Config::default()
                }
            },
        };

        Ok(match &self.data_dir {
            Some(dir) => config.with_data_dir(dir.clone()),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["duproprio", "--data-dir", "/tmp/dp", "--no-banner"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/dp")));
        assert!(cli.no_banner);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"from-file\"\nusers_file = \"utilisateurs.json\"\n",
        )
        .unwrap();
        let path_arg = path.to_str().unwrap();

        let cli = Cli::parse_from(["duproprio", "--config", path_arg]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("from-file")));
        assert_eq!(config.users_file, "utilisateurs.json");

        let cli = Cli::parse_from(["duproprio", "--config", path_arg, "--data-dir", "flag"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("flag")));
        assert_eq!(config.users_file, "utilisateurs.json");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::parse_from(["duproprio", "--config", missing.to_str().unwrap()]);
        assert!(cli.load_config().is_err());
    }
}
