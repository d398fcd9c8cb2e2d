//! Configuration
//!
//! Where the three stores live. Loaded from an optional TOML file:
//!
//! ```toml
//! data_dir = "/var/lib/duproprio"
//! users_file = "users.json"
//! properties_file = "properties.json"
//! session_file = "session.txt"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the stores; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    pub users_file: String,
    pub properties_file: String,
    pub session_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            users_file: "users.json".to_string(),
            properties_file: "properties.json".to_string(),
            session_file: "session.txt".to_string(),
        }
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load config from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&content)
    }

    /// Load config from a file, falling back to defaults when it is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the data directory
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = Some(data_dir);
        self
    }

    /// Directory the stores live in
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_dir().to_path_buf()),
        }
    }

    /// Platform location of `config.toml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("ca", "duproprio", "duproprio")
        .ok_or_else(|| Error::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_partial_config() {
        let config = Config::from_toml(r#"data_dir = "/tmp/listings""#).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/listings")));
        assert_eq!(config.users_file, "users.json");
        assert_eq!(config.session_file, "session.txt");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
data_dir = "data"
users_file = "utilisateurs.json"
properties_file = "proprietes.json"
session_file = "session.txt"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.users_file, "utilisateurs.json");
        assert_eq!(config.properties_file, "proprietes.json");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml("data_dir = 42"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::load(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_data_dir_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "data_dir = \"from-file\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("from-file"));

        let config = config.with_data_dir(PathBuf::from("from-flag"));
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("from-flag"));
    }
}
