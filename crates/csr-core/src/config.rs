//! Console configuration, loaded from an optional `csr.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ConsoleResult};
use crate::session::{FileStorage, MemoryStorage, SessionStorage, SessionStore, DEFAULT_USERNAME};

/// Default config file name, looked up in the project directory.
pub const CONFIG_FILE: &str = "csr.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the session flags are persisted.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub store: SessionBackend,
    /// Session file, relative paths resolve against the project directory.
    pub path: PathBuf,
    pub fallback_username: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: SessionBackend::File,
            path: PathBuf::from(".csr/session.json"),
            fallback_username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a TOML document. Missing sections take their defaults.
    pub fn from_toml(content: &str) -> ConsoleResult<Self> {
        toml::from_str(content).map_err(|e| ConsoleError::config(e.to_string()))
    }

    /// Load `csr.toml` from `project_dir`, or defaults when it does not exist.
    pub fn load(project_dir: &Path) -> ConsoleResult<Self> {
        Self::load_file(&project_dir.join(CONFIG_FILE))
    }

    /// Load a specific file, or defaults when it does not exist.
    pub fn load_file(path: &Path) -> ConsoleResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ConsoleError::config(format!("{}: {}", path.display(), e)))
    }

    /// Build the session store described by `[session]`.
    pub fn session_store(&self, project_dir: &Path) -> SessionStore {
        let storage: Box<dyn SessionStorage> = match self.session.store {
            SessionBackend::Memory => Box::new(MemoryStorage::new()),
            SessionBackend::File => Box::new(FileStorage::new(self.session_path(project_dir))),
        };
        SessionStore::with_fallback(storage, self.session.fallback_username.clone())
    }

    /// Absolute location of the session file.
    pub fn session_path(&self, project_dir: &Path) -> PathBuf {
        if self.session.path.is_absolute() {
            self.session.path.clone()
        } else {
            project_dir.join(&self.session.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConsoleConfig::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_memory_backend() {
        let config = ConsoleConfig::from_toml(
            "[session]\nstore = \"memory\"\nfallback_username = \"值班员\"\n",
        )
        .unwrap();
        assert_eq!(config.session.store, SessionBackend::Memory);
        let store = config.session_store(Path::new("."));
        assert_eq!(store.current_session().username, "值班员");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ConsoleConfig::from_toml("[server\nport=").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(ConsoleConfig::load(dir.path()).unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_relative_session_path_resolves_against_project() {
        let config = ConsoleConfig::default();
        let path = config.session_path(Path::new("/srv/console"));
        assert_eq!(path, PathBuf::from("/srv/console/.csr/session.json"));
    }
}
