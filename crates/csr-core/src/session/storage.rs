//! Durable key/value storage for the session flags.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{ConsoleError, ConsoleResult};

/// Key holding `"true"` while logged in.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// Key holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

/// String key/value store that outlives a single page view.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()>;
    fn remove(&mut self, key: &str) -> ConsoleResult<()>;

    /// Set several keys at once. Stores that can should apply them in one write.
    fn set_all(&mut self, entries: &[(&str, &str)]) -> ConsoleResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys at once.
    fn remove_all(&mut self, keys: &[&str]) -> ConsoleResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Storage that lives as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Storage kept as a JSON object in a file, so the session survives restarts.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> ConsoleResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Current values for a write, and whether the file was damaged.
    ///
    /// Unparseable content is discarded so a damaged file never blocks
    /// login or logout.
    fn load_for_write(&self) -> ConsoleResult<(BTreeMap<String, String>, bool)> {
        match self.load() {
            Ok(values) => Ok((values, false)),
            Err(ConsoleError::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "Session file unparseable, starting empty");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the file atomically: write a sibling temp file, then rename.
    fn save(&self, values: &BTreeMap<String, String>) -> ConsoleResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(values)?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), keys = values.len(), "Session storage written");
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
        self.set_all(&[(key, value)])
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        self.remove_all(&[key])
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> ConsoleResult<()> {
        let (mut values, _) = self.load_for_write()?;
        for (key, value) in entries {
            values.insert(key.to_string(), value.to_string());
        }
        self.save(&values)
    }

    fn remove_all(&mut self, keys: &[&str]) -> ConsoleResult<()> {
        let (mut values, damaged) = self.load_for_write()?;
        let before = values.len();
        values.retain(|k, _| !keys.contains(&k.as_str()));
        if damaged || values.len() != before {
            self.save(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_roundtrip_and_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/session.json");
        let mut storage = FileStorage::new(&path);

        assert_eq!(storage.get(USERNAME_KEY).unwrap(), None);
        storage.set(USERNAME_KEY, "admin").unwrap();
        assert_eq!(FileStorage::new(&path).get(USERNAME_KEY).unwrap().as_deref(), Some("admin"));

        storage.remove(USERNAME_KEY).unwrap();
        assert_eq!(storage.get(USERNAME_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(FileStorage::new(&path).get(AUTH_FLAG_KEY).is_err());
    }

    #[test]
    fn test_file_storage_overwrites_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{").unwrap();

        let mut storage = FileStorage::new(&path);
        storage
            .set_all(&[(USERNAME_KEY, "admin"), (AUTH_FLAG_KEY, "true")])
            .unwrap();
        assert_eq!(storage.get(USERNAME_KEY).unwrap().as_deref(), Some("admin"));
        assert_eq!(storage.get(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_remove_all_repairs_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{\"isAuth").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.remove_all(&[AUTH_FLAG_KEY, USERNAME_KEY]).unwrap();
        assert_eq!(storage.get(AUTH_FLAG_KEY).unwrap(), None);
        assert!(dir.path().read_dir().unwrap().count() == 1, "no temp files left behind");
    }

    #[test]
    fn test_memory_storage_set_all_and_remove_all() {
        let mut storage = MemoryStorage::new();
        storage
            .set_all(&[(USERNAME_KEY, "admin"), (AUTH_FLAG_KEY, "true")])
            .unwrap();
        assert_eq!(storage.get(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));
        storage.remove_all(&[AUTH_FLAG_KEY, USERNAME_KEY]).unwrap();
        assert_eq!(storage.get(USERNAME_KEY).unwrap(), None);
    }
}
