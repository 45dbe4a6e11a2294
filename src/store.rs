// src/store.rs
use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use crate::config::consts::LOG_EXT;
use crate::error::{Result, TallyError};

/// Where game logs come from. Fetching (network, auth, retries) happens
/// behind this seam; the parser only ever sees finished text.
pub trait LogSource: Sync {
    fn fetch_log(&self, id: &str) -> Result<String>;
}

/* ---------------- files ---------------- */

/// Logs on disk, one file per game. The id is the file stem.
#[derive(Clone, Debug, Default)]
pub struct FileStore {
    files: BTreeMap<String, PathBuf>,
}

impl FileStore {
    /// Every `*.log` file directly inside `dir`.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self::default();
        store.add_dir(dir.as_ref())?;
        Ok(store)
    }

    /// Mixed list of log files and directories of log files.
    /// Files are taken whatever their extension.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut store = Self::default();
        for p in paths {
            let p = p.as_ref();
            if p.is_dir() {
                store.add_dir(p)?;
            } else if p.is_file() {
                store.add_file(p);
            } else {
                return Err(TallyError::LogNotFound(p.display().to_string()));
            }
        }
        Ok(store)
    }

    fn add_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some(LOG_EXT) { continue; }
            self.add_file(&path);
        }
        Ok(())
    }

    fn add_file(&mut self, path: &Path) {
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        if let Some(prev) = self.files.insert(id.clone(), path.to_path_buf()) {
            logd!("log `{id}`: {} replaced by {}", prev.display(), path.display());
        }
    }

    /// Known ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    pub fn len(&self) -> usize { self.files.len() }

    pub fn is_empty(&self) -> bool { self.files.is_empty() }
}

impl LogSource for FileStore {
    fn fetch_log(&self, id: &str) -> Result<String> {
        let path = self.files.get(id).ok_or_else(|| TallyError::LogNotFound(s!(id)))?;
        Ok(fs::read_to_string(path)?)
    }
}

/* ---------------- memory ---------------- */

/// Logs already in memory, keyed by table id.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    logs: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, id: impl Into<String>, log: impl Into<String>) {
        self.logs.insert(id.into(), log.into());
    }

    pub fn ids(&self) -> Vec<String> {
        self.logs.keys().cloned().collect()
    }
}

impl<I: Into<String>, L: Into<String>> FromIterator<(I, L)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (I, L)>>(iter: T) -> Self {
        let mut store = Self::new();
        for (id, log) in iter {
            store.insert(id, log);
        }
        store
    }
}

impl LogSource for MemoryStore {
    fn fetch_log(&self, id: &str) -> Result<String> {
        self.logs.get(id).cloned().ok_or_else(|| TallyError::LogNotFound(s!(id)))
    }
}
