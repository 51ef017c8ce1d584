use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffix every vacancy log path must carry.
pub const LOG_EXTENSION: &str = ".txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("vacancy log {0:?} is not a .txt file")]
    Naming(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Append-only text log of crawl markers and discovered vacancies.
#[derive(Debug, Clone)]
pub struct VacancyLog {
    path: PathBuf,
}

impl VacancyLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log empty if it does not exist yet; an existing file is left alone.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::File::create(&self.path)?;
        Ok(())
    }

    /// Every line of the log. An empty file yields no lines.
    pub fn read_all(&self) -> Result<Vec<String>, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        if data.is_empty() {
            return Ok(Vec::new());
        }
        Ok(data.split('\n').map(str::to_string).collect())
    }

    /// Append `entry` on a new line and close the file before returning.
    ///
    /// The extension is checked before the file is touched.
    pub fn append(&self, entry: &str) -> Result<(), StoreError> {
        if !self.path.to_string_lossy().ends_with(LOG_EXTENSION) {
            return Err(StoreError::Naming(self.path.clone()));
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format!("\n{entry}").as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
