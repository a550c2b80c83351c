use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default data file, relative to the working directory.
pub const DATA_FILE: &str = "tasks.txt";

/// File-backed record store. Holds nothing but the path: every action in
/// the shell does a fresh load/save round trip, so there is no in-memory
/// state to go stale between actions.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all stored record lines, trimmed, blank lines skipped, order
    /// preserved. A missing file is an empty store, not an error.
    pub fn load(&self) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Truncates and rewrites the file, one line per record in the given
    /// order, with a trailing newline.
    pub fn save(&self, records: &[String]) -> Result<()> {
        let mut contents = String::new();
        for record in records {
            contents.push_str(record);
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(DATA_FILE)
    }
}
