//! Run logger: every operator-facing line goes to the console and to a
//! log file opened in overwrite mode for the duration of one run.
//!
//! The file is closed exactly once; `Drop` covers early exits, and lines
//! written after close are silently dropped.

use crate::error::{EdgarError, EdgarResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Dual-sink logger for one run.
pub struct RunLog {
    file: Option<File>,
}

impl RunLog {
    /// Create the log file (truncating any previous run's log), creating
    /// parent directories as needed.
    pub fn create(path: &Path) -> EdgarResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path).map_err(|e| {
            EdgarError::Persistence(format!("could not open log file {}: {e}", path.display()))
        })?;
        Ok(Self { file: Some(file) })
    }

    /// Write one line to both sinks. No-op after close.
    pub fn line(&mut self, message: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        println!("{message}");
        let _ = writeln!(file, "{message}");
    }

    /// Close the log file. Idempotent.
    pub fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }
}

impl Drop for RunLog {
    fn drop(&mut self) {
        self.close();
    }
}
