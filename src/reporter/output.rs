use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::FuzzError;
use crate::models::MatchRecord;

/// Append-mode results file, one `[FOUND]` line per match.
pub struct MatchWriter {
    file: File,
}

impl MatchWriter {
    pub fn open(path: &Path) -> Result<Self, FuzzError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(FuzzError::OutputOpen)?;

        Ok(Self { file })
    }

    pub fn record(&mut self, record: &MatchRecord) -> io::Result<()> {
        writeln!(self.file, "{}", record)?;
        self.file.flush()
    }

    pub fn close(mut self) -> io::Result<()> {
        self.file.flush()
    }
}
