use std::fs;
use std::path::Path;

use crate::error::FuzzError;

/// Candidate values in file order, trimmed, blanks removed. `\n`, `\r\n`
/// and a lone `\r` all end a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    values: Vec<String>,
}

impl Wordlist {
    pub fn load(path: &Path) -> Result<Self, FuzzError> {
        if !path.is_file() {
            return Err(FuzzError::WordlistNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(FuzzError::WordlistRead)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let values = content
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}
