//! JSONL trail reader - sequential reader over recorded events

use crate::error::EventError;
use crate::event::RecordedEvent;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads a JSONL event trail back in recorded order.
///
/// Files rotate daily and sort lexicographically by date, so a sorted
/// directory listing yields the trail order.
pub struct EventReader {
    files: Vec<PathBuf>,
}

impl EventReader {
    /// Create a reader over all `.jsonl` files in a directory
    pub fn from_directory(path: impl AsRef<Path>) -> Result<Self, EventError> {
        let path = path.as_ref();
        let mut files = Vec::new();

        if path.exists() {
            for entry in std::fs::read_dir(path)? {
                let entry = entry?;
                let file_path = entry.path();
                if file_path.extension().map_or(false, |ext| ext == "jsonl") {
                    files.push(file_path);
                }
            }
        }

        files.sort();

        Ok(Self { files })
    }

    /// Read all recorded events from all files, in order
    pub fn read_all(&self) -> Result<Vec<RecordedEvent>, EventError> {
        let mut events = Vec::new();

        for file_path in &self.files {
            let file = File::open(file_path)?;
            let reader = BufReader::new(file);

            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let recorded: RecordedEvent = serde_json::from_str(&line)?;
                events.push(recorded);
            }
        }

        Ok(events)
    }

    /// Count total recorded events across all files
    pub fn count(&self) -> Result<usize, EventError> {
        let mut count = 0;

        for file_path in &self.files {
            let file = File::open(file_path)?;
            let reader = BufReader::new(file);

            for line in reader.lines() {
                if !line?.trim().is_empty() {
                    count += 1;
                }
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_reads_empty() {
        let reader = EventReader::from_directory("/nonexistent/trail").unwrap();
        assert!(reader.read_all().unwrap().is_empty());
        assert_eq!(reader.count().unwrap(), 0);
    }
}
