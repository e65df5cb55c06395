//! CSV writer for the converted records.
//!
//! The point-of-sale import expects plain comma-joined lines: no
//! quoting, no escaping, fields emitted verbatim, every record followed
//! by a newline. `QuoteStyle::Never` gives exactly that.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;
use crate::pipeline::RecordSink;

/// Record sink writing comma-separated lines to a file.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink for the given destination path.
    ///
    /// The file is only created when records are written, so a failed
    /// read never leaves an empty destination behind.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path of this sink.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvSink {
    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_path(&self.path)?;

        for row in rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_writes_plain_comma_joined_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["1".to_string(), String::new(), "3".to_string()],
        ];

        CsvSink::new(&path).write_rows(&rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b,c\n1,,3\n");
    }

    #[test]
    fn test_embedded_commas_stay_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = vec![vec!["Markt 5, Hinterhof".to_string(), "x".to_string()]];

        CsvSink::new(&path).write_rows(&rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Markt 5, Hinterhof,x\n");
        assert!(!content.contains('"'), "fields are never quoted");
    }

    #[test]
    fn test_trailing_newline_after_last_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvSink::new(&path)
            .write_rows(&[vec!["only".to_string()]])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let result = CsvSink::new(&path).write_rows(&[vec!["x".to_string()]]);
        assert!(result.is_err());
    }
}
