//! Append-only log file for attribute updates.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Newline-delimited record log.
///
/// Each record is written and flushed on its own so a crashed host still
/// leaves every completed update on disk.
pub struct LogSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        debug!(path = %path.display(), "opened log sink");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record followed by a newline.
    pub fn write_record(&mut self, record: &str) -> Result<()> {
        writeln!(self.writer, "{record}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and release the file.
    pub fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        debug!(path = %self.path.display(), "closed log sink");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_newline_delimited() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updates.log");

        let mut sink = LogSink::open(&path).unwrap();
        sink.write_record("files: 1").unwrap();
        sink.write_record("files: 2").unwrap();
        sink.close().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "files: 1\nfiles: 2\n");
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updates.log");
        std::fs::write(&path, "earlier\n").unwrap();

        let mut sink = LogSink::open(&path).unwrap();
        sink.write_record("state: busy").unwrap();
        sink.close().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "earlier\nstate: busy\n"
        );
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("updates.log");
        let err = LogSink::open(&path).err().unwrap();
        assert!(matches!(err, crate::error::DashError::Io(_)));
    }
}
