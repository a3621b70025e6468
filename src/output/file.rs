use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};
use crate::tree::{LineSink, RenderLine};

use super::{TreeOutput, END_MARKER};

/// Writes plain (uncolored) lines to a text file, one per line.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    end_marker: bool,
}

impl FileSink {
    /// Create or truncate the file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            end_marker: true,
        })
    }

    pub fn with_end_marker(mut self, enabled: bool) -> Self {
        self.end_marker = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TreeError {
        TreeError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineSink for FileSink {
    fn push_line(&mut self, line: RenderLine) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| self.io_error(e))
    }
}

impl TreeOutput for FileSink {
    fn finish(&mut self) -> Result<()> {
        if self.end_marker {
            writeln!(self.writer, "{}", END_MARKER).map_err(|e| self.io_error(e))?;
        }
        self.writer.flush().map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), "Wrote tree to file");
        Ok(())
    }
}
