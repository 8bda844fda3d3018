//! Buffered byte-stream reader with explicit state machine
//!
//! Reads a whole resource into memory once and exposes line reads,
//! fixed-length reads, seeking, and single-unit get/putback for
//! tokenizer lookahead. Error bits are sticky until cleared.

use crate::config::constants::compile_time::reader::*;
use crate::config::runtime::ReaderPreferences;
use crate::logging::codes;
use crate::{log_debug, log_success, log_warning};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reader errors with compile-time security boundaries
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReaderError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("I/O error opening {path}: {message}")]
    Io { path: String, message: String },

    #[error("Reader is uninitialized")]
    Uninitialized,

    #[error("Reader is corrupt")]
    Corrupt,

    #[error("Resource too large: {size} bytes (max {MAX_RESOURCE_SIZE})")]
    TooLarge { size: u64 },

    #[error("Seek failed: target {target} outside 0..={size}")]
    SeekFailed { target: i64, size: usize },

    #[error("Invalid read length: {requested} (minimum 1)")]
    InvalidReadLength { requested: usize },

    #[error("End of input reached")]
    EndOfInput,
}

impl ReaderError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ReaderError::NotFound { .. } => codes::resource::RESOURCE_NOT_FOUND,
            ReaderError::PermissionDenied { .. } => codes::resource::PERMISSION_DENIED,
            ReaderError::Io { .. } => codes::resource::IO_ERROR,
            ReaderError::Uninitialized => codes::resource::RESOURCE_UNINITIALIZED,
            ReaderError::Corrupt => codes::resource::RESOURCE_CORRUPT,
            ReaderError::TooLarge { .. } => codes::resource::RESOURCE_TOO_LARGE,
            ReaderError::SeekFailed { .. } => codes::resource::SEEK_FAILED,
            ReaderError::InvalidReadLength { .. } => codes::resource::INVALID_READ_LENGTH,
            ReaderError::EndOfInput => codes::resource::END_OF_INPUT,
        }
    }

    /// True only for the expected loop-terminating signal
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ReaderError::EndOfInput)
    }
}

/// Reader states, checked in this priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    Uninitialized,
    AtEnd,
    Failed,
    Corrupt,
    Ready,
}

/// Origin for reader seeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    Start,
    Current,
    End,
}

/// Scoped read-only byte-stream handle over a path
#[derive(Debug, Default)]
pub struct ResourceReader {
    path: PathBuf,
    buffer: Option<Vec<u8>>,
    pos: usize,
    end_bit: bool,
    fail_bit: bool,
    corrupt_bit: bool,
    preferences: ReaderPreferences,
}

impl ResourceReader {
    /// Open a resource and buffer its contents
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        Self::open_with_preferences(path, ReaderPreferences::default())
    }

    /// Open with custom runtime preferences (security boundaries remain compile-time)
    pub fn open_with_preferences<P: AsRef<Path>>(
        path: P,
        preferences: ReaderPreferences,
    ) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();
        let error_path = if preferences.include_path_in_errors {
            display.clone()
        } else {
            "<redacted>".to_string()
        };

        let metadata = fs::metadata(&path).map_err(|e| Self::map_open_error(e, &error_path))?;
        if metadata.len() > MAX_RESOURCE_SIZE {
            return Err(ReaderError::TooLarge {
                size: metadata.len(),
            });
        }

        if preferences.warn_on_large_resources && metadata.len() > LARGE_RESOURCE_THRESHOLD {
            log_warning!("Opening large resource",
                "path" => display,
                "size_bytes" => metadata.len(),
                "threshold" => LARGE_RESOURCE_THRESHOLD
            );
        }

        let buffer = fs::read(&path).map_err(|e| Self::map_open_error(e, &error_path))?;

        log_success!(codes::success::RESOURCE_OPEN_SUCCESS, "Resource opened",
            "path" => display,
            "size_bytes" => buffer.len()
        );

        Ok(Self {
            path,
            buffer: Some(buffer),
            pos: 0,
            end_bit: false,
            fail_bit: false,
            corrupt_bit: false,
            preferences,
        })
    }

    /// Construct a handle with no underlying resource
    pub fn new_uninitialized() -> Self {
        Self::default()
    }

    fn map_open_error(error: std::io::Error, path: &str) -> ReaderError {
        match error.kind() {
            ErrorKind::NotFound => ReaderError::NotFound {
                path: path.to_string(),
            },
            ErrorKind::PermissionDenied => ReaderError::PermissionDenied {
                path: path.to_string(),
            },
            _ => ReaderError::Io {
                path: path.to_string(),
                message: error.to_string(),
            },
        }
    }

    /// Path of the currently read resource
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current read position in bytes
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Query the state machine, in priority order
    pub fn state(&self) -> ReaderState {
        if self.buffer.is_none() {
            ReaderState::Uninitialized
        } else if self.end_bit {
            ReaderState::AtEnd
        } else if self.fail_bit {
            ReaderState::Failed
        } else if self.corrupt_bit {
            ReaderState::Corrupt
        } else {
            ReaderState::Ready
        }
    }

    /// Fatal-state gate run before every operation
    fn ensure_usable(&self) -> Result<&Vec<u8>, ReaderError> {
        if self.corrupt_bit {
            return Err(ReaderError::Corrupt);
        }
        self.buffer.as_ref().ok_or(ReaderError::Uninitialized)
    }

    fn ensure_not_exhausted(&self) -> Result<(), ReaderError> {
        if self.end_bit {
            return Err(ReaderError::EndOfInput);
        }
        Ok(())
    }

    /// Read through the next line terminator, returned without it
    pub fn read_line(&mut self) -> Result<String, ReaderError> {
        let buffer = self.ensure_usable()?;
        self.ensure_not_exhausted()?;

        let len = buffer.len();
        if self.pos >= len {
            self.end_bit = true;
            return Err(ReaderError::EndOfInput);
        }

        let start = self.pos;
        let mut end = start;
        while end < len && buffer[end] != b'\n' {
            end += 1;
        }

        let line: String = buffer[start..end].iter().map(|&b| b as char).collect();

        if end < len {
            // Consume the terminator too
            self.pos = end + 1;
        } else {
            self.pos = len;
            self.end_bit = true;
        }

        if self.preferences.log_read_operations {
            log_debug!("Line read",
                "length" => line.len(),
                "position" => self.pos
            );
        }

        Ok(line)
    }

    /// Read exactly `n` units; a short read at end of input returns what
    /// was available and sets the end bit
    pub fn read(&mut self, n: usize) -> Result<String, ReaderError> {
        if n < 1 {
            return Err(ReaderError::InvalidReadLength { requested: n });
        }

        let buffer = self.ensure_usable()?;
        self.ensure_not_exhausted()?;

        let len = buffer.len();
        if self.pos >= len {
            self.end_bit = true;
            return Err(ReaderError::EndOfInput);
        }

        let end = (self.pos + n).min(len);
        let chunk: String = buffer[self.pos..end].iter().map(|&b| b as char).collect();

        if end - self.pos < n {
            self.end_bit = true;
        }
        self.pos = end;

        if self.preferences.log_read_operations {
            log_debug!("Fixed-length read",
                "requested" => n,
                "returned" => chunk.len(),
                "position" => self.pos
            );
        }

        Ok(chunk)
    }

    /// Move the read position; a malformed target sets the fail bit
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<usize, ReaderError> {
        let buffer = self.ensure_usable()?;
        let len = buffer.len();

        let base: i64 = match origin {
            SeekOrigin::Start => 0,
            SeekOrigin::Current => self.pos as i64,
            SeekOrigin::End => len as i64,
        };

        let target = base + offset;
        if target < 0 || target > len as i64 {
            self.fail_bit = true;
            return Err(ReaderError::SeekFailed { target, size: len });
        }

        self.pos = target as usize;
        // A successful seek makes the stream readable again
        self.end_bit = false;

        log_debug!("Reader seek",
            "target" => self.pos,
            "origin" => format!("{:?}", origin)
        );

        Ok(self.pos)
    }

    /// Drop the fail bit without closing the resource
    pub fn clear_error(&mut self) {
        self.fail_bit = false;
    }

    /// Force the corrupt bit, for fatal-path tests
    #[cfg(test)]
    pub(crate) fn mark_corrupt(&mut self) {
        self.corrupt_bit = true;
    }

    /// Read a single unit; the tokenizer's primary entry point
    pub fn get(&mut self) -> Result<u8, ReaderError> {
        let buffer = self.ensure_usable()?;
        self.ensure_not_exhausted()?;

        let len = buffer.len();
        if self.pos >= len {
            self.end_bit = true;
            return Err(ReaderError::EndOfInput);
        }

        let unit = buffer[self.pos];
        self.pos += 1;
        Ok(unit)
    }

    /// Push back the most recently read unit for one-unit lookahead
    pub fn putback(&mut self) -> Result<(), ReaderError> {
        self.ensure_usable()?;

        if self.pos == 0 {
            self.fail_bit = true;
            return Err(ReaderError::SeekFailed {
                target: -1,
                size: self.buffer.as_ref().map(|b| b.len()).unwrap_or(0),
            });
        }

        self.pos -= 1;
        self.end_bit = false;
        Ok(())
    }
}
