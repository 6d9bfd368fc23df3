// SPDX-License-Identifier: Apache-2.0

//! Input loading for the shootout.
//!
//! Each file is read fully into an owned buffer once, then duplicated per
//! parser run. The buffer carries a single zero sentinel byte after the
//! payload, matching the harness contract that the loaded length includes
//! the sentinel; parsers receive the payload slice without it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ShootoutError, ShootoutResult};

/// One fully loaded input file: payload bytes plus a trailing zero sentinel.
///
/// Read-only after construction. Every parser run works on a fresh
/// [`working_copy`](RawDocument::working_copy), never on this buffer.
#[derive(Debug)]
pub struct RawDocument {
    path: PathBuf,
    /// Payload followed by one sentinel byte; `bytes.len() == payload + 1`.
    bytes: Vec<u8>,
}

impl RawDocument {
    /// Load a file into memory and append the sentinel byte.
    ///
    /// A missing or unopenable file is fatal to the whole run and maps to
    /// [`ShootoutError::FileNotFound`].
    pub fn load(path: impl AsRef<Path>) -> ShootoutResult<Self> {
        let path = path.as_ref();
        let mut bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ShootoutError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(ShootoutError::Io {
                    context: "reading document",
                    source,
                });
            }
        };
        bytes.push(0);

        tracing::debug!(path = %path.display(), length = bytes.len(), "loaded document");

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Path this document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Payload bytes, without the sentinel.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.payload_len()]
    }

    /// Payload length in bytes, without the sentinel.
    pub fn payload_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Total buffer length including the sentinel, as reported in the
    /// "loaded" line.
    pub fn buffer_len(&self) -> usize {
        self.bytes.len()
    }

    /// Byte-for-byte duplicate of the full buffer (sentinel included) for
    /// one parser run. Destructive parsers scribble over this copy; the
    /// original stays pristine for the next contender.
    pub fn working_copy(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}
