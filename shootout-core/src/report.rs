// SPDX-License-Identifier: Apache-2.0

//! Result reporting.
//!
//! One line per contender per file, written synchronously to a single
//! sink so grouping and ordering are preserved. The sink is generic over
//! `io::Write`: the CLI passes stderr, tests capture a `Vec<u8>`.

use std::io::Write;
use std::path::Path;

use crate::error::{ShootoutError, ShootoutResult};

/// Timings and checksum for one contender's run over one file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    /// Time spent in the library's parse call, in microseconds.
    pub parse_us: u64,
    /// Time spent in the full-tree traversal, in microseconds.
    pub traverse_us: u64,
    /// Sum of all numeric leaves; the cross-parser correctness check.
    pub checksum: f64,
}

/// Formats shootout output lines into a writer.
pub struct Reporter<W: Write> {
    sink: W,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to the given sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write the per-file "loaded" line: filename and buffer length
    /// (payload plus sentinel).
    pub fn loaded(&mut self, path: &Path, buffer_len: usize) -> ShootoutResult<()> {
        writeln!(self.sink, "{}: length {}", path.display(), buffer_len)
            .map_err(ShootoutError::Report)
    }

    /// Write one result line: right-justified contender name, parse and
    /// traversal microseconds, checksum in fixed notation.
    pub fn report(&mut self, name: &str, sample: &TimingSample) -> ShootoutResult<()> {
        writeln!(
            self.sink,
            "{:>10} {:>10}us {:>10}us \t({:.6})",
            name, sample.parse_us, sample.traverse_us, sample.checksum
        )
        .map_err(ShootoutError::Report)
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
