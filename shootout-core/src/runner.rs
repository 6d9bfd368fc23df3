// SPDX-License-Identifier: Apache-2.0

//! The shared runner protocol, identical for every contender.
//!
//! Duplicate the loaded buffer, time the parse, time the traversal,
//! hand back a [`TimingSample`]. A parse failure is logged with the
//! library's diagnostic and the run carries on: the failed contender
//! reports a zero checksum and the next contender still runs.

use crate::contender::Contender;
use crate::input::RawDocument;
use crate::report::TimingSample;
use crate::timer::{measure, Timer};

/// Run one contender over one document and measure both phases.
pub fn run_contender<C: Contender>(contender: &C, doc: &RawDocument) -> TimingSample {
    let mut scratch = doc.working_copy();
    let payload_len = doc.payload_len();

    // The parse phase is timed inline: the tree may borrow the scratch
    // buffer, so it cannot be returned out of a measuring closure.
    let timer = Timer::start();
    let parsed = contender.parse(&mut scratch[..payload_len]);
    let parse_us = timer.elapsed_us();

    let tree = match parsed {
        Ok(tree) => Some(tree),
        Err(diagnostic) => {
            tracing::error!(contender = C::NAME, %diagnostic, "parse failed");
            None
        }
    };

    let (checksum, traverse_us) = measure(|| match &tree {
        Some(tree) => contender.accumulate(tree),
        // No tree survives a failed parse; the best-effort checksum is 0
        None => 0.0,
    });

    tracing::debug!(
        contender = C::NAME,
        parse_us,
        traverse_us,
        checksum,
        "run complete"
    );

    TimingSample {
        parse_us,
        traverse_us,
        checksum,
    }
}
