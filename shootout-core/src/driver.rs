// SPDX-License-Identifier: Apache-2.0

//! The shootout driver.
//!
//! Takes an explicit list of paths so any host (CLI, embedded harness,
//! test runner) can invoke it. Strictly sequential: one file at a time,
//! three contenders in fixed order, nothing shared across iterations.

use std::io::Write;
use std::path::PathBuf;

use crate::contender::Contender;
use crate::contenders::{SerdeJson, SimdJson, SonicRs};
use crate::error::ShootoutResult;
use crate::input::RawDocument;
use crate::report::Reporter;
use crate::runner::run_contender;

/// Run the full shootout over the given files, in order.
///
/// Per file: load once, then run {simd-json, serde_json, sonic-rs},
/// each reporting one line. Parser errors are logged and skipped over;
/// a file that cannot be opened aborts the whole run.
pub fn run_shootout<W: Write>(paths: &[PathBuf], reporter: &mut Reporter<W>) -> ShootoutResult<()> {
    for path in paths {
        let doc = RawDocument::load(path)?;
        reporter.loaded(doc.path(), doc.buffer_len())?;

        run_one(&SimdJson, &doc, reporter)?;
        run_one(&SerdeJson, &doc, reporter)?;
        run_one(&SonicRs, &doc, reporter)?;
    }
    Ok(())
}

fn run_one<C: Contender, W: Write>(
    contender: &C,
    doc: &RawDocument,
    reporter: &mut Reporter<W>,
) -> ShootoutResult<()> {
    let sample = run_contender(contender, doc);
    reporter.report(C::NAME, &sample)
}
