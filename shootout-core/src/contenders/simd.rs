// SPDX-License-Identifier: Apache-2.0

//! simd-json adapter.
//!
//! simd-json parses destructively: the tape stage rewrites string escapes
//! inside the input buffer, which is exactly why every run gets a private
//! working copy. The accumulator walks the tape rather than the owned DOM:
//! the tape keeps nodes in document order, while the owned object form is
//! a hash map that gives up insertion order on larger objects and would
//! change the floating-point summation order.

use simd_json::prelude::*;
use simd_json::tape::{Tape, Value as TapeValue};

use crate::contender::Contender;

/// simd-json contender (in-place SIMD tape parser).
pub struct SimdJson;

impl Contender for SimdJson {
    const NAME: &'static str = "simd-json";

    type Tree<'a> = Tape<'a>;

    fn parse<'a>(&self, scratch: &'a mut [u8]) -> Result<Self::Tree<'a>, String> {
        simd_json::to_tape(scratch).map_err(|e| e.to_string())
    }

    fn accumulate(&self, tree: &Self::Tree<'_>) -> f64 {
        sum_numeric_leaves(&tree.as_value())
    }
}

/// Sum numeric leaves of a simd-json tape value in document order.
///
/// Integer leaves (i64/u64) are widened to f64, mirroring the separate
/// integer/double leaf kinds simd-json tracks on its tape.
fn sum_numeric_leaves(value: &TapeValue<'_, '_>) -> f64 {
    if let Some(items) = value.as_array() {
        items.iter().map(|v| sum_numeric_leaves(&v)).sum()
    } else if let Some(members) = value.as_object() {
        members.iter().map(|(_, v)| sum_numeric_leaves(&v)).sum()
    } else {
        // cast_f64 covers i64/u64/f64 leaves; anything else contributes 0
        value.cast_f64().unwrap_or(0.0)
    }
}
