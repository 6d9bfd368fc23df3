// SPDX-License-Identifier: Apache-2.0

//! sonic-rs adapter.
//!
//! Arena-backed value with trait-based tagged access: containers answer
//! through `JsonContainerTrait`, leaves through `JsonValueTrait`.

use sonic_rs::{JsonContainerTrait, JsonValueTrait, Value};

use crate::contender::Contender;

/// sonic-rs contender (SIMD parser, arena-backed document).
pub struct SonicRs;

impl Contender for SonicRs {
    const NAME: &'static str = "sonic-rs";

    type Tree<'a> = Value;

    fn parse<'a>(&self, scratch: &'a mut [u8]) -> Result<Self::Tree<'a>, String> {
        sonic_rs::from_slice(scratch).map_err(|e| e.to_string())
    }

    fn accumulate(&self, tree: &Self::Tree<'_>) -> f64 {
        sum_numeric_leaves(tree)
    }
}

/// Sum numeric leaves of a sonic-rs value in document order.
fn sum_numeric_leaves(value: &Value) -> f64 {
    if let Some(items) = value.as_array() {
        items.iter().map(sum_numeric_leaves).sum()
    } else if let Some(members) = value.as_object() {
        members.iter().map(|(_, v)| sum_numeric_leaves(v)).sum()
    } else {
        // as_f64 covers i64/u64/f64 leaves; anything else contributes 0
        value.as_f64().unwrap_or(0.0)
    }
}
