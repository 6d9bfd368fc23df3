// SPDX-License-Identifier: Apache-2.0

//! serde_json adapter.
//!
//! Non-destructive DOM parser; the working copy is still duplicated for
//! uniformity with the in-place contenders. Built with `preserve_order`
//! so object members are summed in document order like the others.

use serde_json::Value;

use crate::contender::Contender;

/// serde_json contender (DOM `Value` parser).
pub struct SerdeJson;

impl Contender for SerdeJson {
    const NAME: &'static str = "serde_json";

    type Tree<'a> = Value;

    fn parse<'a>(&self, scratch: &'a mut [u8]) -> Result<Self::Tree<'a>, String> {
        serde_json::from_slice(scratch).map_err(|e| e.to_string())
    }

    fn accumulate(&self, tree: &Self::Tree<'_>) -> f64 {
        sum_numeric_leaves(tree)
    }
}

/// Sum numeric leaves of a serde_json value in document order.
fn sum_numeric_leaves(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Array(items) => items.iter().map(sum_numeric_leaves).sum(),
        Value::Object(members) => members.values().map(sum_numeric_leaves).sum(),
        _ => 0.0,
    }
}
