// SPDX-License-Identifier: Apache-2.0

//! The adapter seam between the harness and each JSON library.
//!
//! The three libraries expose very different object models (tape values,
//! DOM enum, arena-backed traits), so there is deliberately no shared node
//! type. Each adapter only has to answer two questions: parse this buffer,
//! and sum the numeric leaves of the resulting tree.

/// One JSON library wired into the shootout.
///
/// Implementations hold no state; the harness owns the scratch buffer and
/// the parsed tree, both scoped to a single run. The tree may borrow from
/// the scratch buffer (simd-json's tape does), so it carries the buffer's
/// lifetime.
pub trait Contender {
    /// Display name used in report lines and error logs.
    const NAME: &'static str;

    /// The library's parsed representation of a document, possibly
    /// borrowing from the scratch buffer it was parsed out of.
    type Tree<'a>;

    /// Parse the payload in `scratch`.
    ///
    /// The buffer is a private working copy: the adapter may mutate it
    /// freely (simd-json parses in place). On failure, returns the
    /// library's own diagnostic string.
    fn parse<'a>(&self, scratch: &'a mut [u8]) -> Result<Self::Tree<'a>, String>;

    /// Sum every numeric leaf of the tree, depth-first in document order.
    ///
    /// Numeric leaves are widened to f64; for arrays and objects only the
    /// element/member values are visited (never keys); strings, booleans
    /// and nulls contribute 0.0.
    fn accumulate(&self, tree: &Self::Tree<'_>) -> f64;
}
