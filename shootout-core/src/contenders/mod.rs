// SPDX-License-Identifier: Apache-2.0

//! One adapter per JSON library.
//!
//! Fixed contender order everywhere in the harness:
//! {simd-json, serde_json, sonic-rs}.

pub mod serde;
pub mod simd;
pub mod sonic;

pub use serde::SerdeJson;
pub use simd::SimdJson;
pub use sonic::SonicRs;
