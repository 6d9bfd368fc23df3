// SPDX-License-Identifier: Apache-2.0

//! JSON Parser Shootout
//!
//! A benchmark harness comparing parse and traversal latency of three Rust
//! JSON parsers against the same input files:
//!
//! - **simd-json**: SIMD tape parser, parses its input buffer in place
//! - **serde_json**: DOM parser producing `serde_json::Value`
//! - **sonic-rs**: SIMD parser with an arena-backed value representation
//!
//! Each parser gets a private duplicate of the loaded file, a timed parse,
//! and a timed full-tree traversal that sums every numeric leaf. The sum is
//! reported alongside the timings as a rough cross-parser correctness check.

pub mod contender;
pub mod contenders;
pub mod driver;
pub mod error;
pub mod input;
pub mod report;
pub mod runner;
pub mod timer;

// Re-export commonly used types
pub use contender::Contender;
pub use contenders::{SerdeJson, SimdJson, SonicRs};
pub use driver::run_shootout;
pub use error::{ShootoutError, ShootoutResult};
pub use input::RawDocument;
pub use report::{Reporter, TimingSample};
pub use runner::run_contender;
pub use timer::Timer;
