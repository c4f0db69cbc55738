//! Testdox-style transcripts for test runs.
//!
//! A test-running host drives a [`TranscriptReporter`] through the
//! [`TestListener`] callbacks. The reporter prints one line per test as it
//! finishes, grouped under the class under test and marked with an outcome
//! glyph and a bracketed runtime. Failure detail is indented beneath the
//! line. The reporter never runs tests itself and takes events strictly in
//! execution order.

pub mod color;
pub mod outcome;

mod label;
pub use label::*;

mod listener;
pub use listener::*;

mod reporter;
pub use reporter::*;
