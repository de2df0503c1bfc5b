//! CSV source implementation.
//!
//! This module provides a `SampleSource` backed by a logic-analyzer CSV
//! export. It handles file I/O and row parsing, emitting one sample per row
//! for the decoding pipeline.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::CsvSampleSource;
