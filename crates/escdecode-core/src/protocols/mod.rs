//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: bit masks, offsets and ranges (source of truth)
//! - `reader`: safe byte access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; sources and the pipeline handle
//! file access and sequencing.

pub(crate) mod common;
pub mod esc;
