//! escdecode core library for offline decoding of ESC SPI captures.
//!
//! This crate implements the decoding pipeline used by the CLI: a sample
//! source feeds the packet aggregator, groups are assembled into raw byte
//! packets, the ESC protocol decoder (layout/reader/parser) extracts the
//! command, and the register describer renders one description per packet.
//! Every stage is a lazy, forward-only sequence; all I/O is isolated in
//! `source` modules and parsers are pure.
//!
//! Invariants:
//! - Output order equals input sample order; nothing is buffered beyond the
//!   open packet group.
//! - A failure affects exactly one packet; only source errors are fatal.
//! - Suppressed packets (ignored addresses) carry an empty reason and are
//!   rendered as silence.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use escdecode_core::{DecoderConfig, decode_csv_file, render_plain};
//!
//! let config = DecoderConfig::default();
//! for outcome in decode_csv_file(Path::new("capture.csv"), &config)? {
//!     if let Some(line) = render_plain(&outcome?) {
//!         println!("{line}");
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Duration;

mod pipeline;
mod protocols;
mod registers;
mod source;

pub use pipeline::{
    CsvPipeline, DecodeError, DecodedPacket, Description, FailureKind, PacketAggregator,
    PacketGroup, PacketResult, Pipeline, RawPacket, SampleError, Segment, assemble_group,
    decode_csv_file, decode_group, describe_packet, render_plain,
};
pub use protocols::common::SpiLine;
pub use protocols::esc::{EscAction, EscError, EscPacket, parse_esc_packet};
pub use registers::{
    AL_EVENT_REQUEST, BitField, FieldPart, FieldText, RegisterError, RegisterLookup, RegisterTable,
};
pub use source::{CsvSampleSource, SampleIter, SampleSource, SourceError};

/// Aggregation threshold used when no configuration overrides it.
pub const DEFAULT_THRESHOLD_US: i64 = 4;

/// One captured SPI transfer: a MISO/MOSI byte pair and its capture time.
///
/// Hex fields hold the raw cell text; an empty string marks a missing or
/// invalid capture.
///
/// # Examples
/// ```
/// use escdecode_core::Sample;
///
/// let sample = Sample::new("00", "A2", 1_000);
/// assert_eq!(sample.timestamp.whole_nanoseconds(), 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Device-to-host byte as hex text.
    pub miso: String,
    /// Host-to-device byte as hex text.
    pub mosi: String,
    /// Capture time relative to the start of the recording.
    pub timestamp: Duration,
}

impl Sample {
    pub fn new(miso: impl Into<String>, mosi: impl Into<String>, timestamp_ns: i64) -> Self {
        Self {
            miso: miso.into(),
            mosi: mosi.into(),
            timestamp: Duration::nanoseconds(timestamp_ns),
        }
    }
}

/// Decoder configuration consumed by the pipeline.
///
/// # Examples
/// ```
/// use escdecode_core::DecoderConfig;
///
/// let config: DecoderConfig = serde_json::from_str(r#"{"ignore_addrs": [0, 544]}"#)?;
/// assert_eq!(config.threshold_us, escdecode_core::DEFAULT_THRESHOLD_US);
/// assert!(config.ignore_addrs.contains(&0x0220));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum gap between two samples of the same packet, in microseconds.
    pub threshold_us: i64,
    /// Register addresses whose packets are decoded but not reported.
    pub ignore_addrs: BTreeSet<u16>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            threshold_us: DEFAULT_THRESHOLD_US,
            ignore_addrs: BTreeSet::new(),
        }
    }
}

impl DecoderConfig {
    /// Load a configuration from a JSON file; absent fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(ConfigOverrides::from_json_file(path)?.apply(Self::default()))
    }

    /// Aggregation threshold in the timestamp unit.
    pub fn threshold(&self) -> Duration {
        Duration::microseconds(self.threshold_us)
    }
}

/// Fields set explicitly by a config file or the command line.
///
/// # Examples
/// ```
/// use escdecode_core::{ConfigOverrides, DecoderConfig};
///
/// let file: ConfigOverrides = serde_json::from_str(r#"{"ignore_addrs": [0]}"#)?;
/// let base = DecoderConfig { threshold_us: 10, ..DecoderConfig::default() };
/// let config = file.apply(base);
/// assert_eq!(config.threshold_us, 10);
/// assert!(config.ignore_addrs.contains(&0));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub threshold_us: Option<i64>,
    pub ignore_addrs: Option<BTreeSet<u16>>,
}

impl ConfigOverrides {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(ConfigError::from)
    }

    /// Replace the fields of `base` that are set here.
    pub fn apply(self, base: DecoderConfig) -> DecoderConfig {
        DecoderConfig {
            threshold_us: self.threshold_us.unwrap_or(base.threshold_us),
            ignore_addrs: self.ignore_addrs.unwrap_or(base.ignore_addrs),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
