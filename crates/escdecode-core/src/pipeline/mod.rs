use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use serde::Serialize;
use time::Duration;
use tracing::{debug, trace};

use crate::protocols::esc::{EscPacket, parse_esc_packet};
use crate::registers::{RegisterLookup, RegisterTable};
use crate::source::{CsvSampleSource, SampleIter, SampleSource, SourceError};
use crate::{DecoderConfig, Sample};

mod aggregate;
mod assemble;
mod describe;
mod error;

pub use aggregate::{PacketAggregator, PacketGroup};
pub use assemble::{RawPacket, assemble_group};
pub use describe::{Description, Segment, describe_packet};
pub use error::{DecodeError, FailureKind, SampleError};

/// Outcome of decoding one packet group.
pub type PacketResult = Result<DecodedPacket, DecodeError>;

/// A packet that made it through every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedPacket {
    /// Capture time of the first sample of the packet.
    #[serde(rename = "time_ns", serialize_with = "serialize_nanos")]
    pub start: Duration,
    #[serde(flatten)]
    pub packet: EscPacket,
    #[serde(serialize_with = "serialize_display")]
    pub description: Description,
}

/// Lazy decoding pipeline: aggregation, assembly, ESC decoding, description.
///
/// Each pull decodes exactly one packet group. Per-packet failures are
/// yielded as `Ok(Err(_))` and never stop the sequence; an upstream source
/// error is yielded as `Err(_)` and ends it.
pub struct Pipeline<'r, I, L: ?Sized> {
    groups: PacketAggregator<I>,
    ignore_addrs: BTreeSet<u16>,
    registers: &'r L,
}

impl<'r, I, L: ?Sized> Pipeline<'r, I, L> {
    pub fn new(samples: I, config: &DecoderConfig, registers: &'r L) -> Self {
        Self {
            groups: PacketAggregator::new(samples, config.threshold()),
            ignore_addrs: config.ignore_addrs.clone(),
            registers,
        }
    }
}

impl<I, E, L> Iterator for Pipeline<'_, I, L>
where
    I: Iterator<Item = Result<Sample, E>>,
    L: RegisterLookup + ?Sized,
{
    type Item = Result<PacketResult, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let group = match self.groups.next()? {
            Ok(group) => group,
            Err(err) => return Some(Err(err)),
        };
        debug!(
            samples = group.len(),
            start_ns = %group.first_timestamp().whole_nanoseconds(),
            "packet group closed"
        );
        let result = decode_group(&group, &self.ignore_addrs, self.registers);
        if let Err(err) = &result {
            trace!(kind = ?err.kind(), reason = %err, "packet not decoded");
        }
        Some(Ok(result))
    }
}

/// Run assembly, ESC decoding and description for one group; the first
/// failing stage short-circuits the rest.
pub fn decode_group<L>(
    group: &PacketGroup,
    ignore_addrs: &BTreeSet<u16>,
    registers: &L,
) -> PacketResult
where
    L: RegisterLookup + ?Sized,
{
    let raw = assemble_group(group)?;
    let packet = parse_esc_packet(&raw, ignore_addrs)?;
    let description = describe_packet(&packet, registers)?;
    Ok(DecodedPacket {
        start: group.first_timestamp(),
        packet,
        description,
    })
}

/// Pipeline over a CSV capture file and the standard register table.
pub type CsvPipeline = Pipeline<'static, SampleIter<CsvSampleSource<File>>, RegisterTable>;

/// Open a CSV capture and return its lazy decoding pipeline.
pub fn decode_csv_file(path: &Path, config: &DecoderConfig) -> Result<CsvPipeline, SourceError> {
    let source = CsvSampleSource::open(path)?;
    Ok(Pipeline::new(
        source.into_samples(),
        config,
        RegisterTable::standard(),
    ))
}

/// Render one outcome as an unstyled line; suppressed packets render as
/// `None`.
///
/// # Examples
/// ```
/// use escdecode_core::{DecodeError, EscError, render_plain};
///
/// let ignored: escdecode_core::PacketResult =
///     Err(DecodeError::from(EscError::Ignored { address: 0 }));
/// assert_eq!(render_plain(&ignored), None);
///
/// let invalid: escdecode_core::PacketResult =
///     Err(DecodeError::from(EscError::InvalidAction { code: 1 }));
/// assert_eq!(
///     render_plain(&invalid).unwrap(),
///     "Failed to decode packet. Reason: invalid ESC action 0b001 in MOSI data"
/// );
/// ```
pub fn render_plain(result: &PacketResult) -> Option<String> {
    match result {
        Ok(decoded) => Some(decoded.description.to_string()),
        Err(err) if err.is_silent() => None,
        Err(err) => Some(format!("Failed to decode packet. Reason: {err}")),
    }
}

fn serialize_nanos<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let nanos = i64::try_from(value.whole_nanoseconds()).map_err(serde::ser::Error::custom)?;
    serializer.serialize_i64(nanos)
}

fn serialize_display<S: serde::Serializer>(
    value: &Description,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
