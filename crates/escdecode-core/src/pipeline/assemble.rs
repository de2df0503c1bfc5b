use std::num::ParseIntError;

use super::PacketGroup;
use super::error::SampleError;
use crate::protocols::common::SpiLine;

/// MISO and MOSI bytes of one packet group, in sample order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPacket {
    pub miso: Vec<u8>,
    pub mosi: Vec<u8>,
}

/// Parse every sample of a group into bytes. One group yields exactly one
/// raw packet or one failure.
pub fn assemble_group(group: &PacketGroup) -> Result<RawPacket, SampleError> {
    let mut miso = Vec::with_capacity(group.len());
    let mut mosi = Vec::with_capacity(group.len());
    for (index, sample) in group.samples().iter().enumerate() {
        if sample.miso.trim().is_empty() || sample.mosi.trim().is_empty() {
            return Err(SampleError::EmptyField { index });
        }
        miso.push(parse_field(&sample.miso, SpiLine::Miso, index)?);
        mosi.push(parse_field(&sample.mosi, SpiLine::Mosi, index)?);
    }
    Ok(RawPacket { miso, mosi })
}

fn parse_field(value: &str, line: SpiLine, index: usize) -> Result<u8, SampleError> {
    parse_hex_byte(value).map_err(|source| SampleError::InvalidHex {
        line,
        index,
        value: value.to_string(),
        source,
    })
}

/// Parse one base-16 byte, with or without a `0x` prefix.
fn parse_hex_byte(value: &str) -> Result<u8, ParseIntError> {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u8::from_str_radix(digits, 16)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use time::Duration;

    use super::{RawPacket, assemble_group};
    use crate::Sample;
    use crate::pipeline::error::SampleError;
    use crate::pipeline::{PacketAggregator, PacketGroup};
    use crate::protocols::common::SpiLine;

    fn group(pairs: &[(&str, &str)]) -> PacketGroup {
        let samples = pairs
            .iter()
            .enumerate()
            .map(|(i, (miso, mosi))| Ok::<_, Infallible>(Sample::new(*miso, *mosi, i as i64)));
        let mut groups = PacketAggregator::new(samples, Duration::microseconds(10));
        groups.next().unwrap().unwrap()
    }

    #[test]
    fn bytes_follow_sample_order() {
        let raw = assemble_group(&group(&[("00", "A2"), ("01", "24"), ("ff", "0x7c")])).unwrap();
        assert_eq!(
            raw,
            RawPacket {
                miso: vec![0x00, 0x01, 0xFF],
                mosi: vec![0xA2, 0x24, 0x7C],
            }
        );
    }

    #[test]
    fn empty_field_fails_the_group() {
        let err = assemble_group(&group(&[("00", "A2"), ("", "24")])).unwrap_err();
        assert!(matches!(err, SampleError::EmptyField { index: 1 }));
        assert!(err.to_string().starts_with("empty MISO or MOSI value in group"));
    }

    #[test]
    fn malformed_hex_names_the_line() {
        let err = assemble_group(&group(&[("00", "G1")])).unwrap_err();
        match err {
            SampleError::InvalidHex {
                line, index, value, ..
            } => {
                assert_eq!(line, SpiLine::Mosi);
                assert_eq!(index, 0);
                assert_eq!(value, "G1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn value_above_one_byte_is_malformed() {
        let err = assemble_group(&group(&[("100", "00")])).unwrap_err();
        assert!(matches!(
            err,
            SampleError::InvalidHex {
                line: SpiLine::Miso,
                ..
            }
        ));
    }
}
