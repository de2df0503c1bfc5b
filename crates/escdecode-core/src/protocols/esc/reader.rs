use std::ops::Range;

use super::error::EscError;
use super::layout;
use crate::protocols::common::SpiLine;
use crate::protocols::common::bytes::reversed;

pub struct EscReader<'a> {
    bytes: &'a [u8],
    line: SpiLine,
}

impl<'a> EscReader<'a> {
    pub fn new(bytes: &'a [u8], line: SpiLine) -> Self {
        Self { bytes, line }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), EscError> {
        if self.bytes.len() < needed {
            return Err(EscError::TooShort {
                line: self.line,
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], EscError> {
        self.bytes.get(range.clone()).ok_or(EscError::TooShort {
            line: self.line,
            needed: range.end,
            actual: self.bytes.len(),
        })
    }

    pub fn read_header(&self) -> Result<[u8; 2], EscError> {
        let bytes = self.read_slice(layout::HEADER_RANGE)?;
        Ok([bytes[0], bytes[1]])
    }

    /// Bytes in `range`, reversed into host order.
    pub fn read_reversed(&self, range: Range<usize>) -> Result<Vec<u8>, EscError> {
        self.read_slice(range).map(reversed)
    }

    /// Everything from `offset` on, reversed into host order. An offset past
    /// the end yields an empty payload.
    pub fn read_reversed_from(&self, offset: usize) -> Vec<u8> {
        self.bytes.get(offset..).map(reversed).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::EscReader;
    use crate::protocols::common::SpiLine;
    use crate::protocols::esc::error::EscError;

    #[test]
    fn header_requires_two_bytes() {
        let reader = EscReader::new(&[0xA2], SpiLine::Mosi);
        let err = reader.read_header().unwrap_err();
        assert_eq!(
            err,
            EscError::TooShort {
                line: SpiLine::Mosi,
                needed: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn reversed_from_past_end_is_empty() {
        let bytes = [1, 2];
        let reader = EscReader::new(&bytes, SpiLine::Miso);
        assert!(reader.read_reversed_from(2).is_empty());
        assert!(reader.read_reversed_from(3).is_empty());
    }

    #[test]
    fn reversed_range() {
        let bytes = [0x00, 0x01, 0x02];
        let reader = EscReader::new(&bytes, SpiLine::Miso);
        assert_eq!(reader.read_reversed(0..2).unwrap(), vec![0x01, 0x00]);
    }
}
