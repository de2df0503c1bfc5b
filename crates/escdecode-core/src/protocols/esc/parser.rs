use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::error::EscError;
use super::layout;
use super::reader::EscReader;
use crate::pipeline::RawPacket;
use crate::protocols::common::SpiLine;
use crate::protocols::common::bytes::serialize_hex;

/// Action code carried in the low three bits of the command header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscAction {
    Nop,
    Read,
    ReadWait,
    Write,
    AddrExt,
}

impl EscAction {
    pub fn name(self) -> &'static str {
        match self {
            EscAction::Nop => "NOP",
            EscAction::Read => "READ",
            EscAction::ReadWait => "READ_WAIT",
            EscAction::Write => "WRITE",
            EscAction::AddrExt => "ADDR_EXT",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            EscAction::Nop => layout::ACTION_NOP,
            EscAction::Read => layout::ACTION_READ,
            EscAction::ReadWait => layout::ACTION_READ_WAIT,
            EscAction::Write => layout::ACTION_WRITE,
            EscAction::AddrExt => layout::ACTION_ADDR_EXT,
        }
    }
}

impl TryFrom<u8> for EscAction {
    type Error = EscError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            layout::ACTION_NOP => Ok(EscAction::Nop),
            layout::ACTION_READ => Ok(EscAction::Read),
            layout::ACTION_READ_WAIT => Ok(EscAction::ReadWait),
            layout::ACTION_WRITE => Ok(EscAction::Write),
            layout::ACTION_ADDR_EXT => Ok(EscAction::AddrExt),
            _ => Err(EscError::InvalidAction { code }),
        }
    }
}

impl fmt::Display for EscAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded ESC command.
///
/// `data` is only filled for writes and `response_value` only for reads;
/// both are in host byte order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EscPacket {
    pub action: EscAction,
    /// 13-bit register address.
    pub address: u16,
    #[serde(serialize_with = "serialize_hex")]
    pub data: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub response_value: Vec<u8>,
    /// AL Event Request low bytes sampled during the header.
    #[serde(serialize_with = "serialize_hex")]
    pub al_event: [u8; 2],
}

/// Decode one raw packet into an ESC command.
///
/// The length check and action validation run before the ignore-set lookup,
/// so a malformed header is reported even for ignored addresses.
pub fn parse_esc_packet(
    raw: &RawPacket,
    ignore_addrs: &BTreeSet<u16>,
) -> Result<EscPacket, EscError> {
    let mosi = EscReader::new(&raw.mosi, SpiLine::Mosi);
    let miso = EscReader::new(&raw.miso, SpiLine::Miso);
    mosi.require_len(layout::HEADER_LEN)?;

    let header = mosi.read_header()?;
    let action = EscAction::try_from(header[layout::ACTION_BYTE] & layout::ACTION_MASK)?;
    let address = u16::from_le_bytes(header) >> layout::ADDRESS_SHIFT;
    if ignore_addrs.contains(&address) {
        return Err(EscError::Ignored { address });
    }

    let snapshot = miso.read_reversed(layout::AL_EVENT_RANGE)?;
    let al_event = [snapshot[0], snapshot[1]];

    let (data, response_value) = match action {
        EscAction::Read => (Vec::new(), miso.read_reversed_from(layout::READ_PAYLOAD_OFFSET)),
        EscAction::ReadWait => (
            Vec::new(),
            miso.read_reversed_from(layout::READ_WAIT_PAYLOAD_OFFSET),
        ),
        EscAction::Write => (mosi.read_reversed_from(layout::WRITE_PAYLOAD_OFFSET), Vec::new()),
        EscAction::Nop | EscAction::AddrExt => {
            return Err(EscError::UnsupportedAction { action });
        }
    };

    Ok(EscPacket {
        action,
        address,
        data,
        response_value,
        al_event,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{EscAction, parse_esc_packet};
    use crate::pipeline::RawPacket;
    use crate::protocols::common::SpiLine;
    use crate::protocols::esc::error::EscError;

    fn raw(miso: &[u8], mosi: &[u8]) -> RawPacket {
        RawPacket {
            miso: miso.to_vec(),
            mosi: mosi.to_vec(),
        }
    }

    fn no_ignores() -> BTreeSet<u16> {
        BTreeSet::new()
    }

    #[test]
    fn header_is_little_endian_with_action_in_second_byte() {
        let packet = parse_esc_packet(&raw(&[0, 0], &[0xAA, 0x34]), &no_ignores()).unwrap();
        assert_eq!(packet.action, EscAction::Write);
        assert_eq!(packet.address, 0x0695);
        assert!(packet.data.is_empty());
        assert!(packet.response_value.is_empty());
    }

    #[test]
    fn write_payload_is_reversed() {
        let packet = parse_esc_packet(
            &raw(&[0, 0, 0, 0], &[0x00, 0x7C, 0x12, 0x34]),
            &no_ignores(),
        )
        .unwrap();
        assert_eq!(packet.action, EscAction::Write);
        assert_eq!(packet.address, 0x0F80);
        assert_eq!(packet.data, vec![0x34, 0x12]);
        assert!(packet.response_value.is_empty());
    }

    #[test]
    fn read_wait_skips_wait_state_byte() {
        let packet = parse_esc_packet(
            &raw(&[0x01, 0x02, 0x03, 0x04, 0x05], &[0x00, 0x03, 0, 0, 0]),
            &no_ignores(),
        )
        .unwrap();
        assert_eq!(packet.action, EscAction::ReadWait);
        assert_eq!(packet.response_value, vec![0x05, 0x04]);
        assert_eq!(packet.al_event, [0x02, 0x01]);
        assert!(packet.data.is_empty());
    }

    #[test]
    fn read_response_starts_after_header() {
        let packet =
            parse_esc_packet(&raw(&[0, 0, 0x05, 0x06], &[0x00, 0x22, 0, 0]), &no_ignores())
                .unwrap();
        assert_eq!(packet.action, EscAction::Read);
        assert_eq!(packet.address, 0x0440);
        assert_eq!(packet.response_value, vec![0x06, 0x05]);
    }

    #[test]
    fn read_wait_without_payload_is_empty() {
        let packet =
            parse_esc_packet(&raw(&[0, 0], &[0x00, 0x03]), &no_ignores()).unwrap();
        assert!(packet.response_value.is_empty());
    }

    #[test]
    fn al_event_snapshot_is_byte_swapped() {
        let packet = parse_esc_packet(&raw(&[0x00, 0x01], &[0xA2, 0x24]), &no_ignores()).unwrap();
        assert_eq!(packet.al_event, [0x01, 0x00]);
        assert_eq!(packet.address, 0x0494);
    }

    #[test]
    fn short_packet_is_a_framing_error() {
        let err = parse_esc_packet(&raw(&[0xFF], &[0xFF]), &no_ignores()).unwrap_err();
        assert_eq!(
            err,
            EscError::TooShort {
                line: SpiLine::Mosi,
                needed: 2,
                actual: 1
            }
        );
        assert!(err.to_string().starts_with("packet too short"));
    }

    #[test]
    fn unknown_action_code_is_invalid() {
        for code in [1u8, 5, 7] {
            let err = parse_esc_packet(&raw(&[0, 0], &[0x00, code]), &no_ignores()).unwrap_err();
            assert_eq!(err, EscError::InvalidAction { code });
        }
    }

    #[test]
    fn nop_and_addr_ext_are_unsupported() {
        let err = parse_esc_packet(&raw(&[0, 0], &[0x00, 0x00]), &no_ignores()).unwrap_err();
        assert_eq!(
            err,
            EscError::UnsupportedAction {
                action: EscAction::Nop
            }
        );
        let err = parse_esc_packet(&raw(&[0, 0], &[0x00, 0x06]), &no_ignores()).unwrap_err();
        assert_eq!(err.to_string(), "unsupported ESC action: ADDR_EXT");
    }

    #[test]
    fn ignored_address_is_silent() {
        let ignore: BTreeSet<u16> = [0x0000].into_iter().collect();
        let err = parse_esc_packet(&raw(&[0, 0], &[0x00, 0x00]), &ignore).unwrap_err();
        assert_eq!(err, EscError::Ignored { address: 0 });
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn invalid_action_wins_over_ignore_set() {
        let ignore: BTreeSet<u16> = [0x0020].into_iter().collect();
        let err = parse_esc_packet(&raw(&[0, 0], &[0x00, 0x01]), &ignore).unwrap_err();
        assert_eq!(err, EscError::InvalidAction { code: 1 });
    }

    #[test]
    fn decoding_is_deterministic() {
        let input = raw(&[0x10, 0x20, 0x30], &[0x55, 0x2A, 0x01]);
        let first = parse_esc_packet(&input, &no_ignores());
        let second = parse_esc_packet(&input, &no_ignores());
        assert_eq!(first, second);
    }

    #[test]
    fn action_codes_round_trip() {
        for action in [
            EscAction::Nop,
            EscAction::Read,
            EscAction::ReadWait,
            EscAction::Write,
            EscAction::AddrExt,
        ] {
            assert_eq!(EscAction::try_from(action.code()), Ok(action));
        }
    }
}
