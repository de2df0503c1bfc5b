use std::ops::Range;

/// Command header length on MOSI (address + action).
pub const HEADER_LEN: usize = 2;
pub const HEADER_RANGE: Range<usize> = 0..2;
/// Header byte holding the action code in its low bits.
pub const ACTION_BYTE: usize = 1;
pub const ACTION_MASK: u8 = 0b111;
/// Shift applied to the little-endian header word to drop the action bits.
pub const ADDRESS_SHIFT: u32 = 3;

/// AL Event Request snapshot clocked out on MISO during the header.
pub const AL_EVENT_RANGE: Range<usize> = 0..2;

pub const READ_PAYLOAD_OFFSET: usize = 2;
/// READ_WAIT inserts one wait-state byte before the response.
pub const READ_WAIT_PAYLOAD_OFFSET: usize = 3;
pub const WRITE_PAYLOAD_OFFSET: usize = 2;

pub const ACTION_NOP: u8 = 0x0;
pub const ACTION_READ: u8 = 0x2;
pub const ACTION_READ_WAIT: u8 = 0x3;
pub const ACTION_WRITE: u8 = 0x4;
pub const ACTION_ADDR_EXT: u8 = 0x6;
