//! ESC SPI command decoding.
//!
//! Every SPI transfer starts with a two-byte command header on MOSI: a
//! 13-bit register address and a 3-bit action code. While the header is
//! clocked out, the ESC answers on MISO with the low bytes of its AL Event
//! Request register. The remaining bytes carry the register payload: on MOSI
//! for writes, on MISO for reads (after one wait-state byte for READ_WAIT).
//!
//! Payloads arrive most-significant byte first and are reversed into host
//! order. Only single-register accesses are decoded; NOP and address
//! extension commands are recognised but reported as unsupported.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::EscError;
pub use parser::{EscAction, EscPacket, parse_esc_packet};
