pub(crate) mod bytes;

use std::fmt;

use serde::Serialize;

/// SPI data line a byte was sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpiLine {
    Miso,
    Mosi,
}

impl fmt::Display for SpiLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiLine::Miso => f.write_str("MISO"),
            SpiLine::Mosi => f.write_str("MOSI"),
        }
    }
}
