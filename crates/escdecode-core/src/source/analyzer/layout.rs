pub const TIME_COLUMN: &str = "Time[ns]";
pub const MISO_COLUMN: &str = "0:SPI: MISO data";
pub const MOSI_COLUMN: &str = "0:SPI: MOSI data";
