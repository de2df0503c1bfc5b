use thiserror::Error;

/// Errors returned by register bit-field decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("register {address:#06x} value {value:#x} exceeds its {width}-bit width")]
    WidthExceeded { address: u16, width: u32, value: u64 },
    #[error("register {address:#06x} payload of {len} bytes does not fit in 64 bits")]
    PayloadTooWide { address: u16, len: usize },
}
