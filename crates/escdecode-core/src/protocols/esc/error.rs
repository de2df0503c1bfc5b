use thiserror::Error;

use super::parser::EscAction;
use crate::protocols::common::SpiLine;

/// Errors returned by ESC command decoding.
///
/// `Ignored` renders as an empty string: it marks packets suppressed by the
/// caller's ignore-set rather than a decoding problem.
///
/// # Examples
/// ```
/// use escdecode_core::EscError;
///
/// let err = EscError::InvalidAction { code: 1 };
/// assert!(err.to_string().contains("invalid ESC action"));
/// assert_eq!(EscError::Ignored { address: 0 }.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscError {
    #[error(
        "packet too short, may lose data during sampling: {line} has {actual} bytes, need {needed}"
    )]
    TooShort {
        line: SpiLine,
        needed: usize,
        actual: usize,
    },
    #[error("invalid ESC action {code:#05b} in MOSI data")]
    InvalidAction { code: u8 },
    #[error("unsupported ESC action: {action}")]
    UnsupportedAction { action: EscAction },
    #[error("")]
    Ignored { address: u16 },
}
