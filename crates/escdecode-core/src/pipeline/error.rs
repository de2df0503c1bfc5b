use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;

use crate::protocols::common::SpiLine;
use crate::protocols::esc::EscError;
use crate::registers::RegisterError;

/// Errors returned while turning samples into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("empty MISO or MOSI value in group (sample {index})")]
    EmptyField { index: usize },
    #[error("invalid {line} value '{value}' in group (sample {index}): {source}")]
    InvalidHex {
        line: SpiLine,
        index: usize,
        value: String,
        source: ParseIntError,
    },
}

/// Per-packet failure carried through the pipeline.
///
/// # Examples
/// ```
/// use escdecode_core::{DecodeError, EscError, FailureKind};
///
/// let err = DecodeError::from(EscError::Ignored { address: 0 });
/// assert_eq!(err.kind(), FailureKind::Suppressed);
/// assert!(err.is_silent());
/// assert_eq!(err.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Esc(#[from] EscError),
    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// Failure taxonomy reported to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Framing,
    MalformedSample,
    InvalidAction,
    UnsupportedAction,
    Suppressed,
    RegisterWidth,
}

impl DecodeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DecodeError::Sample(_) => FailureKind::MalformedSample,
            DecodeError::Esc(EscError::TooShort { .. }) => FailureKind::Framing,
            DecodeError::Esc(EscError::InvalidAction { .. }) => FailureKind::InvalidAction,
            DecodeError::Esc(EscError::UnsupportedAction { .. }) => FailureKind::UnsupportedAction,
            DecodeError::Esc(EscError::Ignored { .. }) => FailureKind::Suppressed,
            DecodeError::Register(_) => FailureKind::RegisterWidth,
        }
    }

    /// Suppressed packets produce no output at all.
    pub fn is_silent(&self) -> bool {
        self.kind() == FailureKind::Suppressed
    }
}
