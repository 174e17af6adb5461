use std::fmt::Display;

use log::trace;

use super::VlqReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before the value starting at `pos` was terminated.
    IncompleteSequence { pos: usize },
    /// The value starting at `pos` does not fit in 32 bits.
    Overflow { pos: usize },
}

impl DecodeError {
    /// Byte offset at which the offending value starts.
    pub fn pos(&self) -> usize {
        match self {
            Self::IncompleteSequence { pos } | Self::Overflow { pos } => *pos,
        }
    }

    pub(crate) fn at(self, pos: usize) -> DecodeError {
        match self {
            Self::IncompleteSequence { .. } => Self::IncompleteSequence { pos },
            Self::Overflow { .. } => Self::Overflow { pos },
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteSequence { pos } => f.write_fmt(format_args!(
                "incomplete sequence: VLQ value starting at byte {} has no terminating byte",
                pos
            )),
            Self::Overflow { pos } => f.write_fmt(format_args!(
                "overflow: VLQ value starting at byte {} does not fit in 32 bits",
                pos
            )),
        }
    }
}

impl std::error::Error for DecodeError {}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decodes every value in `bytes`.
///
/// Fails if the last value is never terminated, even when its groups are all
/// zero. Nothing is returned for the values read before the failure.
pub fn decode(bytes: &[u8]) -> DecodeResult<Vec<u32>> {
    VlqReader::new(bytes, 0).read_all().map_err(|err| {
        trace!("failed to decode {} VLQ bytes: {}", bytes.len(), err);
        err
    })
}
