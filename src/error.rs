use thiserror::Error;

/// Represents errors that can occur during FlexID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlexIdError {
    /// Sequence width is wider than a field may be
    #[error("Sequence bits {bits} is invalid. Maximum allowed value is {max}")]
    InvalidSequenceBits { bits: u8, max: u8 },
    /// Partition width is wider than a field may be
    #[error("Partition bits {bits} is invalid. Maximum allowed value is {max}")]
    InvalidPartitionBits { bits: u8, max: u8 },
}
