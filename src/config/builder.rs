//! FlexIdConfig builder for constructing configuration

use super::FlexIdConfig;
use crate::error::FlexIdError;

/// Widest sequence or partition field, in bits
pub const MAX_FIELD_BITS: u8 = 15;

/// Default configuration values
pub const DEFAULT_SEQUENCE_BITS: u8 = 8;
pub const DEFAULT_PARTITION_BITS: u8 = 8;
pub const DEFAULT_EPOCH: i64 = 0; // Unix epoch

/// Builder for FlexIdConfig
#[derive(Debug)]
pub struct FlexIdConfigBuilder {
    pub(super) epoch: i64,
    pub(super) sequence_bits: u8,
    pub(super) partition_bits: u8,
}

impl FlexIdConfigBuilder {
    /// Create a new FlexIdConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            partition_bits: DEFAULT_PARTITION_BITS,
        }
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the number of bits for the sequence field (0-15)
    pub fn sequence_bits(mut self, bits: u8) -> Result<Self, FlexIdError> {
        if bits > MAX_FIELD_BITS {
            return Err(FlexIdError::InvalidSequenceBits {
                bits,
                max: MAX_FIELD_BITS,
            });
        }
        self.sequence_bits = bits;
        Ok(self)
    }

    /// Set the number of bits for the partition field (0-15)
    pub fn partition_bits(mut self, bits: u8) -> Result<Self, FlexIdError> {
        if bits > MAX_FIELD_BITS {
            return Err(FlexIdError::InvalidPartitionBits {
                bits,
                max: MAX_FIELD_BITS,
            });
        }
        self.partition_bits = bits;
        Ok(self)
    }

    /// Build the final FlexIdConfig
    pub fn build(self) -> FlexIdConfig {
        FlexIdConfig::from_builder(self)
    }
}

impl Default for FlexIdConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
