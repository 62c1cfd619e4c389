//! Configuration for FlexID generator
//!
//! The bit widths and epoch are part of the identifier's wire format: IDs
//! minted under one configuration only decode correctly under the same one.

mod builder;

pub use builder::{
    FlexIdConfigBuilder, DEFAULT_EPOCH, DEFAULT_PARTITION_BITS, DEFAULT_SEQUENCE_BITS,
    MAX_FIELD_BITS,
};

use crate::error::FlexIdError;

/// Configuration for FlexID generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexIdConfig {
    epoch: i64,
    sequence_bits: u8,
    partition_bits: u8,
    timestamp_shift: u8,
    sequence_mask: i16,
    partition_mask: i16,
}

impl FlexIdConfig {
    /// Calculate mask with exactly `bits` low bits set.
    ///
    /// Fields are at most [`MAX_FIELD_BITS`] wide; larger `bits` are clamped
    /// to that width, giving `0x7FFF`.
    #[inline]
    pub const fn calculate_mask(bits: u8) -> i16 {
        let bits = if bits > MAX_FIELD_BITS {
            MAX_FIELD_BITS
        } else {
            bits
        };
        ((1i32 << bits) - 1) as i16
    }

    /// Create a validated configuration
    pub fn new(epoch: i64, sequence_bits: u8, partition_bits: u8) -> Result<Self, FlexIdError> {
        Ok(Self::builder()
            .epoch(epoch)
            .sequence_bits(sequence_bits)?
            .partition_bits(partition_bits)?
            .build())
    }

    const fn from_parts(epoch: i64, sequence_bits: u8, partition_bits: u8) -> Self {
        Self {
            epoch,
            sequence_bits,
            partition_bits,
            timestamp_shift: sequence_bits + partition_bits,
            sequence_mask: Self::calculate_mask(sequence_bits),
            partition_mask: Self::calculate_mask(partition_bits),
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: FlexIdConfigBuilder) -> Self {
        Self::from_parts(b.epoch, b.sequence_bits, b.partition_bits)
    }

    /// Create a new configuration builder
    pub fn builder() -> FlexIdConfigBuilder {
        FlexIdConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn partition_bits(&self) -> u8 {
        self.partition_bits
    }

    /// Shift applied to the millis segment
    #[inline(always)]
    pub const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub const fn sequence_mask(&self) -> i16 {
        self.sequence_mask
    }

    #[inline(always)]
    pub const fn partition_mask(&self) -> i16 {
        self.partition_mask
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> i16 {
        self.sequence_mask
    }

    #[inline(always)]
    pub const fn max_partition(&self) -> i16 {
        self.partition_mask
    }

    /// Pack the three segments into an ID.
    ///
    /// Sequence and partition are masked to their widths first. Wider values
    /// are truncated to their low bits without any error.
    #[inline(always)]
    pub(crate) const fn compose(&self, millis: i64, sequence: i16, partition: i16) -> i64 {
        (millis << self.timestamp_shift)
            | (((sequence & self.sequence_mask) as i64) << self.partition_bits)
            | ((partition & self.partition_mask) as i64)
    }
}

impl Default for FlexIdConfig {
    fn default() -> Self {
        Self::from_parts(DEFAULT_EPOCH, DEFAULT_SEQUENCE_BITS, DEFAULT_PARTITION_BITS)
    }
}
