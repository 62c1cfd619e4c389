//! Core FlexID generator implementation
//!
//! Split into modules for testability:
//! - `time` - Wall-clock time utilities
//! - `generate` - ID generation call patterns

mod generate;
mod time;

use log::debug;

use crate::config::FlexIdConfig;
use crate::error::FlexIdError;
use crate::extractor::FlexIdExtractor;

use time::time_since_epoch;

/// FlexID generator
///
/// Identifiers are laid out most-significant-first as
/// ```text
/// | millis | sequence (sequence_bits) | partition (partition_bits) |
/// ```
///
/// `sequence` and `partition` are plain fields: auto-incrementing generation
/// takes `&mut self`, so sharing one generator across threads needs a lock
/// (see [`SharedFlexId`](crate::SharedFlexId)). Run one generator per
/// partition to mint IDs without coordination.
///
/// The configuration lives only in `extract`, so packing and extraction
/// always use the same layout.
#[derive(Debug, Clone)]
pub struct FlexId {
    /// Next sequence value, advanced by the auto-incrementing generators
    pub sequence: i16,
    /// Partition used when none is supplied
    pub partition: i16,

    pub extract: FlexIdExtractor,
}

impl FlexId {
    /// Create a generator with the given epoch and bit widths.
    ///
    /// Fails when either width exceeds 15 bits.
    pub fn new(epoch: i64, sequence_bits: u8, partition_bits: u8) -> Result<Self, FlexIdError> {
        let config = FlexIdConfig::new(epoch, sequence_bits, partition_bits)?;
        Ok(Self::with_config(config))
    }

    /// Create with custom configuration
    pub fn with_config(config: FlexIdConfig) -> Self {
        debug!(
            "flexid generator created: epoch={} sequence_bits={} partition_bits={}",
            config.epoch(),
            config.sequence_bits(),
            config.partition_bits()
        );
        Self {
            sequence: 0,
            partition: 0,
            extract: FlexIdExtractor::new(config),
        }
    }

    /// Configuration IDs are packed and extracted with
    #[inline(always)]
    pub fn config(&self) -> &FlexIdConfig {
        self.extract.config()
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        time_since_epoch(self.config().epoch())
    }

    /// Hand out the current sequence value and advance the counter
    #[inline(always)]
    pub(crate) fn next_sequence(&mut self) -> i16 {
        let sequence = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        sequence
    }
}

impl Default for FlexId {
    fn default() -> Self {
        Self::with_config(FlexIdConfig::default())
    }
}
