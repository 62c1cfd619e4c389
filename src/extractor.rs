use chrono::{DateTime, Utc};

use crate::config::FlexIdConfig;

/// FlexID component extractor
///
/// Extraction only reads the configuration, so it never touches generator
/// state and is safe to share across threads.
#[derive(Debug, Copy, Clone)]
pub struct FlexIdExtractor {
    config: FlexIdConfig,
}

impl FlexIdExtractor {
    /// Create a new FlexID extractor with the given configuration
    pub fn new(config: FlexIdConfig) -> Self {
        Self { config }
    }

    /// Extract the raw millis component, relative to the configured epoch
    #[inline(always)]
    pub fn millis(&self, id: i64) -> i64 {
        id >> self.config.timestamp_shift()
    }

    /// Extract the millis component adjusted by the epoch (Unix millis)
    #[inline(always)]
    pub fn unix_millis(&self, id: i64) -> i64 {
        self.millis(id).wrapping_add(self.config.epoch())
    }

    /// Extract the creation time of a FlexID
    ///
    /// Returns `None` when the instant is outside what `chrono` can represent.
    #[inline]
    pub fn timestamp(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis(id))
    }

    /// Extract sequence component from a FlexID
    #[inline(always)]
    pub fn sequence(&self, id: i64) -> i16 {
        ((id >> self.config.partition_bits()) as i16) & self.config.sequence_mask()
    }

    /// Extract partition component from a FlexID
    ///
    /// With `0 < bits < partition_bits` only the low `bits` of the partition
    /// are returned, mapping a large logical partition space onto fewer
    /// physical shards. Any other value returns the full configured width.
    #[inline(always)]
    pub fn partition(&self, id: i64, bits: u8) -> i16 {
        let mask = if bits > 0 && bits < self.config.partition_bits() {
            FlexIdConfig::calculate_mask(bits)
        } else {
            self.config.partition_mask()
        };
        (id as i16) & mask
    }

    /// Decompose FlexID into its components: raw millis, sequence and partition
    #[inline]
    pub fn decompose(&self, id: i64) -> (i64, i16, i16) {
        (self.millis(id), self.sequence(id), self.partition(id, 0))
    }

    /// Configuration this extractor decodes with
    #[inline(always)]
    pub fn config(&self) -> &FlexIdConfig {
        &self.config
    }
}
