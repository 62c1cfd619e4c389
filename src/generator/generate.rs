//! ID generation logic
//!
//! Every call pattern packs the same way; they differ in which segments come
//! from the caller and whether the stored sequence advances.

use super::FlexId;
use crate::hash::hash_to_partition;

impl FlexId {
    /// Generate a FlexID from the wall clock, stored sequence and stored partition.
    ///
    /// Advances the stored sequence.
    #[inline]
    pub fn generate(&mut self) -> i64 {
        let millis = self.now_ms();
        self.generate_at(millis)
    }

    /// Generate a FlexID for the given millis (relative to the epoch).
    ///
    /// Advances the stored sequence.
    #[inline]
    pub fn generate_at(&mut self, millis: i64) -> i64 {
        let sequence = self.next_sequence();
        self.generate_exact(millis, sequence, self.partition)
    }

    /// Generate a FlexID with an explicit millis and sequence and the stored partition.
    ///
    /// `sequence` is packed as given. The stored sequence still advances but
    /// is not overwritten by `sequence`.
    #[inline]
    pub fn generate_with_sequence(&mut self, millis: i64, sequence: i16) -> i64 {
        self.next_sequence();
        self.generate_exact(millis, sequence, self.partition)
    }

    /// Generate a FlexID from fully explicit segments without touching state.
    ///
    /// Segments wider than their configured field are truncated to their low
    /// bits; truncation is not reported.
    #[inline(always)]
    pub fn generate_exact(&self, millis: i64, sequence: i16, partition: i16) -> i64 {
        self.config().compose(millis, sequence, partition)
    }

    /// Generate a FlexID from the wall clock whose partition is derived from `key`.
    ///
    /// Advances the stored sequence. The stored partition is left as is.
    pub fn generate_for_key(&mut self, key: &str) -> i64 {
        let millis = self.now_ms();
        let sequence = self.next_sequence();
        self.generate_exact(millis, sequence, hash_to_partition(key))
    }
}
