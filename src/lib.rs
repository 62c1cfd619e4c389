//! # FlexID
//!
//! A Rust implementation of a Snowflake-like ID generator with configurable
//! sequence and partition widths.
//!
//! Generate 64-bit signed identifiers that are:
//! - 📈 Time-sorted
//! - 🌐 Coordinator-free (one generator per partition)
//! - 🔧 Configurable (0-15 bits each for sequence and partition)
//!
//! Layout, most-significant-first:
//! ```text
//! | millis since epoch | sequence | partition |
//! ```
//!
//! Sequence and partition values wider than their fields are silently
//! truncated to their low bits. Changing the bit widths or the epoch makes
//! previously issued IDs undecodable, so treat them as part of the format.
//!
//! ```
//! use flexid::FlexId;
//!
//! let mut generator = FlexId::new(0, 10, 8).unwrap();
//! let id = generator.generate_exact(0x5A5A5A5A5, 0x25A, 0xA5);
//! assert_eq!(id, 0x16969696965AA5);
//! assert_eq!(generator.extract.decompose(id), (0x5A5A5A5A5, 0x25A, 0xA5));
//!
//! let first = generator.generate();
//! let second = generator.generate();
//! assert_eq!(generator.extract.sequence(second), generator.extract.sequence(first) + 1);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod hash;
pub mod shared;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{
    FlexIdConfig, FlexIdConfigBuilder, DEFAULT_EPOCH, DEFAULT_PARTITION_BITS,
    DEFAULT_SEQUENCE_BITS, MAX_FIELD_BITS,
};
pub use error::FlexIdError;
pub use extractor::FlexIdExtractor;
pub use generator::FlexId;
pub use hash::{hash_to_partition, PARTITION_DIGEST_OFFSET};
pub use shared::SharedFlexId;
