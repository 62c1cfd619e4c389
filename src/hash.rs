//! Partition derivation from string keys
//!
//! A convenience for picking a stable partition for a key such as a username.
//! It makes no uniformity promise beyond what SHA-256 gives the sliced bytes.

use sha2::{Digest, Sha256};

/// Offset of the two digest bytes used as the partition value
pub const PARTITION_DIGEST_OFFSET: usize = 18;

/// Compute a partition value from `text`.
///
/// Takes bytes `[18..20]` of the SHA-256 digest of the UTF-8 text, reads them
/// big-endian and reinterprets the result as `i16`. Callers usually mask it
/// down to the configured partition width, which packing does anyway.
pub fn hash_to_partition(text: &str) -> i16 {
    let digest = Sha256::digest(text.as_bytes());
    let bytes = [
        digest[PARTITION_DIGEST_OFFSET],
        digest[PARTITION_DIGEST_OFFSET + 1],
    ];
    i16::from_be_bytes(bytes)
}
