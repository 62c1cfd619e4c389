//! Opt-in synchronized access to a generator
//!
//! [`FlexId`] itself holds no lock. Wrap it in [`SharedFlexId`] when several
//! threads must draw from one sequence, or use [`global`] for a lazily
//! created process-wide instance with the default configuration.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::trace;
use once_cell::sync::Lazy;

use crate::config::FlexIdConfig;
use crate::extractor::FlexIdExtractor;
use crate::generator::FlexId;

static GLOBAL: Lazy<SharedFlexId> = Lazy::new(|| {
    trace!("initializing global flexid generator");
    SharedFlexId::new(FlexId::with_config(FlexIdConfig::default()))
});

/// Process-wide generator built from [`FlexIdConfig::default`] on first use
pub fn global() -> &'static SharedFlexId {
    &GLOBAL
}

/// A [`FlexId`] behind a mutex
#[derive(Debug)]
pub struct SharedFlexId {
    inner: Mutex<FlexId>,
    extract: FlexIdExtractor,
}

impl SharedFlexId {
    pub fn new(generator: FlexId) -> Self {
        Self {
            extract: generator.extract,
            inner: Mutex::new(generator),
        }
    }

    // The generator is two integers and never left half-updated, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, FlexId> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`FlexId::generate`]
    pub fn generate(&self) -> i64 {
        self.lock().generate()
    }

    /// See [`FlexId::generate_at`]
    pub fn generate_at(&self, millis: i64) -> i64 {
        self.lock().generate_at(millis)
    }

    /// See [`FlexId::generate_for_key`]
    pub fn generate_for_key(&self, key: &str) -> i64 {
        self.lock().generate_for_key(key)
    }

    /// Replace the stored partition
    pub fn set_partition(&self, partition: i16) {
        self.lock().partition = partition;
    }

    /// Extractor for IDs minted by this generator; needs no lock
    pub fn extractor(&self) -> &FlexIdExtractor {
        &self.extract
    }

    pub fn into_inner(self) -> FlexId {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_advances_sequence() {
        let shared = SharedFlexId::new(FlexId::new(0, 8, 8).unwrap());
        let a = shared.generate_at(100);
        let b = shared.generate_at(100);

        assert_eq!(shared.extractor().sequence(a), 0);
        assert_eq!(shared.extractor().sequence(b), 1);
        assert_eq!(shared.into_inner().sequence, 2);
    }

    #[test]
    fn test_set_partition() {
        let shared = SharedFlexId::new(FlexId::new(0, 8, 8).unwrap());
        shared.set_partition(0x2A);
        let id = shared.generate_at(1);
        assert_eq!(shared.extractor().partition(id, 0), 0x2A);
    }

    #[test]
    fn test_global_is_single_instance() {
        assert!(std::ptr::eq(global(), global()));
        assert_eq!(*global().extractor().config(), FlexIdConfig::default());
    }
}
