//! # Shared Guaranteed Strings
//!
//! [`GuaranteedStr`] writes its content and flag separately, so a value
//! written from several threads needs a lock. [`SharedGuaranteed`] is that
//! lock: one `parking_lot::RwLock` per value, cloned handles share it.
//!
//! ```rust
//! use strguard::{SharedGuaranteed, StringFilter};
//!
//! let filter = StringFilter::from_pattern("[0-9]+").unwrap();
//! let shared = SharedGuaranteed::from(filter.guarantee_lenient(""));
//!
//! std::thread::scope(|s| {
//!     for n in 0..4 {
//!         let shared = shared.clone();
//!         s.spawn(move || shared.assign_string(n.to_string()).unwrap());
//!     }
//! });
//!
//! assert!(shared.is_initialized());
//! ```
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{error::GuaranteeError, guaranteed::GuaranteedStr};

/// A [`GuaranteedStr`] that can be read and written from many threads.
#[derive(Debug, Clone)]
pub struct SharedGuaranteed {
    inner: Arc<RwLock<GuaranteedStr>>,
}

impl From<GuaranteedStr> for SharedGuaranteed {
    fn from(value: GuaranteedStr) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }
}

impl SharedGuaranteed {
    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_initialized()
    }

    /// See [`GuaranteedStr::assign_string`].
    pub fn assign_string(&self, candidate: impl Into<String>) -> Result<(), GuaranteeError> {
        self.inner.write().assign_string(candidate)
    }

    /// See [`GuaranteedStr::assign`].
    pub fn assign(&self, src: &GuaranteedStr) -> Result<(), GuaranteeError> {
        self.inner.write().assign(src)
    }

    pub fn clone_string(&self) -> Result<String, GuaranteeError> {
        self.inner.read().clone_string()
    }

    pub fn clone_string_or_default(&self) -> String {
        self.inner.read().clone_string_or_default()
    }

    /// Independent copy of the current value.
    pub fn snapshot(&self) -> GuaranteedStr {
        self.inner.read().clone()
    }
}
