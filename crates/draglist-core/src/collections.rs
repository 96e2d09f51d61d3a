//! Map aliases used by the row tables.
//!
//! Row keys are short strings produced by the caller's key extractor, so the
//! default build hashes them with `rustc-hash`. The `std-hash` feature falls
//! back to the SipHash maps from `std` for callers that feed untrusted keys.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;
}

/// Map keyed by a stable row key.
pub type KeyMap<V> = map::HashMap<String, V>;

/// Empty [`KeyMap`] with the configured hasher.
pub fn key_map<V>() -> KeyMap<V> {
    KeyMap::default()
}
