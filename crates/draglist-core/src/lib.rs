//! Runtime primitives shared by the draglist crates.
//!
//! Nothing here knows about lists: these are the identity-stable cells,
//! renderer-owned handles, provider stack and mount effect slot that the
//! list session is assembled from.

pub mod collections;
pub mod effect;
pub mod live;
pub mod local;

pub use collections::{key_map, KeyMap};
pub use effect::MountEffect;
pub use live::{LiveHandle, LiveRef};
pub use local::ProviderGuard;
