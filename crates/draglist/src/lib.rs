//! Shared state for a reorderable, virtualized list.
//!
//! A [`SessionSlot`] owned by the list instance hands out one
//! identity-stable [`ListSession`] holding:
//!
//! - the latest [`ListConfig`] and resolved [`SpringConfig`],
//! - the [`CellTable`] and [`KeyIndexTable`] row tables,
//! - live handles to the container, list surface and scroll surface.
//!
//! Drag and row-rendering code either receives the session directly or
//! looks it up with [`use_session`] inside a [`SessionProvider`].

pub mod cells;
pub mod config;
pub mod context;
pub mod session;
pub mod spring;
pub mod surface;

pub use cells::{CellData, CellTable, KeyIndexTable};
pub use config::{DragEndParams, ListConfig, RenderItemParams, ScrollResolutionPolicy};
pub use context::{try_use_session, use_session, SessionError, SessionProvider};
pub use session::{Lifecycle, ListSession, SessionSlot};
pub use spring::{SpringConfig, SpringOverride};
pub use surface::{reconcile_scroll_surface, ScrollResolution, SurfaceHost};

pub use draglist_core::{LiveHandle, LiveRef};
