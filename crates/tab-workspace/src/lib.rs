//! Tab Workspace library
//!
//! Multi-tab session state for a navigation-driven host application: an
//! ordered tab store with a recently-closed history, a keep-alive cache of
//! rendered views, a tab strip controller that turns pointer gestures into
//! store operations, and a binder that keeps tabs in step with navigation.
//!
//! Everything is synchronous and single-threaded. Observers subscribe to the
//! store's `tokio` broadcast channel; [`Workspace`] does this for the cache.

/// Tab data types shared by every module.
pub mod tab;

/// Session store: ordered tabs, active pointer and closed history.
pub mod store;

/// Snapshot storage backends and the persisted JSON format.
pub mod persist;

/// Keep-alive view cache and scroll write throttling.
pub mod cache;

/// Tab strip controller: render model, gestures and menus.
pub mod strip;

/// Route/tab binder and navigation menu.
pub mod binder;

/// Facade wiring store, cache, strip and binder for one host.
pub mod workspace;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// `tracing` subscriber setup.
pub mod logging;

pub use binder::{Bootstrap, Navigation, RouteBinder};
pub use cache::{CacheEntry, ScrollThrottle, ViewCache};
pub use persist::{FileStorage, MemoryStorage, NoopStorage, PersistError, SnapshotStorage};
pub use store::{StoreUpdate, TabChange, TabStore};
pub use strip::{ContextAction, StripOutcome, StripTarget, TabStrip};
pub use tab::{ClosedTab, Tab, TabId, TabPatch, TabSpec};
pub use workspace::Workspace;
