#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Per-group LRU cap enforcement for open editor items.
//!
//! When a group's open-item count exceeds the configured limit, the engine
//! closes the least-recently-used item that can be closed safely: never one
//! that is active, edited, in the preview slot, or still loading. The host
//! editor owns windows, groups, and items; the engine observes them through
//! the [`Host`] trait and drives them with a focus/close command pair.
//!
//! ```text
//! host "item activated"
//!   └── ActivationRouter        // resolves (window, group), drops echoes
//!         └── GroupPolicy       // capacity check, victim selection
//!               └── RecencyTracker   // item -> last-activation stamp
//! ```
//!
//! The engine is synchronous and single-threaded: the host delivers one
//! activation at a time, and every host command completes before the next
//! line runs. The only reentrancy hazard is the host echoing the engine's
//! own close/refocus as fresh activations, which the router suppresses
//! while a close is in flight.

pub mod host;
pub mod policy;
pub mod recency;
pub mod router;

pub use host::{GroupId, GroupKey, Host, ItemId, Placement, WindowId, is_closable, is_edited};
pub use policy::GroupPolicy;
pub use recency::RecencyTracker;
pub use router::ActivationRouter;
