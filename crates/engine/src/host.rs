//! Host seam: identities and the editor-facing trait.
//!
//! The engine never owns windowing state. Everything it knows about open
//! items arrives through [`Host`] queries, and the only way it changes the
//! world is the focus/close command pair.

/// Stable identity of an open item (tab) in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// Unique identifier for a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Identifier for a pane (tab group) within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// Composite key for one (window, group) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
	pub window: WindowId,
	pub group: GroupId,
}

/// Where the host currently shows an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	pub window: WindowId,
	pub group: GroupId,
	/// Position within the group's tab order.
	pub index: usize,
}

/// Editor-side surface the engine runs against.
///
/// Queries are read-only views into host state; the host stays authoritative
/// for every predicate. Commands are synchronous and return the
/// item-activated notifications the host fired while carrying them out, so
/// the caller can route them through its own suppression check before
/// anything else happens.
pub trait Host {
	/// Window that currently has input focus, if any.
	fn active_window(&self) -> Option<WindowId>;

	/// Group with input focus inside `window`.
	fn active_group(&self, window: WindowId) -> GroupId;

	/// Items open in `group`, in the host's tab order.
	fn items_in_group(&self, window: WindowId, group: GroupId) -> Vec<ItemId>;

	/// Current placement of `item`, or `None` while the host holds it in a
	/// transient state (mid-creation or mid-teardown).
	fn placement(&self, item: ItemId) -> Option<Placement>;

	/// True if `item` is the focused item of its window.
	fn is_active_item(&self, item: ItemId) -> bool;

	/// True if `item` sits in the preview slot rather than a real tab.
	fn is_preview(&self, item: ItemId) -> bool;

	/// True if `item` has unsaved modifications.
	fn is_dirty(&self, item: ItemId) -> bool;

	/// True if `item` is a scratch buffer with no file behind it.
	fn is_scratch(&self, item: ItemId) -> bool;

	/// True while the host is still loading `item`'s content.
	fn is_loading(&self, item: ItemId) -> bool;

	/// Gives `item` input focus.
	fn focus(&mut self, window: WindowId, item: ItemId) -> Vec<ItemId>;

	/// Closes the currently focused item of `window`.
	fn close_focused(&mut self, window: WindowId) -> Vec<ItemId>;
}

/// True if `item` holds unsaved work (dirty or scratch).
pub fn is_edited<H: Host + ?Sized>(host: &H, item: ItemId) -> bool {
	host.is_dirty(item) || host.is_scratch(item)
}

/// True when the engine may close `item` without destroying host state.
///
/// Edited buffers hold unsaved work, the preview slot is not a real tab,
/// the active item is what the user is looking at, and a loading item's
/// host state is undefined.
pub fn is_closable<H: Host + ?Sized>(host: &H, item: ItemId) -> bool {
	!(is_edited(host, item)
		|| host.is_preview(item)
		|| host.is_active_item(item)
		|| host.is_loading(item))
}
