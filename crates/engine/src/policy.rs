//! Per-group eviction policy.

use tracing::{debug, trace};

use crate::host::{Host, ItemId, is_closable};
use crate::recency::RecencyTracker;

/// LRU cap enforcement for a single (window, group) pair.
///
/// Created lazily on the group's first activation and kept for the life of
/// the process. Capacity is fixed at construction from the startup
/// configuration.
#[derive(Debug)]
pub struct GroupPolicy {
	tracker: RecencyTracker,
	capacity: usize,
}

impl GroupPolicy {
	pub fn new(capacity: usize) -> Self {
		Self {
			tracker: RecencyTracker::new(),
			capacity,
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Recency state for this group.
	pub fn tracker(&self) -> &RecencyTracker {
		&self.tracker
	}

	/// Handles one genuine activation of `activated`.
	///
	/// Updates recency, then checks the active group's population against
	/// the cap. Returns the item to close when the group is over capacity
	/// and holds at least one closable item; the caller owns the actual
	/// close/refocus sequence. The tracker is pruned to the group's current
	/// items either way, minus the victim when one is selected.
	///
	/// When every open item is protected, the cap is deliberately left
	/// exceeded: a soft ceiling, never enforced by destroying unsaved work.
	pub fn add<H: Host + ?Sized>(&mut self, host: &H, activated: ItemId) -> Option<ItemId> {
		let window = host.active_window()?;
		let group = host.active_group(window);
		let items = host.items_in_group(window, group);

		self.tracker.touch(activated);
		let mut ranked = self.tracker.snapshot(&items);

		if items.len() <= self.capacity {
			self.tracker.prune(&items);
			return None;
		}

		// Ascending stamps, so the first closable match is the least
		// recently used among closable items.
		let victim = ranked
			.iter()
			.position(|&(item, _)| is_closable(host, item))
			.map(|i| ranked.remove(i).0);

		match victim {
			Some(item) => debug!(?item, ?group, "closing least recently used item"),
			None => trace!(?group, "over capacity but every item is protected"),
		}

		let keep: Vec<ItemId> = ranked.iter().map(|&(item, _)| item).collect();
		self.tracker.prune(&keep);
		victim
	}
}
