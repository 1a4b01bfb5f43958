//! Per-group recency bookkeeping.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::host::ItemId;

/// Last-activation stamps for one group's items.
///
/// Stamps come from a logical clock that ticks on every [`touch`], so
/// ordering is strict among tracked items. Items that were never activated
/// default to stamp `0` and sort before everything tracked.
///
/// The tracked set is always a subset of the group's open items: entries are
/// created on first activation and dropped by [`prune`] once the owning
/// policy has the group's current item list in hand.
///
/// [`touch`]: RecencyTracker::touch
/// [`prune`]: RecencyTracker::prune
#[derive(Debug, Default)]
pub struct RecencyTracker {
	stamps: FxHashMap<ItemId, u64>,
	clock: u64,
}

impl RecencyTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an activation of `item` at the next clock tick.
	pub fn touch(&mut self, item: ItemId) {
		self.clock += 1;
		self.stamps.insert(item, self.clock);
	}

	/// Pairs each of `items` with its stamp and sorts ascending.
	///
	/// The sort is stable, so untracked items (stamp 0) keep the host's tab
	/// order relative to each other.
	pub fn snapshot(&self, items: &[ItemId]) -> Vec<(ItemId, u64)> {
		let mut ranked: Vec<(ItemId, u64)> = items
			.iter()
			.map(|&item| (item, self.stamps.get(&item).copied().unwrap_or(0)))
			.collect();
		ranked.sort_by_key(|&(_, stamp)| stamp);
		ranked
	}

	/// Drops stamps for items not in `keep`.
	pub fn prune(&mut self, keep: &[ItemId]) {
		let keep: FxHashSet<ItemId> = keep.iter().copied().collect();
		self.stamps.retain(|item, _| keep.contains(item));
	}

	/// Stamp currently recorded for `item`, if it has ever been touched.
	pub fn stamp(&self, item: ItemId) -> Option<u64> {
		self.stamps.get(&item).copied()
	}

	/// Number of tracked items.
	pub fn len(&self) -> usize {
		self.stamps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stamps.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn item(n: u64) -> ItemId {
		ItemId(n)
	}

	#[test]
	fn touch_orders_items_by_recency() {
		let mut tracker = RecencyTracker::new();
		tracker.touch(item(1));
		tracker.touch(item(2));
		tracker.touch(item(1));

		let ranked = tracker.snapshot(&[item(1), item(2)]);
		assert_eq!(ranked, vec![(item(2), 2), (item(1), 3)]);
	}

	#[test]
	fn untracked_items_sort_first_in_host_order() {
		let mut tracker = RecencyTracker::new();
		tracker.touch(item(1));

		let ranked = tracker.snapshot(&[item(3), item(1), item(2)]);
		assert_eq!(ranked, vec![(item(3), 0), (item(2), 0), (item(1), 1)]);
	}

	#[test]
	fn prune_drops_departed_items() {
		let mut tracker = RecencyTracker::new();
		tracker.touch(item(1));
		tracker.touch(item(2));
		tracker.touch(item(3));

		tracker.prune(&[item(2)]);
		assert_eq!(tracker.len(), 1);
		assert_eq!(tracker.stamp(item(2)), Some(2));
		assert_eq!(tracker.stamp(item(1)), None);
	}

	#[test]
	fn clock_keeps_ticking_after_prune() {
		let mut tracker = RecencyTracker::new();
		tracker.touch(item(1));
		tracker.prune(&[]);
		tracker.touch(item(2));

		// A pruned entry must not make a later activation look older.
		assert_eq!(tracker.stamp(item(2)), Some(2));
	}
}
