//! Activation routing and the reentrancy guard.

use rustc_hash::FxHashMap;
use tabcap_config::Config;
use tracing::{debug, trace};

use crate::host::{GroupKey, Host, ItemId};
use crate::policy::GroupPolicy;

/// The close/refocus pair the engine is currently executing.
///
/// Activations for either id are echoes of the engine's own commands and
/// must not feed back into the policy.
#[derive(Debug, Clone, Copy)]
struct SuppressionToken {
	closed: ItemId,
	focused: ItemId,
}

/// Entry point for host "item activated" notifications.
///
/// Owns the per-group policy registry and the suppression token, so
/// independent instances can coexist without sharing state (one per host
/// session, one per test). Policies are created lazily on a group's first
/// activation and never torn down.
#[derive(Debug)]
pub struct ActivationRouter {
	groups: FxHashMap<GroupKey, GroupPolicy>,
	capacity: usize,
	token: Option<SuppressionToken>,
}

impl ActivationRouter {
	/// Creates a router enforcing `capacity` open items per group.
	pub fn new(capacity: usize) -> Self {
		Self {
			groups: FxHashMap::default(),
			capacity,
			token: None,
		}
	}

	/// Creates a router from the startup configuration.
	pub fn from_config(config: &Config) -> Self {
		Self::new(config.open_item_limit)
	}

	/// Per-group capacity this router enforces.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of groups that have seen at least one activation.
	pub fn group_count(&self) -> usize {
		self.groups.len()
	}

	/// Policy instance for `key`, if that group has ever seen an activation.
	pub fn policy(&self, key: GroupKey) -> Option<&GroupPolicy> {
		self.groups.get(&key)
	}

	/// Handles one host activation notification.
	///
	/// Echoes of an in-flight close/refocus are dropped, as are activations
	/// for items the host no longer places anywhere; the host is
	/// authoritative and will emit fresh events for any state that still
	/// matters.
	pub fn on_activated<H: Host + ?Sized>(&mut self, host: &mut H, item: ItemId) {
		if self.suppresses(item) {
			trace!(?item, "ignoring activation echoed by in-flight close");
			return;
		}
		let Some(placement) = host.placement(item) else {
			return;
		};
		let key = GroupKey {
			window: placement.window,
			group: placement.group,
		};
		let capacity = self.capacity;
		let policy = self
			.groups
			.entry(key)
			.or_insert_with(|| GroupPolicy::new(capacity));
		if let Some(victim) = policy.add(host, item) {
			self.close_item(host, victim, item);
		}
	}

	fn suppresses(&self, item: ItemId) -> bool {
		self.token
			.is_some_and(|t| t.closed == item || t.focused == item)
	}

	/// Runs the focus-close-refocus sequence for `victim`.
	///
	/// The token stays armed for the whole sequence. Notifications the host
	/// fires while a command runs are routed back through [`on_activated`]
	/// immediately, so echoes of the pair are dropped while anything else
	/// (say, a neighbor the host focused after the close) is handled as a
	/// genuine activation.
	///
	/// [`on_activated`]: ActivationRouter::on_activated
	fn close_item<H: Host + ?Sized>(&mut self, host: &mut H, victim: ItemId, fallback: ItemId) {
		let Some(window) = host.placement(victim).map(|p| p.window) else {
			// Already gone; the host won the race.
			return;
		};
		debug!(?victim, ?fallback, "evicting item");
		self.token = Some(SuppressionToken {
			closed: victim,
			focused: fallback,
		});
		for fired in host.focus(window, victim) {
			self.on_activated(host, fired);
		}
		for fired in host.close_focused(window) {
			self.on_activated(host, fired);
		}
		for fired in host.focus(window, fallback) {
			self.on_activated(host, fired);
		}
		self.token = None;
	}
}
