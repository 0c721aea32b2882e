use std::collections::HashSet;

use scrollfx_protocol::TargetId;

/// Registry of the targets a pipeline samples each tick.
///
/// Hosts add and remove targets while a pass may be in flight (a DOM mutation
/// observer firing mid-frame, a panel closing), so changes are queued and
/// applied at a well-defined point: [`TargetTracker::commit`], called by the
/// pipeline at the start of each tick. Within a tick the tracked set is
/// stable.
#[derive(Debug, Clone, Default)]
pub struct TargetTracker {
    tracked: Vec<TargetId>,
    pending_add: Vec<TargetId>,
    pending_remove: HashSet<TargetId>,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the tracker with an initial set, applied immediately.
    pub fn with_targets(targets: impl IntoIterator<Item = TargetId>) -> Self {
        let mut tracker = Self::new();
        for target in targets {
            tracker.push_tracked(target);
        }
        tracker
    }

    /// Queue a target for tracking from the next tick on. Re-adding an
    /// already tracked target is a no-op; adding after a queued removal
    /// cancels the removal.
    pub fn track(&mut self, target: TargetId) {
        self.pending_remove.remove(&target);
        if !self.tracked.contains(&target) && !self.pending_add.contains(&target) {
            self.pending_add.push(target);
        }
    }

    /// Queue a target for removal from the next tick on.
    pub fn untrack(&mut self, target: &TargetId) {
        self.pending_add.retain(|t| t != target);
        if self.tracked.contains(target) {
            self.pending_remove.insert(target.clone());
        }
    }

    /// Apply queued additions and removals. Called by the pipeline before
    /// sampling.
    pub fn commit(&mut self) {
        if !self.pending_remove.is_empty() {
            let removed = std::mem::take(&mut self.pending_remove);
            self.tracked.retain(|t| !removed.contains(t));
        }
        for target in self.pending_add.drain(..) {
            self.tracked.push(target);
        }
    }

    /// The committed set, in insertion order.
    pub fn tracked(&self) -> &[TargetId] {
        &self.tracked
    }

    pub fn is_tracked(&self, target: &TargetId) -> bool {
        self.tracked.contains(target)
    }

    fn push_tracked(&mut self, target: TargetId) {
        if !self.tracked.contains(&target) {
            self.tracked.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_apply_on_commit() {
        let mut tracker = TargetTracker::new();
        tracker.track(TargetId::from("hero-card"));
        assert!(tracker.tracked().is_empty());

        tracker.commit();
        assert_eq!(tracker.tracked(), &[TargetId::from("hero-card")]);

        tracker.untrack(&TargetId::from("hero-card"));
        assert!(tracker.is_tracked(&TargetId::from("hero-card")));
        tracker.commit();
        assert!(tracker.tracked().is_empty());
    }

    #[test]
    fn track_cancels_pending_removal() {
        let mut tracker = TargetTracker::with_targets([TargetId::from("promo-video")]);
        tracker.untrack(&TargetId::from("promo-video"));
        tracker.track(TargetId::from("promo-video"));
        tracker.commit();
        assert!(tracker.is_tracked(&TargetId::from("promo-video")));
    }

    #[test]
    fn duplicate_track_is_noop() {
        let mut tracker = TargetTracker::new();
        tracker.track(TargetId::from("a"));
        tracker.track(TargetId::from("a"));
        tracker.commit();
        tracker.track(TargetId::from("a"));
        tracker.commit();
        assert_eq!(tracker.tracked().len(), 1);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut tracker = TargetTracker::new();
        for name in ["c", "a", "b"] {
            tracker.track(TargetId::from(name));
        }
        tracker.commit();
        let names: Vec<&str> = tracker.tracked().iter().map(TargetId::as_str).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
