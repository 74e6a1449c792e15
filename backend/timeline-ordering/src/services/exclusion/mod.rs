use crate::models::Entry;
use crate::services::predicates::Signals;

/// Exclusion Filter - 屏蔽過濾
///
/// Drops entries whose actor is blocked (either direction) or muted by the
/// viewer. Operator-level mutes are overridden when the viewer follows, has
/// contributed to, or is the actor.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionFilter<'a> {
    signals: Signals<'a>,
}

impl<'a> ExclusionFilter<'a> {
    pub fn new(signals: Signals<'a>) -> Self {
        Self { signals }
    }

    pub fn keep(&self, entry: &Entry) -> bool {
        let actor = &entry.originating_actor_id;
        let viewer = &self.signals.context().viewer;

        if viewer.is_blocked(actor) || viewer.muted_by_viewer.contains(actor) {
            return false;
        }

        if viewer.globally_muted_actors.contains(actor) {
            return self.signals.is_mine(actor)
                || self.signals.contributed_to_actor(actor)
                || self.signals.follows_on_social_graph(actor);
        }

        true
    }

    /// Surviving entries in input order, plus how many were dropped
    pub fn apply<'e>(&self, entries: &'e [Entry]) -> (Vec<&'e Entry>, usize) {
        let kept: Vec<&Entry> = entries.iter().filter(|entry| self.keep(entry)).collect();
        let excluded = entries.len() - kept.len();
        (kept, excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActorRelationState, RankingContext, ViewerContext};
    use uuid::Uuid;

    fn entry_from(actor: Uuid) -> Entry {
        Entry {
            id: Uuid::new_v4().to_string(),
            originating_actor_id: actor,
            subject_video_id: "video".to_string(),
            pagination_key: 1,
            is_popular: true,
            last_reply_timestamp: 0,
        }
    }

    #[test]
    fn test_blocks_in_both_directions_and_mutes() {
        let blocked = Uuid::new_v4();
        let blocker = Uuid::new_v4();
        let muted = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mut viewer = ViewerContext::for_viewer(Uuid::new_v4());
        viewer.blocked_by_viewer.insert(blocked);
        viewer.blocked_viewer.insert(blocker);
        viewer.muted_by_viewer.insert(muted);
        // Following does not lift a personal block or mute
        viewer.follows_on_social_graph.insert(blocked);
        viewer.follows_on_social_graph.insert(muted);

        let context = RankingContext::new(viewer);
        let filter = ExclusionFilter::new(Signals::new(&context));

        assert!(!filter.keep(&entry_from(blocked)));
        assert!(!filter.keep(&entry_from(blocker)));
        assert!(!filter.keep(&entry_from(muted)));
        assert!(filter.keep(&entry_from(other)));
    }

    #[test]
    fn test_global_mute_override() {
        let viewer_id = Uuid::new_v4();
        let followed = Uuid::new_v4();
        let supported = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let mut viewer = ViewerContext::for_viewer(viewer_id);
        viewer.follows_on_social_graph.insert(followed);
        for actor in [viewer_id, followed, supported, stranger] {
            viewer.globally_muted_actors.insert(actor);
        }

        let context = RankingContext::new(viewer).with_relation(
            supported,
            ActorRelationState {
                last_contribution_to_actor_at: 42,
            },
        );
        let filter = ExclusionFilter::new(Signals::new(&context));

        assert!(filter.keep(&entry_from(viewer_id)));
        assert!(filter.keep(&entry_from(followed)));
        assert!(filter.keep(&entry_from(supported)));
        assert!(!filter.keep(&entry_from(stranger)));
    }

    #[test]
    fn test_apply_preserves_order_and_counts() {
        let muted = Uuid::new_v4();
        let mut viewer = ViewerContext::for_viewer(Uuid::new_v4());
        viewer.muted_by_viewer.insert(muted);
        let context = RankingContext::new(viewer);
        let filter = ExclusionFilter::new(Signals::new(&context));

        let a = entry_from(Uuid::new_v4());
        let b = entry_from(muted);
        let c = entry_from(Uuid::new_v4());
        let entries = vec![a.clone(), b, c.clone()];

        let (kept, excluded) = filter.apply(&entries);
        assert_eq!(excluded, 1);
        assert_eq!(kept, vec![&a, &c]);
    }
}
