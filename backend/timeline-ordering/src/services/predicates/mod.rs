// ============================================
// Predicate Library (信號查詢)
// ============================================
//
// Boolean lookups over the viewer's context tables. Every missing key
// reads as the zero value: unseen, not contributed, not followed, not
// joined, not popular.

use crate::models::{ActorRelationState, EngagementState, Entry, RankingContext};
use uuid::Uuid;

static EMPTY_ENGAGEMENT: EngagementState = EngagementState {
    last_seen_at: 0,
    last_reply_seen_at: 0,
    last_own_reply_at: 0,
    last_own_contribution_at: 0,
    last_reply_contribution_at: 0,
    total_contributors: 0,
    total_replies: 0,
    channel_ids: Vec::new(),
};

static EMPTY_RELATION: ActorRelationState = ActorRelationState {
    last_contribution_to_actor_at: 0,
};

/// Borrowed view over one call's context; shared by the classifier and scorer
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    context: &'a RankingContext,
}

impl<'a> Signals<'a> {
    pub fn new(context: &'a RankingContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &'a RankingContext {
        self.context
    }

    pub fn engagement(&self, video_id: &str) -> &'a EngagementState {
        self.context
            .engagement
            .get(video_id)
            .unwrap_or(&EMPTY_ENGAGEMENT)
    }

    pub fn relation(&self, actor_id: &Uuid) -> &'a ActorRelationState {
        self.context
            .relations
            .get(actor_id)
            .unwrap_or(&EMPTY_RELATION)
    }

    /// Neither the video nor its replies have ever been seen
    pub fn is_unseen(&self, video_id: &str) -> bool {
        let state = self.engagement(video_id);
        state.last_seen_at <= 0 && state.last_reply_seen_at <= 0
    }

    pub fn is_mine(&self, actor_id: &Uuid) -> bool {
        self.context.viewer.viewer_id.as_ref() == Some(actor_id)
    }

    /// A reply newer than anything the viewer has seen or written on the video
    pub fn has_new_reply_by_others(&self, entry: &Entry) -> bool {
        let state = self.engagement(&entry.subject_video_id);
        let last_seen = state.last_seen_at.max(state.last_reply_seen_at);

        entry.last_reply_timestamp > 0
            && entry.last_reply_timestamp > last_seen
            && entry.last_reply_timestamp > state.last_own_reply_at
    }

    pub fn viewer_has_replied_on(&self, video_id: &str) -> bool {
        self.engagement(video_id).last_own_reply_at > 0
    }

    pub fn has_not_seen_own_last_reply(&self, video_id: &str) -> bool {
        let state = self.engagement(video_id);
        state.last_own_reply_at > 0 && state.last_own_reply_at > state.last_seen_at
    }

    pub fn contributed_to_actor(&self, actor_id: &Uuid) -> bool {
        self.relation(actor_id).last_contribution_to_actor_at > 0
    }

    pub fn contributed_to_video(&self, video_id: &str) -> bool {
        self.engagement(video_id).last_own_contribution_at > 0
    }

    pub fn contributed_to_reply_on(&self, video_id: &str) -> bool {
        self.engagement(video_id).last_reply_contribution_at > 0
    }

    pub fn follows_on_social_graph(&self, actor_id: &Uuid) -> bool {
        self.context.viewer.follows_on_social_graph.contains(actor_id)
    }

    /// Any of the video's channels is one the viewer joined
    pub fn is_joined_channel_video(&self, video_id: &str) -> bool {
        let joined = &self.context.viewer.joined_channels;
        if joined.is_empty() {
            return false;
        }
        self.engagement(video_id)
            .channel_ids
            .iter()
            .any(|channel_id| joined.contains(channel_id))
    }

    pub fn is_popular(&self, entry: &Entry) -> bool {
        entry.is_popular
    }
}
