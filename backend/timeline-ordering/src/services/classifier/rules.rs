use super::Category;
use crate::models::Entry;
use crate::services::predicates::Signals;

pub type RulePredicate = fn(&Signals<'_>, &Entry) -> bool;

/// One row of the cascade: first matching rule wins
#[derive(Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub predicate: RulePredicate,
    /// Depends on new-reply or channel-joined signals; reply-aware mode only
    pub reply_gated: bool,
    /// Passes through the per-actor uniqueness limiter
    pub capped: bool,
    /// Re-sorted by popularity score before delivery
    pub popularity_sorted: bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("category", &self.category)
            .field("reply_gated", &self.reply_gated)
            .field("capped", &self.capped)
            .field("popularity_sorted", &self.popularity_sorted)
            .finish()
    }
}

const fn rule(
    category: Category,
    predicate: RulePredicate,
    reply_gated: bool,
    capped: bool,
    popularity_sorted: bool,
) -> Rule {
    Rule {
        category,
        predicate,
        reply_gated,
        capped,
        popularity_sorted,
    }
}

fn actor(entry: &Entry) -> &uuid::Uuid {
    &entry.originating_actor_id
}

fn video(entry: &Entry) -> &str {
    &entry.subject_video_id
}

fn new_reply_joined(s: &Signals<'_>, e: &Entry) -> bool {
    s.has_new_reply_by_others(e) && s.is_joined_channel_video(video(e))
}

fn unseen_joined(s: &Signals<'_>, e: &Entry) -> bool {
    s.is_unseen(video(e)) && s.is_joined_channel_video(video(e))
}

/// Full cascade in priority order. The last rule is total.
pub static POLICY: [Rule; 26] = [
    rule(
        Category::OwnUnseen,
        |s, e| s.is_mine(actor(e)) && s.is_unseen(video(e)),
        false,
        false,
        false,
    ),
    rule(
        Category::OwnUnseenReply,
        |s, e| s.has_not_seen_own_last_reply(video(e)),
        true,
        false,
        false,
    ),
    rule(
        Category::OwnNewReplyJoined,
        |s, e| s.is_mine(actor(e)) && new_reply_joined(s, e),
        true,
        false,
        false,
    ),
    rule(
        Category::OwnNewReply,
        |s, e| s.is_mine(actor(e)) && s.has_new_reply_by_others(e),
        true,
        false,
        false,
    ),
    rule(
        Category::RepliedNewReplyJoined,
        |s, e| s.viewer_has_replied_on(video(e)) && new_reply_joined(s, e),
        true,
        false,
        false,
    ),
    rule(
        Category::RepliedNewReply,
        |s, e| s.viewer_has_replied_on(video(e)) && s.has_new_reply_by_others(e),
        true,
        false,
        false,
    ),
    rule(
        Category::ContributedActorUnseenJoined,
        |s, e| s.contributed_to_actor(actor(e)) && unseen_joined(s, e),
        true,
        true,
        false,
    ),
    rule(
        Category::ContributedActorUnseen,
        |s, e| s.contributed_to_actor(actor(e)) && s.is_unseen(video(e)),
        false,
        true,
        false,
    ),
    rule(
        Category::ContributedVideoNewReplyJoined,
        |s, e| s.contributed_to_video(video(e)) && new_reply_joined(s, e),
        true,
        false,
        false,
    ),
    rule(
        Category::ContributedVideoNewReply,
        |s, e| s.contributed_to_video(video(e)) && s.has_new_reply_by_others(e),
        true,
        false,
        false,
    ),
    rule(
        Category::ContributedReplyNewReplyJoined,
        |s, e| s.contributed_to_reply_on(video(e)) && new_reply_joined(s, e),
        true,
        false,
        false,
    ),
    rule(
        Category::ContributedReplyNewReply,
        |s, e| s.contributed_to_reply_on(video(e)) && s.has_new_reply_by_others(e),
        true,
        false,
        false,
    ),
    rule(
        Category::ContributedActorNewReplyJoined,
        |s, e| s.contributed_to_actor(actor(e)) && new_reply_joined(s, e),
        true,
        true,
        false,
    ),
    rule(
        Category::ContributedActorNewReply,
        |s, e| s.contributed_to_actor(actor(e)) && s.has_new_reply_by_others(e),
        true,
        true,
        false,
    ),
    rule(
        Category::FollowedUnseenJoined,
        |s, e| s.follows_on_social_graph(actor(e)) && unseen_joined(s, e),
        true,
        true,
        false,
    ),
    rule(
        Category::FollowedUnseen,
        |s, e| s.follows_on_social_graph(actor(e)) && s.is_unseen(video(e)),
        false,
        true,
        false,
    ),
    rule(
        Category::JoinedUnseenNewReply,
        |s, e| unseen_joined(s, e) && s.has_new_reply_by_others(e),
        true,
        true,
        false,
    ),
    rule(Category::JoinedUnseen, unseen_joined, true, true, false),
    rule(
        Category::PopularNewReplyJoined,
        |s, e| s.is_popular(e) && new_reply_joined(s, e),
        true,
        false,
        true,
    ),
    rule(
        Category::PopularNewReply,
        |s, e| s.is_popular(e) && s.has_new_reply_by_others(e),
        true,
        false,
        true,
    ),
    rule(
        Category::Unseen,
        |s, e| s.is_unseen(video(e)),
        false,
        true,
        false,
    ),
    rule(
        Category::PopularJoined,
        |s, e| s.is_popular(e) && s.is_joined_channel_video(video(e)),
        true,
        false,
        true,
    ),
    rule(Category::NewReplyJoined, new_reply_joined, true, false, false),
    rule(
        Category::Joined,
        |s, e| s.is_joined_channel_video(video(e)),
        true,
        true,
        false,
    ),
    rule(Category::Popular, |s, e| s.is_popular(e), false, false, true),
    rule(Category::Remaining, |_, _| true, false, true, false),
];

/// Logged-out viewers only get a popular / everything-else split
pub static LOGGED_OUT_POLICY: [Rule; 2] = [
    rule(
        Category::LoggedOutPopular,
        |s, e| s.is_popular(e),
        false,
        false,
        true,
    ),
    rule(Category::LoggedOutRemaining, |_, _| true, false, false, true),
];
