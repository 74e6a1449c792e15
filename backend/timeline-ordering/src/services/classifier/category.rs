use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery buckets in priority order. Declaration order is delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    OwnUnseen,
    OwnUnseenReply,
    OwnNewReplyJoined,
    OwnNewReply,
    RepliedNewReplyJoined,
    RepliedNewReply,
    ContributedActorUnseenJoined,
    ContributedActorUnseen,
    ContributedVideoNewReplyJoined,
    ContributedVideoNewReply,
    ContributedReplyNewReplyJoined,
    ContributedReplyNewReply,
    ContributedActorNewReplyJoined,
    ContributedActorNewReply,
    FollowedUnseenJoined,
    FollowedUnseen,
    JoinedUnseenNewReply,
    JoinedUnseen,
    PopularNewReplyJoined,
    PopularNewReply,
    Unseen,
    PopularJoined,
    NewReplyJoined,
    Joined,
    Popular,
    Remaining,
    // Logged-out split
    LoggedOutPopular,
    LoggedOutRemaining,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OwnUnseen => "own_unseen",
            Category::OwnUnseenReply => "own_unseen_reply",
            Category::OwnNewReplyJoined => "own_new_reply_joined",
            Category::OwnNewReply => "own_new_reply",
            Category::RepliedNewReplyJoined => "replied_new_reply_joined",
            Category::RepliedNewReply => "replied_new_reply",
            Category::ContributedActorUnseenJoined => "contributed_actor_unseen_joined",
            Category::ContributedActorUnseen => "contributed_actor_unseen",
            Category::ContributedVideoNewReplyJoined => "contributed_video_new_reply_joined",
            Category::ContributedVideoNewReply => "contributed_video_new_reply",
            Category::ContributedReplyNewReplyJoined => "contributed_reply_new_reply_joined",
            Category::ContributedReplyNewReply => "contributed_reply_new_reply",
            Category::ContributedActorNewReplyJoined => "contributed_actor_new_reply_joined",
            Category::ContributedActorNewReply => "contributed_actor_new_reply",
            Category::FollowedUnseenJoined => "followed_unseen_joined",
            Category::FollowedUnseen => "followed_unseen",
            Category::JoinedUnseenNewReply => "joined_unseen_new_reply",
            Category::JoinedUnseen => "joined_unseen",
            Category::PopularNewReplyJoined => "popular_new_reply_joined",
            Category::PopularNewReply => "popular_new_reply",
            Category::Unseen => "unseen",
            Category::PopularJoined => "popular_joined",
            Category::NewReplyJoined => "new_reply_joined",
            Category::Joined => "joined",
            Category::Popular => "popular",
            Category::Remaining => "remaining",
            Category::LoggedOutPopular => "logged_out_popular",
            Category::LoggedOutRemaining => "logged_out_remaining",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
