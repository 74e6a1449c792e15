use crate::services::classifier::Category;
use crate::services::mode::OrderingMode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

/// Subject video identifier (the content an entry is about)
pub type VideoId = String;

/// One candidate timeline item, already fetched by the feed-assembly service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: String,
    pub originating_actor_id: Uuid,
    pub subject_video_id: VideoId,
    /// Monotonic ordering value (timestamp-derived)
    pub pagination_key: i64,
    /// Precomputed upstream
    #[serde(default)]
    pub is_popular: bool,
    /// 0 when the video has no replies
    #[serde(default)]
    pub last_reply_timestamp: i64,
}

/// Social facts about the viewer, resolved by collaborators before ranking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerContext {
    /// `None` for logged-out viewers
    pub viewer_id: Option<Uuid>,
    #[serde(default)]
    pub blocked_by_viewer: HashSet<Uuid>,
    #[serde(default)]
    pub blocked_viewer: HashSet<Uuid>,
    #[serde(default)]
    pub muted_by_viewer: HashSet<Uuid>,
    /// Operator-level mutes
    #[serde(default)]
    pub globally_muted_actors: HashSet<Uuid>,
    #[serde(default)]
    pub follows_on_social_graph: HashSet<Uuid>,
    #[serde(default)]
    pub joined_channels: HashSet<Uuid>,
}

impl ViewerContext {
    pub fn for_viewer(viewer_id: Uuid) -> Self {
        Self {
            viewer_id: Some(viewer_id),
            ..Default::default()
        }
    }

    /// Block in either direction
    pub fn is_blocked(&self, actor_id: &Uuid) -> bool {
        self.blocked_by_viewer.contains(actor_id) || self.blocked_viewer.contains(actor_id)
    }
}

/// Viewer's engagement with one subject video. Timestamps are 0 when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngagementState {
    pub last_seen_at: i64,
    pub last_reply_seen_at: i64,
    pub last_own_reply_at: i64,
    pub last_own_contribution_at: i64,
    pub last_reply_contribution_at: i64,
    pub total_contributors: u64,
    pub total_replies: u64,
    pub channel_ids: Vec<Uuid>,
}

/// Viewer -> actor relation facts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActorRelationState {
    pub last_contribution_to_actor_at: i64,
}

/// Read-only snapshot of everything the engine consults for one call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingContext {
    pub viewer: ViewerContext,
    #[serde(default)]
    pub engagement: HashMap<VideoId, EngagementState>,
    #[serde(default)]
    pub relations: HashMap<Uuid, ActorRelationState>,
}

impl RankingContext {
    /// Context used for logged-out calls that supply none
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(viewer: ViewerContext) -> Self {
        Self {
            viewer,
            ..Default::default()
        }
    }

    pub fn with_engagement(mut self, video_id: impl Into<VideoId>, state: EngagementState) -> Self {
        self.engagement.insert(video_id.into(), state);
        self
    }

    pub fn with_relation(mut self, actor_id: Uuid, state: ActorRelationState) -> Self {
        self.relations.insert(actor_id, state);
        self
    }
}

/// Engine output handed back to the feed-assembly service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    pub ordered_entry_ids: Vec<String>,
    /// `pagination_key` of the last input entry; `None` only for empty input
    pub pagination_cursor: Option<i64>,
    pub stats: RankingStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingStats {
    pub mode: OrderingMode,
    pub input_count: usize,
    pub excluded_count: usize,
    /// Entries removed by the per-actor quota
    pub capped_count: usize,
    pub output_count: usize,
    pub category_counts: BTreeMap<Category, usize>,
}

impl RankingStats {
    pub fn new(mode: OrderingMode, input_count: usize) -> Self {
        Self {
            mode,
            input_count,
            excluded_count: 0,
            capped_count: 0,
            output_count: 0,
            category_counts: BTreeMap::new(),
        }
    }
}
