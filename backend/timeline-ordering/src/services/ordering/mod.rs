// ============================================
// Ordering Engine (時間線排序引擎)
// ============================================
//
// Mode Selector -> Exclusion Filter -> Classifier -> Uniqueness Layer
// -> Sequencer. Pure and synchronous; the engine only holds configuration
// so one instance can be shared across workers.

use crate::config::OrderingConfig;
use crate::error::{ConfigError, OrderingError, Result};
use crate::models::{Entry, RankedResult, RankingContext, RankingStats};
use crate::services::classifier::{rule_for, Buckets, Classifier};
use crate::services::exclusion::ExclusionFilter;
use crate::services::mode::{OrderingMode, RankRequest};
use crate::services::popularity::PopularityScorer;
use crate::services::predicates::Signals;
use crate::services::sequencer::{pagination_cursor, Sequencer};
use crate::services::uniqueness::UniquenessLayer;
use tracing::{info, warn};

pub struct OrderingEngine {
    config: OrderingConfig,
    uniqueness: UniquenessLayer,
}

impl Default for OrderingEngine {
    fn default() -> Self {
        let config = OrderingConfig::default();
        let uniqueness = UniquenessLayer::new(config.max_per_actor);
        Self { config, uniqueness }
    }
}

impl OrderingEngine {
    /// Build an engine from a validated configuration
    pub fn new(config: OrderingConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let uniqueness = UniquenessLayer::new(config.max_per_actor);
        Ok(Self { config, uniqueness })
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Rank one page of candidates for a viewer.
    ///
    /// `context` may be omitted only for logged-out requests.
    pub fn rank(
        &self,
        request: &RankRequest,
        entries: &[Entry],
        context: Option<&RankingContext>,
    ) -> Result<RankedResult> {
        let mode = request.mode();
        let fallback;
        let context = match (context, request.viewer_id) {
            // A logged-out request must not carry a viewer's context either
            (Some(ctx), requested) if ctx.viewer.viewer_id != requested => {
                warn!(
                    requested = ?requested,
                    context = ?ctx.viewer.viewer_id,
                    "Viewer context belongs to a different viewer"
                );
                return Err(OrderingError::ViewerMismatch {
                    requested,
                    context: ctx.viewer.viewer_id,
                });
            }
            (Some(ctx), _) => ctx,
            (None, _) if mode.requires_viewer() => {
                warn!(mode = %mode, "Viewer context missing for logged-in ordering");
                return Err(OrderingError::MissingViewerContext { mode });
            }
            (None, _) => {
                fallback = RankingContext::empty();
                &fallback
            }
        };

        let signals = Signals::new(context);
        let mut stats = RankingStats::new(mode, entries.len());

        let (kept, excluded) = ExclusionFilter::new(signals).apply(entries);
        stats.excluded_count = excluded;

        let ordered_entry_ids = match mode {
            OrderingMode::Legacy => kept.iter().map(|entry| entry.id.clone()).collect(),
            OrderingMode::LoggedOut => {
                self.classify_and_sequence(Classifier::logged_out(signals), &kept, &mut stats)
            }
            OrderingMode::ReplyAware => {
                self.classify_and_sequence(Classifier::new(signals, true), &kept, &mut stats)
            }
            OrderingMode::EngagementOnly => {
                self.classify_and_sequence(Classifier::new(signals, false), &kept, &mut stats)
            }
        };

        stats.output_count = ordered_entry_ids.len();

        info!(
            mode = %mode,
            input_count = stats.input_count,
            excluded_count = stats.excluded_count,
            capped_count = stats.capped_count,
            output_count = stats.output_count,
            "Timeline ordering completed"
        );

        Ok(RankedResult {
            ordered_entry_ids,
            pagination_cursor: pagination_cursor(entries),
            stats,
        })
    }

    fn classify_and_sequence(
        &self,
        classifier: Classifier<'_>,
        kept: &[&Entry],
        stats: &mut RankingStats,
    ) -> Vec<String> {
        let buckets = classifier.partition(kept);
        let mut limited: Buckets<'_> = Buckets::new();

        for (category, bucket) in buckets {
            stats.category_counts.insert(category, bucket.len());

            let bucket = if rule_for(category).capped {
                let (leveled, dropped) = self.uniqueness.level(bucket);
                stats.capped_count += dropped;
                leveled
            } else {
                bucket
            };
            limited.insert(category, bucket);
        }

        let scorer = PopularityScorer::new(
            classifier.signals(),
            self.config.popularity_tiebreak_divisor,
        );
        Sequencer::new(scorer).sequence(limited)
    }
}
