use crate::models::Entry;
use crate::services::predicates::Signals;
use tracing::debug;

/// Popularity Scorer - 熱度打分
///
/// score = total_contributors + total_replies + pagination_key / divisor
///
/// The divisor keeps the pagination term below one engagement unit, so it
/// only breaks ties in favour of newer entries. Scores order entries inside
/// a category; they never decide membership.
#[derive(Debug, Clone, Copy)]
pub struct PopularityScorer<'a> {
    signals: Signals<'a>,
    tiebreak_divisor: f64,
}

impl<'a> PopularityScorer<'a> {
    pub fn new(signals: Signals<'a>, tiebreak_divisor: f64) -> Self {
        Self {
            signals,
            tiebreak_divisor,
        }
    }

    pub fn score(&self, entry: &Entry) -> f64 {
        let state = self.signals.engagement(&entry.subject_video_id);
        let engagement = state.total_contributors as f64 + state.total_replies as f64;

        engagement + entry.pagination_key as f64 / self.tiebreak_divisor
    }

    /// Stable descending sort; equal scores keep their prior order
    pub fn sort_desc(&self, entries: &mut [&Entry]) {
        let mut scored: Vec<(f64, &Entry)> = entries.iter().map(|e| (self.score(e), *e)).collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        debug!(count = scored.len(), "Popularity sort applied");

        for (slot, (_, entry)) in entries.iter_mut().zip(scored) {
            *slot = entry;
        }
    }
}
