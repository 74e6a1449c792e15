use crate::models::Entry;
use crate::services::classifier::{rule_for, Buckets};
use crate::services::popularity::PopularityScorer;

/// Sequencer - 合併輸出
///
/// Concatenates buckets in category priority order, popularity-sorting the
/// buckets tagged for it.
pub struct Sequencer<'a> {
    scorer: PopularityScorer<'a>,
}

impl<'a> Sequencer<'a> {
    pub fn new(scorer: PopularityScorer<'a>) -> Self {
        Self { scorer }
    }

    pub fn sequence(&self, buckets: Buckets<'_>) -> Vec<String> {
        let total: usize = buckets.values().map(Vec::len).sum();
        let mut ordered = Vec::with_capacity(total);

        for (category, mut bucket) in buckets {
            if rule_for(category).popularity_sorted {
                self.scorer.sort_desc(&mut bucket);
            }
            ordered.extend(bucket.into_iter().map(|entry| entry.id.clone()));
        }

        ordered
    }
}

/// Cursor is the last input entry's key, whatever happened to it during ranking
pub fn pagination_cursor(entries: &[Entry]) -> Option<i64> {
    entries.last().map(|entry| entry.pagination_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EngagementState, RankingContext};
    use crate::services::classifier::Category;
    use crate::services::predicates::Signals;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn entry(id: &str, key: i64) -> Entry {
        Entry {
            id: id.to_string(),
            originating_actor_id: Uuid::new_v4(),
            subject_video_id: id.to_string(),
            pagination_key: key,
            is_popular: true,
            last_reply_timestamp: 0,
        }
    }

    #[test]
    fn test_sequence_respects_priority_and_sorts_popular() {
        let context = RankingContext::empty()
            .with_engagement(
                "p-low",
                EngagementState {
                    total_contributors: 1,
                    ..Default::default()
                },
            )
            .with_engagement(
                "p-high",
                EngagementState {
                    total_replies: 10,
                    ..Default::default()
                },
            );
        let sequencer = Sequencer::new(PopularityScorer::new(Signals::new(&context), 1e13));

        let remaining = entry("rest", 1);
        let own = entry("own", 2);
        let p_low = entry("p-low", 3);
        let p_high = entry("p-high", 4);

        // Insertion order is irrelevant; categories define the order
        let mut buckets: Buckets<'_> = BTreeMap::new();
        buckets.insert(Category::Remaining, vec![&remaining]);
        buckets.insert(Category::Popular, vec![&p_low, &p_high]);
        buckets.insert(Category::OwnUnseen, vec![&own]);

        let ordered = sequencer.sequence(buckets);
        assert_eq!(ordered, vec!["own", "p-high", "p-low", "rest"]);
    }

    #[test]
    fn test_unsorted_bucket_keeps_order() {
        let context = RankingContext::empty().with_engagement(
            "b",
            EngagementState {
                total_contributors: 99,
                ..Default::default()
            },
        );
        let sequencer = Sequencer::new(PopularityScorer::new(Signals::new(&context), 1e13));

        let a = entry("a", 1);
        let b = entry("b", 2);
        let mut buckets: Buckets<'_> = BTreeMap::new();
        buckets.insert(Category::Unseen, vec![&a, &b]);

        assert_eq!(sequencer.sequence(buckets), vec!["a", "b"]);
    }

    #[test]
    fn test_pagination_cursor() {
        assert_eq!(pagination_cursor(&[]), None);
        assert_eq!(
            pagination_cursor(&[entry("new", 300), entry("old", 100)]),
            Some(100)
        );
    }
}
