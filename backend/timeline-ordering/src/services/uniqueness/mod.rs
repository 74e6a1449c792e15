use crate::models::Entry;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Uniqueness Layer - 同作者限流
///
/// Leveling: each entry's level is how many entries from the same actor were
/// already seen in the bucket. Entries at level >= `max_per_actor` are
/// dropped. The bucket is rebuilt as level 0, then level 1, and so on.
///
/// Levels never grow, so once a level holds a single entry every later level
/// belongs to that same actor; the tail is flushed in one step.
/// The early exit is only a shortcut: output is identical to full leveling,
/// and it must not be turned into truncation.
pub struct UniquenessLayer {
    max_per_actor: usize,
}

impl Default for UniquenessLayer {
    fn default() -> Self {
        Self::new(5)
    }
}

impl UniquenessLayer {
    pub fn new(max_per_actor: usize) -> Self {
        Self {
            max_per_actor: max_per_actor.max(1),
        }
    }

    pub fn max_per_actor(&self) -> usize {
        self.max_per_actor
    }

    /// Returns the rebuilt bucket and the number of entries over quota
    pub fn level<'e>(&self, bucket: Vec<&'e Entry>) -> (Vec<&'e Entry>, usize) {
        if bucket.is_empty() {
            return (bucket, 0);
        }

        let input_len = bucket.len();
        let mut placed: HashMap<Uuid, usize> = HashMap::new();
        let mut levels: Vec<Vec<&Entry>> = vec![Vec::new(); self.max_per_actor];

        for entry in bucket {
            let count = placed.entry(entry.originating_actor_id).or_insert(0);
            if *count < self.max_per_actor {
                levels[*count].push(entry);
                *count += 1;
            }
        }

        let mut output: Vec<&Entry> = Vec::with_capacity(input_len);
        let mut levels = levels.into_iter();

        while let Some(level) = levels.next() {
            if level.is_empty() {
                break;
            }

            let single = level.len() == 1;
            output.extend(level);

            if single {
                output.extend(levels.by_ref().flatten());
                break;
            }
        }

        let dropped = input_len - output.len();
        if dropped > 0 {
            debug!(
                dropped = dropped,
                max_per_actor = self.max_per_actor,
                "Per-actor quota applied"
            );
        }

        (output, dropped)
    }
}
