// ============================================
// Classifier (級聯規則分類器)
// ============================================
//
// Assigns every surviving entry to exactly one category by walking an
// ordered rule table and stopping at the first match. Reply-gated rules
// are skipped when the client cannot surface replies; their candidates
// fall through to the next applicable rule.

pub mod category;
pub mod rules;

pub use category::Category;
pub use rules::{Rule, LOGGED_OUT_POLICY, POLICY};

use crate::models::Entry;
use crate::services::predicates::Signals;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-category entry lists, iterated in delivery priority order
pub type Buckets<'e> = BTreeMap<Category, Vec<&'e Entry>>;

pub struct Classifier<'a> {
    signals: Signals<'a>,
    rules: Vec<&'static Rule>,
}

impl<'a> Classifier<'a> {
    /// Full cascade; reply-gated rules only when `reply_aware`
    pub fn new(signals: Signals<'a>, reply_aware: bool) -> Self {
        let rules = POLICY
            .iter()
            .filter(|rule| reply_aware || !rule.reply_gated)
            .collect();
        Self { signals, rules }
    }

    pub fn logged_out(signals: Signals<'a>) -> Self {
        Self {
            signals,
            rules: LOGGED_OUT_POLICY.iter().collect(),
        }
    }

    pub fn signals(&self) -> Signals<'a> {
        self.signals
    }

    pub fn rules(&self) -> &[&'static Rule] {
        &self.rules
    }

    /// First matching rule, if any
    pub fn classify(&self, entry: &Entry) -> Option<&'static Rule> {
        self.rules
            .iter()
            .copied()
            .find(|rule| (rule.predicate)(&self.signals, entry))
    }

    /// Partition entries into buckets, keeping input order within each
    pub fn partition<'e>(&self, entries: &[&'e Entry]) -> Buckets<'e> {
        let mut buckets: Buckets<'e> = BTreeMap::new();

        for entry in entries {
            // The final rule of every policy is total
            if let Some(rule) = self.classify(entry) {
                buckets.entry(rule.category).or_default().push(*entry);
            }
        }

        for (category, bucket) in &buckets {
            debug!(category = %category, size = bucket.len(), "Bucket assembled");
        }

        buckets
    }
}

/// Static rule metadata for a category
pub fn rule_for(category: Category) -> &'static Rule {
    POLICY
        .iter()
        .chain(LOGGED_OUT_POLICY.iter())
        .find(|rule| rule.category == category)
        .unwrap_or(&POLICY[POLICY.len() - 1])
}
