pub mod classifier;
pub mod exclusion;
pub mod mode;
pub mod ordering;
pub mod popularity;
pub mod predicates;
pub mod sequencer;
pub mod uniqueness;

pub use classifier::{Category, Classifier};
pub use exclusion::ExclusionFilter;
pub use mode::{ClientCapabilities, OrderingMode, RankRequest};
pub use ordering::OrderingEngine;
pub use popularity::PopularityScorer;
pub use predicates::Signals;
pub use sequencer::Sequencer;
pub use uniqueness::UniquenessLayer;
