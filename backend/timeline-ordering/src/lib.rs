//! Timeline Ordering
//!
//! Turns a viewer's candidate timeline entries into one deterministic,
//! priority-ordered list of entry ids plus a pagination cursor.
//!
//! # Pipeline
//! 1. **Mode selection**: logged-out, legacy, reply-aware or engagement-only
//! 2. **Exclusion**: blocks, mutes and operator mutes
//! 3. **Classification**: first-match-wins rule cascade into categories
//! 4. **Uniqueness**: per-actor leveling inside capped categories
//! 5. **Sequencing**: priority concatenation with popularity sorting
//!
//! Fetching candidates and resolving the viewer's social facts happen
//! upstream; the engine never performs I/O.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::OrderingConfig;
pub use error::{ConfigError, OrderingError, Result};
pub use models::{
    ActorRelationState, EngagementState, Entry, RankedResult, RankingContext, RankingStats,
    ViewerContext,
};
pub use services::{Category, ClientCapabilities, OrderingEngine, OrderingMode, RankRequest};
