//! Influencer filtering - predicate composition over the catalog.
//!
//! The pipeline is one-directional and synchronous: filter state
//! changes, [`apply`] recomputes the subset from the full catalog, the
//! renderer redraws from the subset. Every change is a complete
//! recomputation; catalogs are small enough that incremental updates
//! would buy nothing.

mod engine;
mod types;

pub use engine::{apply, FilterOutcome};
pub use types::{FilterState, FollowerTier, ParseTierError, QuickFilter, TierFilter};
