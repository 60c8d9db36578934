//! Match patterns and first-match rule sets.
//!
//! A [`Pattern`] is a cubic window of per-cell requirements plus a
//! rewrite [`Behavior`]. A [`RuleSet`] is an append-only ordered
//! sequence of patterns; [`RuleSet::first_match`] returns the earliest
//! pattern whose window fully agrees with the grid around a cell.
//!
//! Random pattern and grid generation take an explicit RNG so fixtures
//! are reproducible from a seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod pattern;
pub mod ruleset;

pub use generate::{randomize_grid, PatternSampler, PatternSamplerBuilder};
pub use pattern::{Behavior, MatchCell, Pattern, PatternError};
pub use ruleset::RuleSet;
