//! Parallel simulation stepping.
//!
//! [`Engine::step`] advances a grid by one synchronous generation:
//! every cell is tested against the rule set's first-match scan over
//! the *previous* grid, and matched cells are rewritten in a fresh
//! copy. Workers own disjoint slabs of the output buffer, so the step
//! needs no write locks and its result is independent of scheduling.
//!
//! The call blocks until every worker has finished; there is no
//! cancellation mid-step. Drivers that need to interrupt a run check
//! between steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod step;

pub use config::{ConfigError, EngineConfig};
pub use step::{Engine, StepReport};
