//! Strata: a 3D voxel cellular automaton with pattern-replacement
//! rules and XRAW export.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Strata sub-crates. For most users, adding `strata` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use strata::prelude::*;
//!
//! // A 16x16x16 toroidal grid with the conventional sentinel pair,
//! // seeded with a 30% fill of One cells.
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut grid = Grid::new(Dims::new(16, 16, 16).unwrap(), Sentinels::binary());
//! randomize_grid(&mut grid, &mut rng, 0.3);
//!
//! // Eight random 2- or 3-wide replacement patterns.
//! let sampler = PatternSampler::builder()
//!     .count(8)
//!     .size_range(2, 3)
//!     .build()
//!     .unwrap();
//! let rules: RuleSet = sampler.sample(&mut rng, 0).into_iter().collect();
//!
//! // Advance a few generations.
//! let engine = Engine::new(EngineConfig::default()).unwrap();
//! for _ in 0..4 {
//!     let (next, report) = engine.step(&grid, &rules);
//!     assert!(report.cells_updated as usize <= grid.dims().cell_count());
//!     grid = next;
//! }
//!
//! // Encode the final generation as an XRAW voxel artifact.
//! let table: ColorTable = [
//!     ColorDefinition::new("One", 200, 60, 60, 255),
//!     ColorDefinition::new("Zero", 0, 0, 0, 0),
//! ]
//! .into_iter()
//! .collect();
//! let (bytes, warnings) = encode(&grid, &table, grid.sentinels().zero()).unwrap();
//! assert_eq!(bytes.len(), 24 + 16 * 16 * 16 + 1024);
//! assert!(warnings.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Labels, binary classification, sentinels |
//! | [`grid`] | `strata-grid` | Dimensions, toroidal wrap, the dense grid |
//! | [`rules`] | `strata-rules` | Patterns, rule sets, seeded generation |
//! | [`engine`] | `strata-engine` | The parallel fork/join step |
//! | [`xraw`] | `strata-xraw` | XRAW encoding and file writing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Labels, binary classification, and sentinels (`strata-core`).
pub use strata_core as types;

/// Grid dimensions, toroidal wrap, and the dense labeled grid
/// (`strata-grid`).
pub use strata_grid as grid;

/// Match patterns, first-match rule sets, and seeded generation
/// (`strata-rules`).
pub use strata_rules as rules;

/// The parallel fork/join simulation step (`strata-engine`).
pub use strata_engine as engine;

/// XRAW voxel container encoding (`strata-xraw`).
pub use strata_xraw as xraw;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Labels and classification
    pub use strata_core::{BinaryState, Label, Sentinels};

    // Grid
    pub use strata_grid::{Dims, Grid, GridError};

    // Rules
    pub use strata_rules::{
        randomize_grid, Behavior, MatchCell, Pattern, PatternSampler, RuleSet,
    };

    // Engine
    pub use strata_engine::{Engine, EngineConfig, StepReport};

    // Codec
    pub use strata_xraw::{
        encode, encode_into, write_to_path, ColorDefinition, ColorTable, EncodeError,
        EncodeWarning,
    };
}
