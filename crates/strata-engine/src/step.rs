//! The fork/join simulation step.

use std::thread;
use std::time::Instant;

use strata_core::Label;
use strata_grid::Grid;
use strata_rules::{Behavior, RuleSet};

use crate::config::{ConfigError, EngineConfig};

/// Diagnostics for a single [`Engine::step`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Number of cells rewritten by a matching pattern.
    pub cells_updated: u64,
    /// Number of worker threads that participated.
    pub workers: usize,
    /// Wall-clock time for the step, in microseconds.
    pub elapsed_us: u64,
}

/// Advances grids generation by generation.
///
/// Each [`step`](Self::step) call:
///
/// 1. structurally copies the input grid (the default for unmatched
///    cells),
/// 2. splits the copy into contiguous z-slabs, one per worker,
/// 3. lets every worker scan its slab against the *immutable* input
///    grid and rewrite matched cells in its own slab only,
/// 4. joins all workers, reduces their match counters, and returns the
///    new grid.
///
/// Because matching reads only the prior generation and writes land in
/// disjoint slabs, the output is identical for any worker count.
///
/// # Examples
///
/// ```
/// use strata_core::Sentinels;
/// use strata_grid::{Dims, Grid};
/// use strata_rules::{Behavior, MatchCell, Pattern, RuleSet};
/// use strata_engine::{Engine, EngineConfig};
///
/// let grid = Grid::new(Dims::new(4, 4, 4).unwrap(), Sentinels::binary());
/// let rules: RuleSet =
///     [Pattern::new(0, 2, vec![MatchCell::Any; 8], Behavior::SetOne).unwrap()]
///         .into_iter()
///         .collect();
///
/// let engine = Engine::new(EngineConfig::default()).unwrap();
/// let (next, report) = engine.step(&grid, &rules);
/// assert_eq!(report.cells_updated, 64);
/// assert!(next.cells().iter().all(|c| c == next.sentinels().one()));
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    workers: usize,
}

impl Engine {
    /// Create an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            workers: config.resolve_workers()?,
        })
    }

    /// The configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run one synchronous update pass, returning the next generation
    /// and a [`StepReport`].
    ///
    /// The input grid is read-only throughout; callers replace their
    /// current grid with the returned one. Caller contract: every
    /// pattern in `rules` is smaller than every grid dimension (the
    /// toroidal wrap applies a single correction per axis).
    pub fn step(&self, grid: &Grid, rules: &RuleSet) -> (Grid, StepReport) {
        let started = Instant::now();
        let dims = grid.dims();
        let plane = dims.sx() as usize * dims.sy() as usize;

        // One writer per contiguous z-slab; slabs are whole z-planes,
        // so chunk boundaries never split a plane.
        let workers = self.workers.min(dims.sz() as usize).max(1);
        let slab_z = (dims.sz() as usize).div_ceil(workers);
        let slab_cells = slab_z * plane;
        // Rounding up the slab height can leave fewer slabs than
        // requested workers; report what actually ran.
        let slabs = (dims.sz() as usize).div_ceil(slab_z);

        let mut next = grid.clone();
        let (counter_tx, counter_rx) = crossbeam_channel::bounded::<u64>(workers);

        thread::scope(|scope| {
            for (slab, chunk) in next.cells_mut().chunks_mut(slab_cells).enumerate() {
                let counter_tx = counter_tx.clone();
                scope.spawn(move || {
                    let z_base = (slab * slab_z) as i32;
                    let z_count = (chunk.len() / plane) as i32;
                    let mut matched = 0u64;

                    for z_local in 0..z_count {
                        let z = z_base + z_local;
                        for y in 0..dims.sy() as i32 {
                            for x in 0..dims.sx() as i32 {
                                let Some(hit) = rules.first_match(grid, x, y, z) else {
                                    continue;
                                };
                                let index =
                                    (z_local as usize * dims.sy() as usize + y as usize)
                                        * dims.sx() as usize
                                        + x as usize;
                                chunk[index] = next_label(grid, hit.behavior(), x, y, z);
                                matched += 1;
                            }
                        }
                    }
                    let _ = counter_tx.send(matched);
                });
            }
        });
        drop(counter_tx);

        let cells_updated: u64 = counter_rx.try_iter().sum();
        let report = StepReport {
            cells_updated,
            workers: slabs,
            elapsed_us: started.elapsed().as_micros() as u64,
        };
        (next, report)
    }
}

/// The label a behavior writes at `(x, y, z)`, given the previous
/// generation. `Toggle` flips the classification of the *old* cell.
fn next_label(grid: &Grid, behavior: Behavior, x: i32, y: i32, z: i32) -> Label {
    let sentinels = grid.sentinels();
    match behavior {
        Behavior::SetZero => sentinels.zero().clone(),
        Behavior::SetOne => sentinels.one().clone(),
        Behavior::Toggle => sentinels
            .label_for(grid.classify_at(x, y, z).toggled())
            .clone(),
    }
}
