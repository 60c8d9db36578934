//! Append-only ordered rule sets with first-match semantics.

use strata_grid::Grid;

use crate::pattern::Pattern;

/// An ordered collection of patterns, earliest first.
///
/// Priority is list order: [`first_match`](Self::first_match) returns
/// the first pattern that fully agrees, and later patterns are never
/// consulted once one matches. [`append`](Self::append) only ever adds
/// after existing entries — a rule set never reorders or removes, so
/// priorities are stable across extension.
///
/// Rule sets are read-only during a simulation step.
///
/// # Examples
///
/// ```
/// use strata_core::Sentinels;
/// use strata_grid::{Dims, Grid};
/// use strata_rules::{Behavior, MatchCell, Pattern, RuleSet};
///
/// let grid = Grid::new(Dims::new(4, 4, 4).unwrap(), Sentinels::binary());
///
/// let mut rules = RuleSet::new();
/// rules.append([
///     Pattern::new(0, 2, vec![MatchCell::Any; 8], Behavior::SetOne).unwrap(),
///     Pattern::new(1, 2, vec![MatchCell::Any; 8], Behavior::SetZero).unwrap(),
/// ]);
///
/// // Both match; the earlier entry wins.
/// let hit = rules.first_match(&grid, 0, 0, 0).unwrap();
/// assert_eq!(hit.id(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    patterns: Vec<Pattern>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate patterns after the existing entries.
    pub fn append(&mut self, patterns: impl IntoIterator<Item = Pattern>) {
        self.patterns.extend(patterns);
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the rule set holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate patterns in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// The highest-priority pattern matching at `(x, y, z)`, if any.
    ///
    /// Matching reads only `grid`; a cell with no match is left
    /// unchanged by the step that consulted this rule set.
    pub fn first_match(&self, grid: &Grid, x: i32, y: i32, z: i32) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.matches_at(grid, x, y, z))
    }
}

impl FromIterator<Pattern> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Behavior, MatchCell};
    use strata_core::{Label, Sentinels};
    use strata_grid::Dims;

    fn any_pattern(id: u32, behavior: Behavior) -> Pattern {
        Pattern::new(id, 2, vec![MatchCell::Any; 8], behavior).unwrap()
    }

    // ── Append/ordering tests ───────────────────────────────────

    #[test]
    fn append_preserves_existing_order() {
        let mut rules = RuleSet::new();
        rules.append([any_pattern(0, Behavior::SetOne), any_pattern(1, Behavior::SetZero)]);
        rules.append([any_pattern(2, Behavior::Toggle)]);
        let ids: Vec<u32> = rules.iter().map(Pattern::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    // ── First-match tests ───────────────────────────────────────

    #[test]
    fn earliest_matching_pattern_wins() {
        let grid = Grid::new(Dims::new(3, 3, 3).unwrap(), Sentinels::binary());
        let mut rules = RuleSet::new();
        // First pattern cannot match an all-zero grid; second and
        // third both can, and the second wins.
        rules.append([
            Pattern::new(0, 2, vec![MatchCell::One; 8], Behavior::SetZero).unwrap(),
            any_pattern(1, Behavior::SetOne),
            any_pattern(2, Behavior::Toggle),
        ]);
        assert_eq!(rules.first_match(&grid, 1, 1, 1).unwrap().id(), 1);
    }

    #[test]
    fn no_match_returns_none() {
        let grid = Grid::new(Dims::new(3, 3, 3).unwrap(), Sentinels::binary());
        let rules: RuleSet =
            [Pattern::new(0, 2, vec![MatchCell::One; 8], Behavior::SetZero).unwrap()]
                .into_iter()
                .collect();
        assert!(rules.first_match(&grid, 0, 0, 0).is_none());
    }

    #[test]
    fn match_position_matters() {
        let mut grid = Grid::new(Dims::new(4, 4, 4).unwrap(), Sentinels::binary());
        // A 2x2x2 block of One anchored at (1,1,1).
        for z in 1..3 {
            for y in 1..3 {
                for x in 1..3 {
                    grid.set(x, y, z, Label::new("One")).unwrap();
                }
            }
        }
        let rules: RuleSet =
            [Pattern::new(0, 2, vec![MatchCell::One; 8], Behavior::Toggle).unwrap()]
                .into_iter()
                .collect();
        assert!(rules.first_match(&grid, 1, 1, 1).is_some());
        assert!(rules.first_match(&grid, 0, 0, 0).is_none());
    }

    #[test]
    fn empty_rule_set_never_matches() {
        let grid = Grid::new(Dims::new(3, 3, 3).unwrap(), Sentinels::binary());
        assert!(RuleSet::new().first_match(&grid, 0, 0, 0).is_none());
    }
}
