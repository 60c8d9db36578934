//! Palette construction: referenced-color collection, empty-slot
//! synthesis, and the slot-0 transposition.

use indexmap::{IndexMap, IndexSet};
use strata_core::Label;

use crate::color::{ColorDefinition, ColorTable};
use crate::encode::EncodeWarning;
use crate::error::EncodeError;
use crate::{FALLBACK_SLOT, IGNORE_LABEL};

/// Slots above the empty slot that a palette may occupy.
const MAX_COLORS: usize = 255;

/// A finished palette: slot-ordered colors plus the label-to-slot map.
#[derive(Debug)]
pub(crate) struct Palette {
    colors: Vec<ColorDefinition>,
    slots: IndexMap<Label, u8>,
}

impl Palette {
    /// Build the palette for a cell buffer.
    ///
    /// Referenced colors are the distinct labels present in `cells`
    /// intersected with `table`, indexed densely in the table's
    /// insertion order. A missing entry for `empty` is synthesized as
    /// transparent black, and the empty label's color is transposed
    /// into slot 0 (a two-entry swap, not a rotation).
    pub(crate) fn build(
        cells: &[Label],
        table: &ColorTable,
        empty: &Label,
    ) -> Result<(Self, Vec<EncodeWarning>), EncodeError> {
        // Distinct labels in first-appearance order keeps the warning
        // list deterministic.
        let distinct: IndexSet<&Label> = cells.iter().collect();

        let mut colors: Vec<ColorDefinition> = Vec::new();
        let mut slots: IndexMap<Label, usize> = IndexMap::new();
        for (label, color) in table.iter() {
            if distinct.contains(label) {
                slots.insert(label.clone(), colors.len());
                colors.push(color.clone());
            }
        }

        let warnings = collect_warnings(&distinct, table, &colors, empty);

        if !slots.contains_key(empty) {
            slots.insert(empty.clone(), colors.len());
            colors.push(ColorDefinition::new(empty.clone(), 0, 0, 0, 0));
        }

        if colors.len() > MAX_COLORS {
            return Err(EncodeError::PaletteOverflow {
                count: colors.len(),
            });
        }

        // Transpose the empty label's color into slot 0: only the two
        // entries swap, every other slot keeps its index.
        let empty_slot = slots[empty];
        if empty_slot != 0 {
            let displaced = colors[0].name.clone();
            colors.swap(0, empty_slot);
            slots.insert(empty.clone(), 0);
            slots.insert(displaced, empty_slot);
        }

        let slots = slots.into_iter().map(|(l, i)| (l, i as u8)).collect();
        Ok((Self { colors, slots }, warnings))
    }

    /// The palette slot a cell label resolves to: 0 for the empty
    /// label, the assigned slot for mapped labels, and the fallback
    /// slot for everything else.
    pub(crate) fn slot_for(&self, label: &Label, empty: &Label) -> u8 {
        if label == empty {
            0
        } else {
            self.slots.get(label).copied().unwrap_or(FALLBACK_SLOT)
        }
    }

    /// Assigned colors in slot order.
    pub(crate) fn colors(&self) -> &[ColorDefinition] {
        &self.colors
    }
}

/// Advisory warnings for labels absent from the color table.
///
/// Mirrors the palette state *before* empty synthesis and the slot-0
/// transposition, so the substitute named for a fallback is the color
/// that will occupy slot 1 in the final artifact.
fn collect_warnings(
    distinct: &IndexSet<&Label>,
    table: &ColorTable,
    referenced: &[ColorDefinition],
    empty: &Label,
) -> Vec<EncodeWarning> {
    let mut warnings = Vec::new();

    if referenced.is_empty() {
        for &label in distinct {
            if label != empty && label.as_str() != IGNORE_LABEL {
                warnings.push(EncodeWarning::Unrecognized {
                    label: label.clone(),
                });
            }
        }
        return warnings;
    }

    for &label in distinct {
        if table.contains(label) {
            continue;
        }
        if label == empty || label.as_str() == IGNORE_LABEL {
            warnings.push(EncodeWarning::TreatedAsEmpty {
                label: label.clone(),
            });
        } else {
            warnings.push(EncodeWarning::Fallback {
                label: label.clone(),
                slot: FALLBACK_SLOT,
                substitute: referenced.get(1).map(|c| c.name.clone()),
            });
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(Label::new).collect()
    }

    fn table(entries: &[(&str, u8)]) -> ColorTable {
        entries
            .iter()
            .map(|&(name, r)| ColorDefinition::new(name, r, 0, 0, 255))
            .collect()
    }

    // ── Referenced-color selection ──────────────────────────────

    #[test]
    fn only_present_labels_are_referenced() {
        let cells = labels(&["a", "air", "a"]);
        let t = table(&[("a", 10), ("unused", 20)]);
        let (p, _) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        // "a" plus the synthesized empty.
        assert_eq!(p.colors().len(), 2);
    }

    #[test]
    fn indices_follow_table_order_not_grid_order() {
        let cells = labels(&["b", "a", "air"]);
        let t = table(&[("air", 0), ("a", 1), ("b", 2)]);
        let (p, _) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        assert_eq!(p.slot_for(&Label::new("air"), &Label::new("air")), 0);
        assert_eq!(p.slot_for(&Label::new("a"), &Label::new("air")), 1);
        assert_eq!(p.slot_for(&Label::new("b"), &Label::new("air")), 2);
    }

    // ── Empty synthesis and transposition ───────────────────────

    #[test]
    fn missing_empty_is_synthesized_transparent_black() {
        let cells = labels(&["x", "air"]);
        let t = table(&[("x", 125)]);
        let (p, _) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        assert_eq!(p.colors()[0].rgba(), [0, 0, 0, 0]);
        assert_eq!(p.colors()[0].name.as_str(), "air");
        assert_eq!(p.colors()[1].rgba(), [125, 0, 0, 255]);
    }

    #[test]
    fn transposition_swaps_exactly_two_slots() {
        let cells = labels(&["a", "b", "c", "air"]);
        let t = table(&[("a", 1), ("b", 2), ("air", 0), ("c", 3)]);
        let empty = Label::new("air");
        let (p, _) = Palette::build(&cells, &t, &empty).unwrap();

        // "air" started at slot 2 and swapped with "a" at slot 0;
        // "b" and "c" kept their slots.
        assert_eq!(p.slot_for(&empty, &empty), 0);
        assert_eq!(p.slot_for(&Label::new("a"), &empty), 2);
        assert_eq!(p.slot_for(&Label::new("b"), &empty), 1);
        assert_eq!(p.slot_for(&Label::new("c"), &empty), 3);
        assert_eq!(p.colors()[0].name.as_str(), "air");
        assert_eq!(p.colors()[2].name.as_str(), "a");
    }

    #[test]
    fn empty_already_at_slot_zero_is_untouched() {
        let cells = labels(&["air", "a"]);
        let t = table(&[("air", 0), ("a", 1)]);
        let empty = Label::new("air");
        let (p, _) = Palette::build(&cells, &t, &empty).unwrap();
        assert_eq!(p.slot_for(&empty, &empty), 0);
        assert_eq!(p.slot_for(&Label::new("a"), &empty), 1);
    }

    // ── Fallback ────────────────────────────────────────────────

    #[test]
    fn unmapped_label_resolves_to_fallback_slot() {
        let cells = labels(&["mystery", "x", "air"]);
        let t = table(&[("x", 125)]);
        let empty = Label::new("air");
        let (p, _) = Palette::build(&cells, &t, &empty).unwrap();
        assert_eq!(p.slot_for(&Label::new("mystery"), &empty), FALLBACK_SLOT);
    }

    // ── Capacity ────────────────────────────────────────────────

    #[test]
    fn overflow_counts_the_synthesized_empty() {
        // 255 mapped labels plus the synthesized empty = 256 > 255.
        let names: Vec<String> = (0..255).map(|i| format!("m{i}")).collect();
        let cells: Vec<Label> = names.iter().map(Label::new).collect();
        let t: ColorTable = names
            .iter()
            .map(|n| ColorDefinition::new(n.as_str(), 1, 1, 1, 255))
            .collect();
        let err = Palette::build(&cells, &t, &Label::new("air")).unwrap_err();
        assert!(matches!(err, EncodeError::PaletteOverflow { count: 256 }));
    }

    #[test]
    fn exactly_255_colors_including_empty_fit() {
        let names: Vec<String> = (0..254).map(|i| format!("m{i}")).collect();
        let cells: Vec<Label> = names.iter().map(Label::new).collect();
        let t: ColorTable = names
            .iter()
            .map(|n| ColorDefinition::new(n.as_str(), 1, 1, 1, 255))
            .collect();
        let (p, _) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        assert_eq!(p.colors().len(), 255);
    }

    // ── Warnings ────────────────────────────────────────────────

    #[test]
    fn zero_referenced_colors_reports_unrecognized_labels() {
        let cells = labels(&["rock", "air", "ignore", "moss"]);
        let t = table(&[("unrelated", 9)]);
        let (_, warnings) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        let unrecognized: Vec<&str> = warnings
            .iter()
            .filter_map(|w| match w {
                EncodeWarning::Unrecognized { label } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(unrecognized, ["rock", "moss"]);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn missing_labels_report_fallback_with_substitute() {
        let cells = labels(&["a", "b", "mystery", "air"]);
        let t = table(&[("a", 1), ("b", 2)]);
        let (_, warnings) = Palette::build(&cells, &t, &Label::new("air")).unwrap();

        assert!(warnings.iter().any(|w| matches!(
            w,
            EncodeWarning::Fallback { label, slot: 1, substitute: Some(s) }
                if label.as_str() == "mystery" && s.as_str() == "b"
        )));
        assert!(warnings.iter().any(|w| matches!(
            w,
            EncodeWarning::TreatedAsEmpty { label } if label.as_str() == "air"
        )));
    }

    #[test]
    fn single_referenced_color_reports_fallback_without_substitute() {
        let cells = labels(&["a", "mystery", "air"]);
        let t = table(&[("a", 1)]);
        let (_, warnings) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        assert!(warnings.iter().any(|w| matches!(
            w,
            EncodeWarning::Fallback { label, substitute: None, .. }
                if label.as_str() == "mystery"
        )));
    }

    #[test]
    fn fully_mapped_grid_produces_no_warnings() {
        let cells = labels(&["a", "air"]);
        let t = table(&[("a", 1), ("air", 0)]);
        let (_, warnings) = Palette::build(&cells, &t, &Label::new("air")).unwrap();
        assert!(warnings.is_empty());
    }
}
