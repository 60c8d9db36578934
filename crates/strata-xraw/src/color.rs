//! Color definitions and the insertion-ordered color table.

use indexmap::IndexMap;
use strata_core::Label;

/// An RGBA color bound to a label name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorDefinition {
    /// The label this color renders.
    pub name: Label,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl ColorDefinition {
    /// Create a color definition.
    pub fn new(name: impl Into<Label>, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            name: name.into(),
            r,
            g,
            b,
            a,
        }
    }

    /// The four channel bytes in palette order (R, G, B, A).
    pub fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A label-to-color mapping with deterministic enumeration order.
///
/// Palette indices are assigned in this table's insertion order, so
/// two encodes over the same table always produce the same bytes.
/// Keys are unique; inserting a label twice keeps the first position
/// and replaces the color.
///
/// # Examples
///
/// ```
/// use strata_xraw::{ColorDefinition, ColorTable};
///
/// let mut table = ColorTable::new();
/// table.insert(ColorDefinition::new("stone", 125, 125, 125, 255));
/// table.insert(ColorDefinition::new("water", 0, 0, 200, 180));
///
/// let names: Vec<&str> = table.iter().map(|(l, _)| l.as_str()).collect();
/// assert_eq!(names, ["stone", "water"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    colors: IndexMap<Label, ColorDefinition>,
}

impl ColorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a color keyed by its own label name.
    pub fn insert(&mut self, color: ColorDefinition) {
        self.colors.insert(color.name.clone(), color);
    }

    /// Look up a label's color.
    pub fn get(&self, label: &Label) -> Option<&ColorDefinition> {
        self.colors.get(label)
    }

    /// Whether the table has an entry for `label`.
    pub fn contains(&self, label: &Label) -> bool {
        self.colors.contains_key(label)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &ColorDefinition)> {
        self.colors.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl FromIterator<ColorDefinition> for ColorTable {
    fn from_iter<I: IntoIterator<Item = ColorDefinition>>(iter: I) -> Self {
        let mut table = Self::new();
        for color in iter {
            table.insert(color);
        }
        table
    }
}
