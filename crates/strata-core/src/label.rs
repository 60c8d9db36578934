//! Voxel labels and binary classification.
//!
//! Every cell in a grid carries a [`Label`] naming its material. For
//! pattern matching the label space collapses to two values: a label
//! equal to the configured zero sentinel classifies as
//! [`BinaryState::Zero`], every other label as [`BinaryState::One`].

use std::fmt;
use std::sync::Arc;

/// An interned voxel label.
///
/// Labels are immutable, cheaply cloneable (`Arc<str>` internally),
/// and compare by name. A grid of millions of cells clones labels
/// freely without copying string data.
///
/// # Examples
///
/// ```
/// use strata_core::Label;
///
/// let stone = Label::new("stone");
/// assert_eq!(stone.as_str(), "stone");
/// assert_eq!(stone, Label::new("stone"));
/// assert_ne!(stone, Label::new("air"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Arc<str>);

impl Label {
    /// Create a label from a name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The label's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

/// Binary classification of a label for pattern matching.
///
/// There is no third state: any label that is not the zero sentinel
/// is [`One`](BinaryState::One).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryState {
    /// The label equals the configured zero sentinel.
    Zero,
    /// Any other label.
    One,
}

impl BinaryState {
    /// The opposite classification.
    pub fn toggled(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

/// The pair of labels written by rule behaviors, and the basis for
/// classification.
///
/// `zero` is the sentinel that classifies as [`BinaryState::Zero`];
/// `one` is the label written when a rule asserts the one state. The
/// two labels are expected to be distinct — a degenerate pair makes
/// every cell classify as zero and toggling a no-op.
///
/// # Examples
///
/// ```
/// use strata_core::{BinaryState, Label, Sentinels};
///
/// let s = Sentinels::binary();
/// assert_eq!(s.classify(&Label::new("Zero")), BinaryState::Zero);
/// assert_eq!(s.classify(&Label::new("One")), BinaryState::One);
/// assert_eq!(s.classify(&Label::new("anything-else")), BinaryState::One);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentinels {
    zero: Label,
    one: Label,
}

impl Sentinels {
    /// Create a sentinel pair from explicit labels.
    pub fn new(zero: Label, one: Label) -> Self {
        Self { zero, one }
    }

    /// The conventional `"Zero"` / `"One"` pair.
    pub fn binary() -> Self {
        Self::new(Label::new("Zero"), Label::new("One"))
    }

    /// The label classifying as [`BinaryState::Zero`].
    pub fn zero(&self) -> &Label {
        &self.zero
    }

    /// The label written for the one state.
    pub fn one(&self) -> &Label {
        &self.one
    }

    /// Classify a label: equal to the zero sentinel is `Zero`,
    /// everything else is `One`.
    pub fn classify(&self, label: &Label) -> BinaryState {
        if *label == self.zero {
            BinaryState::Zero
        } else {
            BinaryState::One
        }
    }

    /// The label a given classification resolves to.
    pub fn label_for(&self, state: BinaryState) -> &Label {
        match state {
            BinaryState::Zero => &self.zero,
            BinaryState::One => &self.one,
        }
    }
}
