use serde::{Deserialize, Serialize};

/// A digit value together with its sticky flag. Sticky digits ignore the
/// 180-degree rotation transform and render in a distinct color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotatableDigit {
    pub digit: u8,
    pub sticky: bool,
}

impl RotatableDigit {
    pub fn new(digit: u8, sticky: bool) -> Self {
        Self { digit, sticky }
    }

    pub fn plain(digit: u8) -> Self {
        Self {
            digit,
            sticky: false,
        }
    }
}

pub const CELL_BACKGROUND_COLORS: [(&str, &str); 9] = [
    ("red", "#f66"),
    ("orange", "#fa6"),
    ("yellow", "#ff6"),
    ("green", "#6f6"),
    ("cyan", "#6ff"),
    ("blue", "#69f"),
    ("purple", "#a6f"),
    ("gray", "#ccc"),
    ("black", "#555"),
];

/// Background color tag, an index into the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellColor(pub usize);

impl CellColor {
    pub fn css(self) -> &'static str {
        CELL_BACKGROUND_COLORS[self.0 % CELL_BACKGROUND_COLORS.len()].1
    }

    pub fn name(self) -> &'static str {
        CELL_BACKGROUND_COLORS[self.0 % CELL_BACKGROUND_COLORS.len()].0
    }
}

/// Per-cell contents. Every field defaults to absent/empty; absence is a
/// normal state, not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    /// Fixed given of the puzzle. Immutable, always displayed.
    pub initial_digit: Option<RotatableDigit>,
    /// Player-entered main digit, stacked under the initial one if both exist.
    pub users_digit: Option<RotatableDigit>,
    /// Center candidates, kept sorted by the type manager's straight order.
    pub center_digits: Vec<RotatableDigit>,
    /// Corner candidates, positionally indexed into the anchor slots.
    pub corner_digits: Vec<RotatableDigit>,
    /// Background tags: exactly one color fills solid, two or more render
    /// as wedge slices with no solid fill.
    pub colors: Vec<CellColor>,
}

impl CellState {
    pub fn given(digit: u8) -> Self {
        Self {
            initial_digit: Some(RotatableDigit::plain(digit)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.initial_digit.is_none()
            && self.users_digit.is_none()
            && self.center_digits.is_empty()
            && self.corner_digits.is_empty()
            && self.colors.is_empty()
    }
}
