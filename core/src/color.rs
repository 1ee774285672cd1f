use serde::{Deserialize, Serialize};

use crate::ColorCount;

/// Palette color of a single cell.
///
/// The declaration order is the palette enumeration order. It is load-bearing:
/// the greedy estimator breaks ties toward the earliest entry, so reordering
/// variants changes par values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
}

/// All palette entries, in enumeration order.
pub const PALETTE: [Color; 8] = [
    Color::White,
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
];

impl Color {
    /// The first `count` palette entries: the active palette of a game played
    /// with `count` colors.
    pub fn palette(count: ColorCount) -> &'static [Color] {
        &PALETTE[..usize::from(count).min(PALETTE.len())]
    }

    pub const fn to_char(self) -> char {
        use Color::*;
        match self {
            White => 'W',
            Black => 'K',
            Red => 'R',
            Green => 'G',
            Blue => 'B',
            Cyan => 'C',
            Yellow => 'Y',
            Magenta => 'M',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        use Color::*;
        Some(match c {
            'W' => White,
            'K' => Black,
            'R' => Red,
            'G' => Green,
            'B' => Blue,
            'C' => Cyan,
            'Y' => Yellow,
            'M' => Magenta,
            _ => return None,
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::White
    }
}
