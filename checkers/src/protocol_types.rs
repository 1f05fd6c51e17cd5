use serde::{Deserialize, Serialize};

use crate::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Starts on rows 0 to 2 and advances towards row 7.
    Light,
    /// Starts on rows 5 to 7 and advances towards row 0.
    Dark,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// The row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// The row on which a piece of this color is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// A single piece on the board, including coordinates.
///
/// This is the exchange format for board positions: see
/// [`Board::new()`](crate::Board::new) and
/// [`Board::to_pieces_vec()`](crate::Board::to_pieces_vec).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub at: Coord,
    pub color: Color,
    /// When not set, this can be omitted from the JSON serialization.
    #[serde(default)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub king: bool,
}
