use quickcheck::{Arbitrary, Gen};

use crate::{Board, CaptureRule, Color, Coord, PlacedPiece, Rules};

/// A random, not necessarily reachable, position on the dark squares.
#[derive(Clone, Debug)]
pub struct ArbitraryPosition {
    pub pieces: Vec<PlacedPiece>,
    pub rule: CaptureRule,
    pub mandatory_capture: bool,
}

impl ArbitraryPosition {
    pub fn board(&self) -> Board {
        Board::new(&self.pieces).unwrap()
    }

    pub fn rules(&self) -> Rules {
        Rules {
            capture_rule: self.rule,
            mandatory_capture: self.mandatory_capture,
        }
    }
}

impl Arbitrary for ArbitraryPosition {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut pieces = Vec::new();
        for idx in 0..64 {
            let at = Coord::from_index(idx);
            if !at.is_dark_square() {
                continue;
            }
            // Roughly half of the squares are occupied, a quarter of those by kings
            let (color, king) = match u8::arbitrary(g) % 8 {
                0 | 1 => (Color::Light, false),
                2 | 3 => (Color::Dark, false),
                4 => (Color::Light, true),
                5 => (Color::Dark, true),
                _ => continue,
            };
            pieces.push(PlacedPiece { at, color, king });
        }
        ArbitraryPosition {
            pieces,
            rule: CaptureRule::arbitrary(g),
            mandatory_capture: bool::arbitrary(g),
        }
    }
}

/// A starting position plus the random numbers to pick moves with.
#[derive(Clone, Debug)]
pub struct ArbitraryPlayout {
    pub position: ArbitraryPosition,
    pub choices: Vec<usize>,
}

impl Arbitrary for ArbitraryPlayout {
    fn arbitrary(g: &mut Gen) -> Self {
        // Half of the playouts start from the regular opening position
        let position = if bool::arbitrary(g) {
            ArbitraryPosition {
                pieces: Board::standard().to_pieces_vec(),
                rule: CaptureRule::arbitrary(g),
                mandatory_capture: bool::arbitrary(g),
            }
        } else {
            ArbitraryPosition::arbitrary(g)
        };
        ArbitraryPlayout {
            position,
            choices: Vec::arbitrary(g),
        }
    }
}

impl Arbitrary for Coord {
    fn arbitrary(g: &mut Gen) -> Self {
        Coord::from_index(u8::arbitrary(g) % 64)
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Color::Light, Color::Dark]).unwrap()
    }
}

impl Arbitrary for CaptureRule {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[CaptureRule::AnyOccupant, CaptureRule::OpponentOnly])
            .unwrap()
    }
}
