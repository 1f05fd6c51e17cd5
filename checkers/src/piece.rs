use serde::{Deserialize, Serialize};

use crate::{Board, CellsSet, Color, Coord, PieceNotOnBoard};

const LIGHT_MAN_DIRS: [(i8, i8); 2] = [(-1, 1), (1, 1)];
const DARK_MAN_DIRS: [(i8, i8); 2] = [(-1, -1), (1, -1)];
const KING_DIRS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// Which pieces may be jumped over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureRule {
    /// Any occupied square can be jumped, even one holding a piece of the
    /// jumping side. The jumped piece is captured either way.
    #[default]
    AnyOccupant,
    /// Only squares holding an opponent's piece can be jumped. A piece of the
    /// own color blocks the direction completely.
    OpponentOnly,
}

impl CaptureRule {
    pub fn can_jump_over(self, jumper: Color, jumped: Color) -> bool {
        match self {
            CaptureRule::AnyOccupant => true,
            CaptureRule::OpponentOnly => jumper != jumped,
        }
    }
}

/// A checkers piece.
///
/// Pieces live in the [`Cell`](crate::Cell)s of a [`Board`], and know their
/// own position. Captured pieces are kept by the board (see
/// [`Board::captured()`]) and have no position.
///
/// This is a plain [`Copy`] value, so a copy can be inspected or used for
/// "what if" analysis without affecting the piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    king: bool,
    captured: bool,
    position: Option<Coord>,
}

/// The destinations a piece can move to.
///
/// Returned by [`Piece::available_moves()`]. It is computed from scratch on
/// every call, so it never reflects an older board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvailableMoves {
    /// All squares the piece can move to, jumps included.
    pub destinations: CellsSet,
    /// The subset of `destinations` that is reached by jumping over a piece.
    pub jumps: CellsSet,
}

impl AvailableMoves {
    /// Whether at least one of the destinations is reached by a jump.
    pub fn any_jump(&self) -> bool {
        !self.jumps.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.destinations.contains(coord)
    }

    pub fn is_jump(&self, coord: Coord) -> bool {
        self.jumps.contains(coord)
    }
}

impl IntoIterator for AvailableMoves {
    type Item = Coord;

    type IntoIter = crate::CellsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.into_iter()
    }
}

impl Piece {
    /// Creates a piece that is not on the board yet.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            king: false,
            captured: false,
            position: None,
        }
    }

    /// Creates a king that is not on the board yet.
    pub fn new_king(color: Color) -> Self {
        Self {
            king: true,
            ..Self::new(color)
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_king(&self) -> bool {
        self.king
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// The square this piece is on, or `None` if it was captured or never placed.
    pub fn position(&self) -> Option<Coord> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Option<Coord>) {
        self.position = position;
    }

    /// The diagonal steps this piece may take, as `(dx, dy)`.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.king, self.color) {
            (true, _) => &KING_DIRS,
            (false, Color::Light) => &LIGHT_MAN_DIRS,
            (false, Color::Dark) => &DARK_MAN_DIRS,
        }
    }

    /// Computes where this piece can move on the given board.
    ///
    /// For each of its [directions](Self::directions()), a piece can step onto
    /// the adjacent diagonal square if that is empty. If it is occupied by a
    /// piece that `capture_rule` allows jumping over, the piece can instead
    /// jump to the square behind it, provided that one is on the board and
    /// empty. Never both for the same direction.
    ///
    /// Returns an error if the piece is not on the board.
    ///
    /// ```
    /// # use checkers::{coord, Board, CaptureRule, Color, PlacedPiece};
    /// let board = Board::new(&[
    ///     PlacedPiece { at: coord!("d4"), color: Color::Light, king: false },
    ///     PlacedPiece { at: coord!("c5"), color: Color::Dark, king: false },
    /// ]).unwrap();
    /// let piece = board.piece_at(coord!("d4")).unwrap();
    /// let moves = piece.available_moves(&board, CaptureRule::AnyOccupant).unwrap();
    /// assert_eq!(Vec::from_iter(moves), vec![coord!("e5"), coord!("b6")]);
    /// assert!(moves.any_jump());
    /// ```
    pub fn available_moves(
        &self,
        board: &Board,
        capture_rule: CaptureRule,
    ) -> Result<AvailableMoves, PieceNotOnBoard> {
        let from = self.position.ok_or(PieceNotOnBoard)?;
        let mut moves = AvailableMoves::default();

        for &(dx, dy) in self.directions() {
            let Some(adjacent) = from.offset(dx, dy) else {
                continue;
            };
            match board.piece_at(adjacent) {
                None => moves.destinations = moves.destinations.insert(adjacent),
                Some(neighbour) => {
                    if !capture_rule.can_jump_over(self.color, neighbour.color()) {
                        continue;
                    }
                    if let Some(landing) = adjacent
                        .offset(dx, dy)
                        .filter(|&c| board.piece_at(c).is_none())
                    {
                        moves.destinations = moves.destinations.insert(landing);
                        moves.jumps = moves.jumps.insert(landing);
                    }
                }
            }
        }
        Ok(moves)
    }

    /// Marks this piece as captured and removes its position.
    ///
    /// Only called through [`Cell::capture_piece()`](crate::Cell), which
    /// also vacates the cell.
    pub(crate) fn capture(&mut self) -> Result<bool, PieceNotOnBoard> {
        self.position.take().ok_or(PieceNotOnBoard)?;
        self.captured = true;
        Ok(self.captured)
    }

    /// Crowns this piece if it stands on the farthest row for its color.
    ///
    /// Returns whether the piece is a king now. Kings stay kings.
    pub(crate) fn promote(&mut self) -> bool {
        if let Some(pos) = self.position {
            if pos.y == self.color.promotion_row() {
                self.king = true;
            }
        }
        self.king
    }
}
