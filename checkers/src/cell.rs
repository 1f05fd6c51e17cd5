use crate::{Coord, Piece, PieceNotOnBoard};

/// A single square of the board, and the piece on it, if any.
///
/// The cell owns its piece. The piece in turn knows which cell it is on
/// through [`Piece::position()`]; both sides are updated together whenever
/// the occupant changes, which only the [`Board`](crate::Board) can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    x: i8,
    y: i8,
    piece: Option<Piece>,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Self {
        debug_assert!(coord.is_on_board());
        Self {
            x: coord.x,
            y: coord.y,
            piece: None,
        }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub(crate) fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    /// Replaces the occupant and returns the previous one.
    ///
    /// The new occupant is positioned on this cell, the previous one is left
    /// without a position.
    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) -> Option<Piece> {
        let coord = self.coord();
        let new_piece = piece.map(|mut p| {
            p.set_position(Some(coord));
            p
        });
        let mut old_piece = std::mem::replace(&mut self.piece, new_piece);
        if let Some(p) = old_piece.as_mut() {
            p.set_position(None);
        }
        old_piece
    }

    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.set_piece(None)
    }

    /// Removes the occupant from play: it is flagged as captured and this
    /// cell becomes vacant.
    pub(crate) fn capture_piece(&mut self) -> Result<Piece, PieceNotOnBoard> {
        let piece = self.piece.as_mut().ok_or(PieceNotOnBoard)?;
        piece.capture()?;
        self.piece.take().ok_or(PieceNotOnBoard)
    }
}
