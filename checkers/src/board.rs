use serde::{Deserialize, Serialize};

use crate::{
    AvailableMoves, CaptureRule, Cell, CellsSet, Color, Coord, IllegalMove, InvalidSetup, Piece,
    PlacedPiece, BOARD_SIZE,
};

/// The rule variant to play with.
///
/// The default allows jumping over any piece and does not force captures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub capture_rule: CaptureRule,
    /// If set, a side that can jump must jump.
    #[serde(default)]
    pub mandatory_capture: bool,
}

/// The 8x8 checkers board.
///
/// Owns all cells, and through them all pieces in play. Pieces that were
/// captured are kept in a separate list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Indexed by row first, then column.
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    /// In the order they were captured.
    captured: Vec<Piece>,
}

#[derive(Clone, Copy, Debug)]
struct Diff {
    from: Coord,
    to: Coord,
    jumped: Option<Coord>,
}

/// A validated move that has not been applied yet.
///
/// Returned by [`Board::calculate_move()`].
pub struct MoveCalculation<'a> {
    // The board the diff was validated against
    board: &'a Board,
    diff: Diff,
    rules: Rules,
    /// The square of the piece that would be captured by this move.
    pub captures: Option<Coord>,
    /// Would the moving piece be crowned?
    pub promotes: bool,
}

/// What happened when applying a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    /// The piece that was jumped over, as it is now in [`Board::captured()`].
    pub captured: Option<Piece>,
    /// Whether the moving piece was crowned by this move.
    pub promoted: bool,
    /// The move was a jump, and the same piece can jump again from where it
    /// landed. A move that crowns a piece ends the chain.
    pub can_continue_jump: bool,
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        let cells = std::array::from_fn(|y| {
            std::array::from_fn(|x| Cell::new(Coord::new(x as i8, y as i8)))
        });
        Self {
            cells,
            captured: Vec::new(),
        }
    }

    /// The starting position: twelve pieces per side on the dark squares of
    /// their first three rows.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for row in board.cells.iter_mut() {
            for cell in row.iter_mut() {
                let color = match cell.y() {
                    0..=2 => Color::Light,
                    5..=7 => Color::Dark,
                    _ => continue,
                };
                if cell.coord().is_dark_square() {
                    cell.set_piece(Some(Piece::new(color)));
                }
            }
        }
        board
    }

    /// Creates a board from a list of pieces.
    pub fn new(pieces: &[PlacedPiece]) -> Result<Self, InvalidSetup> {
        let mut board = Self::empty();
        for placed in pieces {
            let piece = if placed.king {
                Piece::new_king(placed.color)
            } else {
                Piece::new(placed.color)
            };
            board.place(placed.at, piece)?;
        }
        Ok(board)
    }

    /// Puts a piece on an empty square.
    pub fn place(&mut self, at: Coord, piece: Piece) -> Result<(), InvalidSetup> {
        if piece.is_captured() {
            return Err(InvalidSetup::PieceCaptured);
        }
        let cell = self
            .cell_mut(at)
            .ok_or(InvalidSetup::OutOfBounds { x: at.x, y: at.y })?;
        if !cell.is_empty() {
            return Err(InvalidSetup::CellOccupied { coord: at });
        }
        cell.set_piece(Some(piece));
        Ok(())
    }

    /// Returns `None` for coordinates that are not on the board.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if !coord.is_on_board() {
            return None;
        }
        Some(&self.cells[coord.y as usize][coord.x as usize])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if !coord.is_on_board() {
            return None;
        }
        Some(&mut self.cells[coord.y as usize][coord.x as usize])
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.cell(coord).and_then(Cell::piece)
    }

    /// All cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// The pieces of the given color that are still in play.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.cells()
            .filter_map(Cell::piece)
            .filter(move |p| p.color() == color)
    }

    /// The pieces that were captured so far, oldest first.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Where the piece on `from` can move to.
    ///
    /// If captures are mandatory and any piece of the same color can jump,
    /// only jumps are offered. Every destination returned here is accepted
    /// by [`Self::apply_move()`].
    pub fn available_moves(&self, from: Coord, rules: Rules) -> Result<AvailableMoves, IllegalMove> {
        let piece = self.occupied(from)?;
        let mut moves = piece.available_moves(self, rules.capture_rule)?;
        if rules.mandatory_capture && self.can_jump(piece.color(), rules.capture_rule) {
            moves.destinations = moves.jumps;
        }
        Ok(moves)
    }

    /// The squares of all pieces of `color` that have a move.
    ///
    /// If captures are mandatory and any of these pieces can jump, only the
    /// pieces that can jump are included.
    pub fn movable_pieces(&self, color: Color, rules: Rules) -> CellsSet {
        let mut movable = CellsSet::new();
        let mut jumping = CellsSet::new();
        for piece in self.pieces(color) {
            let (Some(at), Ok(moves)) = (
                piece.position(),
                piece.available_moves(self, rules.capture_rule),
            ) else {
                continue;
            };
            if !moves.is_empty() {
                movable = movable.insert(at);
            }
            if moves.any_jump() {
                jumping = jumping.insert(at);
            }
        }
        if rules.mandatory_capture && !jumping.is_empty() {
            jumping
        } else {
            movable
        }
    }

    /// Whether any piece of `color` can jump.
    pub fn can_jump(&self, color: Color, capture_rule: CaptureRule) -> bool {
        self.pieces(color).any(|piece| {
            piece
                .available_moves(self, capture_rule)
                .map(|moves| moves.any_jump())
                .unwrap_or(false)
        })
    }

    /// Checks whether the piece on `from` can move to `to`, and plans out the
    /// changes this would make to the board.
    ///
    /// The returned struct has a method to actually apply these changes and
    /// get a new board, leaving this one untouched. Use
    /// [`Self::apply_move()`] to change this board in place instead.
    pub fn calculate_move(
        &self,
        from: Coord,
        to: Coord,
        rules: Rules,
    ) -> Result<MoveCalculation<'_>, IllegalMove> {
        let piece = self.occupied(from)?;
        if !to.is_on_board() {
            return Err(IllegalMove::OutOfBounds { x: to.x, y: to.y });
        }

        let moves = piece.available_moves(self, rules.capture_rule)?;
        if !moves.contains(to) {
            return Err(IllegalMove::DestinationNotAvailable { from, to });
        }
        let is_jump = moves.is_jump(to);
        if rules.mandatory_capture && !is_jump && self.can_jump(piece.color(), rules.capture_rule)
        {
            return Err(IllegalMove::CaptureRequired { from });
        }

        let jumped = is_jump.then(|| from.midpoint(to));
        Ok(MoveCalculation {
            board: self,
            diff: Diff { from, to, jumped },
            rules,
            captures: jumped,
            promotes: !piece.is_king() && to.y == piece.color().promotion_row(),
        })
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// If this is a jump, the piece jumped over is captured. Afterwards the
    /// moved piece is crowned if it reached the farthest row.
    ///
    /// ```
    /// # use checkers::{coord, Board, Rules};
    /// let mut board = Board::standard();
    /// let outcome = board.apply_move(coord!("c3"), coord!("d4"), Rules::default()).unwrap();
    /// assert_eq!(outcome.captured, None);
    /// assert!(board.piece_at(coord!("c3")).is_none());
    /// assert_eq!(board.piece_at(coord!("d4")).unwrap().position(), Some(coord!("d4")));
    /// ```
    pub fn apply_move(
        &mut self,
        from: Coord,
        to: Coord,
        rules: Rules,
    ) -> Result<MoveOutcome, IllegalMove> {
        let diff = self.calculate_move(from, to, rules)?.diff;
        Ok(diff.apply(self, rules))
    }

    /// Captures the piece on `at`: it is flagged as captured, removed from
    /// its cell and moved to [`Self::captured()`].
    ///
    /// Returns the captured state of the piece, which is always `true`.
    pub fn capture(&mut self, at: Coord) -> Result<bool, IllegalMove> {
        self.occupied(at)?;
        let piece = self.cells[at.y as usize][at.x as usize].capture_piece()?;
        self.captured.push(piece);
        Ok(piece.is_captured())
    }

    pub fn to_pieces_vec(&self) -> Vec<PlacedPiece> {
        self.cells()
            .filter_map(|cell| {
                cell.piece().map(|piece| PlacedPiece {
                    at: cell.coord(),
                    color: piece.color(),
                    king: piece.is_king(),
                })
            })
            .collect()
    }

    fn occupied(&self, at: Coord) -> Result<&Piece, IllegalMove> {
        self.cell(at)
            .ok_or(IllegalMove::OutOfBounds { x: at.x, y: at.y })?
            .piece()
            .ok_or(IllegalMove::NoPieceAt { coord: at })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize_board(self, CellsSet::new()))
    }
}

impl<'a> MoveCalculation<'a> {
    pub fn from(&self) -> Coord {
        self.diff.from
    }

    pub fn to(&self) -> Coord {
        self.diff.to
    }

    /// Apply the computed changes to a copy of the board.
    pub fn execute(self) -> Board {
        let mut board = self.board.clone();
        self.diff.apply(&mut board, self.rules);
        board
    }
}

impl Diff {
    // The diff must have been validated against this board.
    fn apply(self, board: &mut Board, rules: Rules) -> MoveOutcome {
        let moving = board.cell_mut(self.from).and_then(Cell::take_piece);
        let was_king = moving.map_or(false, |p| p.is_king());
        if let Some(cell) = board.cell_mut(self.to) {
            cell.set_piece(moving);
        }

        let captured = match self.jumped {
            Some(at) => {
                let piece = board.cell_mut(at).and_then(|cell| cell.capture_piece().ok());
                debug_assert!(piece.is_some(), "No piece to capture on {}", at);
                piece
            }
            None => None,
        };
        if let Some(piece) = captured {
            board.captured.push(piece);
        }

        let is_king = board
            .cell_mut(self.to)
            .and_then(Cell::piece_mut)
            .map_or(false, Piece::promote);
        let promoted = is_king && !was_king;

        let can_continue_jump = self.jumped.is_some()
            && !promoted
            && board
                .available_moves(self.to, rules)
                .map_or(false, |moves| moves.any_jump());

        MoveOutcome {
            from: self.from,
            to: self.to,
            captured,
            promoted,
            can_continue_jump,
        }
    }
}
