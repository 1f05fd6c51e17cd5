use crate::Coord;

/// A piece that is not on the board was asked to do something that only
/// pieces on the board can do, e.g. compute its moves or be captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceNotOnBoard;

impl std::error::Error for PieceNotOnBoard {}

impl std::fmt::Display for PieceNotOnBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The piece is not on the board")
    }
}

/// The error type for querying and applying moves on a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { x: i8, y: i8 },
    NoPieceAt { coord: Coord },
    DestinationNotAvailable { from: Coord, to: Coord },
    /// Only raised when capturing is mandatory.
    CaptureRequired { from: Coord },
    PieceNotOnBoard(PieceNotOnBoard),
}

impl From<PieceNotOnBoard> for IllegalMove {
    fn from(err: PieceNotOnBoard) -> Self {
        IllegalMove::PieceNotOnBoard(err)
    }
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::PieceNotOnBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { x, y } => {
                write!(f, "The coordinates ({}, {}) are not on the board", x, y)
            }
            IllegalMove::NoPieceAt { coord } => write!(f, "There is no piece on {}", coord),
            IllegalMove::DestinationNotAvailable { from, to } => {
                write!(f, "The piece on {} cannot move to {}", from, to)
            }
            IllegalMove::CaptureRequired { from } => write!(
                f,
                "The piece on {} made a simple move, but a capture is available",
                from
            ),
            IllegalMove::PieceNotOnBoard(_) => write!(f, "Tried to move a piece that was removed"),
        }
    }
}

/// The error type for setting up a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidSetup {
    OutOfBounds { x: i8, y: i8 },
    CellOccupied { coord: Coord },
    PieceCaptured,
}

impl std::error::Error for InvalidSetup {}

impl std::fmt::Display for InvalidSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSetup::OutOfBounds { x, y } => {
                write!(f, "Piece was placed out of bounds, at ({}, {})", x, y)
            }
            InvalidSetup::CellOccupied { coord } => {
                write!(f, "Piece was placed on {}, which is already occupied", coord)
            }
            InvalidSetup::PieceCaptured => write!(f, "A captured piece cannot be placed"),
        }
    }
}
