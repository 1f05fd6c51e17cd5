use checkers::{Color, Coord, IllegalMove};

/// Error type for one turn.
#[derive(Debug)]
pub enum IllegalTurn {
    /// A turn needs a start square and at least one destination.
    EmptyTurn,
    WrongColor {
        at: Coord,
        expected: Color,
    },
    IllegalHop {
        hop_idx: usize,
        err: IllegalMove,
    },
    /// After the first jump, a turn may only continue with more jumps.
    SimpleMoveInChain {
        hop_idx: usize,
    },
    HopAfterEndOfChain {
        hop_idx: usize,
    },
    PrematurelyEndedChain {
        hop_idx: usize,
    },
}

impl std::error::Error for IllegalTurn {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalTurn::IllegalHop { err, .. } => Some(err),
            _ => None,
        }
    }
}

fn ordinal_number(num: usize) -> String {
    match num {
        0 => String::from("first"),
        1 => String::from("second"),
        2 => String::from("third"),
        3 => String::from("fourth"),
        4 => String::from("fifth"),
        // Longer chains are rare, but possible with kings
        _ => format!("{}th", num + 1),
    }
}

impl std::fmt::Display for IllegalTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalTurn::EmptyTurn => write!(f, "The turn does not move any piece"),
            IllegalTurn::WrongColor { at, expected } => write!(
                f,
                "The piece on {} does not belong to {}, whose turn it is",
                at, expected
            ),
            IllegalTurn::IllegalHop { hop_idx, err: _ } => {
                write!(f, "The {} hop is illegal", ordinal_number(*hop_idx))
            }
            IllegalTurn::SimpleMoveInChain { hop_idx } => write!(
                f,
                "The {} hop follows a jump, but is not a jump itself",
                ordinal_number(*hop_idx)
            ),
            IllegalTurn::HopAfterEndOfChain { hop_idx } => write!(
                f,
                "The {} hop does not follow a jump that can be continued",
                ordinal_number(*hop_idx)
            ),
            IllegalTurn::PrematurelyEndedChain { hop_idx } => write!(
                f,
                "The {} hop should be followed up by another jump, but wasn't",
                ordinal_number(*hop_idx)
            ),
        }
    }
}
