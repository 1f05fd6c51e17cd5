use std::str::FromStr;

use checkers::{Board, Color, Coord, CoordFromStrErr, Rules};

use crate::error::IllegalTurn;

/// The squares a piece passes through in one turn, e.g. `c3-d4` or `c3-e5-g7`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn(pub Vec<Coord>);

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let squares: Vec<String> = self.0.iter().map(Coord::to_string).collect();
        write!(f, "{}", squares.join("-"))
    }
}

impl FromStr for Turn {
    type Err = CoordFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('-')
            .map(|square| square.trim().parse())
            .collect::<Result<Vec<Coord>, _>>()
            .map(Turn)
    }
}

/// Summarizes the outcome of playing a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Normal { captures: usize, promoted: bool },
    /// The opponent has no piece left that can move.
    GameEnded { winner: Color },
}

/// Plays one turn for `color`.
///
/// All hops of the turn are validated before the board is changed, so the
/// board is left untouched when an error is returned.
pub fn execute_turn(
    board: &mut Board,
    color: Color,
    turn: &Turn,
    rules: Rules,
) -> Result<TurnOutcome, IllegalTurn> {
    let squares = &turn.0;
    if squares.len() < 2 {
        return Err(IllegalTurn::EmptyTurn);
    }
    if let Some(piece) = board.piece_at(squares[0]) {
        if piece.color() != color {
            return Err(IllegalTurn::WrongColor {
                at: squares[0],
                expected: color,
            });
        }
    }

    let mut next_board = board.clone();
    let mut captures = 0;
    let mut promoted = false;
    let mut chain_continues = false;

    for (hop_idx, hop) in squares.windows(2).enumerate() {
        let (from, to) = (hop[0], hop[1]);
        if hop_idx > 0 {
            if !chain_continues {
                return Err(IllegalTurn::HopAfterEndOfChain { hop_idx });
            }
            let is_jump = next_board
                .available_moves(from, rules)
                .map_or(false, |moves| moves.is_jump(to));
            if !is_jump {
                return Err(IllegalTurn::SimpleMoveInChain { hop_idx });
            }
        }
        let outcome = next_board
            .apply_move(from, to, rules)
            .map_err(|err| IllegalTurn::IllegalHop { hop_idx, err })?;
        if outcome.captured.is_some() {
            captures += 1;
        }
        promoted |= outcome.promoted;
        chain_continues = outcome.can_continue_jump;
    }

    if chain_continues && rules.mandatory_capture {
        return Err(IllegalTurn::PrematurelyEndedChain {
            hop_idx: squares.len() - 2,
        });
    }

    *board = next_board;
    if board.movable_pieces(color.opponent(), rules).is_empty() {
        return Ok(TurnOutcome::GameEnded { winner: color });
    }
    Ok(TurnOutcome::Normal { captures, promoted })
}

#[cfg(test)]
mod tests {
    use checkers::{coord, IllegalMove, PlacedPiece};

    use super::*;

    fn turn(s: &str) -> Turn {
        s.parse().unwrap()
    }

    fn piece(at: Coord, color: Color) -> PlacedPiece {
        PlacedPiece {
            at,
            color,
            king: false,
        }
    }

    fn chain_board() -> Board {
        Board::new(&[
            piece(coord!("a1"), Color::Light),
            piece(coord!("b2"), Color::Dark),
            piece(coord!("d4"), Color::Dark),
            piece(coord!("h8"), Color::Dark),
        ])
        .unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(
            turn("c3-e5-g7"),
            Turn(vec![coord!("c3"), coord!("e5"), coord!("g7")])
        );
        assert_eq!(turn(" c3 - d4 ").to_string(), "c3-d4");
        assert_eq!("c3-x4".parse::<Turn>(), Err(CoordFromStrErr::InvalidColumn));
        assert_eq!("c3".parse::<Turn>().unwrap().0.len(), 1);
    }

    #[test]
    fn simple_turn() {
        let mut board = Board::standard();
        let outcome = execute_turn(&mut board, Color::Light, &turn("c3-d4"), Rules::default());
        assert_eq!(
            outcome.unwrap(),
            TurnOutcome::Normal {
                captures: 0,
                promoted: false
            }
        );
        assert!(board.piece_at(coord!("d4")).is_some());
    }

    #[test]
    fn wrong_color() {
        let mut board = Board::standard();
        assert!(matches!(
            execute_turn(&mut board, Color::Dark, &turn("c3-d4"), Rules::default()),
            Err(IllegalTurn::WrongColor { expected: Color::Dark, .. })
        ));
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn too_short() {
        let mut board = Board::standard();
        assert!(matches!(
            execute_turn(&mut board, Color::Light, &turn("c3"), Rules::default()),
            Err(IllegalTurn::EmptyTurn)
        ));
    }

    #[test]
    fn jump_chain() {
        let mut board = chain_board();
        let outcome = execute_turn(&mut board, Color::Light, &turn("a1-c3-e5"), Rules::default());
        assert_eq!(
            outcome.unwrap(),
            TurnOutcome::Normal {
                captures: 2,
                promoted: false
            }
        );
        assert_eq!(board.captured().len(), 2);
    }

    #[test]
    fn chain_must_consist_of_jumps() {
        let mut board = chain_board();
        assert!(matches!(
            execute_turn(&mut board, Color::Light, &turn("a1-c3-b4"), Rules::default()),
            Err(IllegalTurn::SimpleMoveInChain { hop_idx: 1 })
        ));
        // Nothing was applied
        assert_eq!(board, chain_board());

        assert!(matches!(
            execute_turn(&mut board, Color::Light, &turn("a1-c3-e5-f6"), Rules::default()),
            Err(IllegalTurn::HopAfterEndOfChain { hop_idx: 2 })
        ));
    }

    #[test]
    fn no_second_hop_after_a_step() {
        let mut board = Board::standard();
        assert!(matches!(
            execute_turn(&mut board, Color::Light, &turn("c3-d4-e5"), Rules::default()),
            Err(IllegalTurn::HopAfterEndOfChain { hop_idx: 1 })
        ));
    }

    #[test]
    fn ending_a_chain_early() {
        let mut board = chain_board();
        let rules = Rules {
            mandatory_capture: true,
            ..Rules::default()
        };
        assert!(matches!(
            execute_turn(&mut board, Color::Light, &turn("a1-c3"), rules),
            Err(IllegalTurn::PrematurelyEndedChain { hop_idx: 0 })
        ));
        // Without mandatory captures, stopping is fine
        assert!(execute_turn(&mut board, Color::Light, &turn("a1-c3"), Rules::default()).is_ok());
    }

    #[test]
    fn illegal_hop() {
        let mut board = Board::standard();
        match execute_turn(&mut board, Color::Light, &turn("c3-c4"), Rules::default()) {
            Err(IllegalTurn::IllegalHop { hop_idx: 0, err }) => assert_eq!(
                err,
                IllegalMove::DestinationNotAvailable {
                    from: coord!("c3"),
                    to: coord!("c4")
                }
            ),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            execute_turn(&mut board, Color::Light, &turn("d4-e5"), Rules::default()),
            Err(IllegalTurn::IllegalHop {
                hop_idx: 0,
                err: IllegalMove::NoPieceAt { .. }
            })
        ));
    }

    #[test]
    fn capturing_the_last_piece_ends_the_game() {
        let mut board = Board::new(&[
            piece(coord!("d4"), Color::Light),
            piece(coord!("e5"), Color::Dark),
        ])
        .unwrap();
        assert_eq!(
            execute_turn(&mut board, Color::Light, &turn("d4-f6"), Rules::default()).unwrap(),
            TurnOutcome::GameEnded {
                winner: Color::Light
            }
        );
    }
}
