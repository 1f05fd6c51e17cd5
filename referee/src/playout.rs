use checkers::{Board, Color, Coord, Rules};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::replay::{GameResult, FIRST_TO_MOVE};
use crate::turn::{execute_turn, Turn, TurnOutcome};

pub struct Playout {
    pub board: Board,
    /// The turns that were played, in order. Written one per line, they form
    /// a script that replays this game.
    pub turns: Vec<Turn>,
    pub result: GameResult,
}

/// Picks a random legal turn for `color`, following jump chains to their end.
///
/// Returns `None` if `color` can't move.
pub fn random_turn(rng: &mut StdRng, board: &Board, color: Color, rules: Rules) -> Option<Turn> {
    let movable = Vec::from_iter(board.movable_pieces(color, rules));
    let &from = movable.choose(rng)?;

    let mut board = board.clone();
    let mut squares = vec![from];
    let mut current = from;
    let mut in_chain = false;
    loop {
        let moves = board.available_moves(current, rules).ok()?;
        let candidates: Vec<Coord> = if in_chain || (rules.mandatory_capture && moves.any_jump()) {
            Vec::from_iter(moves.jumps)
        } else {
            Vec::from_iter(moves.destinations)
        };
        let &to = candidates.choose(rng)?;
        let outcome = board.apply_move(current, to, rules).ok()?;
        squares.push(to);
        if !outcome.can_continue_jump {
            break;
        }
        current = to;
        in_chain = true;
    }
    Some(Turn(squares))
}

/// Plays up to `max_turns` random turns from the standard starting position.
pub fn random_playout(rng: &mut StdRng, max_turns: usize, rules: Rules) -> Playout {
    let mut board = Board::standard();
    let mut turns = Vec::new();
    let mut color = FIRST_TO_MOVE;

    for turn_idx in 0..max_turns {
        let Some(turn) = random_turn(rng, &board, color, rules) else {
            return Playout {
                board,
                turns,
                result: GameResult::WonBy {
                    color: color.opponent(),
                },
            };
        };
        match execute_turn(&mut board, color, &turn, rules) {
            Ok(TurnOutcome::Normal { captures, promoted }) => {
                debug!(turn_idx, %color, %turn, captures, promoted);
            }
            Ok(TurnOutcome::GameEnded { winner }) => {
                debug!(turn_idx, %color, %turn, "Game ended");
                turns.push(turn);
                return Playout {
                    board,
                    turns,
                    result: GameResult::WonBy { color: winner },
                };
            }
            Err(err) => {
                // Would be a bug in either random_turn or the rules engine.
                // The turn number doubles as the line of the printed script.
                return Playout {
                    board,
                    turns,
                    result: GameResult::IllegalTurnBy {
                        color,
                        line: turn_idx + 1,
                        err,
                    },
                };
            }
        }
        turns.push(turn);
        color = color.opponent();
    }

    Playout {
        board,
        turns,
        result: GameResult::Unfinished {
            next_to_move: color,
        },
    }
}
