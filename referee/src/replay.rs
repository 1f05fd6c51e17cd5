use anyhow::Context;
use checkers::{Board, Color};
use tracing::{debug, info};

use crate::error::IllegalTurn;
use crate::turn::{execute_turn, Turn, TurnOutcome};
use crate::Config;

/// Dark makes the first move.
pub const FIRST_TO_MOVE: Color = Color::Dark;

#[derive(Debug)]
pub enum GameResult {
    /// The script ran out of turns before the game was decided.
    Unfinished { next_to_move: Color },
    WonBy { color: Color },
    IllegalTurnBy {
        color: Color,
        /// The 1-based line of the script. A random playout reports the
        /// turn number, which is the line of the turn in its printed script.
        line: usize,
        err: IllegalTurn,
    },
}

pub struct Replay {
    pub board: Board,
    pub turns_played: usize,
    pub result: GameResult,
}

/// Parses a game script: one [`Turn`] per line, skipping blank lines and
/// lines starting with `#`.
///
/// Returns the turns together with their 1-based line numbers.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<(usize, Turn)>> {
    let mut turns = Vec::new();
    for (line_idx, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let turn = line
            .parse::<Turn>()
            .with_context(|| format!("Could not parse line {}: '{}'", line_idx + 1, line))?;
        turns.push((line_idx + 1, turn));
    }
    Ok(turns)
}

/// Plays the turns of a script from the standard starting position.
///
/// Returns an error only when the script can't be parsed or continues after
/// the end of the game, not when an illegal turn is played.
pub fn replay_game(script: &str, config: &Config) -> anyhow::Result<Replay> {
    let turns = parse_script(script)?;
    let mut board = Board::standard();
    let mut color = FIRST_TO_MOVE;
    let mut turns_played = 0;

    let mut turns = turns.into_iter();
    while let Some((line, turn)) = turns.next() {
        match execute_turn(&mut board, color, &turn, config.rules) {
            Ok(TurnOutcome::Normal { captures, promoted }) => {
                debug!(%color, %turn, captures, promoted, "Applied turn");
            }
            Ok(TurnOutcome::GameEnded { winner }) => {
                turns_played += 1;
                debug!(%color, %turn, "Applied final turn");
                if let Some((extra_line, _)) = turns.next() {
                    anyhow::bail!(
                        "Line {}: the game was already won by {} on line {}",
                        extra_line,
                        winner,
                        line
                    );
                }
                return Ok(Replay {
                    board,
                    turns_played,
                    result: GameResult::WonBy { color: winner },
                });
            }
            Err(err) => {
                info!(%color, line, %turn, "Illegal turn");
                return Ok(Replay {
                    board,
                    turns_played,
                    result: GameResult::IllegalTurnBy { color, line, err },
                });
            }
        }
        turns_played += 1;
        color = color.opponent();
    }

    Ok(Replay {
        board,
        turns_played,
        result: GameResult::Unfinished {
            next_to_move: color,
        },
    })
}

#[cfg(test)]
mod tests {
    use checkers::{coord, Rules};

    use super::*;

    fn config() -> Config {
        Config {
            rules: Rules::default(),
        }
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let turns = parse_script("# opening\n\nf6-e5\n  c3-d4  \n").unwrap();
        assert_eq!(
            turns,
            vec![
                (3, Turn(vec![coord!("f6"), coord!("e5")])),
                (4, Turn(vec![coord!("c3"), coord!("d4")])),
            ]
        );
    }

    #[test]
    fn reports_unparsable_lines() {
        let err = parse_script("f6-e5\nc3-d9\n").err().unwrap();
        assert_eq!(err.to_string(), "Could not parse line 2: 'c3-d9'");
        assert_eq!(
            err.root_cause().to_string(),
            "The row must be a digit from 1 to 8"
        );
    }

    #[test]
    fn replays_an_exchange() {
        // Dark and light trade one piece each
        let script = "f6-e5\nc3-d4\ne5-c3\nb2-d4\n";
        let replay = replay_game(script, &config()).unwrap();
        assert_eq!(replay.turns_played, 4);
        assert!(matches!(
            replay.result,
            GameResult::Unfinished {
                next_to_move: Color::Dark
            }
        ));
        assert_eq!(replay.board.captured().len(), 2);
        assert_eq!(replay.board.pieces(Color::Light).count(), 11);
        assert_eq!(replay.board.pieces(Color::Dark).count(), 11);
        assert!(replay.board.piece_at(coord!("d4")).is_some());
    }

    #[test]
    fn stops_at_the_first_illegal_turn() {
        let script = "f6-e5\nc3-d4\nd4-c5\nb2-d4\n";
        let replay = replay_game(script, &config()).unwrap();
        assert_eq!(replay.turns_played, 2);
        match replay.result {
            GameResult::IllegalTurnBy { color, line, err } => {
                assert_eq!(color, Color::Dark);
                assert_eq!(line, 3);
                assert!(matches!(err, IllegalTurn::WrongColor { .. }));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn light_may_not_open() {
        let replay = replay_game("c3-d4", &config()).unwrap();
        assert!(matches!(
            replay.result,
            GameResult::IllegalTurnBy {
                color: Color::Dark,
                line: 1,
                ..
            }
        ));
        assert_eq!(replay.board, Board::standard());
    }
}
