use std::path::PathBuf;

use anyhow::Context;
use checkers::{Board, CaptureRule, Color, PlacedPiece, Rules};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use referee::{random_playout, replay_game, Config, GameResult};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the game script, one turn like `c3-d4` or `c3-e5-g7` per line.
    /// Read from stdin if not given.
    script: Option<PathBuf>,

    /// Which pieces may be jumped over
    #[arg(long, value_enum, default_value_t = CaptureRuleArg::AnyOccupant)]
    capture_rule: CaptureRuleArg,

    /// A side that can jump must jump, and must finish its jump chains
    #[arg(long, default_value_t = false)]
    mandatory_capture: bool,

    /// Instead of reading a script, play this many random turns
    #[arg(long)]
    random_playout: Option<usize>,

    /// RNG seed for --random-playout
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final position as JSON instead of drawing it
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaptureRuleArg {
    AnyOccupant,
    OpponentOnly,
}

impl From<CaptureRuleArg> for CaptureRule {
    fn from(arg: CaptureRuleArg) -> Self {
        match arg {
            CaptureRuleArg::AnyOccupant => CaptureRule::AnyOccupant,
            CaptureRuleArg::OpponentOnly => CaptureRule::OpponentOnly,
        }
    }
}

#[derive(Serialize)]
struct Report {
    rules: Rules,
    pieces: Vec<PlacedPiece>,
    captured: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_to_move: Option<Color>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        rules: Rules {
            capture_rule: args.capture_rule.into(),
            mandatory_capture: args.mandatory_capture,
        },
    };

    let (board, result) = if let Some(max_turns) = args.random_playout {
        // Get a random seed
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, "Starting a random playout");
        let mut rng = StdRng::seed_from_u64(seed);
        let playout = random_playout(&mut rng, max_turns, config.rules);
        for turn in &playout.turns {
            println!("{}", turn);
        }
        (playout.board, playout.result)
    } else {
        let script = match &args.script {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Could not read script '{}'", path.display()))?,
            None => std::io::read_to_string(std::io::stdin())?,
        };
        let replay = replay_game(&script, &config)?;
        info!(turns_played = replay.turns_played, "Replayed the script");
        (replay.board, replay.result)
    };

    print_board(&board, &result, config.rules, args.json)?;

    match result {
        GameResult::Unfinished { next_to_move } => {
            eprintln!("End result: unfinished, {} to move", next_to_move);
        }
        GameResult::WonBy { color } => {
            eprintln!("End result: {} wins", color);
        }
        GameResult::IllegalTurnBy { color, line, err } => {
            info!(%color, line, "Illegal turn");
            let mut err_dyn = &err as &dyn std::error::Error;
            while let Some(src_err) = err_dyn.source() {
                info!("{}", err_dyn);
                err_dyn = src_err;
            }
            info!("{}", err_dyn);
            anyhow::bail!("Illegal turn by {} on line {}", color, line);
        }
    }

    Ok(())
}

fn print_board(board: &Board, result: &GameResult, rules: Rules, json: bool) -> anyhow::Result<()> {
    if json {
        let report = Report {
            rules,
            pieces: board.to_pieces_vec(),
            captured: board.captured().len(),
            winner: match result {
                GameResult::WonBy { color } => Some(*color),
                _ => None,
            },
            next_to_move: match result {
                GameResult::Unfinished { next_to_move } => Some(*next_to_move),
                _ => None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", board);
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
