//! Plays random games against the engine and prints a JSON summary.

use clap::Parser;
use log::{Log, Metadata, Record};
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;
use sweeper_core::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length
    #[arg(long, default_value_t = 8)]
    size: u32,

    /// Number of mines
    #[arg(long, default_value_t = 4)]
    mines: u32,

    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Reveals random hidden cells until the game ends, returning the number of moves.
fn play(game: &mut GameState, rng: &mut impl Rng) -> u32 {
    let mut moves = 0;
    while !game.is_finished() {
        let Some(position) = game
            .tiles()
            .filter(|&(_, tile)| tile == TileView::Hidden)
            .map(|(position, _)| position)
            .choose(&mut *rng)
        else {
            break;
        };
        let outcome = game.reveal(position);
        log::trace!("reveal {} -> {:?}", position, outcome);
        moves += 1;
    }
    moves
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = args.verbose.log_level_filter();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));

    let config = GameConfig::new(args.size, args.mines)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut won = 0u32;
    let mut total_moves = 0u64;
    for _ in 0..args.games {
        let mut game = GameState::new_game(config, RandomPlacer::new(&mut rng))?;
        total_moves += u64::from(play(&mut game, &mut rng));
        if game.is_won() {
            won += 1;
        }
        log::info!(
            "game finished: {:?}, {} cells revealed",
            game.state(),
            game.revealed_count()
        );
    }

    let average_moves = if args.games == 0 {
        0.0
    } else {
        total_moves as f64 / f64::from(args.games)
    };
    let summary = json!({
        "board_size": config.board_size,
        "mines": config.mine_count,
        "seed": seed,
        "games": args.games,
        "won": won,
        "lost": args.games - won,
        "average_moves": average_moves,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
