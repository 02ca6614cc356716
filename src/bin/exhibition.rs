//! Exhibition binary.
//!
//! Plays minimax against random, then minimax against alpha-beta, alternating
//! the first player each game, and prints the tallies and the last board.
//!
//! Usage:
//!   push-exhibition [--games 5] [--board-size 4] [--minimax-ply 3] \
//!     [--alphabeta-ply 5] [--seed 42] [--max-moves N]

use anyhow::{Context, Result};
use clap::Parser;
use rust_push::{
    AlphaBetaAgent, Exhibition, ExhibitionResult, GameConfig, GameRng, MatchConfig,
    MinimaxAgent, PushRules, RandomAgent, SearchConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "push-exhibition", about = "Play Push exhibitions between search agents")]
struct Args {
    /// Games per exhibition
    #[arg(long, default_value_t = 5)]
    games: u32,

    /// Board dimension n
    #[arg(long, default_value_t = 4)]
    board_size: usize,

    /// Ply limit for the minimax agent
    #[arg(long, default_value_t = 3)]
    minimax_ply: u32,

    /// Ply limit for the alpha-beta agent
    #[arg(long, default_value_t = 5)]
    alphabeta_ply: u32,

    /// Seed for the random agent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop a game without a winner after this many moves
    #[arg(long)]
    max_moves: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let rules = PushRules::new(GameConfig::new(args.board_size));
    let config = MatchConfig::default()
        .with_games(args.games)
        .with_max_moves(args.max_moves);
    let exhibition = Exhibition::new(&rules, config);

    let minimax_config = SearchConfig::default().with_ply_limit(args.minimax_ply);
    let alphabeta_config = SearchConfig::default().with_ply_limit(args.alphabeta_ply);
    let mut rng = GameRng::new(args.seed);

    println!("Random v. Minimax");
    println!("Minimax Player is searching {} ply.", args.minimax_ply);
    let mut minimax = MinimaxAgent::new(rules.clone(), minimax_config.clone());
    let mut random = RandomAgent::from_rng(rng.fork());
    let result = exhibition
        .run(&mut minimax, &mut random)
        .context("minimax v. random exhibition failed")?;
    report(&result);

    println!();
    println!("Minimax v. Alpha Beta");
    println!("Minimax Player is searching {} ply.", args.minimax_ply);
    println!("Alpha Beta Player is searching {} ply.", args.alphabeta_ply);
    let mut minimax = MinimaxAgent::new(rules.clone(), minimax_config);
    let mut alphabeta = AlphaBetaAgent::new(rules.clone(), alphabeta_config);
    let result = exhibition
        .run(&mut minimax, &mut alphabeta)
        .context("minimax v. alpha-beta exhibition failed")?;
    report(&result);

    Ok(())
}

fn report(result: &ExhibitionResult) {
    for (name, wins) in result.names.iter().zip(result.wins) {
        println!("{name}: {wins}");
    }
    if result.unresolved > 0 {
        println!("Unresolved: {}", result.unresolved);
    }
    if let Some(board) = &result.last_board {
        println!();
        println!("{board}");
    }
}
