//! Minesweeper AI command line
//!
//! - `minesweeper`: watch the knowledge-based AI play, or play by hand
//! - `tictactoe`: play against the minimax player, or ask it for a move

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io;

use minesweeper_ai::ai::{AiAgent, MinesweeperAi};
use minesweeper_ai::config::MinesweeperConfig;
use minesweeper_ai::interaction::HumanAgent;
use minesweeper_ai::tictactoe::{self, Grid, Mark};
use minesweeper_ai::{play_minesweeper, play_tictactoe};

#[derive(Parser)]
#[command(name = "minesweeper-ai")]
#[command(version, about = "Knowledge-based Minesweeper AI and a minimax Tic-Tac-Toe player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Minesweeper, by the AI or by hand
    Minesweeper(MinesweeperArgs),

    /// Play Tic-Tac-Toe against the minimax player
    Tictactoe(TictactoeArgs),
}

#[derive(Args)]
struct MinesweeperArgs {
    #[arg(long, default_value_t = 8)]
    width: usize,

    #[arg(long, default_value_t = 8)]
    height: usize,

    #[arg(long, default_value_t = 8)]
    mines: usize,

    /// Seed for the mine layout and the AI's guesses
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between turns, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Read moves from stdin instead of letting the AI play
    #[arg(long)]
    human: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Mark {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[derive(Args)]
struct TictactoeArgs {
    /// Side to play; the computer plays both sides when omitted
    #[arg(long, value_enum)]
    play_as: Option<Side>,

    /// Print the best move for a position such as "XO./.X./..." and exit
    #[arg(long)]
    position: Option<String>,
}

fn run_minesweeper(args: MinesweeperArgs) -> Result<()> {
    let config = MinesweeperConfig {
        width: args.width,
        height: args.height,
        mines: args.mines,
        delay_ms: args.delay_ms,
        seed: args.seed,
    };
    let mut rng = config.rng();
    let mut board = config.build_board(&mut rng)?;

    let outcome = if args.human {
        let mut agent = HumanAgent::new(io::stdin().lock());
        play_minesweeper(&mut board, &mut agent, config.delay())?
    } else {
        let mut agent = AiAgent::new(MinesweeperAi::new(config.width, config.height), rng);
        play_minesweeper(&mut board, &mut agent, config.delay())?
    };
    println!("{:?}", outcome);
    Ok(())
}

fn run_tictactoe(args: TictactoeArgs) -> Result<()> {
    if let Some(position) = args.position {
        let grid: Grid = position.parse()?;
        print!("{}", grid);
        match tictactoe::minimax(grid)? {
            Some(action) => println!("{} to move: best move is {}", grid.player(), action),
            None => println!("game is over"),
        }
        return Ok(());
    }

    let mut input = io::stdin().lock();
    play_tictactoe(args.play_as.map(Mark::from), &mut input)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Minesweeper(args) => run_minesweeper(args),
        Commands::Tictactoe(args) => run_tictactoe(args),
    }
}
