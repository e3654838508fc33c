use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use othello_engine::{Board, Game, Location, Side};
use othello_play::seats::{MiddleMoveSeat, ScriptedSeat, Seat, TerminalSeat};
use othello_play::{run_game, Seats};
use std::io;

/// Play a game of Othello in the terminal.
#[derive(Parser)]
#[command(name = "othello-play", about = "Play Othello in the terminal")]
struct Cli {
    /// Name of the black player
    #[arg(long, default_value = "Black")]
    black: String,

    /// Name of the white player
    #[arg(long, default_value = "White")]
    white: String,

    /// Start from this position instead: 64 cells of X, O and '.' in row-major order
    #[arg(long)]
    position: Option<String>,

    /// Side to move in --position
    #[arg(long, default_value = "black", requires = "position")]
    to_move: String,

    /// Dump the board after every move
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Read moves from the terminal ("D3" or "row col"; "moves" lists them, "quit" resigns)
    Interactive {
        /// Let the middle-move policy play this side
        #[arg(long)]
        computer: Option<String>,
    },
    /// Replay a fixed list of moves in play order
    Script {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Both sides play the middle of their legal-move list until the game ends
    Autoplay,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut game = match &cli.position {
        Some(position) => {
            let board: Board = position.parse().context("invalid --position")?;
            Game::from_position(board, cli.to_move.parse()?)
        }
        None => Game::new(),
    };
    game.create_player(&cli.black, "black")?;
    game.create_player(&cli.white, "white")?;
    for player in game.players() {
        println!("The {} player is {}", player.side(), player.name());
    }

    let mut seats = match cli.mode {
        Mode::Interactive { computer: None } => Seats::Both(terminal()),
        Mode::Interactive {
            computer: Some(color),
        } => {
            let computer: Box<dyn Seat> = Box::new(MiddleMoveSeat);
            match color.parse::<Side>()? {
                Side::Black => Seats::Each {
                    black: computer,
                    white: terminal(),
                },
                Side::White => Seats::Each {
                    black: terminal(),
                    white: computer,
                },
            }
        }
        Mode::Script { moves } => {
            let moves = moves
                .iter()
                .map(|mv| {
                    mv.parse::<Location>()
                        .with_context(|| format!("cannot parse scripted move {:?}", mv))
                })
                .collect::<Result<Vec<Location>>>()?;
            Seats::Both(Box::new(ScriptedSeat::new(moves)))
        }
        Mode::Autoplay => Seats::Both(Box::new(MiddleMoveSeat)),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_game(&mut game, &mut seats, &mut out, cli.verbose)?;
    Ok(())
}

fn terminal() -> Box<dyn Seat> {
    Box::new(TerminalSeat::new(io::stdin().lock(), io::stdout()))
}
