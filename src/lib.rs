pub mod board;
pub mod ai;
pub mod config;
pub mod error;
pub mod interaction;
pub mod knowledge;
pub mod sentence;
pub mod tictactoe;
use std::io::BufRead;
use std::thread;
use std::time::Duration;

use board::{Board, Point, Probe};
use error::Result;
use tictactoe::{Grid, Mark};

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Click(Point),
    Flag(Point)
}

impl ActionType {
    pub fn point(&self) -> &Point {
        match self {
            ActionType::Click(point) | ActionType::Flag(point) => point
        }
    }
}

/// Anything that can play Minesweeper: a person at the terminal or the AI.
pub trait Agent {
    fn generate_move(&mut self, board: &Board) -> Result<Vec<ActionType>>;

    /// Called after every safe reveal with the number of bordering mines.
    fn observe(&mut self, _point: Point, _count: usize) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// The agent had nothing left to play.
    Stuck
}

pub fn play_minesweeper<A: Agent + ?Sized>(board: &mut Board, agent: &mut A, delay: Duration) -> Result<Outcome>{
    while !board.is_won(){
        println!("{}", board);
        println!("{} of {} mines flagged", board.found_mines(), board.mine_count);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        let moves = agent.generate_move(board)?;
        if moves.is_empty() {
            println!("no moves left");
            return Ok(Outcome::Stuck)
        }
        for action in moves {
            match action {
                ActionType::Flag(point) => board.toggle_flag(&point)?,
                ActionType::Click(point) => match board.probe(&point)? {
                    Probe::Safe(count) => agent.observe(point, count)?,
                    Probe::Mine => {
                        board.reveal_mines();
                        println!("{}", board);
                        println!("you lose");
                        return Ok(Outcome::Lost)
                    }
                }
            }
        }
    }
    println!("{}", board);
    println!("you win!");
    Ok(Outcome::Won)
}

/// Plays one game of Tic-Tac-Toe. The computer takes every side except
/// `human`, whose moves are read from `input`. Returns the winner.
pub fn play_tictactoe<I: BufRead>(human: Option<Mark>, input: &mut I) -> Result<Option<Mark>>{
    if let Some(mark) = human {
        println!("You play {}, the computer plays {}", mark, mark.opponent());
    }
    let mut grid = Grid::new();
    while !grid.terminal() {
        println!("{}", grid);
        let mover = grid.player();
        let action = if human == Some(mover) {
            interaction::read_square(input, &grid)?
        } else {
            let action = minimax_or_over(grid)?;
            println!("Computer ({}) plays {}", mover, action);
            action
        };
        grid = grid.result(action)?;
    }
    println!("{}", grid);
    match grid.winner() {
        Some(mark) => println!("Game over: {} wins.", mark),
        None => println!("Game over: tie.")
    }
    Ok(grid.winner())
}

fn minimax_or_over(grid: Grid) -> Result<Point> {
    tictactoe::minimax(grid)?.ok_or(Error::GameOver)
}
