use regex::Regex;
use std::io::{self, BufRead};

use super::board::Board;
use super::board::Point;
use super::error::Result;
use super::tictactoe::Grid;
use super::ActionType;
use super::Agent;

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before a move was given")
}

/// Reads Minesweeper moves typed as `click ROW COL` or `flag ROW COL`.
pub struct HumanAgent<I> {
    input: I
}

impl<I: BufRead> HumanAgent<I> {
    pub fn new(input: I) -> HumanAgent<I> {
        HumanAgent{input}
    }
}

impl<I: BufRead> Agent for HumanAgent<I> {
    fn generate_move(&mut self, board: &Board) -> Result<Vec<ActionType>> {
        loop {
            println!("Please input your move: TYPE ROW COL");
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(end_of_input().into())
            }
            match action_from_string(&line) {
                Some(action) if board.size.contains(action.point()) => return Ok(vec![action]),
                Some(action) => println!("{} is not on the board", action.point()),
                None => println!("Must be of the form: click|flag ROW COL")
            }
        }
    }
}

pub fn action_from_string(input: &str) -> Option<ActionType>{
    let re = Regex::new(r"(click|flag)\s+(\d+)\s+(\d+)").expect("action pattern compiles");
    let cap = re.captures(input)?;
    let point = Point(cap[2].parse().ok()?, cap[3].parse().ok()?);
    match &cap[1] {
        "click" => Some(ActionType::Click(point)),
        "flag" => Some(ActionType::Flag(point)),
        _ => None
    }
}

/// Parses a Tic-Tac-Toe square typed as `ROW COL` or `ROW,COL`.
pub fn square_from_string(input: &str) -> Option<Point>{
    let re = Regex::new(r"^\s*(\d+)\s*[,\s]\s*(\d+)\s*$").expect("square pattern compiles");
    let cap = re.captures(input)?;
    Some(Point(cap[1].parse().ok()?, cap[2].parse().ok()?))
}

/// Prompts until the player names an empty square of `grid`.
pub fn read_square<I: BufRead>(input: &mut I, grid: &Grid) -> Result<Point>{
    loop {
        println!("Your move: ROW COL");
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(end_of_input().into())
        }
        match square_from_string(&line) {
            Some(point) if grid.actions().contains(&point) => return Ok(point),
            Some(point) => println!("{} is not an empty square", point),
            None => println!("Must be of the form: ROW COL")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    #[test]
    fn parses_actions() {
        assert_eq!(action_from_string("click 3 4\n"), Some(ActionType::Click(Point(3, 4))));
        assert_eq!(action_from_string("flag 0 12"), Some(ActionType::Flag(Point(0, 12))));
        assert_eq!(action_from_string("chord 1 1"), None);
        assert_eq!(action_from_string("click 1"), None);
    }

    #[test]
    fn parses_squares() {
        assert_eq!(square_from_string("1 2\n"), Some(Point(1, 2)));
        assert_eq!(square_from_string("0,0"), Some(Point(0, 0)));
        assert_eq!(square_from_string(" 2 , 1 "), Some(Point(2, 1)));
        assert_eq!(square_from_string("x y"), None);
    }

    #[test]
    fn human_agent_skips_bad_lines() {
        let board = Board::from_mines(2, 2, &[]).unwrap();
        let mut agent = HumanAgent::new(Cursor::new("bogus\nclick 9 9\nflag 1 0\n"));
        assert_eq!(agent.generate_move(&board).unwrap(), vec![ActionType::Flag(Point(1, 0))]);
        assert!(matches!(agent.generate_move(&board), Err(Error::Io(_))));
    }

    #[test]
    fn read_square_wants_an_empty_square() {
        let grid = Grid::new().result(Point(1, 1)).unwrap();
        let mut input = Cursor::new("1 1\n5 5\n0 2\n");
        assert_eq!(read_square(&mut input, &grid).unwrap(), Point(0, 2));
    }
}
