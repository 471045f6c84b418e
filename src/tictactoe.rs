//! Tic-Tac-Toe positions and a fixed-depth minimax player.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::board::Point;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 position. Copying is cheap, so every operation hands back a new grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Option<Mark>; 3]; 3],
}

impl Grid {
    pub fn new() -> Grid {
        Grid::default()
    }

    pub fn from_rows(cells: [[Option<Mark>; 3]; 3]) -> Grid {
        Grid{cells}
    }

    pub fn get(&self, point: &Point) -> Option<Mark> {
        self.cells.get(point.0).and_then(|row| row.get(point.1)).copied().flatten()
    }

    fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == Some(mark)).count()
    }

    /// X moves first, so O is to move whenever X is ahead.
    pub fn player(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Empty squares, in row-major order.
    pub fn actions(&self) -> BTreeSet<Point> {
        (0..3).flat_map(|row| (0..3).map(move |col| Point(row, col)))
            .filter(|point| self.get(point).is_none())
            .collect()
    }

    pub fn result(&self, action: Point) -> Result<Grid> {
        if action.0 >= 3 || action.1 >= 3 {
            return Err(Error::OutOfBounds{point: action, width: 3, height: 3})
        }
        if self.get(&action).is_some() {
            return Err(Error::InvalidMove{point: action})
        }
        let mut next = *self;
        next.cells[action.0][action.1] = Some(self.player());
        Ok(next)
    }

    pub fn winner(&self) -> Option<Mark> {
        LINES.iter()
            .map(|line| line.map(|(row, col)| self.cells[row][col]))
            .find_map(|[a, b, c]| if a.is_some() && a == b && b == c { a } else { None })
    }

    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().flatten().all(Option::is_some)
    }

    /// 1 if X has won, -1 if O has, 0 otherwise.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }

    pub fn best_action(self) -> Result<Option<Point>> {
        minimax(self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                match cell {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Reads nine squares of `X`, `O` and `.`/`_`/`-`; whitespace and `/` are skipped.
    fn from_str(s: &str) -> Result<Grid> {
        let mut marks = Vec::with_capacity(9);
        for (position, character) in s.chars().enumerate() {
            match character {
                'X' | 'x' => marks.push(Some(Mark::X)),
                'O' | 'o' => marks.push(Some(Mark::O)),
                '.' | '_' | '-' => marks.push(None),
                c if c.is_whitespace() || c == '/' => {}
                _ => return Err(Error::InvalidGridCharacter{character, position}),
            }
        }
        if marks.len() != 9 {
            return Err(Error::InvalidGridLength{expected: 9, got: marks.len()})
        }

        let mut grid = Grid::new();
        for (i, mark) in marks.into_iter().enumerate() {
            grid.cells[i / 3][i % 3] = mark;
        }
        let (x_count, o_count) = (grid.count(Mark::X), grid.count(Mark::O));
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts{x_count, o_count})
        }
        Ok(grid)
    }
}

/// The best move for the player to move, or `None` once the game is over.
///
/// Each level only carries the running value of its parent as a cutoff: a
/// maximizing node stops as soon as it matches or beats the minimizing
/// parent and reports one more than the cutoff, and symmetrically for
/// minimizing nodes. Among equally good moves the last one found wins.
pub fn minimax(grid: Grid) -> Result<Option<Point>> {
    if grid.terminal() {
        return Ok(None)
    }
    let (_, action) = match grid.player() {
        Mark::X => max_value(grid, 2)?,
        Mark::O => min_value(grid, -2)?,
    };
    Ok(action)
}

fn max_value(grid: Grid, cutoff: i32) -> Result<(i32, Option<Point>)> {
    if grid.terminal() {
        return Ok((grid.utility(), None))
    }
    let mut value = -2;
    let mut best = None;
    for action in grid.actions() {
        let (reply, _) = min_value(grid.result(action)?, value)?;
        value = value.max(reply);
        if value == reply {
            best = Some(action);
        }
        if value == 1 {
            return Ok((value, best))
        }
        if value >= cutoff {
            return Ok((cutoff + 1, best))
        }
    }
    Ok((value, best))
}

fn min_value(grid: Grid, cutoff: i32) -> Result<(i32, Option<Point>)> {
    if grid.terminal() {
        return Ok((grid.utility(), None))
    }
    let mut value = 2;
    let mut best = None;
    for action in grid.actions() {
        let (reply, _) = max_value(grid.result(action)?, value)?;
        value = value.min(reply);
        if value == reply {
            best = Some(action);
        }
        if value == -1 {
            return Ok((value, best))
        }
        if value <= cutoff {
            return Ok((cutoff - 1, best))
        }
    }
    Ok((value, best))
}
