use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Mine,
    Empty
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeState {
    Unknown,
    Flag,
    Known
}

impl KnowledgeState {
    pub fn is_known(&self) -> bool{
        match *self {
            KnowledgeState::Known => true,
            _ => false
        }
    }

    pub fn is_flag(&self) -> bool{
        match *self {
            KnowledgeState::Flag => true,
            _ => false
        }
    }

    pub fn is_unknown(&self) -> bool{
        match *self {
            KnowledgeState::Unknown => true,
            _ => false
        }
    }
}

#[derive(Debug)]
pub struct Cell {
    pub content: Content,
    pub mined_neighbor_count: usize,
    pub knowledge: KnowledgeState
}

impl Cell {
    fn create_empty() -> Cell {
        Cell{content: Content::Empty, mined_neighbor_count: 0, knowledge: KnowledgeState::Unknown}
    }

    pub fn toggle_flag(&mut self){
        let new_state = match self.knowledge {
            KnowledgeState::Known => KnowledgeState::Known,
            KnowledgeState::Flag => KnowledgeState::Unknown,
            KnowledgeState::Unknown => KnowledgeState::Flag
        };
        self.knowledge = new_state;
    }

    pub fn is_mine(&self) -> bool {
        self.content == Content::Mine
    }

    fn to_str(&self) -> String {
        match (&self.knowledge, &self.content) {
            (KnowledgeState::Flag, _) => String::from("▶"),
            (KnowledgeState::Unknown, _) => String::from("□"),
            (_, Content::Mine) => String::from("X"),
            (_, Content::Empty) => {
                if self.mined_neighbor_count == 0{
                    String::from("_")
                }
                else{
                    self.mined_neighbor_count.to_string()
                }
            }
        }
    }
}

/// A board coordinate as (row, column).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Point(pub usize, pub usize);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize
}

impl BoardSize {
    pub fn new(width: usize, height: usize) -> BoardSize {
        BoardSize{width, height}
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// `None` when the board is too large to count its cells.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.area()).filter_map(|x| self.point_from_integer(x)).collect()
    }

    pub fn point_from_integer(&self, x: usize) -> Option<Point> {
        if x >= self.area() {
            return None
        }
        Some(Point(x/self.width, x%self.width))
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 < self.height && point.1 < self.width
    }

    pub fn check(&self, point: &Point) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(Error::OutOfBounds{point: *point, width: self.width, height: self.height})
        }
    }

    /// The up-to-8 cells around `point`, clipped to the board.
    pub fn neighbor_points(&self, point: &Point) -> Vec<Point>{
        iproduct!(-1i64..2, -1i64..2)
            .filter(|&(i, j)| i != 0 || j != 0)
            .map(|(i, j)| (point.0 as i64 + i, point.1 as i64 + j))
            .filter(|&(row, col)| row >= 0 && row < self.height as i64 && col >= 0 && col < self.width as i64)
            .map(|(row, col)| Point(row as usize, col as usize))
            .collect()
    }
}

fn sample_points<R: Rng + ?Sized>(size: &BoardSize, n: usize, rng: &mut R) -> Result<Vec<Point>>{
    let area = size.checked_area().ok_or_else(|| Error::InvalidConfiguration{
        message: format!("board of {}x{} is too large", size.width, size.height)
    })?;
    if n > area {
        return Err(Error::TooManyMines{mines: n, area})
    }
    let mut possible: Vec<usize> = (0..area).collect();
    possible.shuffle(rng);
    Ok(possible.iter()
        .take(n)
        .filter_map(|&x| size.point_from_integer(x))
        .collect())
}

/// What the board tells a player about a probed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Mine,
    Safe(usize)
}

pub struct Board {
    pub size: BoardSize,
    field: Vec<Vec<Cell>>,
    pub mine_count: usize,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Board {
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, mine_count: usize, rng: &mut R) -> Result<Board>{
        let size = BoardSize::new(width, height);
        let mines = sample_points(&size, mine_count, rng)?;
        Board::from_mines(width, height, &mines)
    }

    pub fn from_mines(width: usize, height: usize, mines: &[Point]) -> Result<Board> {
        let size = BoardSize::new(width, height);
        let mut field = Vec::with_capacity(size.height);
        for _ in 0..size.height {
            let mut row_vec = Vec::with_capacity(size.width);
            for _ in 0..size.width {
                row_vec.push(Cell::create_empty());
            }
            field.push(row_vec);
        }

        let mut board = Board {size, field, mine_count: 0};
        for point in mines {
            size.check(point)?;
            if board.retrieve_cell(point).is_mine() {
                continue
            }
            board.retrieve_cell_mutable(point).content = Content::Mine;
            board.mine_count += 1;
            for neighbor in size.neighbor_points(point){
                board.retrieve_cell_mutable(&neighbor).mined_neighbor_count += 1;
            }
        }
        Ok(board)
    }

    pub fn retrieve_cell(&self, point: &Point) -> &Cell{
        &self.field[point.0][point.1]
    }

    fn retrieve_cell_mutable(&mut self, point: &Point) -> &mut Cell{
        &mut self.field[point.0][point.1]
    }

    fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.field.iter().flatten()
    }

    pub fn is_mine(&self, point: &Point) -> Result<bool> {
        self.size.check(point)?;
        Ok(self.retrieve_cell(point).is_mine())
    }

    /// Number of mines among the cells bordering `point`.
    pub fn nearby_mines(&self, point: &Point) -> Result<usize> {
        self.size.check(point)?;
        Ok(self.retrieve_cell(point).mined_neighbor_count)
    }

    pub fn is_revealed(&self, point: &Point) -> bool {
        self.size.contains(point) && self.retrieve_cell(point).knowledge.is_known()
    }

    pub fn is_flagged(&self, point: &Point) -> bool {
        self.size.contains(point) && self.retrieve_cell(point).knowledge.is_flag()
    }

    pub fn found_mines(&self) -> usize{
        self.cells()
            .filter(|cell| cell.knowledge.is_flag())
            .count()
    }

    pub fn toggle_flag(&mut self, point: &Point) -> Result<()>{
        self.size.check(point)?;
        self.retrieve_cell_mutable(point).toggle_flag();
        Ok(())
    }

    pub fn flag(&mut self, point: &Point) -> Result<()>{
        self.size.check(point)?;
        let cell = self.retrieve_cell_mutable(point);
        if cell.knowledge.is_unknown() {
            cell.knowledge = KnowledgeState::Flag;
        }
        Ok(())
    }

    /// Reveals a single cell and reports what was under it.
    pub fn probe(&mut self, point: &Point) -> Result<Probe>{
        self.size.check(point)?;
        let cell = self.retrieve_cell_mutable(point);
        cell.knowledge = KnowledgeState::Known;
        Ok(match cell.content {
            Content::Mine => Probe::Mine,
            Content::Empty => Probe::Safe(cell.mined_neighbor_count)
        })
    }

    pub fn reveal_mines(&mut self){
        for row in self.field.iter_mut() {
            for cell in row.iter_mut().filter(|cell| cell.is_mine()) {
                cell.knowledge = KnowledgeState::Known;
            }
        }
    }

    /// Won once every safe cell is revealed, or the flags sit exactly on the mines.
    pub fn is_won(&self) -> bool {
        let all_safes_revealed = self.cells()
            .filter(|cell| !cell.is_mine())
            .all(|cell| cell.knowledge.is_known());
        let flags_on_mines = self.mine_count > 0 && self.cells()
            .all(|cell| cell.is_mine() == cell.knowledge.is_flag());
        all_safes_revealed || flags_on_mines
    }

    pub fn has_exploded(&self) -> bool {
        self.cells().any(|cell| cell.is_mine() && cell.knowledge.is_known())
    }

    fn render(&self) -> String {
        let mut result = "  ".to_owned();
        for i in 0..self.size.width{
            result += &(i % 10).to_string()[..];
        }
        result += "\n";
        for (i, row) in self.field.iter().enumerate() {
            result += &(i % 10).to_string()[..];
            result += " ";
            for cell in row{
                result += &cell.to_str()[..];
            }
            result += "\n";
        }
        result
    }
}
