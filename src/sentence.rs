use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;

use crate::board::Point;

/// A claim that exactly `count` of `cells` are mines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    cells: BTreeSet<Point>,
    count: usize,
}

impl Sentence {
    pub fn new<I: IntoIterator<Item = Point>>(cells: I, count: usize) -> Sentence {
        Sentence{cells: cells.into_iter().collect(), count}
    }

    pub fn cells(&self) -> &BTreeSet<Point> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every remaining cell is a mine when there are as many cells as mines.
    pub fn known_mines(&self) -> BTreeSet<Point> {
        if self.cells.len() == self.count {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    pub fn known_safes(&self) -> BTreeSet<Point> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    pub fn mark_mine(&mut self, cell: &Point) {
        if self.cells.remove(cell) {
            self.count = self.count.saturating_sub(1);
        }
    }

    pub fn mark_safe(&mut self, cell: &Point) {
        self.cells.remove(cell);
    }

    /// If one sentence's cells strictly contain the other's, the difference
    /// holds the difference of the counts (clamped at zero).
    pub fn subtract(&self, other: &Sentence) -> Option<Sentence> {
        if self.cells.len() > other.cells.len() && other.cells.is_subset(&self.cells) {
            Some(Sentence{
                cells: self.cells.difference(&other.cells).copied().collect(),
                count: self.count.saturating_sub(other.count),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} = {}", self.cells.iter().join(", "), self.count)
    }
}
