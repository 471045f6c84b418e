use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use super::board::Board;
use super::board::BoardSize;
use super::board::Point;
use super::error::{Error, Result};
use super::knowledge::KnowledgeBase;
use super::sentence::Sentence;
use super::ActionType;
use super::Agent;

/// Knowledge-based Minesweeper player.
///
/// Every revealed cell adds a sentence about its unrevealed neighbors. The
/// knowledge base is then resolved against that sentence and any cell that
/// becomes certain is recorded in `safes` or `mines`. A cell never moves
/// between the two sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinesweeperAi {
    size: BoardSize,
    moves_made: BTreeSet<Point>,
    mines: BTreeSet<Point>,
    safes: BTreeSet<Point>,
    knowledge: KnowledgeBase,
}

impl MinesweeperAi {
    pub fn new(width: usize, height: usize) -> MinesweeperAi {
        MinesweeperAi{
            size: BoardSize::new(width, height),
            moves_made: BTreeSet::new(),
            mines: BTreeSet::new(),
            safes: BTreeSet::new(),
            knowledge: KnowledgeBase::new(),
        }
    }

    pub fn moves_made(&self) -> &BTreeSet<Point> {
        &self.moves_made
    }

    pub fn mines(&self) -> &BTreeSet<Point> {
        &self.mines
    }

    pub fn safes(&self) -> &BTreeSet<Point> {
        &self.safes
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn mark_mine(&mut self, cell: Point) -> Result<()> {
        self.size.check(&cell)?;
        if self.safes.contains(&cell) {
            return Err(Error::Contradiction{point: cell})
        }
        self.mines.insert(cell);
        self.knowledge.mark_mine(&cell);
        Ok(())
    }

    pub fn mark_safe(&mut self, cell: Point) -> Result<()> {
        self.size.check(&cell)?;
        if self.mines.contains(&cell) {
            return Err(Error::Contradiction{point: cell})
        }
        self.safes.insert(cell);
        self.knowledge.mark_safe(&cell);
        Ok(())
    }

    /// Records that `cell` was revealed safe with `count` mines around it.
    ///
    /// The reveal and everything derived from it are worked out on copies and
    /// committed together. Any error leaves the agent exactly as it was.
    pub fn add_knowledge(&mut self, cell: Point, count: usize) -> Result<()> {
        self.size.check(&cell)?;
        let neighbors = self.size.neighbor_points(&cell);
        if count > neighbors.len() {
            return Err(Error::InvalidCount{point: cell, count})
        }
        if self.mines.contains(&cell) {
            return Err(Error::Contradiction{point: cell})
        }

        let mut moves_made = self.moves_made.clone();
        let mut safes = self.safes.clone();
        let mut knowledge = self.knowledge.clone();
        moves_made.insert(cell);
        safes.insert(cell);
        knowledge.mark_safe(&cell);

        let undetermined: Vec<Point> = neighbors.into_iter()
            .filter(|neighbor| !moves_made.contains(neighbor) && !safes.contains(neighbor))
            .collect();
        let mut mines = BTreeSet::new();
        if !undetermined.is_empty() {
            let sentence = Sentence::new(undetermined, count);
            knowledge.push(sentence.clone());
            let outcome = knowledge.resolve(&sentence).propagate();

            let conflict = outcome.safes.iter()
                .find(|point| self.mines.contains(*point) || outcome.mines.contains(*point))
                .or_else(|| outcome.mines.iter().find(|point| safes.contains(*point)));
            if let Some(point) = conflict {
                return Err(Error::Contradiction{point: *point})
            }
            knowledge = outcome.knowledge;
            safes.extend(outcome.safes);
            mines = outcome.mines;
        }

        self.moves_made = moves_made;
        self.safes = safes;
        self.mines.extend(mines);
        self.knowledge = knowledge;
        Ok(())
    }

    /// A known safe cell that hasn't been played yet.
    pub fn make_safe_move(&self) -> Option<Point> {
        self.safes.difference(&self.moves_made).next().copied()
    }

    /// A uniformly chosen cell that is neither played nor a known mine.
    pub fn make_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        let candidates: Vec<Point> = self.size.points().into_iter()
            .filter(|point| !self.mines.contains(point) && !self.moves_made.contains(point))
            .collect();
        candidates.choose(rng).copied()
    }
}

/// Plays a board with a `MinesweeperAi`, guessing when nothing is certain.
pub struct AiAgent<R> {
    pub ai: MinesweeperAi,
    rng: R,
}

impl<R: Rng> AiAgent<R> {
    pub fn new(ai: MinesweeperAi, rng: R) -> AiAgent<R> {
        AiAgent{ai, rng}
    }
}

impl<R: Rng> Agent for AiAgent<R> {
    fn generate_move(&mut self, board: &Board) -> Result<Vec<ActionType>> {
        let flags: Vec<ActionType> = self.ai.mines().iter()
            .filter(|point| !board.is_flagged(point))
            .map(|point| ActionType::Flag(*point))
            .collect();
        if !flags.is_empty() {
            println!("AI flagging {} known mine(s)", flags.len());
            return Ok(flags)
        }

        if let Some(point) = self.ai.make_safe_move() {
            println!("AI making safe move {}", point);
            return Ok(vec![ActionType::Click(point)])
        }

        match self.ai.make_random_move(&mut self.rng) {
            None => {
                println!("No moves left to make");
                Ok(vec![])
            }
            Some(point) => {
                println!("No known safe moves, AI making random move {}", point);
                Ok(vec![ActionType::Click(point)])
            }
        }
    }

    fn observe(&mut self, point: Point, count: usize) -> Result<()> {
        self.ai.add_knowledge(point, count)
    }
}
