//! The agent's knowledge base: an ordered list of sentences plus the two
//! passes that refine it after a new sentence arrives.
//!
//! `resolve` derives smaller sentences from subset relations with the newest
//! sentence, once. It is not repeated to a fixed point, so some facts only
//! surface after a later reveal. `propagate` then pushes every certain cell
//! through the whole base without resolving again.

use std::collections::BTreeSet;

use crate::board::Point;
use crate::sentence::Sentence;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
}

/// Result of a propagation pass: the shrunk base and the cells it proved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Propagation {
    pub knowledge: KnowledgeBase,
    pub safes: BTreeSet<Point>,
    pub mines: BTreeSet<Point>,
}

impl KnowledgeBase {
    pub fn new() -> KnowledgeBase {
        KnowledgeBase::default()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn mark_mine(&mut self, cell: &Point) {
        for sentence in self.sentences.iter_mut() {
            sentence.mark_mine(cell);
        }
    }

    pub fn mark_safe(&mut self, cell: &Point) {
        for sentence in self.sentences.iter_mut() {
            sentence.mark_safe(cell);
        }
    }

    /// Rebuilds the base by comparing every sentence against `newest`.
    ///
    /// A sentence strictly containing `newest` becomes the difference
    /// `S - N`; a sentence strictly contained in it is replaced by `N - S`.
    /// Anything else, `newest` itself included, is kept as is.
    pub fn resolve(&self, newest: &Sentence) -> KnowledgeBase {
        let sentences = self.sentences.iter()
            .map(|sentence| {
                sentence.subtract(newest)
                    .or_else(|| newest.subtract(sentence))
                    .unwrap_or_else(|| sentence.clone())
            })
            .collect();
        KnowledgeBase{sentences}
    }

    /// Visits each sentence in order and marks its known safes, then its
    /// known mines, across the whole base.
    pub fn propagate(mut self) -> Propagation {
        let mut safes = BTreeSet::new();
        let mut mines = BTreeSet::new();
        for i in 0..self.sentences.len() {
            let known_safes = self.sentences[i].known_safes();
            let known_mines = self.sentences[i].known_mines();
            for cell in known_safes {
                self.mark_safe(&cell);
                safes.insert(cell);
            }
            for cell in known_mines {
                self.mark_mine(&cell);
                mines.insert(cell);
            }
        }
        Propagation{knowledge: self, safes, mines}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(cols: &[usize], count: usize) -> Sentence {
        Sentence::new(cols.iter().map(|&c| Point(0, c)), count)
    }

    fn set(cols: &[usize]) -> BTreeSet<Point> {
        cols.iter().map(|&c| Point(0, c)).collect()
    }

    fn base(sentences: Vec<Sentence>) -> KnowledgeBase {
        let mut knowledge = KnowledgeBase::new();
        for s in sentences {
            knowledge.push(s);
        }
        knowledge
    }

    #[test]
    fn resolve_then_propagate_finds_mine() {
        let newest = sentence(&[1, 2], 1);
        let knowledge = base(vec![sentence(&[1, 2, 3], 2), newest.clone()]);

        let resolved = knowledge.resolve(&newest);
        assert_eq!(resolved.sentences(), &[sentence(&[3], 1), sentence(&[1, 2], 1)]);

        let outcome = resolved.propagate();
        assert_eq!(outcome.mines, set(&[3]));
        assert!(outcome.safes.is_empty());
        assert_eq!(outcome.knowledge.sentences(), &[sentence(&[], 0), sentence(&[1, 2], 1)]);
    }

    #[test]
    fn resolve_replaces_smaller_sentence_with_difference() {
        let newest = sentence(&[1, 2, 3], 1);
        let knowledge = base(vec![sentence(&[1, 2], 1), newest.clone()]);
        let resolved = knowledge.resolve(&newest);
        assert_eq!(resolved.sentences(), &[sentence(&[3], 0), sentence(&[1, 2, 3], 1)]);
    }

    #[test]
    fn resolve_keeps_unrelated_and_equal_sentences() {
        let newest = sentence(&[1, 2], 1);
        let knowledge = base(vec![sentence(&[2, 3], 1), sentence(&[1, 2], 1), newest.clone()]);
        let resolved = knowledge.resolve(&newest);
        assert_eq!(resolved, knowledge);
    }

    #[test]
    fn resolve_is_a_single_pass() {
        // {3} = 1 only appears after resolving; {3, 4} = 1 is not revisited
        let newest = sentence(&[1, 2], 1);
        let knowledge = base(vec![sentence(&[3, 4], 1), sentence(&[1, 2, 3], 2), newest.clone()]);
        let resolved = knowledge.resolve(&newest);
        assert_eq!(resolved.sentences()[0], sentence(&[3, 4], 1));
        assert_eq!(resolved.sentences()[1], sentence(&[3], 1));
    }

    #[test]
    fn propagation_cascades_through_marks() {
        // marking 3 as a mine empties {3, 4} = 1 of mines, so 4 becomes safe
        let knowledge = base(vec![sentence(&[3], 1), sentence(&[3, 4], 1)]);
        let outcome = knowledge.propagate();
        assert_eq!(outcome.mines, set(&[3]));
        assert_eq!(outcome.safes, set(&[4]));
        assert!(outcome.knowledge.sentences().iter().all(Sentence::is_empty));
    }

    #[test]
    fn propagation_visits_sentences_once() {
        // {5} = 1 only becomes decidable after the pass has moved past it
        let knowledge = base(vec![sentence(&[4, 5], 1), sentence(&[4], 0)]);
        let outcome = knowledge.propagate();
        assert_eq!(outcome.safes, set(&[4]));
        assert!(outcome.mines.is_empty());
        assert_eq!(outcome.knowledge.sentences()[0], sentence(&[5], 1));
    }

    #[test]
    fn marks_apply_to_every_sentence() {
        let mut knowledge = base(vec![sentence(&[1, 2], 1), sentence(&[2, 3], 2)]);
        knowledge.mark_mine(&Point(0, 2));
        assert_eq!(knowledge.sentences(), &[sentence(&[1], 0), sentence(&[3], 1)]);
        knowledge.mark_safe(&Point(0, 1));
        assert_eq!(knowledge.sentences(), &[sentence(&[], 0), sentence(&[3], 1)]);
    }
}
