use minesweeper_ai::ai::{AiAgent, MinesweeperAi};
use minesweeper_ai::board::{Board, Point, Probe};
use minesweeper_ai::{play_minesweeper, Outcome};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[test]
fn empty_board_is_cleared_from_any_start() {
    for seed in 0..10 {
        let mut board = Board::from_mines(4, 4, &[]).unwrap();
        let mut agent = AiAgent::new(MinesweeperAi::new(4, 4), StdRng::seed_from_u64(seed));
        let outcome = play_minesweeper(&mut board, &mut agent, Duration::from_millis(0)).unwrap();
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(agent.ai.safes().len(), 16);
    }
}

#[test]
fn games_end_in_a_win_or_a_loss() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::random(8, 8, 8, &mut rng).unwrap();
        let mut agent = AiAgent::new(MinesweeperAi::new(8, 8), rng);
        let outcome = play_minesweeper(&mut board, &mut agent, Duration::from_millis(0)).unwrap();
        assert_ne!(outcome, Outcome::Stuck, "seed {}", seed);
        assert_eq!(outcome == Outcome::Lost, board.has_exploded(), "seed {}", seed);
    }
}

#[test]
fn row_board_is_fully_deduced() {
    let mut board = Board::from_mines(5, 1, &[Point(0, 4)]).unwrap();
    let mut ai = MinesweeperAi::new(5, 1);
    let mut next = Some(Point(0, 0));
    while let Some(point) = next {
        match board.probe(&point).unwrap() {
            Probe::Safe(count) => ai.add_knowledge(point, count).unwrap(),
            Probe::Mine => panic!("{} was inferred safe", point),
        }
        next = ai.make_safe_move();
    }
    assert_eq!(ai.mines().iter().copied().collect::<Vec<_>>(), vec![Point(0, 4)]);
    assert_eq!(ai.moves_made().len(), 4);
    assert!(board.is_won());
}

#[test]
fn known_mines_are_not_removed_from_new_sentences() {
    // mines at (0, 0) and (0, 2); (0, 1) is safe but the reveal at (1, 2)
    // arrives as {(0, 1), (0, 2)} = 1 after (0, 2) is already a known mine
    let mut board = Board::from_mines(3, 3, &[Point(0, 0), Point(0, 2)]).unwrap();
    let mut ai = MinesweeperAi::new(3, 3);
    for start in [Point(2, 0), Point(2, 1), Point(2, 2)].iter() {
        if let Probe::Safe(count) = board.probe(start).unwrap() {
            ai.add_knowledge(*start, count).unwrap();
        }
    }
    while let Some(point) = ai.make_safe_move() {
        match board.probe(&point).unwrap() {
            Probe::Safe(count) => ai.add_knowledge(point, count).unwrap(),
            Probe::Mine => panic!("{} was inferred safe", point),
        }
    }
    assert_eq!(ai.mines().iter().copied().collect::<Vec<_>>(), vec![Point(0, 2)]);
    assert_eq!(ai.moves_made().len(), 6);
    assert!(!ai.safes().contains(&Point(0, 1)));
}

proptest! {
    #[test]
    fn inferences_match_the_board(width in 1..9usize, height in 1..9usize,
                                  density in 0..30usize, seed in any::<u64>()) {
        let area = width * height;
        let mine_count = (area * density / 100).min(area - 1);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::random(width, height, mine_count, &mut rng).unwrap();
        let mut ai = MinesweeperAi::new(width, height);

        loop {
            let point = match ai.make_safe_move().or_else(|| ai.make_random_move(&mut rng)) {
                Some(point) => point,
                None => break,
            };
            prop_assert!(!ai.moves_made().contains(&point));
            match board.probe(&point).unwrap() {
                Probe::Mine => {
                    prop_assert!(!ai.safes().contains(&point));
                    break;
                }
                Probe::Safe(count) => ai.add_knowledge(point, count).unwrap(),
            }

            prop_assert!(ai.mines().is_disjoint(ai.safes()));
            for mine in ai.mines() {
                prop_assert!(board.is_mine(mine).unwrap());
            }
            for safe in ai.safes() {
                prop_assert!(!board.is_mine(safe).unwrap());
            }
            for sentence in ai.knowledge().sentences() {
                prop_assert!(sentence.count() <= sentence.cells().len());
            }
        }
    }
}
