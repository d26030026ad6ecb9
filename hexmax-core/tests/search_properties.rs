//! Integration tests for the minimax core
//!
//! Runs the full search over many seeded random boards and checks the
//! properties every search must keep: the board comes back untouched, every
//! node is scored, scores follow the min/max rule, and results are stable.

use hexmax_core::{
    neighbors, Board, Cell, Coord, DecisionTree, Minimax, NodeId, Player, SearchConfig,
    SearchError,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Small ragged board with at least one empty cell
fn random_board(rng: &mut ChaCha8Rng) -> Board {
    loop {
        let columns = rng.gen_range(1..=3);
        let codes: Vec<Vec<u8>> = (0..columns)
            .map(|_| {
                let height = rng.gen_range(1..=3);
                (0..height).map(|_| rng.gen_range(0..=2)).collect()
            })
            .collect();
        let board = Board::from_codes(codes).unwrap();
        if !board.is_full() {
            return board;
        }
    }
}

fn random_player(rng: &mut ChaCha8Rng) -> Player {
    if rng.gen_bool(0.5) {
        Player::One
    } else {
        Player::Two
    }
}

/// Check every inner node against the min/max rule, returning how many were checked
fn check_minimax_rule(tree: &DecisionTree, id: NodeId) -> usize {
    let node = tree.get(id);
    if node.is_terminal() {
        return 0;
    }

    let scores: Vec<i32> = node
        .children
        .iter()
        .map(|&child| tree.score(child).unwrap())
        .collect();
    let opponent_children = tree.get(node.children[0]).mover_is_opponent;
    let expected = if opponent_children {
        *scores.iter().max().unwrap()
    } else {
        *scores.iter().min().unwrap()
    };
    assert_eq!(tree.score(id).unwrap(), expected, "node {:?}", id);

    1 + node
        .children
        .iter()
        .map(|&child| check_minimax_rule(tree, child))
        .sum::<usize>()
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

#[test]
fn test_board_restored_after_search() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let mut board = random_board(&mut rng);
        let before = board.clone();
        let plies = rng.gen_range(0..=2);
        let player = random_player(&mut rng);

        Minimax::new(SearchConfig::default().with_plies(plies))
            .best_move(&mut board, player)
            .unwrap();

        assert_eq!(board, before);
    }
}

#[test]
fn test_every_node_scored() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let mut board = random_board(&mut rng);
        let plies = rng.gen_range(0..=3);
        let tree = Minimax::new(SearchConfig::default().with_plies(plies))
            .search(&mut board, random_player(&mut rng))
            .unwrap();

        assert!(tree.unresolved_nodes().is_empty());
    }
}

#[test]
fn test_scores_follow_minimax_rule() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let mut checked = 0;
    for _ in 0..100 {
        let mut board = random_board(&mut rng);
        let tree = Minimax::new(SearchConfig::default().with_plies(2))
            .search(&mut board, random_player(&mut rng))
            .unwrap();

        checked += check_minimax_rule(&tree, tree.root());
    }
    assert!(checked >= 100);
}

#[test]
fn test_chosen_move_is_first_best_empty_cell() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..200 {
        let mut board = random_board(&mut rng);
        let plies = rng.gen_range(0..=2);
        let outcome = Minimax::new(SearchConfig::default().with_plies(plies))
            .best_move(&mut board, random_player(&mut rng))
            .unwrap();

        assert_eq!(board.cell(outcome.movement), Cell::Empty);
        let first_best = outcome
            .candidates
            .iter()
            .find(|(_, score)| *score == Some(outcome.score))
            .map(|(coord, _)| *coord);
        assert_eq!(first_best, Some(outcome.movement));
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let mut board = random_board(&mut rng);
        let player = random_player(&mut rng);
        let minimax = Minimax::new(SearchConfig::default().with_plies(2));

        let first = minimax.best_move(&mut board, player).unwrap();
        let second = minimax.best_move(&mut board, player).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_adjacency_bounds_on_random_boards() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..100 {
        let heights: Vec<usize> = (0..rng.gen_range(1..=12))
            .map(|_| rng.gen_range(1..=12))
            .collect();
        let board = Board::empty(&heights).unwrap();
        for (column, &height) in heights.iter().enumerate() {
            for line in 0..height {
                let here = Coord::new(column, line);
                let around = neighbors(&board, here);
                assert!(around.len() <= 6);
                assert!(!around.contains(&here));
                assert!(around.iter().all(|&c| board.contains(c)));
            }
        }
    }
}

// ============================================================================
// END-TO-END
// ============================================================================

#[test]
fn test_search_from_board_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("board.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "[[0, 0, 0]]").unwrap();

    let mut board = Board::load(&path).unwrap();
    let outcome = Minimax::new(SearchConfig::default().with_plies(0))
        .best_move(&mut board, Player::One)
        .unwrap();

    assert_eq!(outcome.movement, Coord::new(0, 1));
    assert_eq!(outcome.score, 20);
}

#[test]
fn test_full_board_has_no_move() {
    let mut board = Board::from_codes(vec![vec![1, 2, 1]]).unwrap();
    let result = Minimax::new(SearchConfig::default()).best_move(&mut board, Player::Two);
    assert_eq!(result, Err(SearchError::NoLegalMoves));
}
