// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module instantiates the generic search engine on the family of the
//! sliding tile puzzles. The 8-puzzle is the 3x3 member of that family, but
//! any rectangular board (and any goal configuration) is supported.

mod board;
mod model;
mod heuristics;

pub use board::*;
pub use model::*;
pub use heuristics::*;

use crate::{Outcome, SearchNode};

/// The errors that may prevent a puzzle from being solved
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The initial board or the goal is not a legal configuration
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The search itself failed
    #[error(transparent)]
    Search(#[from] crate::Error),
}

/// Solves the puzzle going from `initial` to `goal` with the search that
/// corresponds to the given kind of heuristic.
///
/// # Example
/// ```
/// # use bestfirst::puzzle::*;
/// let goal  = Board::goal(3, 3);
/// let board = "1 2 3 4 5 6 7 0 8".parse::<Board>().unwrap();
/// let outcome = solve_board(&board, &goal, HeuristicKind::Manhattan).unwrap();
///
/// assert!(outcome.is_solved());
/// assert_eq!(Some(1), outcome.depth());
/// ```
pub fn solve_board(initial: &Board, goal: &Board, kind: HeuristicKind) -> Result<Outcome<Board>, PuzzleError> {
    let puzzle    = SlidingPuzzle::new(initial.clone(), goal.clone())?;
    let heuristic = kind.build(goal);
    Ok(crate::solve(&puzzle, heuristic.as_ref())?)
}

/// Translates a solution path into the sequence of moves of the blank.
///
/// # Example
/// ```
/// # use bestfirst::puzzle::*;
/// let goal  = Board::goal(3, 3);
/// let board = "1 2 3 4 5 6 0 7 8".parse::<Board>().unwrap();
/// let outcome = solve_board(&board, &goal, HeuristicKind::Misplaced).unwrap();
///
/// let path = outcome.path.unwrap();
/// assert_eq!(vec![Move::Right, Move::Right], moves(&path));
/// ```
pub fn moves(path: &[SearchNode<Board>]) -> Vec<Move> {
    path.windows(2)
        .filter_map(|pair| pair[0].state.move_towards(&pair[1].state))
        .collect()
}

#[cfg(test)]
mod test_puzzle {
    use crate::{Status, puzzle::*};

    #[test]
    fn invalid_configurations_are_rejected_before_the_search() {
        let res = solve_board(&Board::goal(2, 2), &Board::goal(3, 3), HeuristicKind::Uniform);
        assert!(matches!(res, Err(PuzzleError::Board(BoardError::DimensionMismatch(2, 2, 3, 3)))));
    }

    #[test]
    fn board_errors_are_reported_transparently() {
        let err = PuzzleError::from(BoardError::DuplicateTile(4));
        assert_eq!("tile 4 appears more than once", err.to_string());
    }

    #[test]
    fn a_small_puzzle_is_solved_by_every_kind_of_search() {
        let goal  = Board::goal(2, 2);
        let board = Board::new(2, 2, vec![0, 1, 3, 2]).unwrap();
        for kind in HeuristicKind::ALL {
            let outcome = solve_board(&board, &goal, kind).unwrap();
            assert_eq!(Status::Solved, outcome.status, "{kind}");
            let path = outcome.path.unwrap();
            assert_eq!(Some(&goal), path.last().map(|n| n.state.as_ref()));
            assert_eq!(path.len() - 1, moves(&path).len());
        }
    }

    #[test]
    fn replaying_the_moves_leads_to_the_goal() {
        let goal  = Board::goal(3, 3);
        let board = "1 3 6 5 0 2 4 7 8".parse::<Board>().unwrap();
        let outcome = solve_board(&board, &goal, HeuristicKind::Manhattan).unwrap();
        let path = outcome.path.unwrap();

        let mut current = board.clone();
        for mv in moves(&path) {
            current = current.slide(mv).unwrap();
        }
        assert_eq!(goal, current);
    }

    #[test]
    fn an_empty_or_trivial_path_has_no_move() {
        assert!(moves(&[]).is_empty());
        let outcome = solve_board(&Board::goal(3, 3), &Board::goal(3, 3), HeuristicKind::Uniform).unwrap();
        assert!(moves(&outcome.path.unwrap()).is_empty());
    }
}
