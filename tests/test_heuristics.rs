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

//! Exhaustive checks of the puzzle heuristics over the 181 440 boards that can
//! reach the goal of the 8-puzzle.

use std::collections::VecDeque;

use bestfirst::*;
use bestfirst::puzzle::*;
use fxhash::FxHashMap;

/// The exact number of moves between each solvable board and the goal
/// (moves are reversible so a breadth first search from the goal will do)
fn distances(goal: &Board) -> FxHashMap<Board, isize> {
    let mut dist  = FxHashMap::default();
    let mut queue = VecDeque::new();
    dist.insert(goal.clone(), 0);
    queue.push_back(goal.clone());

    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        for (_, next) in board.successors() {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn check_admissible(h: &dyn Heuristic<State = Board>, dist: &FxHashMap<Board, isize>) {
    for (board, d) in dist.iter() {
        let estimate = h.estimate(board);
        assert!(estimate >= 0);
        assert!(estimate <= *d, "h = {estimate} > {d} for\n{board}");
    }
}

fn check_consistent(h: &dyn Heuristic<State = Board>, dist: &FxHashMap<Board, isize>) {
    for board in dist.keys() {
        let here = h.estimate(board);
        for (_, next) in board.successors() {
            let there = h.estimate(&next);
            assert!(here <= 1 + there, "h = {here} > 1 + {there} for\n{board}");
        }
    }
}

#[test]
fn the_solvable_component_holds_half_of_the_boards() {
    let goal = Board::goal(3, 3);
    let dist = distances(&goal);
    assert_eq!(181_440, dist.len());
    assert_eq!(Some(&31), dist.values().max());
    assert!(dist.keys().all(|b| b.is_solvable(&goal)));
}

#[test]
fn misplaced_tiles_is_admissible() {
    let goal = Board::goal(3, 3);
    check_admissible(&MisplacedTiles::new(&goal), &distances(&goal));
}

#[test]
fn misplaced_tiles_is_consistent() {
    let goal = Board::goal(3, 3);
    check_consistent(&MisplacedTiles::new(&goal), &distances(&goal));
}

#[test]
fn manhattan_is_admissible() {
    let goal = Board::goal(3, 3);
    check_admissible(&Manhattan::new(&goal), &distances(&goal));
}

#[test]
fn manhattan_is_consistent() {
    let goal = Board::goal(3, 3);
    check_consistent(&Manhattan::new(&goal), &distances(&goal));
}

#[test]
fn every_solvable_board_is_solved_optimally_on_a_sample() {
    let goal = Board::goal(3, 3);
    let dist = distances(&goal);

    // every 5000th board, in a deterministic order
    let mut boards = dist.keys().cloned().collect::<Vec<_>>();
    boards.sort_unstable();
    for board in boards.iter().step_by(5_000) {
        let outcome = solve_board(board, &goal, HeuristicKind::Manhattan).unwrap();
        assert_eq!(Some(dist[board] as usize), outcome.depth(), "\n{board}");
    }
}
