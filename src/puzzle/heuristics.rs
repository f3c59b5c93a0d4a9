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

//! This module provides the heuristics that estimate how many moves separate
//! a board from the goal. Both of them are admissible and consistent: they
//! never overestimate the remaining number of moves, and a single move can
//! never decrease them by more than one.

use std::fmt::{self, Display};

use crate::{Heuristic, ZeroHeuristic};

use super::{Board, BLANK};

/// Counts the non-blank tiles that are not at their goal position.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// # use bestfirst::puzzle::*;
/// let goal  = Board::goal(3, 3);
/// let board = "1 2 3 4 5 6 0 7 8".parse::<Board>().unwrap();
/// assert_eq!(2, MisplacedTiles::new(&goal).estimate(&board));
/// ```
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Board,
}
impl MisplacedTiles {
    pub fn new(goal: &Board) -> Self {
        MisplacedTiles { goal: goal.clone() }
    }
}
impl Heuristic for MisplacedTiles {
    type State = Board;

    fn estimate(&self, state: &Board) -> isize {
        state.tiles().iter()
            .zip(self.goal.tiles())
            .filter(|(tile, goal)| **tile != BLANK && tile != goal)
            .count() as isize
    }
}

/// Sums, over all non-blank tiles, the number of rows plus the number of
/// columns separating the tile from its goal position.
///
/// # Note:
/// The goal positions are computed once from the configured goal. The
/// estimated boards are expected to have the same dimensions as that goal.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// # use bestfirst::puzzle::*;
/// let goal  = Board::goal(3, 3);
/// let board = "8 6 7 2 5 4 3 0 1".parse::<Board>().unwrap();
/// assert_eq!(21, Manhattan::new(&goal).estimate(&board));
/// ```
#[derive(Debug, Clone)]
pub struct Manhattan {
    cols: usize,
    /// The goal (row, column) of each tile, indexed by tile
    targets: Vec<(usize, usize)>,
}
impl Manhattan {
    pub fn new(goal: &Board) -> Self {
        let mut targets = vec![(0, 0); goal.size()];
        for (pos, tile) in goal.tiles().iter().enumerate() {
            targets[*tile as usize] = (pos / goal.cols(), pos % goal.cols());
        }
        Manhattan { cols: goal.cols(), targets }
    }
}
impl Heuristic for Manhattan {
    type State = Board;

    fn estimate(&self, state: &Board) -> isize {
        let mut total = 0;
        for (pos, tile) in state.tiles().iter().enumerate() {
            if *tile == BLANK {
                continue;
            }
            let (row, col)   = (pos / self.cols, pos % self.cols);
            let (grow, gcol) = self.targets[*tile as usize];
            total += row.abs_diff(grow) + col.abs_diff(gcol);
        }
        total as isize
    }
}

/// The heuristics one can pick to solve a sliding tile puzzle. The choice
/// is made once, before the search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HeuristicKind {
    /// No heuristic at all: the search is a uniform cost search
    Uniform,
    /// A* with the `MisplacedTiles` heuristic
    Misplaced,
    /// A* with the `Manhattan` heuristic
    Manhattan,
}
impl HeuristicKind {
    /// All kinds, from the least to the most informed
    pub const ALL: [HeuristicKind; 3] = [HeuristicKind::Uniform, HeuristicKind::Misplaced, HeuristicKind::Manhattan];

    /// Maps the entries 1, 2 and 3 of the interactive menu onto a kind
    ///
    /// # Example
    /// ```
    /// # use bestfirst::puzzle::*;
    /// assert_eq!(Some(HeuristicKind::Uniform),   HeuristicKind::from_choice(1));
    /// assert_eq!(Some(HeuristicKind::Manhattan), HeuristicKind::from_choice(3));
    /// assert_eq!(None, HeuristicKind::from_choice(4));
    /// ```
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Instantiates the heuristic estimating the distance to `goal`
    pub fn build(self, goal: &Board) -> Box<dyn Heuristic<State = Board>> {
        match self {
            HeuristicKind::Uniform   => Box::new(ZeroHeuristic::<Board>::default()),
            HeuristicKind::Misplaced => Box::new(MisplacedTiles::new(goal)),
            HeuristicKind::Manhattan => Box::new(Manhattan::new(goal)),
        }
    }
}
impl Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Uniform   => write!(f, "Uniform Cost Search"),
            HeuristicKind::Misplaced => write!(f, "A* with the Misplaced Tile heuristic"),
            HeuristicKind::Manhattan => write!(f, "A* with the Manhattan Distance heuristic"),
        }
    }
}

#[cfg(test)]
mod test_heuristics {
    use crate::{Heuristic, puzzle::*};

    fn board(tiles: &str) -> Board {
        tiles.parse().unwrap()
    }

    #[test]
    fn the_goal_is_estimated_at_zero() {
        let goal = Board::goal(3, 3);
        for kind in HeuristicKind::ALL {
            assert_eq!(0, kind.build(&goal).estimate(&goal), "{kind}");
        }
    }

    #[test]
    fn misplaced_tiles_ignores_the_blank() {
        let goal = Board::goal(3, 3);
        let h = MisplacedTiles::new(&goal);
        assert_eq!(1, h.estimate(&board("1 2 3 4 5 6 7 0 8")));
        assert_eq!(2, h.estimate(&board("1 2 3 4 5 6 0 7 8")));
        assert_eq!(7, h.estimate(&board("8 6 7 2 5 4 3 0 1")));
    }

    #[test]
    fn manhattan_sums_the_distances_of_all_tiles() {
        let goal = Board::goal(3, 3);
        let h = Manhattan::new(&goal);
        assert_eq!(1, h.estimate(&board("1 2 3 4 5 6 7 0 8")));
        assert_eq!(2, h.estimate(&board("1 2 3 4 5 6 0 7 8")));
        // tiles 1 and 8 are swapped, each three cells away from its goal
        assert_eq!(6, h.estimate(&board("8 2 3 4 5 6 7 1 0")));
        assert_eq!(21, h.estimate(&board("8 6 7 2 5 4 3 0 1")));
    }

    #[test]
    fn manhattan_dominates_misplaced_tiles() {
        let goal = Board::goal(3, 3);
        let m = MisplacedTiles::new(&goal);
        let d = Manhattan::new(&goal);
        for b in ["8 6 7 2 5 4 3 0 1", "1 3 6 5 0 2 4 7 8", "0 7 2 4 6 1 3 5 8"] {
            let b = board(b);
            assert!(m.estimate(&b) <= d.estimate(&b));
        }
    }

    #[test]
    fn non_standard_goals_are_supported() {
        let goal = board("0 1 2 3 4 5 6 7 8");
        let h = Manhattan::new(&goal);
        assert_eq!(0, h.estimate(&goal));
        // every tile is off by one column, except 3 and 6 which also change rows
        assert_eq!(12, h.estimate(&Board::goal(3, 3)));
        assert_eq!(8, MisplacedTiles::new(&goal).estimate(&Board::goal(3, 3)));
    }

    #[test]
    fn rectangular_boards_are_supported() {
        let goal = Board::goal(2, 3);
        let h = Manhattan::new(&goal);
        let b = Board::new(2, 3, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(7, h.estimate(&b));
    }

    #[test]
    fn menu_choices_map_onto_kinds() {
        assert_eq!(None, HeuristicKind::from_choice(0));
        assert_eq!(Some(HeuristicKind::Uniform), HeuristicKind::from_choice(1));
        assert_eq!(Some(HeuristicKind::Misplaced), HeuristicKind::from_choice(2));
        assert_eq!(Some(HeuristicKind::Manhattan), HeuristicKind::from_choice(3));
        assert_eq!(None, HeuristicKind::from_choice(4));
    }

    #[test]
    fn kinds_are_displayed_with_their_full_name() {
        assert_eq!("Uniform Cost Search", HeuristicKind::Uniform.to_string());
        assert_eq!("A* with the Manhattan Distance heuristic", HeuristicKind::Manhattan.to_string());
    }
}
