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

//! This module defines the sliding tile puzzle as a search problem: the goal
//! is whatever board the puzzle was configured with, and every move of the
//! blank costs one unit.

use crate::{Problem, SuccessorCallback};

use super::{Board, BoardError};

/// A sliding tile puzzle instance: an initial board and the goal to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingPuzzle {
    initial: Board,
    goal   : Board,
}

impl SlidingPuzzle {
    /// Creates a new instance, provided that both boards have the same
    /// dimensions.
    ///
    /// # Example
    /// ```
    /// # use bestfirst::puzzle::*;
    /// assert!(SlidingPuzzle::new(Board::goal(3, 3), Board::goal(3, 3)).is_ok());
    /// assert!(SlidingPuzzle::new(Board::goal(2, 2), Board::goal(3, 3)).is_err());
    /// ```
    pub fn new(initial: Board, goal: Board) -> Result<Self, BoardError> {
        if initial.rows() != goal.rows() || initial.cols() != goal.cols() {
            return Err(BoardError::DimensionMismatch(initial.rows(), initial.cols(), goal.rows(), goal.cols()));
        }
        Ok(SlidingPuzzle { initial, goal })
    }
    /// The board the search starts from
    pub fn initial(&self) -> &Board {
        &self.initial
    }
    /// The board the search must reach
    pub fn goal(&self) -> &Board {
        &self.goal
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn for_each_successor(&self, state: &Board, f: &mut dyn SuccessorCallback<Board>) {
        for (_, next) in state.successors() {
            f.apply(next, 1);
        }
    }
}
