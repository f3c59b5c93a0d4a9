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

//! This module defines the `Solver` trait.

use crate::{Outcome, Statistics, Status, Error};

/// This is the solver abstraction. It is implemented by a structure that
/// implements a best-first search (or possibly an other search algorithm)
/// to find the cheapest path from the initial state of a problem to one of
/// its goal states.
pub trait Solver {
    /// The kind of states explored by this solver
    type State;

    /// This method orders the solver to search for the cheapest path to a
    /// goal. It returns a structure standing for the outcome of the search.
    /// Three cases are to be distinguished:
    ///
    /// * When the status is `Solved`, the outcome comprises the sequence of
    ///   nodes from the root to the goal.
    /// * When the status is `Exhausted`, all states reachable from the root
    ///   have been expanded without ever meeting a goal: there is no solution.
    /// * When the status is `Aborted`, the search was stopped by a cutoff and
    ///   nothing can be concluded.
    ///
    /// An error is only ever returned when an internal invariant is violated.
    fn solve(&mut self) -> Result<Outcome<Self::State>, Error>;
    /// Returns the current status of the solver
    fn status(&self) -> Status;
    /// Returns the statistics gathered so far
    fn statistics(&self) -> Statistics;
}
