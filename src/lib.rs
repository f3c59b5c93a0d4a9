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

//! # BestFirst
//! BestFirst is a generic framework to solve shortest path problems over
//! implicit graphs with a best-first search. You describe your problem as a
//! transition system (see `Problem`): an initial state, a goal test and a
//! successor function which yields the neighbours of a state along with the
//! cost of reaching them. You then pick a `Heuristic` estimating the remaining
//! cost from any state to the goal, and the solver does the rest.
//!
//! With the `ZeroHeuristic`, the search is a uniform cost search. With an
//! admissible and consistent heuristic, it is an A* search. Either way, the
//! first path the solver finds is a cheapest one.
//!
//! ## Quick Example
//! The following presents a minimalistic use of the library. It looks for the
//! cheapest way to count from 0 up to some target, when adding one costs one
//! unit and doubling costs two units.
//!
//! ```
//! # use bestfirst::*;
//! #
//! struct Counting { target: usize }
//! impl Problem for Counting {
//!     type State = usize;
//!
//!     fn initial_state(&self) -> usize {
//!         1
//!     }
//!     fn is_goal(&self, state: &usize) -> bool {
//!         *state == self.target
//!     }
//!     fn for_each_successor(&self, state: &usize, f: &mut dyn SuccessorCallback<usize>) {
//!         if *state < self.target {
//!             f.apply(state + 1, 1);
//!         }
//!         if 2 * state <= self.target {
//!             f.apply(2 * state, 2);
//!         }
//!     }
//! }
//!
//! let problem = Counting { target: 10 };
//! let outcome = solve(&problem, &ZeroHeuristic::<usize>::default()).unwrap();
//!
//! // e.g. 1 -> 2 -> 4 -> 5 -> 10
//! assert_eq!(Status::Solved, outcome.status);
//! assert_eq!(Some(6), outcome.cost());
//! ```
//!
//! ## Sliding tile puzzles
//! The `puzzle` module instantiates the framework on the sliding tile puzzles
//! (the 8-puzzle and its siblings). It is also what the `bestfirst` binary
//! solves.
//!
//! ```
//! # use bestfirst::*;
//! # use bestfirst::puzzle::*;
//! let goal  = Board::goal(3, 3);
//! let board = "1 3 6 5 0 2 4 7 8".parse::<Board>().unwrap();
//!
//! let outcome = solve_board(&board, &goal, HeuristicKind::Manhattan).unwrap();
//! let report  = Report::new(&outcome).as_text(&ReportConfig::default());
//!
//! assert_eq!(Some(8), outcome.depth());
//! assert!(report.contains("Solution depth: 8"));
//! ```

mod common;
mod abstraction;
mod implementation;

pub mod puzzle;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
