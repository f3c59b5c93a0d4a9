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

//! This module defines the traits used to encapsulate solver heuristics.
//!
//! Namely, it defines :
//!
//!  - the `Heuristic` which estimates the remaining cost from a state to a goal
//!  - the `FrontierRanking` heuristic which is used to decide what node is the
//!    next one to be popped off the frontier
//!  - the `Cutoff` heuristic which is used to impose a stopping criterion on the
//!    solver resolution.

use std::cmp::Ordering;

use crate::{FrontierEntry, Statistics};

/// A heuristic estimates the cost of the cheapest path from some given state
/// to a goal state. It is computed once for every generated node.
///
/// # Note:
/// The solvers only guarantee the optimality of the returned solution when
/// the heuristic is both
///
/// * *admissible*: it never overestimates the true remaining cost; and
/// * *consistent*: for every transition `s -> s'` of cost `c`, we have
///   `estimate(s) <= c + estimate(s')`.
///
/// The latter property is required because states are never re-opened once
/// they have been expanded.
pub trait Heuristic {
    /// As is the case for `Problem`, a `Heuristic` must tell the kind of
    /// states it is able to operate on.
    type State;

    /// Returns a non-negative estimate of the cost to reach a goal from `state`.
    /// This method must be free of side effects.
    fn estimate(&self, state: &Self::State) -> isize;
}

/// A frontier ranking is an heuristic that imposes a total order on the
/// entries of the solver frontier. This order is used by the framework as
/// a means to impose a given ordering on the nodes that are popped from the
/// solver frontier.
pub trait FrontierRanking {
    /// This method compares two entries and determines which is the one that
    /// needs to be popped off the frontier first. In this ordering, greater
    /// means more likely to be popped first.
    ///
    /// # Note:
    /// The ranking must never consider two distinct entries as equal: this is
    /// how the search traces are kept reproducible from one run to the next.
    fn compare(&self, a: &FrontierEntry, b: &FrontierEntry) -> Ordering;
}

/// This trait encapsulates a criterion (external to the solver) which imposes
/// to stop searching. Typically, this is done to grant a given time or node
/// budget to the search. The criterion is checked once per iteration, before
/// anything is popped off the frontier.
pub trait Cutoff {
    /// Returns true iff the criterion is met and the search must stop.
    fn must_stop(&self, statistics: &Statistics) -> bool;
}
