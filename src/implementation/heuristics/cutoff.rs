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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to bound the effort spent by a solver.

use std::{sync::{Arc, atomic::AtomicBool}, time::Duration};

use crate::{Cutoff, Statistics};

/// _This is the default cutoff heuristic._ It imposes that the search goes
/// on until a goal is found or the frontier is exhausted.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self, _: &Statistics) -> bool {false}
}

/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the search stops and reports that it has
/// been aborted.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// # use bestfirst::puzzle::*;
/// use std::time::Duration;
///
/// let goal   = Board::goal(3, 3);
/// let board  = "8 6 7 2 5 4 3 0 1".parse::<Board>().unwrap();
/// let puzzle = SlidingPuzzle::new(board, goal.clone()).unwrap();
/// let h      = Manhattan::new(&goal);
/// let cutoff = TimeBudget::new(Duration::from_secs(10));
/// let mut observer = EmptyObserver;
/// let mut frontier = SimpleFrontier::new(MinTotalCost);
/// let mut visited  = SimpleVisited::<Board>::default();
///
/// let mut solver = BestFirstSolver::custom(&puzzle, &h, &cutoff, &mut observer, &mut frontier, &mut visited);
/// let outcome = solver.solve().unwrap(); // will run for maximum 10 seconds
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    stop  : Arc<AtomicBool>
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        let stop   = Arc::new(AtomicBool::new(false));
        let t_flag = Arc::clone(&stop);

        // timer
        std::thread::spawn(move || {
            std::thread::sleep(budget);
            t_flag.store(true, std::sync::atomic::Ordering::Relaxed);
        });

        TimeBudget { stop }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self, _: &Statistics) -> bool {
        self.stop.load(std::sync::atomic::Ordering::Relaxed)
    }
}

/// This cutoff limits the number of nodes a solver may expand. The search is
/// aborted as soon as the given number of expansions has been performed
/// without reaching a conclusion.
#[derive(Debug, Copy, Clone)]
pub struct NodeBudget(pub usize);
impl Cutoff for NodeBudget {
    fn must_stop(&self, statistics: &Statistics) -> bool {
        statistics.nodes_expanded >= self.0
    }
}

/// A pair of cutoffs stops the search as soon as either of them would.
impl <A: Cutoff, B: Cutoff> Cutoff for (A, B) {
    fn must_stop(&self, statistics: &Statistics) -> bool {
        self.0.must_stop(statistics) || self.1.must_stop(statistics)
    }
}

#[cfg(test)]
mod test_cutoff {
    use std::time::Duration;

    use crate::*;

    fn expanded(nodes_expanded: usize) -> Statistics {
        Statistics { nodes_expanded, ..Statistics::default() }
    }

    #[test]
    fn no_cutoff_never_stops() {
        assert!(!NoCutoff.must_stop(&expanded(0)));
        assert!(!NoCutoff.must_stop(&expanded(usize::MAX)));
    }

    #[test]
    fn node_budget_stops_once_the_budget_is_spent() {
        let cutoff = NodeBudget(10);
        assert!(!cutoff.must_stop(&expanded(0)));
        assert!(!cutoff.must_stop(&expanded(9)));
        assert!(cutoff.must_stop(&expanded(10)));
        assert!(cutoff.must_stop(&expanded(11)));
    }

    #[test]
    fn time_budget_stops_once_the_time_is_elapsed() {
        let cutoff = TimeBudget::new(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(200));
        assert!(cutoff.must_stop(&expanded(0)));
    }

    #[test]
    fn time_budget_does_not_stop_before_the_time_is_elapsed() {
        let cutoff = TimeBudget::new(Duration::from_secs(3600));
        assert!(!cutoff.must_stop(&expanded(0)));
    }

    #[test]
    fn a_pair_stops_as_soon_as_either_member_does() {
        let cutoff = (NoCutoff, NodeBudget(2));
        assert!(!cutoff.must_stop(&expanded(1)));
        assert!(cutoff.must_stop(&expanded(2)));

        let cutoff = (NodeBudget(2), NoCutoff);
        assert!(cutoff.must_stop(&expanded(2)));
    }
}
