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

//! This module provides the implementation of a sequential best-first solver.
//! That is a solver that will explore the search space using one single thread
//! of execution, always expanding the most promising node of its frontier.
//!
//! Depending on the heuristic it is given, the very same solver behaves as a
//! uniform cost search (with the `ZeroHeuristic`) or as an A* search.
use std::{hash::Hash, sync::Arc};

use crate::{Problem, Heuristic, Cutoff, Observer, Frontier, VisitedSet, Solver, SearchNode, NodeId, FrontierEntry, Statistics, Status, Reason, Outcome, Error, NoCutoff, EmptyObserver, SimpleFrontier, MinTotalCost, SimpleVisited, reconstruct_path};

/// The workload the solver can get from its frontier
enum WorkLoad {
    /// There is no node left to explore: the search space is exhausted
    Exhausted,
    /// The work must stop because of an external cutoff
    Aborted,
    /// The node to process
    WorkItem { node: NodeId },
}

/// A best-first search over the implicit graph described by some `Problem`.
///
/// The solver owns the arena in which all the search nodes are allocated.
/// Everything else (frontier, visited set, cutoff, observer) is borrowed so
/// that the client decides what implementation to use for each of them.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// # use bestfirst::puzzle::*;
/// let goal   = Board::goal(3, 3);
/// let board  = "1 2 3 4 5 6 0 7 8".parse::<Board>().unwrap();
/// let puzzle = SlidingPuzzle::new(board, goal.clone()).unwrap();
/// let h      = MisplacedTiles::new(&goal);
///
/// let cutoff       = NoCutoff;
/// let mut observer = EmptyObserver;
/// let mut frontier = SimpleFrontier::new(MinTotalCost);
/// let mut visited  = SimpleVisited::<Board>::default();
///
/// let mut solver = BestFirstSolver::custom(&puzzle, &h, &cutoff, &mut observer, &mut frontier, &mut visited);
/// let outcome = solver.solve().unwrap();
///
/// assert_eq!(Status::Solved, outcome.status);
/// assert_eq!(Some(2), outcome.depth());
/// ```
pub struct BestFirstSolver<'a, State> {
    /// A reference to the problem being solved
    problem: &'a (dyn Problem<State = State>),
    /// The heuristic used to estimate the remaining cost of each new node
    heuristic: &'a (dyn Heuristic<State = State>),
    /// A cutoff heuristic meant to decide when to give up the search
    cutoff: &'a (dyn Cutoff),
    /// The observer which is notified at each step of the search
    observer: &'a mut (dyn Observer<State>),
    /// This is the frontier: the set of nodes that have been generated but
    /// not popped yet.
    ///
    /// # Note:
    /// This frontier orders the nodes by total cost (so the lowest f is going
    /// to pop first). Hence, with a consistent heuristic, the first copy of
    /// a state to be popped is always reached through a cheapest path.
    frontier: &'a mut (dyn Frontier),
    /// The states that have already been expanded
    visited: &'a mut (dyn VisitedSet<State = State>),
    /// The arena of all nodes created since the search started
    nodes: Vec<SearchNode<State>>,
    /// The counters about the ongoing search
    statistics: Statistics,
    /// Where the solver is in its lifecycle
    status: Status,
}

impl<'a, State> BestFirstSolver<'a, State> {
    pub fn custom(
        problem: &'a (dyn Problem<State = State>),
        heuristic: &'a (dyn Heuristic<State = State>),
        cutoff: &'a (dyn Cutoff),
        observer: &'a mut (dyn Observer<State>),
        frontier: &'a mut (dyn Frontier),
        visited: &'a mut (dyn VisitedSet<State = State>),
    ) -> Self {
        BestFirstSolver {
            problem,
            heuristic,
            cutoff,
            observer,
            frontier,
            visited,
            //
            nodes: vec![],
            statistics: Statistics::default(),
            status: Status::Ready,
        }
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method posts the root node onto the frontier so that the processing can
    /// be bootstrapped. Whatever was left over by a previous search is dropped.
    fn initialize(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.nodes.clear();
        self.statistics = Statistics::default();

        let state    = self.problem.initial_state();
        let estimate = self.heuristic.estimate(&state);
        let root     = SearchNode::root(state, estimate);
        allocate(&mut self.nodes, &mut *self.frontier, &mut self.statistics, root);

        self.status = Status::Running;
    }

    /// Consults the frontier to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Exhausted, when there is no node left on the frontier
    ///   + Aborted, when the cutoff criterion is met
    ///   + WorkItem, when the solver successfully obtained a node to process.
    fn get_workload(&mut self) -> Result<WorkLoad, Error> {
        if self.frontier.is_empty() {
            return Ok(WorkLoad::Exhausted);
        }
        if self.cutoff.must_stop(&self.statistics) {
            return Ok(WorkLoad::Aborted);
        }

        let size = self.frontier.len();
        self.statistics.max_frontier_size = self.statistics.max_frontier_size.max(size);

        let entry = self.frontier.pop().ok_or(Error::FrontierUnderflow(size))?;
        Ok(WorkLoad::WorkItem { node: entry.node })
    }

    /// This method processes the given node. It returns true iff that node
    /// reaches a goal state. Otherwise, and unless its state has already
    /// been expanded, the node is expanded and its children are pushed onto
    /// the frontier.
    ///
    /// # Note:
    /// The goal test happens *before* the visited check.
    fn process_one_node(&mut self, id: NodeId) -> bool {
        let node = self.nodes[id.id()].clone();
        self.observer.on_pop(&node);

        if self.problem.is_goal(&node.state) {
            return true;
        }
        if self.visited.contains(&node.state) {
            self.statistics.duplicates_skipped += 1;
            self.observer.on_skip(&node);
            return false;
        }

        self.visited.insert(Arc::clone(&node.state));
        self.statistics.nodes_expanded += 1;
        self.observer.on_expand(&node, &self.statistics);

        self.expand(id, &node);
        false
    }

    /// Generates all the children of `node` (identified by `id` in the arena),
    /// scores them with the heuristic and posts them on the frontier.
    fn expand(&mut self, id: NodeId, node: &SearchNode<State>) {
        let problem    = self.problem;
        let heuristic  = self.heuristic;
        let nodes      = &mut self.nodes;
        let frontier   = &mut *self.frontier;
        let statistics = &mut self.statistics;

        problem.for_each_successor(&node.state, &mut |state: State, cost: isize| {
            let estimate = heuristic.estimate(&state);
            let child = SearchNode {
                state: Arc::new(state),
                cost: node.cost + cost,
                estimate,
                parent: Some(id),
                depth: node.depth + 1,
            };
            allocate(nodes, frontier, statistics, child);
        });
    }

    /// Packs the result of the search. This is also where the arena and the
    /// frontier are released: the returned path owns everything it needs.
    fn finish(&mut self, goal: Option<NodeId>) -> Outcome<State> {
        let path = goal.map(|id| reconstruct_path(&self.nodes, id));
        self.nodes = vec![];
        self.frontier.clear();

        Outcome { status: self.status, path, statistics: self.statistics }
    }
}

/// Appends a node to the arena and posts a reference to it on the frontier.
fn allocate<T>(nodes: &mut Vec<SearchNode<T>>, frontier: &mut dyn Frontier, statistics: &mut Statistics, node: SearchNode<T>) {
    let id = NodeId(nodes.len());
    frontier.push(FrontierEntry { node: id, total_cost: node.total_cost() });
    nodes.push(node);
    statistics.nodes_generated += 1;
}

impl<'a, State> Solver for BestFirstSolver<'a, State> {
    type State = State;

    /// Applies the best-first search algorithm: the solver repeatedly pops the
    /// most promising node off its frontier, stops if it is a goal, and expands
    /// it otherwise (unless its state has already been expanded).
    fn solve(&mut self) -> Result<Outcome<State>, Error> {
        self.initialize();

        loop {
            match self.get_workload()? {
                WorkLoad::Exhausted => {
                    self.status = Status::Exhausted;
                    return Ok(self.finish(None));
                },
                WorkLoad::Aborted => {
                    self.status = Status::Aborted(Reason::CutoffOccurred);
                    return Ok(self.finish(None));
                },
                WorkLoad::WorkItem { node } => {
                    if self.process_one_node(node) {
                        self.status = Status::Solved;
                        return Ok(self.finish(Some(node)));
                    }
                }
            }
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn statistics(&self) -> Statistics {
        self.statistics
    }
}

/// Solves the given problem with the default configuration: a `SimpleFrontier`
/// ordered by `MinTotalCost`, a `SimpleVisited` set, no cutoff and no observer.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// # use bestfirst::puzzle::*;
/// let goal   = Board::goal(3, 3);
/// let puzzle = SlidingPuzzle::new(goal.clone(), goal.clone()).unwrap();
/// let outcome = solve(&puzzle, &ZeroHeuristic::<Board>::default()).unwrap();
///
/// assert!(outcome.is_solved());
/// assert_eq!(Some(0), outcome.depth());
/// assert_eq!(0, outcome.statistics.nodes_expanded);
/// ```
pub fn solve<State>(
    problem: &dyn Problem<State = State>,
    heuristic: &dyn Heuristic<State = State>,
) -> Result<Outcome<State>, Error>
where State: Eq + Hash
{
    let cutoff       = NoCutoff;
    let mut observer = EmptyObserver;
    let mut frontier = SimpleFrontier::new(MinTotalCost);
    let mut visited  = SimpleVisited::<State>::default();

    let mut solver = BestFirstSolver::custom(problem, heuristic, &cutoff, &mut observer, &mut frontier, &mut visited);
    solver.solve()
}
