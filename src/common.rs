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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.
//!
//! In particular, this module comprises the definition of the following types:
//! - `NodeId`
//! - `SearchNode`
//! - `FrontierEntry`
//! - `Statistics`
//! - `Status` and `Reason`
//! - `Outcome`
//! - `Error`

use std::sync::Arc;

// ----------------------------------------------------------------------------
// --- NODE ID ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This is a type-safe identifier for some search node. Basically, it equates
/// to the position of the identified node in the arena of nodes that is
/// maintained by the solver. Because nodes are only ever appended to that
/// arena, the ids are handed out in creation order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub usize);
impl NodeId {
    #[inline]
    /// This function returns the id (numeric value) of the node.
    ///
    /// # Examples:
    /// ```
    /// # use bestfirst::NodeId;
    /// assert_eq!(0, NodeId(0).id());
    /// assert_eq!(1, NodeId(1).id());
    /// assert_eq!(2, NodeId(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- SEARCH NODE ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A search node wraps one state of the explored graph along with the cost of
/// the path that was followed to reach it (g), the heuristic estimate of the
/// remaining cost to the goal (h) and a link to the node it was generated from.
///
/// # Note:
/// The parent link is a `NodeId` (an index in the solver's arena), not a
/// pointer. Since a parent is always allocated before any of its children,
/// the parent links can only ever describe a tree rooted in the initial node.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchNode<T> {
    /// The state reached by this node
    pub state: Arc<T>,
    /// The cost of the path from the root to this node (aka. g)
    pub cost: isize,
    /// The heuristic estimate of the cost from this node to the goal (aka. h)
    pub estimate: isize,
    /// The node from which this one was generated (none for the root)
    pub parent: Option<NodeId>,
    /// The number of transitions between the root and this node
    pub depth: usize,
}
impl <T> SearchNode<T> {
    /// Creates the root node of a search
    pub fn root(state: T, estimate: isize) -> Self {
        SearchNode { state: Arc::new(state), cost: 0, estimate, parent: None, depth: 0 }
    }
    /// The total estimated cost of a solution going through this node (aka. f = g + h)
    ///
    /// # Example
    /// ```
    /// # use bestfirst::SearchNode;
    /// let node = SearchNode::root('a', 12);
    /// assert_eq!(12, node.total_cost());
    /// ```
    pub fn total_cost(&self) -> isize {
        self.cost + self.estimate
    }
    /// Returns true iff this node is the root of the search tree
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
// not derived: cloning a node must not require the state to be clonable
impl <T> Clone for SearchNode<T> {
    fn clone(&self) -> Self {
        SearchNode {
            state   : Arc::clone(&self.state),
            cost    : self.cost,
            estimate: self.estimate,
            parent  : self.parent,
            depth   : self.depth,
        }
    }
}

// ----------------------------------------------------------------------------
// --- FRONTIER ENTRY ---------------------------------------------------------
// ----------------------------------------------------------------------------
/// This is what the frontier actually orders: a reference to some node of
/// the arena along with its priority. The frontier never owns the nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrontierEntry {
    /// The identifier of the node in the solver arena
    pub node: NodeId,
    /// The total cost (f = g + h) of the identified node
    pub total_cost: isize,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The counters maintained by a solver while it explores the search space.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Statistics {
    /// The number of nodes that have been passed on to the successor generator
    pub nodes_expanded: usize,
    /// The largest number of entries the frontier has held at once
    pub max_frontier_size: usize,
    /// The number of nodes that have been created (root included)
    pub nodes_generated: usize,
    /// The number of nodes that were popped but dropped because their state
    /// had already been expanded
    pub duplicates_skipped: usize,
}

/// A reason explaining why the search stopped before it could complete
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The lifecycle of a solver:
/// `Ready -> Running -> {Solved, Exhausted, Aborted}`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    /// The solver has been created but the search has not started yet
    Ready,
    /// The search is in progress
    Running,
    /// A goal node has been popped off the frontier
    Solved,
    /// The frontier has been emptied without ever reaching the goal. This is
    /// a normal outcome: it proves there is no solution.
    Exhausted,
    /// The search was interrupted before it could reach a conclusion
    Aborted(Reason),
}
impl Status {
    /// Returns true iff the status is one where the solver has stopped
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Ready | Status::Running)
    }
}

/// The outcome of a search
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    /// How the search ended
    pub status: Status,
    /// The sequence of nodes from the root to the goal (only when solved)
    pub path: Option<Vec<SearchNode<T>>>,
    /// The statistics that were gathered during the search
    pub statistics: Statistics,
}
impl <T> Outcome<T> {
    /// Returns true iff a solution has been found
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }
    /// The number of transitions in the solution (if there is one)
    pub fn depth(&self) -> Option<usize> {
        self.path.as_ref().and_then(|p| p.last()).map(|n| n.depth)
    }
    /// The cost of the solution (if there is one)
    pub fn cost(&self) -> Option<isize> {
        self.path.as_ref().and_then(|p| p.last()).map(|n| n.cost)
    }
}

/// The errors a solver may report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The frontier failed to yield a node even though it was not empty. This
    /// is an internal invariant breach, it should never be observed.
    #[error("the frontier yielded no node although it holds {0} entries")]
    FrontierUnderflow(usize),
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_node {
    use std::sync::Arc;

    use crate::{NodeId, SearchNode, Outcome, Status, Statistics, Reason};

    #[test]
    fn test_node_id() {
        assert_eq!(0, NodeId(0).id());
        assert_eq!(1, NodeId(1).id());
        assert_eq!(2, NodeId(2).id());
        assert_eq!(3, NodeId(3).id());
    }

    #[test]
    fn the_root_has_no_parent_and_zero_cost() {
        let root = SearchNode::root('a', 7);
        assert!(root.is_root());
        assert_eq!(0, root.cost);
        assert_eq!(0, root.depth);
        assert_eq!(7, root.estimate);
    }

    #[test]
    fn total_cost_is_the_sum_of_cost_and_estimate() {
        let node = SearchNode { state: Arc::new('a'), cost: 3, estimate: 4, parent: Some(NodeId(0)), depth: 3 };
        assert_eq!(7, node.total_cost());
        assert!(!node.is_root());
    }

    #[test]
    fn cloning_a_node_shares_its_state() {
        let node = SearchNode::root(vec![1, 2, 3], 0);
        let copy = node.clone();
        assert!(Arc::ptr_eq(&node.state, &copy.state));
        assert_eq!(node, copy);
    }

    #[test]
    fn only_solved_exhausted_and_aborted_are_terminal() {
        assert!(!Status::Ready.is_terminal());
        assert!(!Status::Running.is_terminal());
        assert!(Status::Solved.is_terminal());
        assert!(Status::Exhausted.is_terminal());
        assert!(Status::Aborted(Reason::CutoffOccurred).is_terminal());
    }

    #[test]
    fn an_unsolved_outcome_has_neither_depth_nor_cost() {
        let outcome = Outcome::<char> { status: Status::Exhausted, path: None, statistics: Statistics::default() };
        assert!(!outcome.is_solved());
        assert_eq!(None, outcome.depth());
        assert_eq!(None, outcome.cost());
    }

    #[test]
    fn depth_and_cost_are_read_from_the_last_node_of_the_path() {
        let root = SearchNode::root('a', 2);
        let goal = SearchNode { state: Arc::new('b'), cost: 5, estimate: 0, parent: Some(NodeId(0)), depth: 1 };
        let outcome = Outcome { status: Status::Solved, path: Some(vec![root, goal]), statistics: Statistics::default() };
        assert!(outcome.is_solved());
        assert_eq!(Some(1), outcome.depth());
        assert_eq!(Some(5), outcome.cost());
    }
}
