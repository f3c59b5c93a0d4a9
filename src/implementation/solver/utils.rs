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

//! This module contains the implementation of some utilities that are useful
//! when implementing a solver. In particular, it provides the reconstruction
//! of a solution path out of the arena of search nodes.

use crate::{NodeId, SearchNode};

/// Follows the parent links from the `goal` node up to the root of the search
/// tree and returns the visited nodes in root-to-goal order. The returned path
/// holds exactly `depth + 1` nodes; the first one is the root.
///
/// # Example
/// ```
/// # use std::sync::Arc;
/// # use bestfirst::*;
/// let arena = vec![
///     SearchNode { state: Arc::new('a'), cost: 0, estimate: 2, parent: None,            depth: 0 },
///     SearchNode { state: Arc::new('b'), cost: 1, estimate: 1, parent: Some(NodeId(0)), depth: 1 },
///     SearchNode { state: Arc::new('c'), cost: 3, estimate: 0, parent: Some(NodeId(0)), depth: 1 },
///     SearchNode { state: Arc::new('d'), cost: 2, estimate: 0, parent: Some(NodeId(1)), depth: 2 },
/// ];
/// let path = reconstruct_path(&arena, NodeId(3));
/// let states = path.iter().map(|n| *n.state).collect::<String>();
/// assert_eq!("abd", states);
/// ```
pub fn reconstruct_path<T>(arena: &[SearchNode<T>], goal: NodeId) -> Vec<SearchNode<T>> {
    let mut path = Vec::with_capacity(arena[goal.id()].depth + 1);
    let mut current = Some(goal);
    while let Some(id) = current {
        let node = &arena[id.id()];
        path.push(node.clone());
        current = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod test_reconstruct_path {
    use std::sync::Arc;

    use crate::*;

    fn node(state: char, cost: isize, parent: Option<usize>, depth: usize) -> SearchNode<char> {
        SearchNode { state: Arc::new(state), cost, estimate: 0, parent: parent.map(NodeId), depth }
    }

    #[test]
    fn the_path_to_the_root_is_the_root_alone() {
        let arena = vec![node('a', 0, None, 0)];
        let path = reconstruct_path(&arena, NodeId(0));
        assert_eq!(1, path.len());
        assert!(path[0].is_root());
    }

    #[test]
    fn the_path_goes_from_the_root_to_the_goal() {
        let arena = vec![
            node('a', 0, None, 0),
            node('b', 1, Some(0), 1),
            node('c', 1, Some(0), 1),
            node('d', 2, Some(2), 2),
            node('e', 3, Some(3), 3),
        ];
        let path = reconstruct_path(&arena, NodeId(4));
        let states = path.iter().map(|n| *n.state).collect::<Vec<_>>();
        assert_eq!(vec!['a', 'c', 'd', 'e'], states);
    }

    #[test]
    fn the_path_length_is_the_depth_plus_one_and_starts_with_zero_cost() {
        let arena = vec![
            node('a', 0, None, 0),
            node('b', 1, Some(0), 1),
            node('c', 2, Some(1), 2),
        ];
        let path = reconstruct_path(&arena, NodeId(2));
        assert_eq!(arena[2].depth + 1, path.len());
        assert_eq!(0, path[0].cost);
        assert!(path[0].parent.is_none());
    }
}
