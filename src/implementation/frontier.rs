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

//! This module provides the implementation of a simple solver frontier (priority queue)

use binary_heap_plus::BinaryHeap;

use crate::*;


/// The simplest frontier implementation you can think of: is basically consists
/// of a binary heap that pushes and pops frontier entries
///
/// # Note
/// This is the default type of frontier used by the solver. Hence, you don't
/// need to take any action in order to use the `SimpleFrontier`.
///
pub struct SimpleFrontier<O: FrontierRanking> {
    heap: BinaryHeap<FrontierEntry, CompareEntry<O>>
}
impl <O> SimpleFrontier<O> where O: FrontierRanking {
    /// This creates a new simple frontier which uses a custom order.
    pub fn new(o: O) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], CompareEntry::new(o)) }
    }
}
impl Default for SimpleFrontier<MinTotalCost> {
    fn default() -> Self {
        Self::new(MinTotalCost)
    }
}
impl <O> Frontier for SimpleFrontier<O> where O: FrontierRanking {
    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry)
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}


#[cfg(test)]
mod test_simple_frontier {
    use crate::*;

    fn entry(id: usize, total_cost: isize) -> FrontierEntry {
        FrontierEntry { node: NodeId(id), total_cost }
    }

    // by default, it is empty
    #[test]
    fn by_default_it_is_empty() {
        let front = SimpleFrontier::<MinTotalCost>::default();
        assert!(front.is_empty())
    }

    // when the size is zero, then it is empty
    #[test]
    fn when_the_size_is_zero_then_it_is_empty() {
        let front = SimpleFrontier::new(MinTotalCost);
        assert_eq!(front.len(), 0);
        assert!(front.is_empty());
    }

    // when the size is greater than zero, it it not empty
    #[test]
    fn when_the_size_is_greater_than_zero_it_is_not_empty() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        front.push(entry(0, 10));
        assert_eq!(front.len(), 1);
        assert!(!front.is_empty());
    }

    // when I push a node onto the frontier then the length increases
    #[test]
    fn when_i_push_a_node_onto_the_frontier_then_the_length_increases() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        front.push(entry(0, 10));
        front.push(entry(1, 20));
        assert_eq!(front.len(), 2);
    }

    // when I pop a node off the frontier then the length decreases
    #[test]
    fn when_i_pop_a_node_off_the_frontier_then_the_length_decreases() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        front.push(entry(0, 10));
        front.push(entry(1, 20));

        assert_eq!(front.len(), 2);
        front.pop();
        assert_eq!(front.len(), 1);
        front.pop();
        assert_eq!(front.len(), 0);
    }

    // when I try to pop a node off an empty frontier, I get none
    #[test]
    fn when_i_try_to_pop_a_node_off_an_empty_frontier_i_get_none() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        assert!(front.pop().is_none());
    }

    // when I pop a node, it is always the one with the lowest total cost
    #[test]
    fn when_i_pop_a_node_it_is_always_the_one_with_the_lowest_total_cost() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        front.push(entry(0, 5));
        front.push(entry(1, 4));
        front.push(entry(2, 3));
        front.push(entry(3, 2));
        front.push(entry(4, 1));
        front.push(entry(5, 0));

        assert_eq!(front.pop().unwrap().node, NodeId(5));
        assert_eq!(front.pop().unwrap().node, NodeId(4));
        assert_eq!(front.pop().unwrap().node, NodeId(3));
        assert_eq!(front.pop().unwrap().node, NodeId(2));
        assert_eq!(front.pop().unwrap().node, NodeId(1));
        assert_eq!(front.pop().unwrap().node, NodeId(0));
    }

    // when two nodes have the same total cost, the first pushed is the first popped
    #[test]
    fn when_two_nodes_have_the_same_total_cost_they_pop_in_insertion_order() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        for id in 0..20 {
            front.push(entry(id, 7));
        }
        for id in 0..20 {
            assert_eq!(front.pop().unwrap().node, NodeId(id));
        }
    }

    // when I clear an empty frontier, it remains empty
    #[test]
    fn when_i_clear_an_empty_frontier_it_remains_empty() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        assert!(front.is_empty());
        front.clear();
        assert!(front.is_empty());
    }

    // when I clear a non empty frontier it becomes empty
    #[test]
    fn when_i_clear_a_non_empty_frontier_it_becomes_empty() {
        let mut front = SimpleFrontier::new(MinTotalCost);
        front.push(entry(0, 5));

        assert!(!front.is_empty());
        front.clear();
        assert!(front.is_empty());
    }
}
