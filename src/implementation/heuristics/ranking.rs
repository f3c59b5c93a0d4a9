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

//! This module provides the implementation of the frontier rankings that are
//! used to set the ordering of the solver frontier.

use std::cmp::Ordering;

use crate::{FrontierRanking, FrontierEntry};

/// The MinTotalCost strategy is one that always selects the entry having the
/// lowest total cost (f = g + h) in the frontier. In case of equalities, the
/// ties are broken in insertion order: the entry which has been created first
/// is popped first.
///
/// # Note
/// Node ids are handed out by the solver arena in creation order, which is
/// also the order in which nodes are pushed onto the frontier. Comparing
/// ids is thus the same as comparing insertion sequence numbers.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// let a = FrontierEntry { node: NodeId(0), total_cost: 30 };
/// let b = FrontierEntry { node: NodeId(1), total_cost: 10 };
/// let c = FrontierEntry { node: NodeId(2), total_cost: 15 };
/// let d = FrontierEntry { node: NodeId(3), total_cost: 10 };
///
/// let mut priority_q = SimpleFrontier::new(MinTotalCost);
/// priority_q.push(a);
/// priority_q.push(b);
/// priority_q.push(c);
/// priority_q.push(d);
///
/// assert_eq!(NodeId(1), priority_q.pop().unwrap().node); // because 10 is the lowest total cost
/// assert_eq!(NodeId(3), priority_q.pop().unwrap().node); // idem, but it was pushed after 'b'
/// assert_eq!(NodeId(2), priority_q.pop().unwrap().node); // because 15 is the next lowest
/// assert_eq!(NodeId(0), priority_q.pop().unwrap().node); // because 30 is the worst
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MinTotalCost;
impl FrontierRanking for MinTotalCost {
    fn compare(&self, l: &FrontierEntry, r: &FrontierEntry) -> Ordering {
        r.total_cost.cmp(&l.total_cost)
            .then_with(|| r.node.cmp(&l.node))
    }
}


#[cfg(test)]
mod test_min_total_cost {
    use std::cmp::Ordering;

    use binary_heap_plus::BinaryHeap;

    use crate::*;

    fn entry(id: usize, total_cost: isize) -> FrontierEntry {
        FrontierEntry { node: NodeId(id), total_cost }
    }

    #[test]
    fn example() {
        let nodes = vec![entry(0, 30), entry(1, 10), entry(2, 15), entry(3, 10), entry(4, 0), entry(5, 15)];
        let mut priority_q = BinaryHeap::from_vec_cmp(nodes, CompareEntry::new(MinTotalCost));

        assert_eq!(NodeId(4), priority_q.pop().unwrap().node); // because 0 is the lowest total cost
        assert_eq!(NodeId(1), priority_q.pop().unwrap().node); // because 10 is the next lowest
        assert_eq!(NodeId(3), priority_q.pop().unwrap().node); // idem, but created after 1
        assert_eq!(NodeId(2), priority_q.pop().unwrap().node); // because 15
        assert_eq!(NodeId(5), priority_q.pop().unwrap().node); // idem, but created after 2
        assert_eq!(NodeId(0), priority_q.pop().unwrap().node); // because 30 is the worst
    }

    #[test]
    fn gt_because_total_cost() {
        let cmp = MinTotalCost;
        assert_eq!(Ordering::Greater, cmp.compare(&entry(1, 10), &entry(0, 20)));
    }
    #[test]
    fn gt_because_insertion_order() {
        let cmp = MinTotalCost;
        assert_eq!(Ordering::Greater, cmp.compare(&entry(0, 10), &entry(1, 10)));
    }
    #[test]
    fn lt_because_total_cost() {
        let cmp = MinTotalCost;
        assert_eq!(Ordering::Less, cmp.compare(&entry(0, 20), &entry(1, 10)));
    }
    #[test]
    fn lt_because_insertion_order() {
        let cmp = MinTotalCost;
        assert_eq!(Ordering::Less, cmp.compare(&entry(1, 10), &entry(0, 10)));
    }
    #[test]
    fn eq_self() {
        let cmp = MinTotalCost;
        assert_eq!(Ordering::Equal, cmp.compare(&entry(1, 10), &entry(1, 10)));
    }
}
