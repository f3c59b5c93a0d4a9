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

//! This module provide some convenient utilities to work with used defined heuristics.

use std::cmp::Ordering;

use compare::Compare;

use crate::{FrontierRanking, FrontierEntry};

/// This is a thin wrapper to convert a FrontierRanking into a `Compare`
/// object as is sometimes required (e.g. to configure the order in a binary heap)
///
/// This struct has no behavior of its own: it simply delegates to the
/// underlying implementation.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// # use binary_heap_plus::BinaryHeap;
/// // This allows to compare two frontier entries, ordering them in best first order
/// let comparator = CompareEntry::new(MinTotalCost);
///
/// // And that comparator can in turn be used to parameterize the behavior
/// // of a heap (for instance).
/// let mut heap = BinaryHeap::from_vec_cmp(vec![], comparator);
/// heap.push(FrontierEntry { node: NodeId(0), total_cost: 8 });
/// heap.push(FrontierEntry { node: NodeId(1), total_cost: 5 });
/// assert_eq!(NodeId(1), heap.pop().unwrap().node);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareEntry<X: FrontierRanking>(X);
impl <X: FrontierRanking> CompareEntry<X> {
    /// Creates a new instance
    pub fn new(x: X) -> Self {
        Self(x)
    }
}
impl <X: FrontierRanking> Compare<FrontierEntry> for CompareEntry<X> {
    fn compare(&self, l: &FrontierEntry, r: &FrontierEntry) -> Ordering {
        self.0.compare(l, r)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;
    use compare::Compare;
    use crate::{FrontierRanking, FrontierEntry, CompareEntry, NodeId};

    /// A dummy ranking for use in the tests: greater ids are better
    struct ById;
    impl FrontierRanking for ById {
        fn compare(&self, a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
            a.node.cmp(&b.node)
        }
    }

    fn entry(id: usize) -> FrontierEntry {
        FrontierEntry { node: NodeId(id), total_cost: 0 }
    }

    #[test]
    fn when_a_is_less_than_b_compareentry_returns_less() {
        let cmp = CompareEntry::new(ById);
        assert_eq!(cmp.compare(&entry(0), &entry(1)), Ordering::Less);
    }
    #[test]
    fn when_a_is_greater_than_b_compareentry_returns_greater() {
        let cmp = CompareEntry::new(ById);
        assert_eq!(cmp.compare(&entry(1), &entry(0)), Ordering::Greater);
    }
    #[test]
    fn when_a_is_equal_to_b_compareentry_returns_equal() {
        let cmp = CompareEntry::new(ById);
        assert_eq!(cmp.compare(&entry(1), &entry(1)), Ordering::Equal);
    }
}
