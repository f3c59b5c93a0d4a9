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

//! This module provides the implementation of a simple visited set (closed list).

use std::{hash::Hash, sync::Arc};

use fxhash::FxHashSet;

use crate::VisitedSet;

/// The simplest visited set implementation: a hash set of all the states that
/// have been expanded. The set is keyed by the very same `Arc`s as the nodes
/// of the solver arena, hence a state is never copied to be marked visited.
pub struct SimpleVisited<T> where T: Eq + Hash {
    states: FxHashSet<Arc<T>>,
}
impl <T> Default for SimpleVisited<T> where T: Eq + Hash {
    fn default() -> Self {
        Self { states: FxHashSet::default() }
    }
}
impl <T> VisitedSet for SimpleVisited<T> where T: Eq + Hash {
    type State = T;

    fn contains(&self, state: &T) -> bool {
        self.states.contains(state)
    }

    fn insert(&mut self, state: Arc<T>) -> bool {
        self.states.insert(state)
    }

    fn clear(&mut self) {
        self.states.clear()
    }

    fn len(&self) -> usize {
        self.states.len()
    }
}
