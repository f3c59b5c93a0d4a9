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

//! This module defines the `VisitedSet` trait. That is the abstraction of the
//! closed list: the set of states that have already been expanded.

use std::sync::Arc;

/// The set of states that have already been expanded by a solver. A visited
/// set only ever grows during a search: a state that has been closed is never
/// re-opened.
pub trait VisitedSet {
    /// The kind of states held in this set
    type State;

    /// Returns true iff the given state has already been marked as visited
    fn contains(&self, state: &Self::State) -> bool;
    /// Marks the given state as visited. Returns true iff the state was not
    /// visited before this call.
    fn insert(&mut self, state: Arc<Self::State>) -> bool;
    /// Forgets all visited states.
    fn clear(&mut self);
    /// The number of visited states
    fn len(&self) -> usize;
    /// Returns true iff no state has been visited
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
