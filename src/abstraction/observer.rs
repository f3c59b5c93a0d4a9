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

//! This module defines the `Observer` trait which lets a client follow the
//! progress of a search (e.g. to produce a trace of all the expanded nodes).

use crate::{SearchNode, Statistics};

/// An observer is notified by the solver at each step of its main loop. It is
/// only ever handed shared references: it may look at the search but it
/// cannot alter the frontier nor the visited set.
///
/// All methods have an empty default implementation so that an observer only
/// needs to implement the notifications it cares about.
pub trait Observer<T> {
    /// Called whenever a node is popped off the frontier (before the goal test)
    fn on_pop(&mut self, _node: &SearchNode<T>) {}
    /// Called whenever a popped node is dropped because its state has already
    /// been expanded.
    fn on_skip(&mut self, _node: &SearchNode<T>) {}
    /// Called whenever a node is about to be expanded. The statistics already
    /// account for that expansion.
    fn on_expand(&mut self, _node: &SearchNode<T>, _statistics: &Statistics) {}
}

/// The simplest and most natural observer implementation is to simply use
/// a closure. Such a closure is called on each expansion.
impl <T, X: FnMut(&SearchNode<T>)> Observer<T> for X {
    fn on_expand(&mut self, node: &SearchNode<T>, _statistics: &Statistics) {
        self(node)
    }
}
