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

//! This module provides the observers that ship with the library.

use std::fmt::Display;

use log::{debug, info, trace};

use crate::{Observer, SearchNode, Statistics};

/// _This is the default observer._ It simply ignores all notifications.
#[derive(Debug, Default, Copy, Clone)]
pub struct EmptyObserver;
impl <T> Observer<T> for EmptyObserver {}

/// This observer writes a trace of the search to the `log` facade. Each node
/// popped off the frontier is logged (at the `info` level) together with its
/// cost, its heuristic estimate and its state. The skipped duplicates and the
/// evolution of the statistics are logged with a finer granularity.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;
impl <T: Display> Observer<T> for LogObserver {
    fn on_pop(&mut self, node: &SearchNode<T>) {
        info!("Expanding node with g(n) = {} and h(n) = {} => f(n) = {}\n{}------------",
            node.cost, node.estimate, node.total_cost(), node.state);
    }

    fn on_skip(&mut self, node: &SearchNode<T>) {
        debug!("state already expanded, skipping node with g(n) = {}", node.cost);
    }

    fn on_expand(&mut self, _node: &SearchNode<T>, statistics: &Statistics) {
        trace!("expanded: {}, generated: {}, max frontier size: {}",
            statistics.nodes_expanded, statistics.nodes_generated, statistics.max_frontier_size);
    }
}

#[cfg(test)]
mod test_observers {
    use crate::*;

    #[test]
    fn empty_observer_accepts_all_notifications() {
        let mut observer = EmptyObserver;
        let node = SearchNode::root('a', 1);
        Observer::<char>::on_pop(&mut observer, &node);
        Observer::<char>::on_skip(&mut observer, &node);
        Observer::<char>::on_expand(&mut observer, &node, &Statistics::default());
    }

    #[test]
    fn log_observer_accepts_all_notifications() {
        let mut observer = LogObserver;
        let node = SearchNode::root(42, 1);
        observer.on_pop(&node);
        observer.on_skip(&node);
        observer.on_expand(&node, &Statistics::default());
    }
}
