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

//! This module is meant to let you turn the outcome of a search into a human
//! readable report (the solution path and the statistics of the search).

use std::fmt::{Display, Write};

use derive_builder::Builder;

use crate::{Outcome, Status, SearchNode};

/// This is how you configure the report e.g. if you want to see the complete
/// solution path or only the statistics of the search.
#[derive(Debug, Clone, Builder)]
pub struct ReportConfig {
    /// This flag must be true if you want to see every node of the solution
    /// path (from the root to the goal). It is false by default.
    #[builder(default="false")]
    pub show_path: bool,
    /// This flag must be true (default) if you want to see the number of
    /// expanded nodes and the maximum size of the frontier.
    #[builder(default="true")]
    pub show_statistics: bool,
}
impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { show_path: false, show_statistics: true }
    }
}

/// A report on the outcome of some search
pub struct Report<'a, T> {
    outcome: &'a Outcome<T>,
}

impl <'a, T> Report<'a, T> where T: Display {
    pub fn new(outcome: &'a Outcome<T>) -> Self {
        Report { outcome }
    }

    /// Renders the report as plain text.
    ///
    /// # Example
    /// ```
    /// # use bestfirst::*;
    /// # use bestfirst::puzzle::*;
    /// let goal    = Board::goal(3, 3);
    /// let puzzle  = SlidingPuzzle::new(goal.clone(), goal.clone()).unwrap();
    /// let outcome = solve(&puzzle, &Manhattan::new(&goal)).unwrap();
    /// let config  = ReportConfigBuilder::default().build().unwrap();
    ///
    /// let text = Report::new(&outcome).as_text(&config);
    /// assert!(text.starts_with("Goal state!"));
    /// assert!(text.contains("Solution depth: 0"));
    /// ```
    pub fn as_text(&self, config: &ReportConfig) -> String {
        let mut out = String::new();

        match self.outcome.status {
            Status::Solved              => out.push_str("Goal state!\n\n"),
            Status::Exhausted           => out.push_str("Failure: No solution found.\n"),
            Status::Aborted(_)          => out.push_str("Search aborted: the cutoff criterion was met.\n"),
            Status::Ready|Status::Running => out.push_str("Search did not complete.\n"),
        }

        if config.show_path {
            for node in self.outcome.path.iter().flatten() {
                out.push_str(&Self::node(node));
            }
        }

        if let Some(depth) = self.outcome.depth() {
            let _ = writeln!(out, "Solution depth: {depth}");
        }
        if config.show_statistics {
            let stats = &self.outcome.statistics;
            let _ = writeln!(out, "Number of nodes expanded: {}", stats.nodes_expanded);
            let _ = writeln!(out, "Max queue size: {}", stats.max_frontier_size);
        }
        out
    }

    /// Creates a string representation of one single node
    fn node(node: &SearchNode<T>) -> String {
        format!("g(n) = {} and h(n) = {}\n{}------------\n", node.cost, node.estimate, node.state)
    }
}

#[cfg(test)]
mod test_report {
    use std::sync::Arc;

    use crate::*;

    fn solved() -> Outcome<char> {
        let root = SearchNode::root('a', 1);
        let goal = SearchNode { state: Arc::new('b'), cost: 1, estimate: 0, parent: Some(NodeId(0)), depth: 1 };
        let statistics = Statistics { nodes_expanded: 1, max_frontier_size: 2, nodes_generated: 3, duplicates_skipped: 0 };
        Outcome { status: Status::Solved, path: Some(vec![root, goal]), statistics }
    }
    fn exhausted() -> Outcome<char> {
        let statistics = Statistics { nodes_expanded: 4, max_frontier_size: 3, nodes_generated: 7, duplicates_skipped: 2 };
        Outcome { status: Status::Exhausted, path: None, statistics }
    }

    #[test]
    fn by_default_the_path_is_hidden_and_the_statistics_are_shown() {
        let config = ReportConfigBuilder::default().build().unwrap();
        assert!(!config.show_path);
        assert!(config.show_statistics);

        let dflt = ReportConfig::default();
        assert_eq!(config.show_path, dflt.show_path);
        assert_eq!(config.show_statistics, dflt.show_statistics);
    }

    #[test]
    fn a_solved_outcome_reports_depth_and_statistics() {
        let config = ReportConfig::default();
        let text = Report::new(&solved()).as_text(&config);
        assert_eq!("Goal state!\n\nSolution depth: 1\nNumber of nodes expanded: 1\nMax queue size: 2\n", text);
    }

    #[test]
    fn the_path_is_rendered_from_the_root_to_the_goal() {
        let config = ReportConfigBuilder::default().show_path(true).show_statistics(false).build().unwrap();
        let text = Report::new(&solved()).as_text(&config);
        assert_eq!("Goal state!\n\ng(n) = 0 and h(n) = 1\na------------\ng(n) = 1 and h(n) = 0\nb------------\nSolution depth: 1\n", text);
    }

    #[test]
    fn an_exhausted_outcome_reports_a_failure() {
        let config = ReportConfigBuilder::default().show_path(true).build().unwrap();
        let text = Report::new(&exhausted()).as_text(&config);
        assert_eq!("Failure: No solution found.\nNumber of nodes expanded: 4\nMax queue size: 3\n", text);
    }

    #[test]
    fn an_aborted_outcome_says_so() {
        let mut outcome = exhausted();
        outcome.status = Status::Aborted(Reason::CutoffOccurred);
        let config = ReportConfigBuilder::default().show_statistics(false).build().unwrap();
        let text = Report::new(&outcome).as_text(&config);
        assert_eq!("Search aborted: the cutoff criterion was met.\n", text);
    }
}
