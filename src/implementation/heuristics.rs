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

//! This module provides an implementation for the usual solver heuristics
//! (cost estimates, frontier ordering, cutoff criteria).

use std::marker::PhantomData;

use crate::Heuristic;

mod utils;
mod ranking;
mod cutoff;

pub use utils::*;
pub use ranking::*;
pub use cutoff::*;

// ----------------------------------------------------------------------------
// --- COST ESTIMATES ---------------------------------------------------------
// ----------------------------------------------------------------------------

/// The uninformed heuristic: it estimates the remaining cost of any state to
/// be zero. Using it degrades the best-first search into a uniform cost
/// search (aka. Dijkstra's algorithm). It is trivially admissible and
/// consistent, whatever the problem being solved.
///
/// # Example
/// ```
/// # use bestfirst::*;
/// let h = ZeroHeuristic::<char>::default();
/// assert_eq!(0, h.estimate(&'a'));
/// assert_eq!(0, h.estimate(&'z'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZeroHeuristic<T>(PhantomData<T>);
impl <T> Default for ZeroHeuristic<T> {
    fn default() -> Self {
        ZeroHeuristic(PhantomData)
    }
}
impl <T> Heuristic for ZeroHeuristic<T> {
    type State = T;

    fn estimate(&self, _: &T) -> isize {
        0
    }
}

#[cfg(test)]
mod test_zero {
    use crate::{ZeroHeuristic, Heuristic};

    #[test]
    fn the_zero_heuristic_always_estimates_zero() {
        let h = ZeroHeuristic::<usize>::default();
        for s in 0..100 {
            assert_eq!(0, h.estimate(&s));
        }
    }
}
