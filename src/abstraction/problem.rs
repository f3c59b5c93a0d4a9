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

//! This module defines the basic abstraction one will manipulate when
//! describing a search problem: a transition system with an initial state,
//! a goal test and a successor function.

/// This trait defines the "contract" of what defines a problem solvable with
/// a best-first search. An implementation of this trait effectively describes
/// an implicit graph: the nodes of that graph are the states, its edges are
/// the transitions enumerated by `for_each_successor`.
///
/// # Note:
/// The solvers never re-open a state once it has been expanded. This is only
/// correct because all step costs are assumed to be non-negative. Reporting
/// a negative step cost is a violation of this contract.
pub trait Problem {
    /// The state manipulated by the problem is user-defined. Any type
    /// implementing Problem must thus specify the type of its state.
    type State;
    /// This method returns the initial state of the problem (the root of the
    /// search tree).
    fn initial_state(&self) -> Self::State;
    /// Returns true iff the given state is a goal state. This method must be
    /// free of side effects.
    fn is_goal(&self, state: &Self::State) -> bool;
    /// This method calls the function `f` once for every state that can be
    /// reached from `state` in one transition. Along with the new state, `f`
    /// is given the (non-negative) cost of that transition. The order in which
    /// the successors are enumerated determines how ties are broken between
    /// siblings of equal cost. Hence it should be deterministic.
    fn for_each_successor(&self, state: &Self::State, f: &mut dyn SuccessorCallback<Self::State>);
}

/// This trait basically defines a callback which is passed on to the problem
/// so as to let it efficiently enumerate the successors of some given state.
pub trait SuccessorCallback<T> {
    /// executes the callback using the given successor state and step cost
    fn apply(&mut self, state: T, cost: isize);
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl <T, X: FnMut(T, isize)> SuccessorCallback<T> for X {
    fn apply(&mut self, state: T, cost: isize) {
        self(state, cost)
    }
}

#[cfg(test)]
mod tests {
    use crate::{SuccessorCallback, Problem};

    #[test]
    fn any_closure_is_a_successor_callback() {
        let mut seen = vec![];
        let closure: &mut dyn SuccessorCallback<char> = &mut |s: char, c: isize| {
            seen.push((s, c));
        };

        closure.apply('x', 4);
        closure.apply('y', 2);

        assert_eq!(vec![('x', 4), ('y', 2)], seen);
    }

    #[test]
    fn successors_are_enumerated_through_the_callback() {
        let pb = Countdown;
        let mut seen = vec![];
        pb.for_each_successor(&5, &mut |s: usize, c: isize| seen.push((s, c)));
        assert_eq!(vec![(4, 1), (3, 2)], seen);
    }

    #[test]
    fn the_goal_test_has_no_side_effect() {
        let pb = Countdown;
        assert!(pb.is_goal(&0));
        assert!(pb.is_goal(&0));
        assert!(!pb.is_goal(&pb.initial_state()));
    }

    /// A dummy problem where one counts down to zero by steps of one or two
    struct Countdown;
    impl Problem for Countdown {
        type State = usize;

        fn initial_state(&self) -> Self::State {
            10
        }
        fn is_goal(&self, state: &Self::State) -> bool {
            *state == 0
        }
        fn for_each_successor(&self, state: &Self::State, f: &mut dyn SuccessorCallback<Self::State>) {
            if *state >= 1 { f.apply(state - 1, 1); }
            if *state >= 2 { f.apply(state - 2, 2); }
        }
    }
}
