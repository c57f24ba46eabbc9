/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::mem;

pub(in crate::event) use self::flags::*;

pub(in crate::event) const INITIAL_STATE: State = State::StreamStart;

#[derive(Debug, Clone)]
pub(in crate::event) struct StateMachine
{
    top:   State,
    stack: Vec<State>,
}

impl StateMachine
{
    /// Instantiate a new state machine with the given
    /// initial State.
    pub fn new(initial: State) -> Self
    {
        Self {
            top:   initial,
            stack: Vec::default(),
        }
    }

    /// Push a State into the current .top, adding the
    /// previous .top to the stack, and returning a
    /// mutable reference to the new .top.
    pub fn push_top(&mut self, s: State) -> &mut State
    {
        let old = mem::replace(&mut self.top, s);
        self.stack.push(old);

        &mut self.top
    }

    /// Pop the State stack, replacing the current .top with
    /// the next State on the stack, returning the previous
    /// top if a replacement was made.
    pub fn pop(&mut self) -> Option<State>
    {
        self.stack.pop().map(|new| mem::replace(&mut self.top, new))
    }

    /// Immutably access the top State
    pub fn top(&self) -> &State
    {
        &self.top
    }

    /// Mutably access the top State
    pub fn top_mut(&mut self) -> &mut State
    {
        &mut self.top
    }

    /// How many States are waiting beneath the top
    pub fn depth(&self) -> usize
    {
        self.stack.len()
    }
}

impl Default for StateMachine
{
    fn default() -> Self
    {
        Self::new(INITIAL_STATE)
    }
}

/// Possible states in the processing of a YAML
/// [Token][crate::token::Token] sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::event) enum State
{
    /// Expecting start of stream
    StreamStart,
    /// Expecting the root node, or the end of the stream
    Document,
    /// Expecting end of stream
    StreamEnd,
    /// Expecting the end of file, after the stream ended
    Eof,

    /// Expecting a Node
    /// :: O_INDENTLESS?
    Node(Flags),
    /// Expecting nothing, the scalar entered last is
    /// complete
    ScalarEnd,

    /// Expecting sequence entries
    /// :: O_FIRST? | O_INDENTLESS?
    SequenceEntry(Flags),
    /// Expecting nothing, the element's node is complete
    ElementEnd,

    /// Expecting mapping key
    /// :: O_FIRST?
    MappingKey(Flags),
    /// Expecting a mapping value
    MappingValue,
    /// Expecting nothing, the pair's value is complete
    PairEnd,
}

mod flags
{
    use bitflags::bitflags;

    /// Nil / empty flag set
    pub const O_NIL: Flags = Flags::empty();
    /// Is this the first entry of the sequence/mapping?
    pub const O_FIRST: Flags = Flags::FIRST;
    /// May (or does) the sequence start without its own
    /// block, at the same column as the parent mapping?
    pub const O_INDENTLESS: Flags = Flags::INDENTLESS;

    bitflags! {
        #[derive(Default)]
        /// Options used by the state machine, not all options are relevant to all states.
        pub struct Flags: u8 {
            const FIRST         = 0b00000001;
            const INDENTLESS    = 0b00000010;
        }
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_and_pop()
    {
        let mut machine = StateMachine::default();

        *machine.top_mut() = State::Document;
        machine.push_top(State::Node(O_NIL));

        assert_eq!(machine.depth(), 1);
        assert_eq!(machine.pop(), Some(State::Node(O_NIL)));
        assert_eq!(*machine.top(), State::Document);
        assert_eq!(machine.pop(), None);
    }

    #[test]
    fn flags_combine()
    {
        let opts = O_FIRST | O_INDENTLESS;

        assert!(opts.contains(O_FIRST));
        assert!(!(opts - O_FIRST).contains(O_FIRST));
        assert!((opts - O_FIRST).contains(O_INDENTLESS));
    }
}
