/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes the [`Parser`] struct. The Parser
//! takes the sequence of [`Token`]s produced by a
//! [`Lexer`], and converts them into a series of
//! [`Event`]s, checking that the tokens follow the grammar
//! described in the [module documentation](super).
//!
//! ## Invoking the Parser
//!
//! The two interesting methods on a [`Parser`] are:
//!
//! 1. [`next_event`](Parser#method.next_event)
//! 2. [`Iterator::next`](Parser#method.next)
//!
//! Both return the next [`Event`] (naturally), the latter
//! allowing one to hook into the [`Iterator`] ecosystem.
//!
//! [`Token`]: struct@crate::token::Token

use tracing::trace;

use crate::{
    error::{internal, Error, Result},
    event::{
        error::ParseError,
        state::{Flags, State, StateMachine, O_FIRST, O_INDENTLESS, O_NIL},
        types::{Event, EventData, Node, Scalar, ScalarStyle, EMPTY_SCALAR},
    },
    scanner::Lexer,
    token::{Kind, Token},
};

#[macro_use]
mod macros;

/// The [`Parser`] provides an API for translating a
/// [`Lexer`]'s token stream into higher level [`Event`]s.
///
/// A Parser consumes the entire token stream, ending
/// when the `Eof` token is found, after which the Parser
/// considers the stream finished and always returns None.
/// The same happens after the first error.
///
/// ## Examples
///
/// ```
/// use yamlkeys::{
///     event::{types::EventData, Parser},
///     scanner::Lexer,
/// };
///
/// let mut parser = Parser::new(Lexer::new("key: value"));
///
/// let first = parser.next_event().transpose()?;
/// assert_eq!(first.map(|e| e.into_data()), Some(EventData::StreamStart));
/// # Ok::<(), yamlkeys::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'de>
{
    tokens: Tokens<'de>,
    state:  StateMachine,
    open:   Vec<Open<'de>>,
    done:   bool,
}

impl<'de> Parser<'de>
{
    /// Instantiate a new [`Parser`], reading from the
    /// given .lexer
    pub fn new(lexer: Lexer<'de>) -> Self
    {
        Self {
            tokens: Tokens::new(lexer),
            state:  StateMachine::default(),
            open:   Vec::new(),
            done:   false,
        }
    }

    /// Fetch the next [`Event`] from the token stream
    pub fn next_event(&mut self) -> Option<Result<Event<'de>>>
    {
        if self.done
        {
            return None;
        }

        match self.get_next_event()
        {
            Ok(event) => event.map(Ok),
            Err(e) =>
            {
                self.done = true;

                Some(Err(e))
            },
        }
    }

    /// The text being parsed
    pub fn source(&self) -> &'de str
    {
        self.tokens.lexer.source()
    }

    /// The name of the text being parsed
    pub fn source_name(&self) -> &str
    {
        self.tokens.lexer.source_name()
    }

    /// Runs the state machine until it either provides the
    /// next [`Event`], an error, or the state machine is
    /// finished
    fn get_next_event(&mut self) -> Result<Option<Event<'de>>>
    {
        let mut event = None;

        // Main loop, continue until an event is produced, an error
        // is returned or we're marked as finished.
        while !self.done && event.is_none()
        {
            event = self.state_transition()?;
        }

        Ok(event)
    }

    /// Process the next event in the state machine, running
    /// the associated routine
    fn state_transition(&mut self) -> Result<Option<Event<'de>>>
    {
        trace!(state = ?self.state.top(), depth = self.state.depth(), "state transition");

        match *self.state.top()
        {
            State::StreamStart => self.stream_start(),
            State::Document => self.document(),
            State::Node(opts) => self.node(opts),
            State::ScalarEnd => self.scalar_end(),
            State::SequenceEntry(opts) => self.sequence_entry(opts),
            State::ElementEnd => self.element_end(),
            State::MappingKey(opts) => self.mapping_key(opts),
            State::MappingValue => self.mapping_value(),
            State::PairEnd => self.pair_end(),
            State::StreamEnd => self.stream_end(),

            // State machine terminus, no more events will be produced by this parser
            State::Eof => self.eof(),
        }
    }

    /// Start of token stream, ensure the token stream
    /// hasn't been tampered with, and return the associated
    /// Event
    fn stream_start(&mut self) -> Result<Option<Event<'de>>>
    {
        let token = pop!(self.tokens)?;

        if token.kind != Kind::StreamStart
        {
            fail!(CorruptStream => token);
        }

        state!(~self, -> State::Document);

        Ok(Some(marker(&token, EventData::StreamStart)))
    }

    /// The stream's (only) root node, which may be absent
    fn document(&mut self) -> Result<Option<Event<'de>>>
    {
        match peek!(~self.tokens)?
        {
            Kind::StreamEnd =>
            {
                state!(~self, -> State::StreamEnd);
            },
            _ =>
            {
                state!(~self, -> State::StreamEnd, >> State::Node(O_NIL));
            },
        }

        Ok(None)
    }

    /// End of token stream, produce the associated Event
    fn stream_end(&mut self) -> Result<Option<Event<'de>>>
    {
        let token = pop!(self.tokens)?;

        if token.kind != Kind::StreamEnd
        {
            fail!(UnexpectedToken => token);
        }

        state!(~self, -> State::Eof);

        Ok(Some(marker(&token, EventData::StreamEnd)))
    }

    /// The token stream's Eof, set ourself to done
    fn eof(&mut self) -> Result<Option<Event<'de>>>
    {
        let token = pop!(self.tokens)?;

        if token.kind != Kind::Eof
        {
            fail!(CorruptStream => token);
        }

        self.done = true;

        Ok(None)
    }

    /// Determine which node starts at the head of the token
    /// stream, returning the [`Event`] entering it, and
    /// setting the state to the node's content.
    ///
    /// Nodes which are implied by the stream, but have no
    /// tokens of their own, are returned as empty scalars.
    fn node(&mut self, opts: Flags) -> Result<Option<Event<'de>>>
    {
        let token = peek!(self.tokens)?;

        let event = match token.kind
        {
            // Scalar, maybe a run of plain scalars
            Kind::PlainScalar | Kind::DoubleQuotedScalar =>
            {
                let scalar = self.scalar(ParseError::UnexpectedToken)?;

                state!(~self, -> State::ScalarEnd);

                self.enter(Node::Scalar(scalar), &token, self.tokens.last)
            },
            // Start of mapping
            Kind::MappingStart =>
            {
                pop!(self.tokens)?;

                state!(~self, -> State::MappingKey(O_FIRST));

                self.enter(Node::Mapping, &token, token.end())
            },
            // Start of sequence
            Kind::SequenceStart =>
            {
                pop!(self.tokens)?;

                state!(~self, -> State::SequenceEntry(O_FIRST));

                self.enter(Node::Sequence, &token, token.end())
            },
            /*
             * Start of a sequence without its own block, allowed only as
             * a mapping value e.g:
             *
             *  key:
             *  - entry
             *  ^------- No SequenceStart, the column is already open
             */
            Kind::Element if opts.contains(O_INDENTLESS) =>
            {
                state!(~self, -> State::SequenceEntry(O_FIRST | O_INDENTLESS));

                self.enter(Node::Sequence, &token, token.start)
            },
            Kind::Value | Kind::StreamStart | Kind::Eof => fail!(UnexpectedToken => token),
            /*
             * Handles productions with empty implicit nodes, e.g
             *
             *  key:
             *  other: value
             *  ^-------- Value (:) implies content exists
             */
            Kind::Key | Kind::Element | Kind::BlockEnd | Kind::StreamEnd =>
            {
                state!(~self, -> State::ScalarEnd);

                self.enter(Node::Scalar(EMPTY_SCALAR), &token, token.start)
            },
        };

        Ok(Some(event))
    }

    /// A scalar is complete, exit it and return control to
    /// its parent
    fn scalar_end(&mut self) -> Result<Option<Event<'de>>>
    {
        let event = self.exit()?;

        state!(~self, << None);

        Ok(Some(event))
    }

    /// Sequence entry, return the [`Event`] entering the
    /// element, or exiting the sequence
    fn sequence_entry(&mut self, opts: Flags) -> Result<Option<Event<'de>>>
    {
        let token = peek!(self.tokens)?;
        let first = opts.contains(O_FIRST);
        let indentless = opts.contains(O_INDENTLESS);

        let event = match token.kind
        {
            // Sequence entry, its node follows
            Kind::Element =>
            {
                pop!(self.tokens)?;

                state!(~self,
                    -> State::SequenceEntry(opts - O_FIRST),
                    >> State::ElementEnd,
                    >> State::Node(O_NIL)
                );

                self.enter(Node::Element, &token, token.end())
            },
            // Anything else ends an indentless sequence, without consuming it
            _ if indentless =>
            {
                let event = self.exit()?;
                state!(~self, << None);

                event
            },
            // End of sequence
            Kind::BlockEnd if !first =>
            {
                pop!(self.tokens)?;

                let event = self.exit()?;
                state!(~self, << None);

                event
            },
            // Otherwise the YAML stream is invalid
            _ => fail!(MissingBlockEntry => token),
        };

        Ok(Some(event))
    }

    /// An element's node is complete, exit the element
    fn element_end(&mut self) -> Result<Option<Event<'de>>>
    {
        let event = self.exit()?;

        state!(~self, << None);

        Ok(Some(event))
    }

    /// Mapping key, return the [`Event`] entering the pair,
    /// or exiting the mapping
    fn mapping_key(&mut self, opts: Flags) -> Result<Option<Event<'de>>>
    {
        let token = peek!(self.tokens)?;
        let first = opts.contains(O_FIRST);

        let event = match token.kind
        {
            // Found the start of a mapping KV pair
            Kind::Key =>
            {
                pop!(self.tokens)?;

                let key = self.scalar(ParseError::MissingKey)?;

                state!(~self, -> State::MappingValue);

                self.enter(Node::Pair(key), &token, self.tokens.last)
            },
            // End of this mapping
            Kind::BlockEnd if !first =>
            {
                pop!(self.tokens)?;

                let event = self.exit()?;
                state!(~self, << None);

                event
            },
            Kind::PlainScalar | Kind::DoubleQuotedScalar | Kind::BlockEnd =>
            {
                fail!(MissingKey => token)
            },
            _ => fail!(MissingBlockEnd => token),
        };

        Ok(Some(event))
    }

    /// Mapping value, hand off to the value's node, leaving
    /// a pair end state beneath it
    fn mapping_value(&mut self) -> Result<Option<Event<'de>>>
    {
        let token = peek!(self.tokens)?;

        match token.kind
        {
            Kind::Value =>
            {
                pop!(self.tokens)?;

                state!(~self, -> State::PairEnd, >> State::Node(O_INDENTLESS));
            },
            _ => fail!(MissingValue => token),
        }

        Ok(None)
    }

    /// A pair's value is complete, exit the pair and expect
    /// the next key
    fn pair_end(&mut self) -> Result<Option<Event<'de>>>
    {
        let event = self.exit()?;

        state!(~self, -> State::MappingKey(O_NIL));

        Ok(Some(event))
    }

    /// Consume a scalar from the head of the token stream,
    /// joining any plain scalars that follow it on the same
    /// line. Returns .err if there is no scalar to consume.
    fn scalar(&mut self, err: ParseError) -> Result<Scalar<'de>>
    {
        let token = peek!(self.tokens)?;
        let source = self.tokens.lexer.source();

        let scalar = match token.kind
        {
            Kind::DoubleQuotedScalar =>
            {
                pop!(self.tokens)?;

                // Strip the quotes, both are always 1 byte
                let text = source.get(token.start + 1..token.stop).unwrap_or("");

                Scalar::new(text, ScalarStyle::DoubleQuote)
            },
            Kind::PlainScalar =>
            {
                pop!(self.tokens)?;
                let mut stop = token.stop;

                loop
                {
                    let next = peek!(self.tokens)?;

                    if next.kind != Kind::PlainScalar || next.line != token.line
                    {
                        break;
                    }

                    pop!(self.tokens)?;
                    stop = next.stop;
                }

                let text = source.get(token.start..=stop).unwrap_or("");

                Scalar::new(text, ScalarStyle::Plain)
            },
            _ => return Err(syntax(err, &token)),
        };

        Ok(scalar)
    }

    /// Open .node, which starts at .token and whose opening
    /// text ends at .end, returning its Enter event
    fn enter(&mut self, node: Node<'de>, token: &Token, end: usize) -> Event<'de>
    {
        trace!(%node, line = token.line, column = token.column, "enter node");

        self.open.push(Open {
            node,
            start: token.start,
            line: token.line,
            column: token.column,
        });

        Event::new(
            token.start,
            end.max(token.start),
            token.line,
            token.column,
            EventData::Enter(node),
        )
    }

    /// Close the most recently opened node, returning its
    /// Exit event, which spans the node's entire text
    fn exit(&mut self) -> Result<Event<'de>>
    {
        let open = self
            .open
            .pop()
            .ok_or_else(|| Error::from(internal::Error::new(ParseError::CorruptStream)))?;

        trace!(node = %open.node, "exit node");

        Ok(Event::new(
            open.start,
            self.tokens.last.max(open.start),
            open.line,
            open.column,
            EventData::Exit(open.node),
        ))
    }
}

impl<'de> Iterator for Parser<'de>
{
    type Item = Result<Event<'de>>;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.next_event()
    }
}

/// A node which has been entered, but not yet exited
#[derive(Debug, Clone, Copy)]
struct Open<'de>
{
    node:   Node<'de>,
    start:  usize,
    line:   usize,
    column: usize,
}

/// Wrapper around the [`Lexer`] allowing a single token of
/// lookahead, and remembering where the last token with
/// any width ended
#[derive(Debug, Clone)]
struct Tokens<'de>
{
    lexer:  Lexer<'de>,
    peeked: Option<Token>,
    last:   usize,
}

impl<'de> Tokens<'de>
{
    fn new(lexer: Lexer<'de>) -> Self
    {
        Self {
            lexer,
            peeked: None,
            last: 0,
        }
    }

    fn peek(&mut self) -> Result<Token>
    {
        match self.peeked
        {
            Some(token) => Ok(token),
            None =>
            {
                let token = self.lexer.next_token()?;
                self.peeked = Some(token);

                Ok(token)
            },
        }
    }

    fn pop(&mut self) -> Result<Token>
    {
        let token = self.peek()?;
        self.peeked = None;

        if token.has_width()
        {
            self.last = token.end();
        }

        Ok(token)
    }
}

/// Produce a zero width event at .token
fn marker<'de>(token: &Token, data: EventData<'de>) -> Event<'de>
{
    Event::new(token.start, token.start, token.line, token.column, data)
}

/// Contextualize a grammar mismatch with the offending
/// .token's position
pub(in crate::event) fn syntax(err: ParseError, token: &Token) -> Error
{
    internal::Error::with_context(err, token.start, token.line, token.column).into()
}

#[cfg(test)]
mod tests;
