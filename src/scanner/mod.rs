/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes the [`Lexer`], which turns YAML text
//! into a stream of [`Token`]s, reconstructing the block
//! structure YAML only implies through indentation.
//!
//! It follows the same idea as the scanners of libyaml and
//! its descendants: indentation levels are kept on a
//! stack, opening a block whenever a key or sequence entry
//! starts deeper than the current level, and closing one
//! block per level whenever a line starts shallower.
//! Keys are detected by remembering where the last scalar
//! started, and backfilling a Key token there once a ':'
//! confirms it.
//!
//! Only the block context is supported: block mappings,
//! block sequences, plain scalars and double quoted
//! scalars.

pub(crate) mod error;

mod indent;
mod input;
mod key;
mod scalar;

use tracing::trace;

use self::{
    error::{ScanError, ScanResult},
    indent::{Indentation, STARTING_INDENT},
    input::{Input, Mark},
    key::SimpleKey,
    scalar::{flow::scan_double_quoted_scalar, plain::scan_plain_scalar},
};
use crate::{
    error::{internal, Result},
    queue::Queue,
    token::{Kind, Token},
};

const DEFAULT_SOURCE_NAME: &str = "<string>";

/// The [`Lexer`] provides a pull interface over the tokens
/// of a YAML text.
///
/// Tokens are produced on demand by
/// [`next_token`](Lexer::next_token), buffering only as far
/// as needed to decide whether the last scalar seen was a
/// key. The stream always starts with
/// [`Kind::StreamStart`] and ends with [`Kind::StreamEnd`]
/// followed by [`Kind::Eof`]; once the end is reached
/// every further call returns the same `Eof` token.
///
/// ## Examples
///
/// ```
/// use yamlkeys::{scanner::Lexer, token::Kind};
///
/// let mut lexer = Lexer::new("key: value");
/// let mut kinds = Vec::new();
///
/// for token in &mut lexer
/// {
///     kinds.push(token?.kind);
/// }
///
/// assert_eq!(kinds, vec![
///     Kind::StreamStart,
///     Kind::MappingStart,
///     Kind::Key,
///     Kind::PlainScalar,
///     Kind::Value,
///     Kind::PlainScalar,
///     Kind::BlockEnd,
///     Kind::StreamEnd,
///     Kind::Eof,
/// ]);
/// # Ok::<(), yamlkeys::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'de>
{
    input: Input<'de>,
    name:  String,

    indent: Indentation,
    key:    SimpleKey,
    tokens: Queue<Token>,

    state: StreamState,
}

impl<'de> Lexer<'de>
{
    /// Instantiate a new [`Lexer`] over the given .source
    pub fn new(source: &'de str) -> Self
    {
        Self::with_name(source, DEFAULT_SOURCE_NAME)
    }

    /// Instantiate a new [`Lexer`] over the given .source,
    /// naming it for diagnostics
    pub fn with_name<S>(source: &'de str, name: S) -> Self
    where
        S: Into<String>,
    {
        let mut this = Self {
            input:  Input::new(source),
            name:   name.into(),
            indent: Indentation::new(),
            key:    SimpleKey::new(),
            tokens: Queue::new(),
            state:  StreamState::Stream,
        };

        this.scan_start();

        this
    }

    /// Retrieve the next token of the stream
    pub fn next_token(&mut self) -> Result<Token>
    {
        trace!("retrieve next token");

        while self.needs_tokens()
        {
            self.fetch_tokens()?;
        }

        trace!(
            queued = self.tokens.len(),
            emitted = self.tokens.emitted(),
            "token queue"
        );

        match self.tokens.pop()
        {
            Some(token) =>
            {
                if token.kind == Kind::Eof
                {
                    self.state = StreamState::Done(token);
                }

                Ok(token)
            },
            None => match self.state
            {
                StreamState::Done(eof) => Ok(eof),
                // needs_tokens only stops with an empty queue once
                // the stream is done
                StreamState::Stream | StreamState::Ending => Err(internal::Error::with_context(
                    ScanError::CorruptQueue,
                    self.input.index(),
                    self.input.line(),
                    self.input.column(),
                )
                .into()),
            },
        }
    }

    /// The line the Lexer is currently scanning, starting
    /// from 1
    pub fn line(&self) -> usize
    {
        self.input.line()
    }

    /// The position in the current line, starting from 0
    pub fn column(&self) -> usize
    {
        self.input.column()
    }

    /// The name of the source the Lexer is scanning
    pub fn source_name(&self) -> &str
    {
        &self.name
    }

    /// The text the Lexer is scanning
    pub fn source(&self) -> &'de str
    {
        self.input.buffer()
    }

    /// The currently open indentation levels, bottom
    /// first. The bottom is always -1, representing that
    /// no block is open.
    pub fn indentation(&self) -> Vec<isize>
    {
        self.indent.levels()
    }

    /// Should we scan more tokens before emitting one?
    ///
    /// Either there is nothing to emit, or a simple key
    /// candidate is still unresolved. In the latter case
    /// we can't know where the candidate's Key (and maybe
    /// MappingStart) belong until we either find its ':'
    /// or rule it out.
    fn needs_tokens(&self) -> bool
    {
        match self.state
        {
            StreamState::Stream =>
            {
                self.tokens.is_empty() || (self.key.possible() && !self.input.is_eof())
            },
            StreamState::Ending | StreamState::Done(_) => false,
        }
    }

    /// Add new tokens to the queue
    fn fetch_tokens(&mut self) -> Result<()>
    {
        self.scan_to_next_token();
        self.stale_simple_key();

        let column = self.input.column();
        self.unroll_indent(column);

        let mark = self.input.mark();

        let scanned = match (self.input.la(1), self.input.la(2))
        {
            (None, _) =>
            {
                self.scan_end();
                Ok(())
            },
            (Some(c), next) if is_value(c, next) => self.scan_value(),
            (Some(c), next) if is_element(c, next) =>
            {
                self.scan_element();
                Ok(())
            },
            (Some(DOUBLE), _) => self.scan_double_quoted(),
            _ =>
            {
                self.scan_plain();
                Ok(())
            },
        };

        scanned.map_err(|e| internal::Error::with_context(e, mark.at, mark.line, mark.column).into())
    }

    /// Remove uninteresting characters from the input:
    /// blanks, and the line breaks of blank lines
    fn scan_to_next_token(&mut self)
    {
        trace!("scan to next token");

        loop
        {
            while self.input.la(1).map_or(false, is_blank)
            {
                self.input.forward(1);
            }

            match self.input.la(1)
            {
                Some(c) if is_break(c) => self.input.forward(1),
                _ => break,
            }
        }
    }

    /// Discard the simple key candidate if it can no
    /// longer be confirmed. A key must be followed by its
    /// ':' on the same line, so a candidate is stale once
    /// we have moved to a different line, or if anything
    /// but a value indicator comes next.
    fn stale_simple_key(&mut self)
    {
        let stale = match self.key.saved()
        {
            Some(saved) =>
            {
                saved.token().line != self.input.line()
                    || !self.input.la(1).map_or(false, |c| is_value(c, self.input.la(2)))
            },
            None => false,
        };

        if stale
        {
            trace!("discard stale simple key");

            self.key.take();
        }
    }

    /// Close every block deeper than .column, queueing a
    /// BlockEnd per closed block
    fn unroll_indent<T>(&mut self, column: T)
    where
        T: Into<indent::Indent>,
    {
        let mark = self.input.mark();
        let tokens = &mut self.tokens;

        let closed = self.indent.decrement(column, || {
            tokens.push(token(Kind::BlockEnd, mark.at, mark.at, mark))
        });

        if closed > 0
        {
            trace!(closed, indent = self.indent.indent().as_isize(), "unroll indentation");
        }
    }

    fn scan_start(&mut self)
    {
        trace!("scan start");

        let mark = self.input.mark();

        self.tokens
            .push(token(Kind::StreamStart, mark.at, mark.at, mark));
    }

    /// Close every remaining block and add the end markers
    fn scan_end(&mut self)
    {
        trace!("scan end");

        self.unroll_indent(STARTING_INDENT);
        self.key.take();

        let mark = self.input.mark();

        self.tokens
            .push(token(Kind::StreamEnd, mark.at, mark.at, mark));
        self.tokens.push(token(Kind::Eof, mark.at, mark.at, mark));

        self.state = StreamState::Ending;
    }

    /// Scan a mapping value, backfilling its Key (and the
    /// start of the mapping, for a key deeper than the
    /// current block)
    fn scan_value(&mut self) -> ScanResult<()>
    {
        trace!("scan value");

        let saved = self.key.take().ok_or(ScanError::InvalidValue)?;
        let key = *saved.token();
        let mut position = saved.position();

        if self.indent.increment(key.column)
        {
            trace!(column = key.column, "open block mapping");

            let start = token_at(Kind::MappingStart, &key);

            self.tokens
                .insert_at(position, start)
                .map_err(|_| ScanError::CorruptQueue)?;

            position += 1;
        }

        self.tokens
            .insert_at(position, key)
            .map_err(|_| ScanError::CorruptQueue)?;

        self.scan_indicator(Kind::Value);

        Ok(())
    }

    /// Scan a sequence entry, opening a new block sequence
    /// if the entry is deeper than the current block
    fn scan_element(&mut self)
    {
        trace!("scan element");

        let mark = self.input.mark();

        if self.indent.increment(mark.column)
        {
            trace!(column = mark.column, "open block sequence");

            self.tokens
                .push(token(Kind::SequenceStart, mark.at, mark.at, mark));
        }

        self.scan_indicator(Kind::Element);
    }

    /// Queue a two character indicator (':' or '-' and the
    /// whitespace that follows it), and move past it
    fn scan_indicator(&mut self, kind: Kind)
    {
        let mark = self.input.mark();
        let stop = match self.input.la(2)
        {
            Some(_) => mark.at + 1,
            None => mark.at,
        };

        self.tokens.push(token(kind, mark.at, stop, mark));
        self.input.forward(2);
    }

    fn scan_plain(&mut self)
    {
        trace!("scan plain scalar");

        self.save_simple_key();

        let scalar = scan_plain_scalar(&mut self.input);

        self.tokens.push(scalar);
    }

    fn scan_double_quoted(&mut self) -> ScanResult<()>
    {
        trace!("scan double quoted scalar");

        self.save_simple_key();

        let scalar = scan_double_quoted_scalar(&mut self.input)?;

        self.tokens.push(scalar);

        Ok(())
    }

    /// A scalar can start a simple key, save its position
    /// in case a ':' follows
    fn save_simple_key(&mut self)
    {
        let mark = self.input.mark();
        let key = token(Kind::Key, mark.at, mark.at, mark);

        self.key.save(key, self.tokens.produced());
    }
}

impl<'de> Iterator for Lexer<'de>
{
    type Item = Result<Token>;

    /// Yields every token up to and including
    /// [`Kind::Eof`], then `None`. An error is yielded
    /// once, after which the iterator is finished.
    fn next(&mut self) -> Option<Self::Item>
    {
        if let StreamState::Done(_) = self.state
        {
            return None;
        }

        match self.next_token()
        {
            Ok(token) => Some(Ok(token)),
            Err(e) =>
            {
                let mark = self.input.mark();
                self.state = StreamState::Done(token(Kind::Eof, mark.at, mark.at, mark));

                Some(Err(e))
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState
{
    /// Still scanning input
    Stream,
    /// Every token is queued, but not yet emitted
    Ending,
    /// The Eof token was emitted
    Done(Token),
}

fn token(kind: Kind, start: usize, stop: usize, mark: Mark) -> Token
{
    Token::new(kind, start, stop, mark.line, mark.column)
}

/// A zero width token of .kind at .other's position
fn token_at(kind: Kind, other: &Token) -> Token
{
    Token::new(kind, other.start, other.start, other.line, other.column)
}

/// Non break whitespace
pub(in crate::scanner) fn is_blank(c: char) -> bool
{
    matches!(c, ' ' | '\t' | '\r')
}

pub(in crate::scanner) fn is_break(c: char) -> bool
{
    c == '\n'
}

/// Whitespace, a line break, or the end of input
pub(in crate::scanner) fn is_blank_z(c: Option<char>) -> bool
{
    c.map_or(true, |c| is_blank(c) || is_break(c))
}

/// Is .c (followed by .next) a mapping value indicator?
pub(in crate::scanner) fn is_value(c: char, next: Option<char>) -> bool
{
    c == VALUE && is_blank_z(next)
}

/// Is .c (followed by .next) a sequence entry indicator?
pub(in crate::scanner) fn is_element(c: char, next: Option<char>) -> bool
{
    c == ELEMENT && is_blank_z(next)
}

const VALUE: char = ':';
const ELEMENT: char = '-';
const DOUBLE: char = '"';

#[cfg(test)]
mod tests;
