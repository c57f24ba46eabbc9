/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains the [`Token`] type produced by the
//! [`Lexer`](crate::scanner::Lexer).

use std::fmt;

/// Kinds of lexical units the scanner produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind
{
    /// The stream's start [virtual]
    StreamStart,
    /// The stream's end [virtual]
    StreamEnd,
    /// A scalar without any quoting
    PlainScalar,
    /// A scalar enclosed in '"'
    DoubleQuotedScalar,
    /// Start of a simple key [virtual]
    Key,
    /// A ':' followed by whitespace
    Value,
    /// Indentation increase for a block (map) [virtual]
    MappingStart,
    /// Indentation increase for a block (sequence)
    /// [virtual]
    SequenceStart,
    /// Indentation decrease for a block [virtual]
    BlockEnd,
    /// A '-' followed by whitespace
    Element,
    /// Terminal token, always the last one produced
    Eof,
}

impl Kind
{
    /// The diagnostic label of this kind
    pub fn label(&self) -> &'static str
    {
        match self
        {
            Self::StreamStart => "START",
            Self::StreamEnd => "END",
            Self::PlainScalar => "PLAIN SCALAR",
            Self::DoubleQuotedScalar => "DOUBLE QUOTED SCALAR",
            Self::Key => "KEY",
            Self::Value => "VALUE",
            Self::MappingStart => "MAPPING START",
            Self::SequenceStart => "SEQUENCE START",
            Self::BlockEnd => "BLOCK END",
            Self::Element => "ELEMENT",
            Self::Eof => "EOF",
        }
    }

    /// Does this kind carry source text, rather than a
    /// label?
    pub fn is_scalar(&self) -> bool
    {
        matches!(self, Self::PlainScalar | Self::DoubleQuotedScalar)
    }
}

impl fmt::Display for Kind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.label())
    }
}

/// A single lexical unit, positioned in the source.
///
/// Tokens do not borrow the source; scalar text is
/// recovered from the byte span on demand via
/// [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token
{
    /// What this token is
    pub kind:   Kind,
    /// Byte offset of the token's first byte
    pub start:  usize,
    /// Byte offset of the token's last byte (inclusive)
    pub stop:   usize,
    /// Line of the token's start, starting from 1
    pub line:   usize,
    /// Column of the token's start, starting from 0
    pub column: usize,
}

impl Token
{
    pub fn new(kind: Kind, start: usize, stop: usize, line: usize, column: usize) -> Self
    {
        Self {
            kind,
            start,
            stop,
            line,
            column,
        }
    }

    /// Retrieve the text of this token. Scalars return
    /// their span in .source (quotes included), every
    /// other kind returns its label.
    pub fn text<'a>(&self, source: &'a str) -> &'a str
    {
        match self.kind.is_scalar()
        {
            true => source.get(self.start..=self.stop).unwrap_or(""),
            false => self.kind.label(),
        }
    }

    /// Does this token cover any source text? Markers
    /// the Lexer infers from indentation have no width.
    pub fn has_width(&self) -> bool
    {
        matches!(
            self.kind,
            Kind::PlainScalar | Kind::DoubleQuotedScalar | Kind::Value | Kind::Element
        )
    }

    /// The byte offset just past this token's text, or its
    /// start for markers without width
    pub fn end(&self) -> usize
    {
        match self.has_width()
        {
            true => self.stop + 1,
            false => self.start,
        }
    }

    /// Render this token the way a token dump shows it,
    /// recovering scalar text from .source
    pub fn display<'a>(&'a self, source: &'a str) -> TokenDisplay<'a>
    {
        TokenDisplay {
            token: self,
            source,
        }
    }
}

/// Helper returned by [`Token::display`]
///
/// Formats as `[@start,stop='text',<KIND>,line:column]`
pub struct TokenDisplay<'a>
{
    token:  &'a Token,
    source: &'a str,
}

impl fmt::Display for TokenDisplay<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let token = self.token;
        let text = token.text(self.source).escape_debug();

        write!(
            f,
            "[@{},{}='{}',<{}>,{}:{}]",
            token.start, token.stop, text, token.kind, token.line, token.column
        )
    }
}
