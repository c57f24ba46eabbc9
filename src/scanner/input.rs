/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains the character stream the Lexer reads from,
//! and the structure used for tracking its position,
//! namely:
//!
//! - How far into the buffer have we read?
//! - Which line are we on?
//! - What is the current column?

/// A snapshot of a position in the [`Input`], used for
/// positioning tokens and contextualizing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::scanner) struct Mark
{
    /// Byte offset into the buffer
    pub at:     usize,
    /// Line number, starting from 1
    pub line:   usize,
    /// Characters since the last line feed
    pub column: usize,
}

impl PartialEq<(usize, usize, usize)> for Mark
{
    fn eq(&self, (at, line, column): &(usize, usize, usize)) -> bool
    {
        self.at == *at && self.line == *line && self.column == *column
    }
}

/// A read only view of a fully loaded UTF8 buffer, with
/// arbitrary lookahead.
///
/// End of input is represented by `None` from
/// [`la`](Input::la), which is distinct from every valid
/// character.
#[derive(Debug, Clone)]
pub(in crate::scanner) struct Input<'de>
{
    buffer: &'de str,
    index:  usize,
    line:   usize,
    column: usize,
}

impl<'de> Input<'de>
{
    pub fn new(buffer: &'de str) -> Self
    {
        Self {
            buffer,
            index: 0,
            line: 1,
            column: 0,
        }
    }

    /// Look ahead .n characters without consuming
    /// anything. `la(1)` is the next character.
    pub fn la(&self, n: usize) -> Option<char>
    {
        debug_assert!(n > 0, "lookahead starts from 1");

        self.buffer[self.index..].chars().nth(n.saturating_sub(1))
    }

    /// Consume up to .characters characters, keeping track
    /// of line and column numbers. Stops early at the end
    /// of input.
    pub fn forward(&mut self, characters: usize)
    {
        for _ in 0..characters
        {
            let c = match self.la(1)
            {
                Some(c) => c,
                None => return,
            };

            self.index += c.len_utf8();

            match c
            {
                '\n' =>
                {
                    self.line += 1;
                    self.column = 0;
                },
                _ => self.column += 1,
            }
        }
    }

    pub fn mark(&self) -> Mark
    {
        Mark {
            at:     self.index,
            line:   self.line,
            column: self.column,
        }
    }

    pub fn index(&self) -> usize
    {
        self.index
    }

    pub fn line(&self) -> usize
    {
        self.line
    }

    pub fn column(&self) -> usize
    {
        self.column
    }

    pub fn is_eof(&self) -> bool
    {
        self.index >= self.buffer.len()
    }

    /// The whole underlying buffer
    pub fn buffer(&self) -> &'de str
    {
        self.buffer
    }
}
