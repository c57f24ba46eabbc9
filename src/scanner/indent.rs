/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub(in crate::scanner) const STARTING_INDENT: Indent = Indent(None);

/// Tracks the block indentation levels the Lexer has
/// opened.
///
/// The bottom of the stack is always the "-1"nth indent
/// ([`STARTING_INDENT`]), which represents that no block is
/// open. Levels are strictly increasing from the bottom to
/// the top.
#[derive(Debug, Clone)]
pub(in crate::scanner) struct Indentation
{
    indent:  Indent,
    indents: Vec<Indent>,
}

impl Indentation
{
    /// Instantiate a new tracker with no blocks open
    pub fn new() -> Self
    {
        Self {
            indent:  STARTING_INDENT,
            indents: Vec::new(),
        }
    }

    /// Get the current indent level
    pub fn indent(&self) -> Indent
    {
        self.indent
    }

    /// Open a new block at .column if it is deeper than the
    /// current indent level, returning whether a block was
    /// opened
    pub fn increment(&mut self, column: usize) -> bool
    {
        if self.indent >= column
        {
            return false;
        }

        self.indents.push(self.indent);
        self.indent = column.into();

        true
    }

    /// Close every level deeper than .column, calling .f
    /// once per closed level, returning the number of
    /// levels closed
    pub fn decrement<T, F>(&mut self, column: T, mut f: F) -> usize
    where
        T: Into<Indent>,
        F: FnMut(),
    {
        let column: Indent = column.into();
        let old = self.indents.len();

        while self.indent > column
        {
            match self.indents.pop()
            {
                Some(indent) =>
                {
                    self.indent = indent;

                    f();
                },
                None => break,
            }
        }

        old - self.indents.len()
    }

    /// The stack of levels, bottom first, with the "-1"nth
    /// indent included
    pub fn levels(&self) -> Vec<isize>
    {
        self.indents
            .iter()
            .chain(std::iter::once(&self.indent))
            .map(Indent::as_isize)
            .collect()
    }
}

impl Default for Indentation
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// A wrapper around usize, that allows it us to express the
/// "-1"nth indent without needing to use a signed type.
/// This occurs before the first block is opened, and again
/// once every block has been closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(in crate::scanner) struct Indent(Option<usize>);

impl Indent
{
    pub fn as_isize(&self) -> isize
    {
        match self.0
        {
            Some(indent) => indent as isize,
            None => -1,
        }
    }
}

impl From<usize> for Indent
{
    fn from(indent: usize) -> Self
    {
        Self(Some(indent))
    }
}

impl From<Option<usize>> for Indent
{
    fn from(maybe: Option<usize>) -> Self
    {
        Self(maybe)
    }
}

impl PartialEq<usize> for Indent
{
    fn eq(&self, other: &usize) -> bool
    {
        match self.0
        {
            Some(ref indent) => indent == other,
            None => false,
        }
    }
}

impl PartialOrd<usize> for Indent
{
    fn partial_cmp(&self, other: &usize) -> Option<std::cmp::Ordering>
    {
        match self.0
        {
            Some(indent) => indent.partial_cmp(other),
            None => Some(std::cmp::Ordering::Less),
        }
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_closed()
    {
        let indent = Indentation::new();

        assert_eq!(indent.levels(), vec![-1]);
        assert_eq!(indent.indent(), STARTING_INDENT);
    }

    #[test]
    fn increment_only_deeper()
    {
        let mut indent = Indentation::new();

        assert!(indent.increment(0));
        assert!(!indent.increment(0));
        assert!(indent.increment(2));
        assert!(!indent.increment(1));

        assert_eq!(indent.levels(), vec![-1, 0, 2]);
    }

    #[test]
    fn decrement_multiple_levels()
    {
        let mut indent = Indentation::new();
        let mut closed = 0;

        indent.increment(0);
        indent.increment(2);
        indent.increment(4);

        let count = indent.decrement(0usize, || closed += 1);

        assert_eq!((count, closed), (2, 2));
        assert_eq!(indent.levels(), vec![-1, 0]);
    }

    #[test]
    fn decrement_equal_closes_nothing()
    {
        let mut indent = Indentation::new();

        indent.increment(2);

        assert_eq!(indent.decrement(2usize, || {}), 0);
        assert_eq!(indent.levels(), vec![-1, 2]);
    }

    #[test]
    fn decrement_to_starting_indent()
    {
        let mut indent = Indentation::new();

        indent.increment(0);
        indent.increment(3);

        assert_eq!(indent.decrement(STARTING_INDENT, || {}), 2);
        assert_eq!(indent.levels(), vec![-1]);
    }
}
