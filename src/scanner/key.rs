/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! ```text
//! The key Scanner subsystem is responsible for managing
//! the state of implicit key searches.
//!
//! First, an explanation of the problem.
//!
//! Given the following YAML:
//!
//!     - "a key": a value
//!
//! The following tokens should be produced:
//!
//!     SequenceStart
//!     Element
//!     MappingStart
//!     Key
//!     DoubleQuotedScalar('"a key"')
//!     Value
//!     PlainScalar('a value')
//!     BlockEnd
//!     BlockEnd
//!
//! Note where the key is produced.
//!
//!     - "a key": a value
//!      ^
//!      MappingStart, Key
//!
//! YAML doesn't provide any indicator of an implicit key,
//! thus the first time we'll know that a key should be
//! produced is when we hit the Value (':') token here:
//!
//!     - "a key": a value
//!               ^
//!               Value
//!
//! Therefore we need some way to "save" a possible key's
//! position so when/if we hit a Value token we can backfill
//! the Key (and possibly the MappingStart of a new block)
//! to its correct location in the token queue.
//!
//! The solution boils down to three things:
//!
//! 1. Saving a candidate whenever a scalar starts,
//!    replacing any older candidate
//! 2. Discarding the candidate once it can no longer be
//!    confirmed: the scan moved to another line, or
//!    something other than a ':' followed the scalar
//! 3. Splicing the Key into the queue at the saved logical
//!    position when the ':' arrives
//!
//! This module manages 1. while 2. and 3. live in the
//! Lexer, with the Queue handling the splice arithmetic.
//! ```

use crate::token::Token;

/// Manages the state for tracking the (at most one)
/// possible implicit Key the Lexer may encounter
#[derive(Debug, Clone)]
pub(in crate::scanner) struct SimpleKey
{
    save: Option<KeySave>,
}

impl SimpleKey
{
    pub fn new() -> Self
    {
        Self { save: None }
    }

    /// Save a potential simple key, abandoning any previous
    /// candidate
    pub fn save(&mut self, token: Token, position: usize)
    {
        self.save = Some(KeySave::new(token, position))
    }

    /// Retrieve the potential simple key
    pub fn saved(&self) -> Option<&KeySave>
    {
        self.save.as_ref()
    }

    /// Remove the potential simple key, returning it
    pub fn take(&mut self) -> Option<KeySave>
    {
        self.save.take()
    }

    /// Is a simple key possible?
    pub fn possible(&self) -> bool
    {
        self.save.is_some()
    }
}

impl Default for SimpleKey
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// Holds the state of a potential key, specifically the
/// Key token itself and where in the token stream it must
/// be inserted
#[derive(Debug, Clone, Copy)]
pub(in crate::scanner) struct KeySave
{
    token:    Token,
    position: usize,
}

impl KeySave
{
    pub fn new(token: Token, position: usize) -> Self
    {
        Self { token, position }
    }

    /// The provisional Key token, positioned at the start
    /// of the scalar
    pub fn token(&self) -> &Token
    {
        &self.token
    }

    /// The logical queue position the Key must take
    pub fn position(&self) -> usize
    {
        self.position
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::token::Kind;

    #[test]
    fn newer_candidate_replaces_older()
    {
        let mut key = SimpleKey::new();

        key.save(Token::new(Kind::Key, 0, 0, 1, 0), 1);
        key.save(Token::new(Kind::Key, 4, 4, 1, 4), 3);

        let saved = key.take().expect("a saved key");

        assert_eq!(saved.position(), 3);
        assert_eq!(saved.token().start, 4);
        assert!(!key.possible());
    }
}
