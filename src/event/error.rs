/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the errors that may surface while
//! parsing a YAML token stream.

use std::fmt;

use crate::error::internal::{ErrorCode, ErrorKind};

/// Possible errors that can be encountered while parsing
/// YAML events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseError
{
    /// A mismatch between the stream's actual state and
    /// what the parser is expecting occurred.
    ///
    /// Typically, this only happens if the token stream
    /// does not start with a StreamStart, or continues
    /// after its StreamEnd.
    CorruptStream,

    /// A YAML mapping key was required but not found.
    ///
    /// Most commonly caused by a plain scalar continuing
    /// onto the next line, which is not supported.
    ///
    /// ```yaml
    /// key: a value
    ///   continued
    /// # ^^^^^^^^^ MissingKey
    /// ```
    MissingKey,

    /// A YAML mapping key was found without the value
    /// indicator that must follow it
    MissingValue,

    /// A entry in a block sequence was required but not
    /// found in the stream
    ///
    /// ## Examples
    ///
    /// ```yaml
    /// - 1
    /// - 2
    ///   bad
    /// # ^^^ MissingBlockEntry
    /// ```
    MissingBlockEntry,

    /// The current block mapping continued with something
    /// that is neither a key nor the end of the block
    MissingBlockEnd,

    /// A token was found somewhere the grammar does not
    /// allow it, for example a second root node
    ///
    /// ```yaml
    /// a scalar
    /// key: value
    /// # <-- UnexpectedToken
    /// ```
    UnexpectedToken,
}

impl fmt::Display for ParseError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&ErrorCode::from(*self), f)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for ErrorCode
{
    fn from(err: ParseError) -> Self
    {
        match err
        {
            ParseError::CorruptStream => ErrorCode::CorruptStream,
            ParseError::MissingKey => ErrorCode::MissingKey,
            ParseError::MissingValue => ErrorCode::MissingValue,
            ParseError::MissingBlockEntry => ErrorCode::MissingBlockEntry,
            ParseError::MissingBlockEnd => ErrorCode::MissingBlockEnd,
            ParseError::UnexpectedToken => ErrorCode::UnexpectedToken,
        }
    }
}

impl From<ParseError> for ErrorKind
{
    fn from(err: ParseError) -> Self
    {
        ErrorCode::from(err).into()
    }
}
