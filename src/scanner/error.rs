/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::error::internal::ErrorCode;

pub(crate) type ScanResult<T> = std::result::Result<T, ScanError>;

/// Possible errors that can be encountered while scanning
/// YAML text into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanError
{
    /// Got end of input inside a double quoted scalar
    UnterminatedScalar,

    /// A value indicator was found, but no key was pending
    InvalidValue,

    /// A pending key's queue position was already emitted
    CorruptQueue,
}

impl fmt::Display for ScanError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&ErrorCode::from(*self), f)
    }
}

impl std::error::Error for ScanError {}

impl From<ScanError> for ErrorCode
{
    fn from(err: ScanError) -> Self
    {
        match err
        {
            ScanError::UnterminatedScalar => ErrorCode::UnterminatedScalar,
            ScanError::InvalidValue => ErrorCode::InvalidValue,
            ScanError::CorruptQueue => ErrorCode::CorruptQueue,
        }
    }
}

impl From<ScanError> for crate::error::internal::ErrorKind
{
    fn from(err: ScanError) -> Self
    {
        ErrorCode::from(err).into()
    }
}
