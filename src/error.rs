/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{error::Error as StdError, fmt};

/// Result typedef used throughout this library's public API
pub type Result<T> = std::result::Result<T, Error>;

/// Opaque type representing all possible errors which can
/// occur during library usage.
pub struct Error
{
    inner: Box<internal::Error>,
}

impl Error
{
    /// The line at which the error occurred, starting from
    /// 1.
    pub fn line(&self) -> usize
    {
        self.inner.line
    }

    /// The column into the line where the error occurred,
    /// starting from 0.
    pub fn column(&self) -> usize
    {
        self.inner.column
    }

    /// The byte index into the source at which the error
    /// occurred.
    pub fn at(&self) -> usize
    {
        self.inner.at
    }

    /// The reason for this error, without its position
    pub fn reason(&self) -> String
    {
        self.inner.kind.to_string()
    }

    /// Categorize the error into one of the following:
    ///
    /// - [`Category::Syntax`] The YAML text was
    ///   syntactically invalid
    /// - [`Category::Data`] The YAML text contained data
    ///   that could not be processed
    /// - [`Category::IO`] The underlying byte stream
    ///   surfaced an error while doing IO
    /// - [`Category::EOF`] The YAML text ended
    ///   unexpectedly
    pub fn classify(&self) -> Category
    {
        self.inner.classify()
    }

    /// Checks whether this error was contextualized.
    ///
    /// If this method returns false then the methods
    ///
    /// - [`at()`](#method.at)
    /// - [`column()`](#method.column)
    /// - [`line()`](#method.line)
    ///
    /// will return meaningless values.
    pub fn has_context(&self) -> bool
    {
        self.inner.has_context()
    }

    /// Boxes the internal error, returning new public error
    /// type
    pub(crate) fn new(err: internal::Error) -> Self
    {
        Self {
            inner: Box::new(err),
        }
    }

    /// The library specific code of this error, if it has
    /// one
    #[cfg(test)]
    pub(crate) fn code(&self) -> Option<internal::ErrorCode>
    {
        match self.inner.kind
        {
            internal::ErrorKind::Code(code) => Some(code),
            internal::ErrorKind::Source(_) => None,
        }
    }
}

/// Rough category of an [`Error`].
///
/// Useful for making decisions upon encountering an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// The underlying byte stream returned an error while
    /// attempting IO
    IO,

    /// The YAML text was not syntactically valid
    Syntax,

    /// There was an issue with the data contained in the
    /// YAML text, or the library's own bookkeeping
    Data,

    /// The YAML text unexpectedly terminated before it was
    /// appropriate to do so
    EOF,
}

pub(crate) mod internal
{
    use std::{error::Error as StdError, fmt, io, str::Utf8Error};

    use super::Category;

    /// Internal error representation used throughout the
    /// library.
    ///
    /// Contains enough metadata about the position of the
    /// error that we can contextualize it later
    pub(crate) struct Error
    {
        /// Error variant encountered
        pub kind:   ErrorKind,
        /// Position in the source that the error occurred
        pub at:     usize,
        /// Line number of the error
        pub line:   usize,
        /// Offset into current line the error occurred at
        pub column: usize,
    }

    impl Error
    {
        /// Create a new, contextless [`Error`].
        ///
        /// Care should be taken to later apply context, if
        /// at all possible.
        pub fn new<T>(err: T) -> Self
        where
            T: Into<ErrorKind>,
        {
            Self::with_context(err, 0, 0, 0)
        }

        /// Create a new, contextualized [`Error`].
        pub fn with_context<T>(err: T, at: usize, line: usize, column: usize) -> Self
        where
            T: Into<ErrorKind>,
        {
            let kind = err.into();

            Self {
                kind,
                at,
                line,
                column,
            }
        }

        /// Checks whether this error is contextualized
        pub fn has_context(&self) -> bool
        {
            // Lines start from 1, so only errors created without
            // context will have a line number of 0
            self.line != 0
        }

        /// Categorize this error
        pub fn classify(&self) -> Category
        {
            Into::into(&self.kind)
        }
    }

    /// Unified wrapper around the actual error variants we
    /// can produce
    #[derive(Debug)]
    pub(crate) enum ErrorKind
    {
        Code(ErrorCode),
        Source(SourceError),
    }

    /// Lightweight errors, specific to this library.
    ///
    /// This enum should never be polluted with large
    /// variants, or wrap underlying errors. Use
    /// [`SourceError`] for those.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) enum ErrorCode
    {
        /*
         * ==== Scanner Errors ====
         */
        /// A double quoted scalar was still open when the
        /// input ended
        ///
        /// ```yaml
        /// key: "no closing quote
        /// #    ^ UnterminatedScalar
        /// ```
        UnterminatedScalar,

        /// A value indicator was found without a preceding
        /// key on the same line
        ///
        /// ```yaml
        /// : value
        /// # ^ InvalidValue
        /// ```
        InvalidValue,

        /// The scanner's token buffer was asked to splice a
        /// token into a position that was already emitted
        CorruptQueue,

        /*
         * ==== Parser Errors ====
         */
        /// The token stream did not begin with a stream
        /// start, or continued after its end
        CorruptStream,

        /// A mapping key was required but not found.
        ///
        /// ```yaml
        /// key: value
        ///   - element
        /// # ^ MissingKey
        /// ```
        MissingKey,

        /// A mapping key was not followed by a value
        /// indicator
        MissingValue,

        /// An entry in a block sequence was required but not
        /// found
        MissingBlockEntry,

        /// A block collection was not closed where the
        /// grammar required it to be
        MissingBlockEnd,

        /// A token appeared where the grammar does not
        /// allow it
        UnexpectedToken,
    }

    /// Heavy and/or external errors that can occur during
    /// library usage
    #[derive(Debug)]
    pub(crate) enum SourceError
    {
        /// Catch all wrapper for any underlying IO errors
        /// reported to us
        IO(io::Error),

        /// Encountered invalid an UTF8 sequence
        UTF8(Utf8Error),
    }

    impl fmt::Debug for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            let mut this = f.debug_struct("Error");

            this.field("kind", &self.kind);

            if self.has_context()
            {
                this.field("line", &self.line)
                    .field("column", &self.column)
                    .field("index", &self.at);
            }

            this.finish()
        }
    }

    impl fmt::Display for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use fmt::Display;

            if self.has_context()
            {
                f.write_fmt(format_args!(
                    "{}, on line {}, column {}, at index {}",
                    self.kind, self.line, self.column, self.at
                ))
            }
            else
            {
                Display::fmt(&self.kind, f)
            }
        }
    }

    impl StdError for Error
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            StdError::source(&self.kind)
        }
    }

    impl From<Error> for super::Error
    {
        fn from(err: Error) -> Self
        {
            Self::new(err)
        }
    }

    impl<T> From<T> for Error
    where
        T: Into<ErrorKind>,
    {
        fn from(t: T) -> Self
        {
            Error::new(t.into())
        }
    }

    impl From<Error> for std::io::Error
    {
        fn from(err: Error) -> Self
        {
            if let ErrorKind::Source(SourceError::IO(err)) = err.kind
            {
                return err;
            }

            match err.classify()
            {
                Category::Syntax => io::Error::new(io::ErrorKind::InvalidInput, err),
                Category::Data => io::Error::new(io::ErrorKind::InvalidData, err),
                Category::EOF => io::Error::new(io::ErrorKind::UnexpectedEof, err),
                Category::IO => io::Error::new(io::ErrorKind::Other, err),
            }
        }
    }

    impl From<&'_ ErrorKind> for Category
    {
        fn from(kind: &'_ ErrorKind) -> Self
        {
            match kind
            {
                ErrorKind::Code(e) => e.into(),
                ErrorKind::Source(e) => e.into(),
            }
        }
    }

    impl fmt::Display for ErrorKind
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                ErrorKind::Code(ref e) => fmt::Display::fmt(e, f),
                ErrorKind::Source(ref e) => fmt::Display::fmt(e, f),
            }
        }
    }

    impl StdError for ErrorKind
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            match self
            {
                ErrorKind::Code(_) => None,
                ErrorKind::Source(e) => Some(e),
            }
        }
    }

    impl From<ErrorCode> for ErrorKind
    {
        fn from(e: ErrorCode) -> Self
        {
            ErrorKind::Code(e)
        }
    }

    impl From<SourceError> for ErrorKind
    {
        fn from(e: SourceError) -> Self
        {
            ErrorKind::Source(e)
        }
    }

    impl From<ErrorCode> for Category
    {
        fn from(code: ErrorCode) -> Self
        {
            use ErrorCode::*;

            match code
            {
                InvalidValue | MissingKey | MissingValue | MissingBlockEntry | MissingBlockEnd
                | UnexpectedToken => Category::Syntax,

                CorruptQueue | CorruptStream => Category::Data,

                UnterminatedScalar => Category::EOF,
            }
        }
    }

    impl From<&'_ ErrorCode> for Category
    {
        fn from(code: &'_ ErrorCode) -> Self
        {
            From::from(*code)
        }
    }

    impl fmt::Display for ErrorCode
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use ErrorCode::*;

            match self
            {
                UnterminatedScalar => f.write_str("double quoted scalar is missing its closing quote"),
                InvalidValue => f.write_str("unable to locate key for value"),
                CorruptQueue => f.write_str("token buffer lost track of a pending key"),
                CorruptStream => f.write_str("invalid or corrupt token stream"),
                MissingKey => f.write_str("key node was expected"),
                MissingValue => f.write_str("missing YAML mapping value"),
                MissingBlockEntry => f.write_str("block entry was expected"),
                MissingBlockEnd => f.write_str("end of block collection was expected"),
                UnexpectedToken => f.write_str("token is not allowed in this context"),
            }
        }
    }

    impl StdError for ErrorCode {}

    impl From<&'_ SourceError> for Category
    {
        fn from(err: &'_ SourceError) -> Self
        {
            match err
            {
                SourceError::IO(_) => Category::IO,
                SourceError::UTF8(_) => Category::Data,
            }
        }
    }

    impl fmt::Display for SourceError
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                SourceError::IO(ref e) => fmt::Display::fmt(e, f),
                SourceError::UTF8(ref e) => fmt::Display::fmt(e, f),
            }
        }
    }

    impl StdError for SourceError
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            match self
            {
                SourceError::IO(e) => Some(e),
                SourceError::UTF8(e) => Some(e),
            }
        }
    }

    impl From<Utf8Error> for SourceError
    {
        fn from(e: Utf8Error) -> Self
        {
            SourceError::UTF8(e)
        }
    }

    impl From<io::Error> for SourceError
    {
        fn from(e: io::Error) -> Self
        {
            SourceError::IO(e)
        }
    }
}

impl fmt::Debug for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Error
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        StdError::source(&self.inner)
    }
}

impl From<Error> for std::io::Error
{
    fn from(err: Error) -> Self
    {
        From::from(*err.inner)
    }
}
