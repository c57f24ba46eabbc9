/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Macro for asserting token streams
/// Used as: tokens!(Lexer => <sigil> <expected> [=>
/// <message>] [, ..]) Where:
///     <sigil>     '|' for a Token, '@' for an
///                 Option<Kind> or '>' for an ErrorCode
///     <expected>  A Kind, a (Kind, "text") tuple, an
///                 Option<Kind> or an ErrorCode
///     <message>   A message to print on failure
macro_rules! tokens {
    ($lexer:expr => $($id:tt $expected:expr $(=> $msg:tt)?),+ $(,)? ) => {
        let mut f = || -> std::result::Result<(), ::anyhow::Error> {

            $( tokens!(@unwrap $id $lexer => $expected $(=> $msg)? ); )+

            Ok(())
        };

        if let Err(e) = f() {
            panic!("tokens! error: {}", e)
        }
    };

    // <-- PRIVATE VARIANTS -->

    // Variant for token assert
    (@unwrap | $lexer:expr => $expected:expr $(=> $msg:tt)? ) => {
        let expected = $crate::scanner::tests::macros::Expect::from($expected);
        let token = match $lexer.next()
        {
            Some(Ok(token)) => token,
            Some(Err(e)) => anyhow::bail!("{} ~{}", e, $lexer.source()),
            None => anyhow::bail!("Unexpected end of tokens, was expecting: {:?} ~{}", expected, $lexer.source()),
        };

        assert_eq!(expected.view(&token, $lexer.source()), expected $(, $msg)? )
    };
    // Variant for option assert
    (@unwrap @ $lexer:expr => $expected:expr $(=> $msg:tt)? ) => {
        assert_eq!($lexer.next().transpose()?.map(|token| token.kind), $expected $(, $msg)? )
    };
    // Variant for error assert
    (@unwrap > $lexer:expr => $expected:expr $(=> $msg:tt)? ) => {
        match $lexer.next()
        {
            Some(Err(e)) => assert_eq!(e.code(), Some($expected) $(, $msg)? ),
            Some(Ok(token)) => anyhow::bail!("Expected error {:?}, got: {} ~{}", $expected, token.display($lexer.source()), $lexer.source()),
            None => anyhow::bail!("Unexpected end of tokens, was expecting error: {:?} ~{}", $expected, $lexer.source()),
        }
    };
}

use crate::token::{Kind, Token};

/// The parts of a token a test cares about: always its
/// kind, and optionally its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::scanner) struct Expect
{
    kind: Kind,
    text: Option<String>,
}

impl Expect
{
    /// Project .token onto the parts this expectation
    /// checks
    pub fn view(&self, token: &Token, source: &str) -> Self
    {
        Self {
            kind: token.kind,
            text: self.text.as_ref().map(|_| token.text(source).to_owned()),
        }
    }
}

impl From<Kind> for Expect
{
    fn from(kind: Kind) -> Self
    {
        Self { kind, text: None }
    }
}

impl From<(Kind, &'_ str)> for Expect
{
    fn from((kind, text): (Kind, &'_ str)) -> Self
    {
        Self {
            kind,
            text: Some(text.to_owned()),
        }
    }
}
