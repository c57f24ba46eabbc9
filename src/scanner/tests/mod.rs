/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#[macro_use]
mod macros;

mod scalar;

use pretty_assertions::assert_eq;

use super::*;
use crate::{error::internal::ErrorCode, token::Kind::*};

#[test]
fn empty()
{
    let data = "";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart   => "expected start of stream",
        | StreamEnd     => "expected end of stream",
        | Eof           => "expected end of file",
        @ None          => "expected stream to be finished"
    );
}

#[test]
fn single_scalar()
{
    let data = "hello";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | (PlainScalar, "hello"),
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn eof_repeats()
{
    let data = "a";
    let mut s = Lexer::new(data);
    let mut kinds = Vec::new();

    for _ in 0..6
    {
        kinds.push(s.next_token().expect("a token").kind);
    }

    assert_eq!(kinds, vec![StreamStart, PlainScalar, StreamEnd, Eof, Eof, Eof]);
}

#[test]
fn iterator_ends_after_eof()
{
    let data = "key: value";
    let s = Lexer::new(data);

    let kinds = s
        .map(|r| r.map(|token| token.kind))
        .collect::<Result<Vec<_>>>()
        .expect("valid tokens");

    assert_eq!(kinds.last(), Some(&Eof));
    assert_eq!(kinds.iter().filter(|&&k| k == Eof).count(), 1);
}

#[test]
fn balanced_blocks()
{
    let data = "
a:
  b:
    - c
    - d: e
      f: g
h:
  - i
";
    let s = Lexer::new(data);
    let mut depth: isize = 0;

    for token in s
    {
        match token.expect("valid token").kind
        {
            MappingStart | SequenceStart => depth += 1,
            BlockEnd =>
            {
                depth -= 1;
                assert!(depth >= 0, "more block ends than starts");
            },
            _ =>
            {},
        }
    }

    assert_eq!(depth, 0);
}

#[test]
fn source_name()
{
    let anonymous = Lexer::new("");
    let named = Lexer::with_name("", "config.yaml");

    assert_eq!(anonymous.source_name(), "<string>");
    assert_eq!(named.source_name(), "config.yaml");
}
