/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn plain_with_colon_inside()
{
    let data = "url: http://example.com";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | MappingStart,
        | Key,
        | (PlainScalar, "url"),
        | Value,
        | (PlainScalar, "http://example.com")   => "expected ':' without a space to be content",
        | BlockEnd,
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn plain_multiple_words()
{
    let data = "hello world";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | (PlainScalar, "hello"),
        | (PlainScalar, "world"),
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn plain_dash_without_space()
{
    let data = "-1: -x";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | MappingStart,
        | Key,
        | (PlainScalar, "-1")                   => "expected '-' without a space to be content",
        | Value,
        | (PlainScalar, "-x"),
        | BlockEnd,
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn double_quoted_key()
{
    let data = r#""a: b": c"#;
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | MappingStart,
        | Key                                   => "expected a quoted scalar to be a key",
        | (DoubleQuotedScalar, r#""a: b""#)     => "expected ': ' inside quotes to be content",
        | Value,
        | (PlainScalar, "c"),
        | BlockEnd,
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn double_quoted_escaped_quote()
{
    let data = r#"key: "say \"hi\"""#;
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | MappingStart,
        | Key,
        | (PlainScalar, "key"),
        | Value,
        | (DoubleQuotedScalar, r#""say \"hi\"""#),
        | BlockEnd,
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn double_quoted_multi_line()
{
    let data = "key: \"first\n  second\"\nnext: value";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | MappingStart,
        | Key,
        | (PlainScalar, "key"),
        | Value,
        | (DoubleQuotedScalar, "\"first\n  second\""),
        | Key,
        | (PlainScalar, "next"),
        | Value,
        | (PlainScalar, "value"),
        | BlockEnd,
        | StreamEnd,
        | Eof,
        @ None
    );
}

#[test]
fn double_quoted_element()
{
    let data = "- \"a\"\n- b";
    let mut s = Lexer::new(data);

    tokens!(s =>
        | StreamStart,
        | SequenceStart,
        | Element,
        | (DoubleQuotedScalar, "\"a\""),
        | Element,
        | (PlainScalar, "b"),
        | BlockEnd,
        | StreamEnd,
        | Eof,
        @ None
    );
}
