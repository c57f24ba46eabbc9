/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn plain_scalars_join()
{
    let data = "key: hello  big world";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("key"),
        + scalar("hello  big world")    => "expected the words to join, keeping their spacing",
        - scalar("hello  big world"),
        - pair("key"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn double_quoted_unquoted()
{
    let data = r#""a: b": "c \"d\"""#;
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + Node::Pair(Scalar::new("a: b", ScalarStyle::DoubleQuote)),
        + quoted(r#"c \"d\""#)          => "expected escapes to be kept as written",
        - quoted(r#"c \"d\""#),
        - Node::Pair(Scalar::new("a: b", ScalarStyle::DoubleQuote)),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn double_quoted_does_not_join()
{
    let data = r#"- "a" b"#;
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + SEQUENCE,
        + ELEMENT,
        + quoted("a"),
        - quoted("a"),
        - ELEMENT,
        > ErrorCode::MissingBlockEntry  => "expected a plain scalar after a quoted one to be rejected",
        @ None
    );
}

#[test]
fn url_value()
{
    let data = "site: http://example.com:8080/path";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("site"),
        + scalar("http://example.com:8080/path"),
        - scalar("http://example.com:8080/path"),
        - pair("site"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}
