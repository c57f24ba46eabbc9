/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn mapping_with_sequence()
{
    let data = "
name: Tom
pets:
  - Cat
  - Dog
";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("name"),
        + scalar("Tom"),
        - scalar("Tom"),
        - pair("name"),
        + pair("pets"),
        + SEQUENCE,
        + ELEMENT,
        + scalar("Cat"),
        - scalar("Cat"),
        - ELEMENT,
        + ELEMENT,
        + scalar("Dog"),
        - scalar("Dog"),
        - ELEMENT,
        - SEQUENCE,
        - pair("pets"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn mapping_nested()
{
    let data = "
a:
  b:
    c: d
e: f
";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("a"),
        + MAPPING,
        + pair("b"),
        + MAPPING,
        + pair("c"),
        + scalar("d"),
        - scalar("d"),
        - pair("c"),
        - MAPPING,
        - pair("b"),
        - MAPPING,
        - pair("a"),
        + pair("e"),
        + scalar("f"),
        - scalar("f"),
        - pair("e"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn mapping_empty_values()
{
    let data = "a:\nb: c\nd:";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("a"),
        + EMPTY             => "expected an implied empty value",
        - EMPTY,
        - pair("a"),
        + pair("b"),
        + scalar("c"),
        - scalar("c"),
        - pair("b"),
        + pair("d"),
        + EMPTY             => "expected an implied empty value at the end",
        - EMPTY,
        - pair("d"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn indentless_sequence()
{
    let data = "
pets:
- Cat
- Dog
name: Tom
";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("pets"),
        + SEQUENCE          => "expected a sequence without its own block",
        + ELEMENT,
        + scalar("Cat"),
        - scalar("Cat"),
        - ELEMENT,
        + ELEMENT,
        + scalar("Dog"),
        - scalar("Dog"),
        - ELEMENT,
        - SEQUENCE          => "expected the key to end the sequence",
        - pair("pets"),
        + pair("name"),
        + scalar("Tom"),
        - scalar("Tom"),
        - pair("name"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn indentless_sequence_nested_dedent()
{
    let data = "
a:
  b:
  - x
c: d
";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + MAPPING,
        + pair("a"),
        + MAPPING,
        + pair("b"),
        + SEQUENCE,
        + ELEMENT,
        + scalar("x"),
        - scalar("x"),
        - ELEMENT,
        - SEQUENCE,
        - pair("b"),
        - MAPPING,
        - pair("a"),
        + pair("c"),
        + scalar("d"),
        - scalar("d"),
        - pair("c"),
        - MAPPING,
        | StreamEnd,
        @ None
    );
}

#[test]
fn sequence_nested()
{
    let data = "
- - a
  - b
- c
";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + SEQUENCE,
        + ELEMENT,
        + SEQUENCE,
        + ELEMENT,
        + scalar("a"),
        - scalar("a"),
        - ELEMENT,
        + ELEMENT,
        + scalar("b"),
        - scalar("b"),
        - ELEMENT,
        - SEQUENCE,
        - ELEMENT,
        + ELEMENT,
        + scalar("c"),
        - scalar("c"),
        - ELEMENT,
        - SEQUENCE,
        | StreamEnd,
        @ None
    );
}

#[test]
fn sequence_of_mappings()
{
    let data = "
- name: a
  age: 1
- name: b
";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + SEQUENCE,
        + ELEMENT,
        + MAPPING,
        + pair("name"),
        + scalar("a"),
        - scalar("a"),
        - pair("name"),
        + pair("age"),
        + scalar("1"),
        - scalar("1"),
        - pair("age"),
        - MAPPING,
        - ELEMENT,
        + ELEMENT,
        + MAPPING,
        + pair("name"),
        + scalar("b"),
        - scalar("b"),
        - pair("name"),
        - MAPPING,
        - ELEMENT,
        - SEQUENCE,
        | StreamEnd,
        @ None
    );
}

#[test]
fn sequence_empty_element()
{
    let data = "-\n- b";
    let mut p = parser(data);

    events!(p =>
        | StreamStart,
        + SEQUENCE,
        + ELEMENT,
        + EMPTY             => "expected an implied empty element",
        - EMPTY,
        - ELEMENT,
        + ELEMENT,
        + scalar("b"),
        - scalar("b"),
        - ELEMENT,
        - SEQUENCE,
        | StreamEnd,
        @ None
    );
}
