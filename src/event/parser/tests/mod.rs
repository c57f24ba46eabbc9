/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */


mod collection;
mod scalar;

use pretty_assertions::assert_eq;

use super::*;
use crate::{
    error::internal::ErrorCode,
    event::types::EventData::{StreamEnd, StreamStart},
};

const MAPPING: Node<'static> = Node::Mapping;
const SEQUENCE: Node<'static> = Node::Sequence;
const ELEMENT: Node<'static> = Node::Element;
const EMPTY: Node<'static> = Node::Scalar(EMPTY_SCALAR);

fn parser(data: &str) -> Parser<'_>
{
    Parser::new(Lexer::new(data))
}

fn pair(key: &str) -> Node<'_>
{
    Node::Pair(Scalar::new(key, ScalarStyle::Plain))
}

fn scalar(text: &str) -> Node<'_>
{
    Node::Scalar(Scalar::new(text, ScalarStyle::Plain))
}

fn quoted(text: &str) -> Node<'_>
{
    Node::Scalar(Scalar::new(text, ScalarStyle::DoubleQuote))
}

#[test]
fn empty()
{
    let mut p = parser("");

    events!(p =>
        | StreamStart       => "expected start of stream",
        | StreamEnd         => "expected end of stream",
        @ None              => "expected stream to be finished"
    );
}

#[test]
fn root_scalar()
{
    let mut p = parser("hello");

    events!(p =>
        | StreamStart,
        + scalar("hello"),
        - scalar("hello"),
        | StreamEnd,
        @ None
    );
}

#[test]
fn finished_after_end()
{
    let mut p = parser("a: b");

    while let Some(event) = p.next_event()
    {
        event.expect("a valid event");
    }

    assert!(p.next_event().is_none());
    assert!(p.next().is_none());
}

#[test]
fn event_positions()
{
    let data = "key: value";
    let events = parser(data)
        .collect::<Result<Vec<_>>>()
        .expect("valid events");

    let value = Scalar::new("value", ScalarStyle::Plain);
    let key = Scalar::new("key", ScalarStyle::Plain);

    assert_eq!(
        events,
        vec![
            Event::new(0, 0, 1, 0, EventData::StreamStart),
            Event::new(0, 0, 1, 0, EventData::Enter(Node::Mapping)),
            Event::new(0, 3, 1, 0, EventData::Enter(Node::Pair(key))),
            Event::new(5, 10, 1, 5, EventData::Enter(Node::Scalar(value))),
            Event::new(5, 10, 1, 5, EventData::Exit(Node::Scalar(value))),
            Event::new(0, 10, 1, 0, EventData::Exit(Node::Pair(key))),
            Event::new(0, 10, 1, 0, EventData::Exit(Node::Mapping)),
            Event::new(10, 10, 1, 10, EventData::StreamEnd),
        ]
    );
}

#[test]
fn exit_spans_whole_node()
{
    let data = "list:\n  - a\n  - b\nnext: c\n";
    let exits: Vec<_> = parser(data)
        .filter_map(|event| event.ok())
        .filter(|event| matches!(event.data(), EventData::Exit(Node::Pair(_)) | EventData::Exit(Node::Sequence)))
        .map(|event| event.text(data))
        .collect();

    assert_eq!(exits, vec!["- a\n  - b", "list:\n  - a\n  - b", "next: c"]);
}

#[test]
fn source_accessors()
{
    let p = Parser::new(Lexer::with_name("a: b", "inline"));

    assert_eq!(p.source(), "a: b");
    assert_eq!(p.source_name(), "inline");
}
