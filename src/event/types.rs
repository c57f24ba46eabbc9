/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains the various types used by [Event]s to represent
//! YAML.

use std::fmt;

/// An empty YAML scalar.
///
/// In many circumstances, a YAML node is implied by the
/// stream state, though it may not appear in the stream
/// directly. This constant is the representation of such
/// nodes.
pub const EMPTY_SCALAR: Scalar<'static> = Scalar::new("", ScalarStyle::Plain);

/// Specific YAML productions found in the YAML stream. Each
/// Event has a start and end mark indicating the byte range
/// of the source represented by the given Event, and the
/// line and column the range starts at. See [EventData]
/// for all of the possible Event variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'de>
{
    start_mark: usize,
    end_mark:   usize,
    line:       usize,
    column:     usize,
    inner:      EventData<'de>,
}

impl<'de> Event<'de>
{
    /// Instantiate a new [`Event`] with the given marks,
    /// position and data
    pub fn new(
        start_mark: usize,
        end_mark: usize,
        line: usize,
        column: usize,
        event: EventData<'de>,
    ) -> Self
    {
        Self {
            start_mark,
            end_mark,
            line,
            column,
            inner: event,
        }
    }

    /// Byte offset of the start of this Event
    pub fn start(&self) -> usize
    {
        self.start_mark
    }

    /// Byte offset just past the end of this Event
    pub fn end(&self) -> usize
    {
        self.end_mark
    }

    /// Line this Event starts on, starting from 1
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// Column this Event starts at, starting from 0
    pub fn column(&self) -> usize
    {
        self.column
    }

    /// Retrieve the data associated with this Event
    pub fn data(&self) -> &EventData<'de>
    {
        &self.inner
    }

    /// Consume this Event, returning its data
    pub fn into_data(self) -> EventData<'de>
    {
        self.inner
    }

    /// The source text this Event covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str
    {
        source.get(self.start_mark..self.end_mark).unwrap_or("")
    }
}

/// The possible variants of an [`Event`]. Every node is
/// bracketed by an [`Enter`](EventData::Enter) and a
/// matching [`Exit`](EventData::Exit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventData<'de>
{
    /// Beginning of the event stream, always the first
    /// event
    StreamStart,
    /// End of the event stream, always the last event
    StreamEnd,

    /// A node begins
    Enter(Node<'de>),
    /// The most recently entered, still open node ends
    Exit(Node<'de>),
}

impl<'de> EventData<'de>
{
    /// The node this event enters or exits, if any
    pub fn node(&self) -> Option<&Node<'de>>
    {
        match self
        {
            Self::Enter(node) | Self::Exit(node) => Some(node),
            Self::StreamStart | Self::StreamEnd => None,
        }
    }
}

/// A node of the YAML tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'de>
{
    /// A block mapping, containing one or more pairs
    Mapping,
    /// A key value pair, the key being the given scalar.
    /// Its value is the one node nested inside.
    Pair(Scalar<'de>),
    /// A block sequence, containing one or more elements
    Sequence,
    /// A single sequence entry, wrapping one node
    Element,
    /// A leaf value
    Scalar(Scalar<'de>),
}

impl<'de> Node<'de>
{
    /// A short, human readable name for this node's kind
    pub fn name(&self) -> &'static str
    {
        match self
        {
            Self::Mapping => "mapping",
            Self::Pair(_) => "pair",
            Self::Sequence => "sequence",
            Self::Element => "element",
            Self::Scalar(_) => "scalar",
        }
    }
}

impl fmt::Display for Node<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Self::Pair(key) => write!(f, "{} {:?}", self.name(), key.as_str()),
            Self::Scalar(scalar) => write!(f, "{} {:?}", self.name(), scalar.as_str()),
            _ => f.write_str(self.name()),
        }
    }
}

/// The content of a scalar, borrowed from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar<'de>
{
    text:  &'de str,
    style: ScalarStyle,
}

impl<'de> Scalar<'de>
{
    pub const fn new(text: &'de str, style: ScalarStyle) -> Self
    {
        Self { text, style }
    }

    /// The scalar's text. Double quoted scalars have their
    /// quotes removed, but escapes are kept as written.
    pub fn as_str(&self) -> &'de str
    {
        self.text
    }

    pub fn style(&self) -> ScalarStyle
    {
        self.style
    }

    pub fn is_empty(&self) -> bool
    {
        self.text.is_empty()
    }
}

impl fmt::Display for Scalar<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.text)
    }
}

/// How a scalar was written in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarStyle
{
    Plain,
    DoubleQuote,
}
