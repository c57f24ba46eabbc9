/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes methods for directly interacting
//! with YAML event streams.
//!
//! ## Understanding Events
//!
//! Each event produced represents an important semantic
//! change in the underlying YAML text. Broadly, these can
//! be categorized into two spaces:
//!
//! 1. Virtual / Marker
//!     - [`StreamStart`]
//!     - [`StreamEnd`]
//!
//! 2. Nesting change (+-)
//!     - [`Enter`]
//!     - [`Exit`]
//!
//! Every [`Node`] of the tree is bracketed by an
//! [`Enter`] and [`Exit`] pair, which the parser produces
//! from the following token productions:
//!
//! ```text
//! yaml            := StreamStart node? StreamEnd Eof
//! node            := scalar+ | mapping | sequence | empty
//! mapping         := MappingStart pair+ BlockEnd
//! pair            := Key scalar Value node
//! sequence        := SequenceStart (Element node)+ BlockEnd
//!                  | (Element node)+
//! scalar          := PlainScalar | DoubleQuotedScalar
//!
//! ?               => 0 or 1 of prefix
//! +               => 1 or more of prefix
//! ()              => production grouping
//! |               => production logical OR
//! ```
//!
//! A run of plain scalars on one line is joined into a
//! single scalar node, and a node implied by the stream
//! (e.g a key with nothing after its ':') is an empty
//! scalar. A sequence without a SequenceStart is only
//! allowed as the value of a pair, at the pair's own
//! column.
//!
//! The [`Listener`] trait and [`walk`] function provide a
//! callback interface over the event stream.
//!
//! [`StreamStart`]:    enum@types::EventData::StreamStart
//! [`StreamEnd`]:      enum@types::EventData::StreamEnd
//! [`Enter`]:          enum@types::EventData::Enter
//! [`Exit`]:           enum@types::EventData::Exit
//! [`Node`]:           enum@types::Node

mod parser;
mod state;
mod walk;

pub(crate) mod error;
pub mod types;

pub use self::{
    parser::Parser,
    types::Event,
    walk::{walk, Listener},
};
