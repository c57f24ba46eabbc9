/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This library turns indentation structured YAML text
//! into a flat set of hierarchically named keys.
//!
//! Only the block subset of YAML is understood: block
//! mappings, block sequences, plain scalars and double
//! quoted scalars. Each leaf value becomes a [`Key`],
//! named by the path leading to it:
//!
//! ```
//! use yamlkeys::{parse_str, Key};
//!
//! let keys = parse_str("server:\n  port: 8080\n  hosts:\n    - a\n    - b", Key::new("user"))?;
//!
//! let names: Vec<_> = keys.iter().map(Key::name).collect();
//! assert_eq!(names, vec![
//!     "user/server/port",
//!     "user/server/hosts/#0",
//!     "user/server/hosts/#1",
//!     "user/server/hosts",
//! ]);
//! assert_eq!(keys.lookup("user/server/hosts").and_then(|k| k.meta("array")), Some("#1"));
//! # Ok::<(), yamlkeys::Error>(())
//! ```
//!
//! The stages are exposed by module, for callers that need
//! more control:
//!
//! - [`scanner`] The indentation aware lexer
//! - [`event`] The parser and the [`Listener`] callback
//!   interface
//! - [`key`] The key storage primitives
//! - [`listener`] The projection of a YAML tree into keys

#![allow(clippy::suspicious_else_formatting)]

pub mod event;
pub mod key;
pub mod listener;
pub mod scanner;
pub mod token;

mod error;
mod queue;

use std::io;

use tracing::debug;

pub use crate::{
    error::{Category, Error, Result},
    event::Listener,
    key::{Key, KeySet},
    listener::KeyListener,
};
use crate::{
    error::internal::{self, SourceError},
    event::{walk, Parser},
    scanner::Lexer,
};

/// Convert .text into a [`KeySet`], with every key placed
/// below .parent
pub fn parse_str(text: &str, parent: Key) -> Result<KeySet>
{
    debug!(parent = %parent, bytes = text.len(), "parse");

    let mut listener = KeyListener::new(parent);

    walk(events(text), &mut listener)?;

    let keys = listener.into_key_set();

    debug!(keys = keys.len(), "parse complete");

    Ok(keys)
}

/// Read .src to its end, and convert the resulting text
/// as [`parse_str`] does.
///
/// Errors reading .src are reported as
/// [`Category::IO`], and text that is not valid UTF8 as
/// [`Category::Data`].
pub fn parse_reader<R>(mut src: R, parent: Key) -> Result<KeySet>
where
    R: io::Read,
{
    let mut buffer = Vec::new();

    src.read_to_end(&mut buffer).map_err(source_error)?;

    let text = std::str::from_utf8(&buffer).map_err(source_error)?;

    parse_str(text, parent)
}

/// Iterate over the parse [`Event`](event::Event)s of
/// .text, for callers providing their own [`Listener`]
pub fn events(text: &str) -> Parser<'_>
{
    Parser::new(Lexer::new(text))
}

fn source_error<E>(err: E) -> Error
where
    E: Into<SourceError>,
{
    internal::Error::new(err.into()).into()
}
