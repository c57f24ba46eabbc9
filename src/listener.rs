/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Projects a YAML tree into a [`KeySet`].
//!
//! Every leaf value becomes a key, named by the path of
//! mapping keys and sequence indices leading to it, below
//! a caller provided parent:
//!
//! ```yaml
//! name: Tom
//! pets:
//!   - Cat
//!   - Dog
//! ```
//!
//! with a parent of `user` becomes
//!
//! ```text
//! user/name   = Tom
//! user/pets/#0 = Cat
//! user/pets/#1 = Dog
//! user/pets      (meta: array = #1)
//! ```
//!
//! A sequence's key is appended once the sequence is
//! complete, carrying the base name of its last element in
//! its `array` metadata (or an empty string if it had no
//! elements).

use tracing::trace;

use crate::{
    event::{
        types::{Event, Scalar},
        Listener,
    },
    key::{array_base_name, Key, KeySet},
};

/// Metadata attribute marking a key as an array
pub const ARRAY_META: &str = "array";

/// A [`Listener`] building a [`KeySet`] from the nodes it
/// is notified of.
///
/// The key set may be read at any point, though it will
/// only contain partial content until the walk finishes.
#[derive(Debug, Clone)]
pub struct KeyListener
{
    root:    Key,
    parents: Vec<Key>,
    indices: Vec<u64>,
    keys:    KeySet,
}

impl KeyListener
{
    /// Create a new listener, placing every key it creates
    /// below .parent
    pub fn new(parent: Key) -> Self
    {
        Self {
            root:    parent,
            parents: Vec::new(),
            indices: Vec::new(),
            keys:    KeySet::new(),
        }
    }

    /// The keys collected so far
    pub fn key_set(&self) -> &KeySet
    {
        &self.keys
    }

    pub fn into_key_set(self) -> KeySet
    {
        self.keys
    }

    fn top(&self) -> &Key
    {
        self.parents.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Key
    {
        match self.parents.last_mut()
        {
            Some(key) => key,
            None => &mut self.root,
        }
    }

    fn push(&mut self, key: Key)
    {
        trace!(key = %key, depth = self.parents.len() + 1, "push parent");

        self.parents.push(key)
    }

    fn pop(&mut self)
    {
        if let Some(key) = self.parents.pop()
        {
            trace!(key = %key, depth = self.parents.len(), "pop parent");
        }
    }
}

impl Listener for KeyListener
{
    fn enter_pair(&mut self, key: &Scalar<'_>, _: &Event<'_>)
    {
        let child = self.top().child(key.as_str());

        self.push(child)
    }

    fn exit_pair(&mut self, _: &Scalar<'_>, _: &Event<'_>)
    {
        self.pop()
    }

    fn exit_scalar(&mut self, scalar: &Scalar<'_>, _: &Event<'_>)
    {
        let mut key = self.top().clone();
        key.set_value(scalar.as_str());

        trace!(key = %key, value = scalar.as_str(), "append");

        self.keys.append(key)
    }

    fn enter_sequence(&mut self, _: &Event<'_>)
    {
        self.indices.push(0);
        self.top_mut().set_meta(ARRAY_META, "");
    }

    fn exit_sequence(&mut self, _: &Event<'_>)
    {
        let key = self.top().clone();

        trace!(key = %key, array = key.meta(ARRAY_META), "append array");

        self.keys.append(key);
        self.indices.pop();
    }

    fn enter_element(&mut self, _: &Event<'_>)
    {
        let index = match self.indices.last_mut()
        {
            Some(index) =>
            {
                let current = *index;
                *index = index.saturating_add(1);

                current
            },
            None => 0,
        };
        let name = array_base_name(index);

        self.top_mut().set_meta(ARRAY_META, name.as_str());

        let child = self.top().child(&name);
        self.push(child)
    }

    fn exit_element(&mut self, _: &Event<'_>)
    {
        self.pop()
    }
}
