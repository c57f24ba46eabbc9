/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{iter::FromIterator, slice, vec};

use super::Key;

/// An ordered, append only collection of [`Key`]s.
///
/// Keys with the same name are not merged, each append is
/// kept in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet
{
    keys: Vec<Key>,
}

impl KeySet
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn append(&mut self, key: Key)
    {
        self.keys.push(key)
    }

    pub fn len(&self) -> usize
    {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Key>
    {
        self.keys.iter()
    }

    /// Find the first key named .name
    pub fn lookup(&self, name: &str) -> Option<&Key>
    {
        self.keys.iter().find(|key| key.name() == name)
    }
}

impl IntoIterator for KeySet
{
    type Item = Key;
    type IntoIter = vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeySet
{
    type Item = &'a Key;
    type IntoIter = slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl FromIterator<Key> for KeySet
{
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self
    {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
