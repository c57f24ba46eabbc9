/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The Queue is a FIFO buffer that remembers how many
//! items have already left it. Every item ever pushed has a
//! *logical position*: its index in the sequence of all
//! items produced, emitted or not.
//!
//! This lets a producer save the logical position of an
//! item it might need to backfill later, and then splice
//! the item in at that position, even if some of the items
//! in front of it were popped in the meantime. The Scanner
//! relies on this for simple keys, which are only known to
//! be keys once their ':' is found.

use std::{
    collections::VecDeque,
    fmt::{self, Debug},
    iter::FromIterator,
};

/// A FIFO queue supporting inserts at logical positions
pub(crate) struct Queue<T>
{
    buffer:  VecDeque<T>,
    emitted: usize,
}

impl<T> Queue<T>
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn push(&mut self, item: T)
    {
        self.buffer.push_back(item)
    }

    pub fn pop(&mut self) -> Option<T>
    {
        let item = self.buffer.pop_front()?;
        self.emitted += 1;

        Some(item)
    }

    /// Insert .item so that it takes the given .logical
    /// position, shifting everything behind it back by
    /// one.
    ///
    /// Returns the item back if .logical refers to an
    /// already popped slot, or lies past the end of the
    /// queue.
    pub fn insert_at(&mut self, logical: usize, item: T) -> Result<(), T>
    {
        let index = match logical.checked_sub(self.emitted)
        {
            Some(index) if index <= self.buffer.len() => index,
            _ => return Err(item),
        };

        self.buffer.insert(index, item);

        Ok(())
    }

    /// The logical position the next pushed item will take,
    /// i.e the total amount of items produced so far
    pub fn produced(&self) -> usize
    {
        self.emitted + self.buffer.len()
    }

    /// Amount of items already popped from the queue
    pub fn emitted(&self) -> usize
    {
        self.emitted
    }

    pub fn len(&self) -> usize
    {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.buffer.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T>
    {
        self.buffer.iter()
    }
}

impl<T> Default for Queue<T>
{
    fn default() -> Self
    {
        Queue {
            buffer:  Default::default(),
            emitted: 0,
        }
    }
}

impl<T> FromIterator<T> for Queue<T>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
    {
        Self {
            buffer:  iter.into_iter().collect(),
            emitted: 0,
        }
    }
}

impl<T> Clone for Queue<T>
where
    T: Clone,
{
    fn clone(&self) -> Self
    {
        Self {
            buffer:  self.buffer.clone(),
            emitted: self.emitted,
        }
    }
}

impl<T> Debug for Queue<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Queue")
            .field("emitted", &self.emitted)
            .field("buffer", &self.buffer)
            .finish()
    }
}
