/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the storage primitives produced
//! from a YAML document: hierarchically named [`Key`]s,
//! collected into a [`KeySet`].
//!
//! A key's name is a list of base names, rendered joined
//! by `/`. Base names may contain any text; a `/` or `\`
//! inside one is escaped with a `\` when the name is
//! rendered, so the hierarchy can always be recovered.

mod array;
mod set;

use std::{collections::BTreeMap, fmt};

pub use self::{
    array::{array_base_name, ARRAY_PREFIX},
    set::KeySet,
};

const SEPARATOR: char = '/';
const ESCAPE: char = '\\';

/// A hierarchically named key, with an optional value and
/// any number of metadata attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Key
{
    names: Vec<String>,
    value: Option<String>,
    meta:  BTreeMap<String, String>,
}

impl Key
{
    /// Create a key from a rendered .name, e.g
    /// `user/server/port`.
    ///
    /// Empty base names are ignored, and `\` escapes the
    /// character following it.
    pub fn new(name: &str) -> Self
    {
        Self {
            names: split_name(name),
            value: None,
            meta:  BTreeMap::new(),
        }
    }

    /// Create a fresh key named below this one, without
    /// this key's value or metadata
    pub fn child(&self, base: &str) -> Self
    {
        let mut names = self.names.clone();
        names.push(base.to_owned());

        Self {
            names,
            value: None,
            meta: BTreeMap::new(),
        }
    }

    /// Append .base to this key's name
    pub fn add_base_name(&mut self, base: &str)
    {
        self.names.push(base.to_owned())
    }

    /// The rendered, escaped name of this key
    pub fn name(&self) -> String
    {
        self.to_string()
    }

    /// The last, unescaped base name of this key
    pub fn base_name(&self) -> Option<&str>
    {
        self.names.last().map(String::as_str)
    }

    /// Every unescaped base name of this key, root first
    pub fn base_names(&self) -> impl Iterator<Item = &str>
    {
        self.names.iter().map(String::as_str)
    }

    pub fn value(&self) -> Option<&str>
    {
        self.value.as_deref()
    }

    pub fn set_value<S>(&mut self, value: S)
    where
        S: Into<String>,
    {
        self.value = Some(value.into())
    }

    /// Retrieve the metadata attribute .name
    pub fn meta(&self, name: &str) -> Option<&str>
    {
        self.meta.get(name).map(String::as_str)
    }

    /// Set the metadata attribute .name, replacing any
    /// previous value
    pub fn set_meta<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.meta.insert(name.into(), value.into());
    }

    /// Every metadata attribute of this key, ordered by
    /// name
    pub fn metadata(&self) -> &BTreeMap<String, String>
    {
        &self.meta
    }
}

impl fmt::Display for Key
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for (i, base) in self.names.iter().enumerate()
        {
            if i > 0
            {
                f.write_fmt(format_args!("{}", SEPARATOR))?;
            }

            for c in base.chars()
            {
                if c == SEPARATOR || c == ESCAPE
                {
                    f.write_fmt(format_args!("{}", ESCAPE))?;
                }

                f.write_fmt(format_args!("{}", c))?;
            }
        }

        Ok(())
    }
}

/// Split a rendered name into its unescaped base names
fn split_name(name: &str) -> Vec<String>
{
    let mut names = Vec::new();
    let mut current = String::new();
    let mut chars = name.chars();

    while let Some(c) = chars.next()
    {
        match c
        {
            ESCAPE =>
            {
                if let Some(escaped) = chars.next()
                {
                    current.push(escaped);
                }
            },
            SEPARATOR =>
            {
                if !current.is_empty()
                {
                    names.push(std::mem::take(&mut current));
                }
            },
            c => current.push(c),
        }
    }

    if !current.is_empty()
    {
        names.push(current);
    }

    names
}
