/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains the [`Listener`] trait, and [`walk`] which
//! drives a Listener with an [`Event`] stream.

use tracing::debug;

use crate::{
    error::Result,
    event::types::{Event, EventData, Node, Scalar},
};

/// A callback interface over the nodes of a YAML tree.
///
/// Every method has a default, empty implementation, so
/// implementors only need to handle the nodes they care
/// about. Each method receives the [`Event`] that caused
/// it, for access to the node's position and text.
///
/// Listeners are purely reactive: they are notified as
/// [`walk`] (or the caller, via
/// [`dispatch`](Listener::dispatch)) works through the
/// event stream, and never traverse the tree themselves.
pub trait Listener
{
    fn enter_mapping(&mut self, _event: &Event<'_>) {}

    fn exit_mapping(&mut self, _event: &Event<'_>) {}

    /// A key value pair begins, .key being the pair's key
    fn enter_pair(&mut self, _key: &Scalar<'_>, _event: &Event<'_>) {}

    fn exit_pair(&mut self, _key: &Scalar<'_>, _event: &Event<'_>) {}

    fn enter_sequence(&mut self, _event: &Event<'_>) {}

    fn exit_sequence(&mut self, _event: &Event<'_>) {}

    fn enter_element(&mut self, _event: &Event<'_>) {}

    fn exit_element(&mut self, _event: &Event<'_>) {}

    fn enter_scalar(&mut self, _scalar: &Scalar<'_>, _event: &Event<'_>) {}

    /// A leaf value is complete
    fn exit_scalar(&mut self, _scalar: &Scalar<'_>, _event: &Event<'_>) {}

    /// Route .event to the method matching its node
    fn dispatch(&mut self, event: &Event<'_>)
    {
        match event.data()
        {
            EventData::Enter(node) => match node
            {
                Node::Mapping => self.enter_mapping(event),
                Node::Pair(key) => self.enter_pair(key, event),
                Node::Sequence => self.enter_sequence(event),
                Node::Element => self.enter_element(event),
                Node::Scalar(scalar) => self.enter_scalar(scalar, event),
            },
            EventData::Exit(node) => match node
            {
                Node::Mapping => self.exit_mapping(event),
                Node::Pair(key) => self.exit_pair(key, event),
                Node::Sequence => self.exit_sequence(event),
                Node::Element => self.exit_element(event),
                Node::Scalar(scalar) => self.exit_scalar(scalar, event),
            },
            EventData::StreamStart | EventData::StreamEnd =>
            {},
        }
    }
}

impl<L> Listener for &mut L
where
    L: Listener + ?Sized,
{
    fn enter_mapping(&mut self, event: &Event<'_>)
    {
        (**self).enter_mapping(event)
    }

    fn exit_mapping(&mut self, event: &Event<'_>)
    {
        (**self).exit_mapping(event)
    }

    fn enter_pair(&mut self, key: &Scalar<'_>, event: &Event<'_>)
    {
        (**self).enter_pair(key, event)
    }

    fn exit_pair(&mut self, key: &Scalar<'_>, event: &Event<'_>)
    {
        (**self).exit_pair(key, event)
    }

    fn enter_sequence(&mut self, event: &Event<'_>)
    {
        (**self).enter_sequence(event)
    }

    fn exit_sequence(&mut self, event: &Event<'_>)
    {
        (**self).exit_sequence(event)
    }

    fn enter_element(&mut self, event: &Event<'_>)
    {
        (**self).enter_element(event)
    }

    fn exit_element(&mut self, event: &Event<'_>)
    {
        (**self).exit_element(event)
    }

    fn enter_scalar(&mut self, scalar: &Scalar<'_>, event: &Event<'_>)
    {
        (**self).enter_scalar(scalar, event)
    }

    fn exit_scalar(&mut self, scalar: &Scalar<'_>, event: &Event<'_>)
    {
        (**self).exit_scalar(scalar, event)
    }

    fn dispatch(&mut self, event: &Event<'_>)
    {
        (**self).dispatch(event)
    }
}

/// Feed every event of .events to .listener, stopping at
/// the first error.
///
/// ## Examples
///
/// ```
/// use yamlkeys::event::{types::Scalar, walk, Event, Listener};
///
/// #[derive(Default)]
/// struct Keys(Vec<String>);
///
/// impl Listener for Keys
/// {
///     fn enter_pair(&mut self, key: &Scalar<'_>, _: &Event<'_>)
///     {
///         self.0.push(key.as_str().to_owned());
///     }
/// }
///
/// let mut keys = Keys::default();
/// walk(yamlkeys::events("a: 1\nb:\n  c: 2"), &mut keys)?;
///
/// assert_eq!(keys.0, vec!["a", "b", "c"]);
/// # Ok::<(), yamlkeys::Error>(())
/// ```
pub fn walk<'de, I, L>(events: I, listener: &mut L) -> Result<()>
where
    I: IntoIterator<Item = Result<Event<'de>>>,
    L: Listener + ?Sized,
{
    let mut count: usize = 0;

    for event in events
    {
        listener.dispatch(&event?);
        count += 1;
    }

    debug!(events = count, "walk complete");

    Ok(())
}
