// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Change notifications fired by [`OrderedList`] mutations.
//!
//! Observers are plain closures registered per channel via
//! [`OrderedList::on_element_insert`], [`OrderedList::on_element_remove`],
//! [`OrderedList::on_element_update`], and [`OrderedList::on_list_changed`].
//! They run synchronously, in registration order, before the mutating call
//! returns.
//!
//! [`OrderedList`]: crate::list::OrderedList
//! [`OrderedList::on_element_insert`]: crate::list::OrderedList::on_element_insert
//! [`OrderedList::on_element_remove`]: crate::list::OrderedList::on_element_remove
//! [`OrderedList::on_element_update`]: crate::list::OrderedList::on_element_update
//! [`OrderedList::on_list_changed`]: crate::list::OrderedList::on_list_changed

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// The public list operation that produced a [`ListEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// [`OrderedList::push_back`](crate::list::OrderedList::push_back),
    /// including elements appended through `Extend`/`FromIterator`.
    PushBack,
    /// [`OrderedList::insert`](crate::list::OrderedList::insert)
    Insert,
    /// [`OrderedList::update`](crate::list::OrderedList::update)
    Update,
    /// [`OrderedList::remove_at`](crate::list::OrderedList::remove_at)
    RemoveAt,
    /// [`OrderedList::remove`](crate::list::OrderedList::remove)
    Remove,
    /// [`OrderedList::clear`](crate::list::OrderedList::clear)
    Clear,
}

impl Trigger {
    /// The name of the list method this trigger corresponds to.
    pub fn method_name(self) -> &'static str {
        match self {
            Trigger::PushBack => "push_back",
            Trigger::Insert => "insert",
            Trigger::Update => "update",
            Trigger::RemoveAt => "remove_at",
            Trigger::Remove => "remove",
            Trigger::Clear => "clear",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// A single change notification.
///
/// Observers receive the event by value.
/// It only borrows the affected element, so it is freely copyable no matter
/// what `T` is.
#[derive(Debug)]
pub struct ListEvent<'a, T> {
    /// The operation that produced this event.
    pub trigger: Trigger,
    /// Position of the affected element, or `None` for whole-list events
    /// like [`Trigger::Clear`].
    pub index: Option<usize>,
    /// The affected value, or `None` for whole-list events.
    pub value: Option<&'a T>,
}

impl<T> Clone for ListEvent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListEvent<'_, T> {}

pub(crate) type Handler<T> = Box<dyn FnMut(ListEvent<'_, T>)>;

/// The notification channels an observer can be registered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Channel {
    ElementInsert,
    ElementRemove,
    ElementUpdate,
    ListChanged,
}

/// Per-channel observer registries of a single list.
pub(crate) struct Observers<T> {
    insert: Vec<Handler<T>>,
    remove: Vec<Handler<T>>,
    update: Vec<Handler<T>>,
    changed: Vec<Handler<T>>,
}

impl<T> Observers<T> {
    pub(crate) const fn new() -> Self {
        Self {
            insert: Vec::new(),
            remove: Vec::new(),
            update: Vec::new(),
            changed: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, channel: Channel, handler: Handler<T>) {
        self.channel_mut(channel).push(handler);
    }

    /// Invokes every observer of `channel` in registration order.
    pub(crate) fn fire(&mut self, channel: Channel, event: ListEvent<'_, T>) {
        for handler in self.channel_mut(channel) {
            handler(event);
        }
    }

    /// Fires the operation-specific channel, then [`Channel::ListChanged`].
    ///
    /// Every mutation reports on `ListChanged` in addition to its own
    /// channel, so the pairing lives in one place.
    pub(crate) fn fire_mutation(&mut self, channel: Channel, event: ListEvent<'_, T>) {
        self.fire(channel, event);
        self.fire(Channel::ListChanged, event);
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut Vec<Handler<T>> {
        match channel {
            Channel::ElementInsert => &mut self.insert,
            Channel::ElementRemove => &mut self.remove,
            Channel::ElementUpdate => &mut self.update,
            Channel::ListChanged => &mut self.changed,
        }
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}
