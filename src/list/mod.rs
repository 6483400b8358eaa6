// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! An observable singly linked list that owns its elements.
//!
//! [`OrderedList`] keeps the classic chain of owned nodes behind a safe CRUD
//! surface: elements are appended with [`push_back`], spliced in with
//! [`insert`], replaced with [`update`], and taken out with [`remove_at`],
//! [`remove`], or [`clear`].
//! Reading goes through [`get`], `list[i]`, iteration, or [`copy_to_slice`].
//!
//! ```
//! use obs_list::list::OrderedList;
//!
//! let mut list = OrderedList::from([5, 8, 14]);
//! list.push_back(8055);
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get(3), Ok(&8055));
//! assert_eq!(list.to_string(), "5 8 14 8055");
//! ```
//!
//! What sets this list apart from other sequence containers is its
//! notification layer: observers registered on one of the four channels are
//! invoked synchronously on every mutation, before the mutating call
//! returns.
//! An operation-specific channel ([`on_element_insert`],
//! [`on_element_remove`], [`on_element_update`]) fires first, followed by
//! the catch-all [`on_list_changed`]:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use obs_list::event::Trigger;
//! use obs_list::list::OrderedList;
//!
//! let mut list = OrderedList::from(["Wed", "Sun", "Tue"]);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! list.on_list_changed(move |event| sink.borrow_mut().push(event.trigger));
//!
//! list.push_back("Fri");
//! assert!(list.remove(&"Sun"));
//!
//! assert_eq!(*seen.borrow(), [Trigger::PushBack, Trigger::Remove]);
//! ```
//!
//! Operations composed of other operations notify exactly once: [`remove`]
//! and [`clear`] unlink nodes through a silent internal primitive, so their
//! inner removals never show up as `remove_at` events.
//!
//! The list is strictly single-threaded and observers cannot reach the list
//! they are registered on while it is mid-mutation; it is exclusively
//! borrowed for the whole call.
//!
//! [`push_back`]: OrderedList::push_back
//! [`insert`]: OrderedList::insert
//! [`update`]: OrderedList::update
//! [`remove_at`]: OrderedList::remove_at
//! [`remove`]: OrderedList::remove
//! [`clear`]: OrderedList::clear
//! [`get`]: OrderedList::get
//! [`copy_to_slice`]: OrderedList::copy_to_slice
//! [`on_element_insert`]: OrderedList::on_element_insert
//! [`on_element_remove`]: OrderedList::on_element_remove
//! [`on_element_update`]: OrderedList::on_element_update
//! [`on_list_changed`]: OrderedList::on_list_changed

mod base;
mod ordered;


pub use base::Iter;
pub use ordered::*;
