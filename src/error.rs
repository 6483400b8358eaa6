// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// The ways an [`OrderedList`] operation can fail.
///
/// Every check happens before the list is touched, so a returned error
/// guarantees that the list is exactly as it was before the call.
///
/// [`OrderedList`]: crate::list::OrderedList
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The given index does not refer to an element of the list.
    ///
    /// Raised by [`get`], [`update`], [`insert`], [`remove_at`], indexed
    /// access through `list[i]`, and by [`copy_to_slice`] for a start
    /// position outside the destination slice.
    ///
    /// [`get`]: crate::list::OrderedList::get
    /// [`update`]: crate::list::OrderedList::update
    /// [`insert`]: crate::list::OrderedList::insert
    /// [`remove_at`]: crate::list::OrderedList::remove_at
    /// [`copy_to_slice`]: crate::list::OrderedList::copy_to_slice
    #[error("index {index} is out of range for a list of {len} elements")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The number of elements the indexed collection actually has.
        len: usize,
    },

    /// [`clear`] was called on a list that is already empty.
    ///
    /// [`clear`]: crate::list::OrderedList::clear
    #[error("cannot clear a list that is already empty")]
    ClearEmpty,

    /// The destination slice passed to [`copy_to_slice`] cannot hold every
    /// element of the list.
    ///
    /// [`copy_to_slice`]: crate::list::OrderedList::copy_to_slice
    #[error("cannot copy {len} elements into {room} remaining slots")]
    DestinationTooSmall {
        /// The number of elements that needed copying.
        len: usize,
        /// The slots available behind the start position.
        room: usize,
    },
}
