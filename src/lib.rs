// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

extern crate alloc;

// The test suite checks the chain against std collections.
#[cfg(test)]
extern crate std;

mod error;
pub mod event;
pub mod list;

pub use error::*;
