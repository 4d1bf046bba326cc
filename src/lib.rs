/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
// Codecs and writers own their buffers, so `alloc` is needed even without `std`.
extern crate alloc;

pub mod codecs;
pub mod error;
pub mod impls;
pub mod traits;
pub mod utils;

#[cfg(feature = "fuzz")]
pub mod fuzz;

pub use error::{Error, ErrorKind, Result};

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::codecs::*;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::impls::*;
    pub use crate::traits::*;
    pub use crate::utils::*;
}
