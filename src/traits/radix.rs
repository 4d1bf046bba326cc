/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Marker types and trait used to select the symbol width of a
//! [`Codec`](crate::codecs::Codec).
//!
//! As for endianness selectors, an inner private trait makes it possible to
//! use [`Radix`] in generics without allowing implementations outside this
//! file, as the padding rules are specific to each radix.

use core::fmt::Debug;

/// Inner private trait used to make implementing [`Radix`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Radix {}
}

/// Marker trait for radix selector types.
///
/// Its only implementations are [`Radix32`] and [`Radix64`].
pub trait Radix: private::Radix + Debug + Clone + Copy + PartialEq + Eq + Send + Sync + 'static {
    /// Human-readable name, used in error messages.
    const NAME: &'static str;

    /// Number of bits carried by a symbol.
    const BITS: usize;

    /// Number of symbols in a padded group.
    const GROUP: usize;

    /// Lengths of a padding run allowed by RFC 4648.
    ///
    /// These are not all the lengths that are arithmetically possible.
    const PAD_RUNS: &'static [usize];

    /// Whether symbols are matched ignoring ASCII case when decoding.
    const CASE_INSENSITIVE: bool;

    /// The RFC 4648 alphabet.
    const DEFAULT_ALPHABET: &'static str;

    /// Number of symbols in an alphabet.
    const SIZE: usize = 1 << Self::BITS;
}

/// Selector type for base32 codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix32;

/// Selector type for base64 codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix64;

impl private::Radix for Radix32 {}
impl private::Radix for Radix64 {}

impl Radix for Radix32 {
    const NAME: &'static str = "base32";
    const BITS: usize = 5;
    const GROUP: usize = 8;
    const PAD_RUNS: &'static [usize] = &[1, 3, 4, 6];
    const CASE_INSENSITIVE: bool = true;
    const DEFAULT_ALPHABET: &'static str = "abcdefghijklmnopqrstuvwxyz234567";
}

impl Radix for Radix64 {
    const NAME: &'static str = "base64";
    const BITS: usize = 6;
    const GROUP: usize = 4;
    const PAD_RUNS: &'static [usize] = &[1, 2];
    const CASE_INSENSITIVE: bool = false;
    const DEFAULT_ALPHABET: &'static str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
}
