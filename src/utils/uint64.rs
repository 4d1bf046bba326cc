/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Constructors and byte conversions for 64-bit words.

Hash functions built from 32-bit halves or from 8-byte chunks of a message
need to assemble and split [`u64`] values in both byte orders. Once a word is
built, rotations, shifts and wrapping sums are the native [`u64`] operators
(e.g., [`u64::rotate_right`] and [`u64::wrapping_add`]).

*/

use crate::codecs::hex_to_bytes;
use crate::error::{Error, Result};

/// Assembles a word from its high and low 32-bit halves.
///
/// # Examples
///
/// ```
/// use bitcodec::utils::uint64;
///
/// assert_eq!(uint64::from_parts(1, 2), 0x0000_0001_0000_0002);
/// ```
#[inline]
pub fn from_parts(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Splits a word into its high and low 32-bit halves.
#[inline]
pub fn to_parts(x: u64) -> (u32, u32) {
    ((x >> 32) as u32, x as u32)
}

/// Reads a word from the first 8 bytes of `bytes`.
///
/// Bytes past the eighth are ignored. Fails if fewer than 8 bytes are
/// available.
pub fn from_bytes(bytes: &[u8], little_endian: bool) -> Result<u64> {
    let word: [u8; 8] = bytes
        .get(..8)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::ShortBuffer {
            len: bytes.len(),
            min: 8,
        })?;
    Ok(if little_endian {
        u64::from_le_bytes(word)
    } else {
        u64::from_be_bytes(word)
    })
}

/// Reads a word from the first 16 digits of a big-endian hexadecimal string.
///
/// # Examples
///
/// ```
/// use bitcodec::utils::uint64;
///
/// assert_eq!(uint64::from_hex("00000000ffffffff")?, 0xffff_ffff);
/// assert!(uint64::from_hex("ffff").is_err());
/// # Ok::<(), bitcodec::Error>(())
/// ```
pub fn from_hex(hex: &str) -> Result<u64> {
    from_bytes(&hex_to_bytes(hex)?, false)
}

/// Returns the 8 bytes of `x` in the requested order.
#[inline]
pub fn to_bytes(x: u64, little_endian: bool) -> [u8; 8] {
    if little_endian {
        x.to_le_bytes()
    } else {
        x.to_be_bytes()
    }
}
