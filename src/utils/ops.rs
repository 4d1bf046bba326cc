/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Stateless helpers on bits of bytes and on bit strings.
//!
//! Bit strings are strings of `'0'` and `'1'` characters, most significant
//! bit first, as accepted by [`BitWrite::write_bits`](crate::traits::BitWrite::write_bits).

use alloc::format;
use alloc::string::String;

use crate::error::{Error, Result};

/// Returns the bits of `byte` in the half-open range `[start, end)`, where
/// bit 0 is the most significant one, as the lowest `end - start` bits of
/// the result.
///
/// # Examples
///
/// ```
/// use bitcodec::utils::mask_bits;
///
/// assert_eq!(mask_bits(0b1111_1111, 1, 4)?, 0b111);
/// assert_eq!(mask_bits(0b1010_0000, 0, 3)?, 0b101);
/// # Ok::<(), bitcodec::Error>(())
/// ```
pub fn mask_bits(byte: u8, start: usize, end: usize) -> Result<u8> {
    if start >= end || end > 8 {
        return Err(Error::BitRange { start, end });
    }
    Ok((byte & (0xFF >> start)) >> (8 - end))
}

/// Left-pads a bit string with zeros so that its length is a positive
/// multiple of `n`.
///
/// A string whose length is already a positive multiple of `n` is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use bitcodec::utils::pad_bits;
///
/// assert_eq!(pad_bits("1111", 8)?, "00001111");
/// assert_eq!(pad_bits("1111", 3)?, "001111");
/// assert_eq!(pad_bits("", 2)?, "00");
/// # Ok::<(), bitcodec::Error>(())
/// ```
pub fn pad_bits(bits: &str, n: usize) -> Result<String> {
    if n == 0 {
        return Err(Error::PadLength(n));
    }
    let len = bits.len();
    if len != 0 && len % n == 0 {
        return Ok(String::from(bits));
    }
    let n_pad = n - len % n;
    let mut res = String::with_capacity(len + n_pad);
    res.extend(core::iter::repeat_n('0', n_pad));
    res.push_str(bits);
    Ok(res)
}

/// Formats `byte` as a bit string of `n` characters, optionally prefixed by
/// `0b`.
///
/// Fails if `n` is smaller than the number of significant bits of `byte`
/// (zero has one significant bit).
///
/// # Examples
///
/// ```
/// use bitcodec::utils::byte_to_bits;
///
/// assert_eq!(byte_to_bits(7, 8, true)?, "0b00000111");
/// assert_eq!(byte_to_bits(7, 3, false)?, "111");
/// assert!(byte_to_bits(7, 2, false).is_err());
/// # Ok::<(), bitcodec::Error>(())
/// ```
pub fn byte_to_bits(byte: u8, n: usize, prefixed: bool) -> Result<String> {
    let bits = format!("{byte:b}");
    if n < bits.len() {
        return Err(Error::BitWidth {
            bits: n,
            min: bits.len(),
        });
    }
    let bits = pad_bits(&bits, n)?;
    Ok(if prefixed { format!("0b{bits}") } else { bits })
}

/// Returns bit `index` of `bytes`, where bits are numbered from the least
/// significant bit of each byte, or `None` past the end of `bytes`.
#[inline]
pub fn get_bit(bytes: &[u8], index: usize) -> Option<u8> {
    bytes.get(index / 8).map(|byte| (byte >> (index % 8)) & 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_bits() -> Result<()> {
        assert_eq!(mask_bits(0xFF, 0, 8)?, 0xFF);
        assert_eq!(mask_bits(0b0110_1001, 2, 6)?, 0b1010);
        assert_eq!(mask_bits(0b0000_0001, 7, 8)?, 1);
        assert_eq!(
            mask_bits(0xFF, 1, 1),
            Err(Error::BitRange { start: 1, end: 1 })
        );
        assert!(mask_bits(0xFF, 8, 9).is_err());
        assert!(mask_bits(0xFF, 0, 9).is_err());
        Ok(())
    }

    #[test]
    fn test_pad_bits() -> Result<()> {
        assert_eq!(pad_bits("1111", 4)?, "1111");
        assert_eq!(pad_bits("10", 8)?, "00000010");
        assert_eq!(pad_bits("1", 1)?, "1");
        assert_eq!(pad_bits("1111", 0), Err(Error::PadLength(0)));
        Ok(())
    }

    #[test]
    fn test_byte_to_bits() -> Result<()> {
        assert_eq!(byte_to_bits(7, 8, false)?, "00000111");
        assert_eq!(byte_to_bits(255, 8, true)?, "0b11111111");
        assert_eq!(byte_to_bits(0, 1, false)?, "0");
        assert_eq!(
            byte_to_bits(0, 0, false),
            Err(Error::BitWidth { bits: 0, min: 1 })
        );
        assert_eq!(
            byte_to_bits(7, 2, false),
            Err(Error::BitWidth { bits: 2, min: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_get_bit() {
        let bytes = [0b0000_0010, 0b1000_0000];
        assert_eq!(get_bit(&bytes, 0), Some(0));
        assert_eq!(get_bit(&bytes, 1), Some(1));
        assert_eq!(get_bit(&bytes, 15), Some(1));
        assert_eq!(get_bit(&bytes, 16), None);
    }
}
