/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;
use num_traits::{FromBytes, PrimInt, ToBytes, Unsigned};

use crate::error::{Error, Result};
use crate::utils::pad_bytes;

/// An unsigned primitive integer with a fixed-size byte representation.
pub trait UnsignedInt:
    PrimInt + Unsigned + ToBytes + FromBytes<Bytes = <Self as ToBytes>::Bytes>
{
}

impl<T> UnsignedInt for T where
    T: PrimInt + Unsigned + ToBytes + FromBytes<Bytes = <T as ToBytes>::Bytes>
{
}

/// Encodes `x` as the shortest big-endian byte sequence representing it.
///
/// Zero is encoded as `[0]`.
///
/// # Examples
///
/// ```
/// use bitcodec::utils::encode_int_be;
///
/// assert_eq!(encode_int_be(0_u32), [0]);
/// assert_eq!(encode_int_be(0x1234_u64), [0x12, 0x34]);
/// ```
pub fn encode_int_be<T: UnsignedInt>(x: T) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let bytes = bytes.as_ref();
    let first = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first..].to_vec()
}

/// Decodes a big-endian byte sequence of any length into a `T`.
///
/// Leading zero bytes are ignored, and an empty sequence decodes as zero.
/// Fails if the value does not fit into a `T`.
pub fn decode_int_be<T: UnsignedInt>(bytes: &[u8]) -> Result<T> {
    let first = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());
    let significant = &bytes[first..];

    let mut buf = T::zero().to_be_bytes();
    let capacity = buf.as_ref().len();
    if significant.len() > capacity {
        return Err(Error::IntegerOverflow {
            bytes: significant.len(),
            capacity,
        });
    }
    buf.as_mut()[capacity - significant.len()..].copy_from_slice(significant);
    Ok(T::from_be_bytes(&buf))
}

/// Encodes `x` as the shortest little-endian byte sequence representing it.
pub fn encode_int_le<T: UnsignedInt>(x: T) -> Vec<u8> {
    let mut bytes = encode_int_be(x);
    bytes.reverse();
    bytes
}

/// Encodes `x` in little-endian order, zero-padded to a multiple of `width`
/// bytes.
pub fn encode_int_le_padded<T: UnsignedInt>(x: T, width: usize) -> Result<Vec<u8>> {
    pad_bytes(&encode_int_le(x), width)
}

pub fn decode_int_le<T: UnsignedInt>(bytes: &[u8]) -> Result<T> {
    let reversed = bytes.iter().rev().copied().collect::<Vec<_>>();
    decode_int_be(&reversed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be() -> Result<()> {
        assert_eq!(encode_int_be(255_u8), [255]);
        assert_eq!(encode_int_be(256_u16), [1, 0]);
        assert_eq!(encode_int_be(u128::MAX).len(), 16);
        assert_eq!(decode_int_be::<u16>(&[1, 0])?, 256);
        assert_eq!(decode_int_be::<u8>(&[0, 0, 7])?, 7);
        assert_eq!(decode_int_be::<u32>(&[])?, 0);
        assert_eq!(
            decode_int_be::<u8>(&[1, 0]),
            Err(Error::IntegerOverflow {
                bytes: 2,
                capacity: 1
            })
        );
        Ok(())
    }

    #[test]
    fn test_le() -> Result<()> {
        assert_eq!(encode_int_le(0x0102_u32), [2, 1]);
        assert_eq!(decode_int_le::<u32>(&[2, 1, 0, 0, 0, 0])?, 0x0102);
        let padded = encode_int_le_padded(0x0102_u64, 32)?;
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..3], &[2, 1, 0]);
        assert_eq!(encode_int_le_padded(0_u64, 4)?, [0, 0, 0, 0]);
        Ok(())
    }
}
