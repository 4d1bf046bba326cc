/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::traits::*;
use crate::utils::BytesLike;

/// An implementation of [`BitRead`] on a byte slice.
///
/// Reads start at arbitrary, non byte-aligned bit positions and return at most
/// 8 bits. The backing data is never modified.
///
/// The behavior at the end of the data is fixed at construction time. When
/// fewer bits are left than requested, a *truncating* reader returns the
/// remaining bits as the lowest bits of the result, whereas a *zero-padding*
/// reader returns them in the highest bits of an `n`-bit result, padding the
/// lowest bits with zeros. The latter is what base-N encoders need to emit
/// their final, partial symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReader<B: AsRef<[u8]>> {
    /// The bytes we read from.
    data: B,
    /// The index of the current bit.
    bit_pos: usize,
    /// Whether short reads at the end of the data keep their bits low.
    truncate: bool,
}

impl<B: AsRef<[u8]>> BitReader<B> {
    /// Creates a new truncating [`BitReader`].
    #[must_use]
    pub fn new(data: B) -> Self {
        Self::with_truncate(data, true)
    }

    /// Creates a new [`BitReader`] with the given end-of-data policy.
    #[must_use]
    pub fn with_truncate(data: B, truncate: bool) -> Self {
        Self {
            data,
            bit_pos: 0,
            truncate,
        }
    }

    /// Returns whether this reader truncates short reads.
    pub fn truncate(&self) -> bool {
        self.truncate
    }

    /// Returns the number of bits left to read.
    pub fn remaining_bits(&self) -> usize {
        self.data.as_ref().len() * 8 - self.bit_pos
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl BitReader<Vec<u8>> {
    /// Creates a new [`BitReader`] from anything convertible into a
    /// [`BytesLike`], e.g., a hexadecimal string.
    pub fn from_bytes_like<'a>(bytes: impl Into<BytesLike<'a>>, truncate: bool) -> Result<Self> {
        Ok(Self::with_truncate(bytes.into().to_bytes()?, truncate))
    }
}

impl<B: AsRef<[u8]>> BitRead for BitReader<B> {
    type Error = Error;

    #[inline]
    fn eof(&self) -> bool {
        self.bit_pos / 8 >= self.data.as_ref().len()
    }

    #[inline(always)]
    fn bit_pos(&self) -> usize {
        self.bit_pos
    }

    fn read_bits(&mut self, n_bits: usize) -> Result<u8> {
        if n_bits == 0 || n_bits > 8 {
            return Err(Error::BitCount {
                bits: n_bits,
                max: 8,
            });
        }

        let data = self.data.as_ref();
        let to_read = n_bits.min(self.remaining_bits());
        if to_read == 0 {
            return Err(Error::EndOfBuffer {
                bit_pos: self.bit_pos,
            });
        }

        // Two-byte window starting at the current byte; the second byte is
        // zero past the end, and is never needed in that case.
        let byte_index = self.bit_pos / 8;
        let in_byte_offset = self.bit_pos % 8;
        let high = data[byte_index] as u16;
        let low = data.get(byte_index + 1).copied().unwrap_or(0) as u16;
        let window = (high << 8) | low;

        let mut res = (window >> (16 - in_byte_offset - to_read)) & ((1 << to_read) - 1);
        if !self.truncate {
            res <<= n_bits - to_read;
        }

        self.bit_pos += to_read;
        Ok(res as u8)
    }

    fn move_to_byte_boundary(&mut self, force: bool) -> Result<()> {
        let in_byte_offset = self.bit_pos % 8;
        if in_byte_offset != 0 {
            self.read_bits(8 - in_byte_offset)?;
        } else if force {
            self.read_bits(8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_read_across_bytes() -> Result<()> {
        let mut reader = BitReader::new([0b1010_1100_u8, 0b0101_0011]);
        assert_eq!(reader.read_bits(3)?, 0b101);
        assert_eq!(reader.read_bits(8)?, 0b0110_0010);
        assert_eq!(reader.bit_pos(), 11);
        assert_eq!(reader.read_bits(5)?, 0b10011);
        assert!(reader.eof());
        Ok(())
    }

    #[test]
    fn test_truncate() -> Result<()> {
        let mut reader = BitReader::new([255_u8, 255]);
        reader.read_bits(7)?;
        reader.read_bits(7)?;
        assert_eq!(reader.read_bits(8)?, 0b11);
        assert_eq!(
            reader.read_bits(1).map_err(|e| e.kind()),
            Err(ErrorKind::EndOfBuffer)
        );
        Ok(())
    }

    #[test]
    fn test_zero_pad() -> Result<()> {
        let mut reader = BitReader::with_truncate([0b1111_0000_u8], false);
        assert!(!reader.truncate());
        assert_eq!(reader.read_bits(5)?, 0b11110);
        assert_eq!(reader.read_bits(5)?, 0b00000);
        assert!(reader.eof());
        Ok(())
    }

    #[test]
    fn test_zero_bits() {
        let mut reader = BitReader::new([1_u8]);
        assert_eq!(
            reader.read_bits(0),
            Err(Error::BitCount { bits: 0, max: 8 })
        );
        assert_eq!(reader.bit_pos(), 0);
    }

    #[test]
    fn test_from_hex() -> Result<()> {
        let mut reader = BitReader::from_bytes_like("00ff", true)?;
        assert_eq!(reader.read_byte()?, 0);
        assert_eq!(reader.read_byte()?, 255);
        assert_eq!(reader.into_inner(), [0, 255]);
        Ok(())
    }
}
