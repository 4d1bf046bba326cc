/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`BitWrite`] accumulating bits in memory.
///
/// Bits are packed most significant first into a byte vector, so a
/// byte-aligned writer holds exactly the bytes that
/// [`finalize`](BitWrite::finalize) would return. Bits beyond the current
/// length in the last byte are always zero, which makes [`pop`](BitWrite::pop)
/// a matter of truncating and masking.
///
/// Padding uses the self-delimiting scheme `0*1`: padding can be told apart
/// from data because it always ends with a single one preceded only by zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitWriter {
    /// The packed bits.
    data: Vec<u8>,
    /// The number of valid bits in `data`.
    len: usize,
}

impl BitWriter {
    /// Creates an empty [`BitWriter`].
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Gets a view of the bytes written so far.
    ///
    /// The last byte is partial if the writer is not aligned.
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn push_bit(&mut self, bit: bool) {
        let in_byte_offset = self.len % 8;
        if in_byte_offset == 0 {
            self.data.push(0);
        }
        if bit {
            // A byte was pushed above if needed, so the vector is not empty.
            if let Some(last) = self.data.last_mut() {
                *last |= 0x80 >> in_byte_offset;
            }
        }
        self.len += 1;
    }

    #[inline(always)]
    fn bit(&self, index: usize) -> bool {
        self.data[index / 8] & (0x80 >> (index % 8)) != 0
    }
}

impl BitWrite for BitWriter {
    type Error = Error;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    fn write_bits(&mut self, bits: &str) -> Result<usize> {
        if let Some(c) = bits.chars().find(|&c| c != '0' && c != '1') {
            return Err(Error::InvalidBitChar(c));
        }

        self.data.reserve(bits.len().div_ceil(8));
        for c in bits.bytes() {
            self.push_bit(c == b'1');
        }
        Ok(bits.len())
    }

    fn write_value(&mut self, value: u8, n_bits: usize) -> Result<usize> {
        if n_bits > 8 {
            return Err(Error::BitCount {
                bits: n_bits,
                max: 8,
            });
        }
        if n_bits < 8 && value >> n_bits != 0 {
            return Err(Error::ValueOverflow {
                value: value as u64,
                bits: n_bits,
            });
        }

        for i in (0..n_bits).rev() {
            self.push_bit((value >> i) & 1 != 0);
        }
        Ok(n_bits)
    }

    fn pad_to_byte_boundary(&mut self, force: bool) -> usize {
        let n_pad = match self.len % 8 {
            0 if force => 8,
            0 => 0,
            in_byte_offset => 8 - in_byte_offset,
        };

        if n_pad != 0 {
            for _ in 1..n_pad {
                self.push_bit(false);
            }
            self.push_bit(true);
        }
        n_pad
    }

    fn pop(&mut self, n_bits: usize) -> Result<String> {
        if n_bits > self.len {
            return Err(Error::PopOverflow {
                requested: n_bits,
                available: self.len,
            });
        }

        let new_len = self.len - n_bits;
        let bits = (new_len..self.len)
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect::<String>();

        self.len = new_len;
        self.data.truncate(new_len.div_ceil(8));
        if let Some(last) = self.data.last_mut() {
            let in_byte_offset = new_len % 8;
            if in_byte_offset != 0 {
                *last &= 0xFF << (8 - in_byte_offset);
            }
        }
        Ok(bits)
    }

    fn finalize(&mut self, force: bool) -> Vec<u8> {
        self.pad_to_byte_boundary(force);
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.write_bits("101")?;
        writer.write_value(0b11001, 5)?;
        writer.write_byte(0xA5)?;
        assert_eq!(writer.len(), 16);
        assert_eq!(writer.view(), &[0b1011_1001, 0xA5]);
        Ok(())
    }

    #[test]
    fn test_write_bits_is_atomic() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.write_bits("11")?;
        assert_eq!(writer.write_bits("0102"), Err(Error::InvalidBitChar('2')));
        assert_eq!(writer.len(), 2);
        assert_eq!(writer.finalize(false), [0b1100_0001]);
        Ok(())
    }

    #[test]
    fn test_write_value_overflow() {
        let mut writer = BitWriter::new();
        assert_eq!(
            writer.write_value(4, 2),
            Err(Error::ValueOverflow { value: 4, bits: 2 })
        );
        assert_eq!(
            writer.write_value(0, 9),
            Err(Error::BitCount { bits: 9, max: 8 })
        );
        assert!(writer.is_empty());
    }

    #[test]
    fn test_pop_across_bytes() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.write_byte(0xFF)?;
        writer.write_bits("101")?;
        assert_eq!(writer.pop(5)?, "11101");
        assert_eq!(writer.len(), 6);
        assert_eq!(writer.view(), &[0b1111_1100]);
        writer.write_bits("01")?;
        assert_eq!(writer.finalize(false), [0b1111_1101]);
        Ok(())
    }

    #[test]
    fn test_double_finalize() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.write_byte(7)?;
        assert_eq!(writer.finalize(true), [7, 1]);
        assert_eq!(writer.finalize(true), [7, 1, 1]);
        assert_eq!(writer.finalize(false), [7, 1, 1]);
        Ok(())
    }
}
