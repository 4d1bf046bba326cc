/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use alloc::vec::Vec;
use core::error::Error;

/// Sequential, streaming reads of at most a byte worth of bits.
///
/// Bits are read most significant first, and returned as an unsigned
/// big-endian value in the lowest bits of the result. Positions only
/// move forward.
pub trait BitRead {
    type Error: Error + Send + Sync + 'static;

    /// Returns true if the byte containing the current bit position is
    /// beyond the end of the stream.
    fn eof(&self) -> bool;

    /// Returns the current position in bits from the start of the stream.
    fn bit_pos(&self) -> usize;

    /// Reads `n` bits, with `n` in `[1, 8]`.
    ///
    /// If fewer than `n` bits are left, the behavior depends on the
    /// implementation; reading with no bits left is always an error.
    fn read_bits(&mut self, n: usize) -> Result<u8, Self::Error>;

    /// Moves to the next byte boundary, discarding the skipped bits.
    ///
    /// If the stream is already aligned, this is a no-op unless `force`
    /// is true, in which case a whole byte is skipped.
    fn move_to_byte_boundary(&mut self, force: bool) -> Result<(), Self::Error>;

    /// Reads 8 bits.
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.read_bits(8)
    }
}

/// Sequential bit-by-bit writes into an in-memory accumulator that can be
/// rolled back.
///
/// Note that bits are written most significant first, so writing the byte 7
/// appends the bit string `00000111`.
pub trait BitWrite {
    type Error: Error + Send + Sync + 'static;

    /// Returns the number of bits written so far.
    fn len(&self) -> usize;

    /// Returns true if no bits have been written.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a string of `'0'` and `'1'` characters and returns the number
    /// of bits written.
    ///
    /// The whole string is checked before anything is written, so on error
    /// the stream is left untouched.
    fn write_bits(&mut self, bits: &str) -> Result<usize, Self::Error>;

    /// Appends the lowest `n` bits of `value`, with `n` in `[0, 8]`, and
    /// returns `n`.
    ///
    /// The remaining bits of `value` must be zero.
    fn write_value(&mut self, value: u8, n: usize) -> Result<usize, Self::Error>;

    /// Appends the 8-bit representation of `byte`.
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<usize, Self::Error> {
        self.write_value(byte, 8)
    }

    /// Pads to the next byte boundary with zeros followed by a single one,
    /// and returns the number of bits of padding.
    ///
    /// If the stream is already aligned, this is a no-op unless `force`
    /// is true, in which case the byte `00000001` is appended.
    fn pad_to_byte_boundary(&mut self, force: bool) -> usize;

    /// Removes the last `n` bits written and returns them as a bit string.
    fn pop(&mut self, n: usize) -> Result<String, Self::Error>;

    /// Pads to the byte boundary using [`pad_to_byte_boundary`](BitWrite::pad_to_byte_boundary)
    /// and returns the bytes written so far.
    ///
    /// The stream is not consumed, so calling this method twice with `force`
    /// set pads twice.
    fn finalize(&mut self, force: bool) -> Vec<u8>;
}
