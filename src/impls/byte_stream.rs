/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};

/// A byte-level cursor over a slice.
///
/// This is the byte-aligned counterpart of [`BitReader`](crate::impls::BitReader):
/// it never modifies the underlying data, and its position only moves
/// forward. Peeking methods never advance the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteStream<B: AsRef<[u8]>> {
    data: B,
    pos: usize,
}

impl<B: AsRef<[u8]>> ByteStream<B> {
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in bytes.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.as_ref().len()
    }

    /// Returns the bytes that have not been shifted yet.
    #[inline]
    pub fn peek_remaining(&self) -> &[u8] {
        &self.data.as_ref()[self.pos..]
    }

    pub fn peek_one(&self) -> Result<u8> {
        self.data
            .as_ref()
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.end_of_buffer())
    }

    /// Returns the next `n` bytes, with `n` positive.
    pub fn peek_many(&self, n: usize) -> Result<&[u8]> {
        if n == 0 {
            return Err(Error::ByteCount(n));
        }
        let end = self
            .pos
            .checked_add(n)
            .ok_or_else(|| self.end_of_buffer())?;
        self.data
            .as_ref()
            .get(self.pos..end)
            .ok_or_else(|| self.end_of_buffer())
    }

    pub fn shift_one(&mut self) -> Result<u8> {
        let byte = self.peek_one()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Returns the next `n` bytes, with `n` positive, and advances past them.
    pub fn shift_many(&mut self, n: usize) -> Result<&[u8]> {
        let start = self.pos;
        self.peek_many(n)?;
        self.pos += n;
        Ok(&self.data.as_ref()[start..self.pos])
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    fn end_of_buffer(&self) -> Error {
        Error::EndOfBuffer {
            bit_pos: self.pos * 8,
        }
    }
}
