/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use alloc::vec::Vec;
use log::trace;

use crate::traits::*;

/// A wrapper over a [`BitRead`] that logs at trace level all operations
/// performed, together with their results.
#[derive(Debug, Clone)]
pub struct DbgBitReader<R> {
    reader: R,
}

impl<R> DbgBitReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BitRead> BitRead for DbgBitReader<R> {
    type Error = R::Error;

    fn eof(&self) -> bool {
        self.reader.eof()
    }

    fn bit_pos(&self) -> usize {
        self.reader.bit_pos()
    }

    fn read_bits(&mut self, n_bits: usize) -> Result<u8, Self::Error> {
        let res = self.reader.read_bits(n_bits);
        trace!("read_bits({}): {:?}", n_bits, res);
        res
    }

    fn move_to_byte_boundary(&mut self, force: bool) -> Result<(), Self::Error> {
        let res = self.reader.move_to_byte_boundary(force);
        trace!(
            "move_to_byte_boundary({}): {:?} (bit_pos = {})",
            force,
            res,
            self.reader.bit_pos()
        );
        res
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let res = self.reader.read_byte();
        trace!("read_byte(): {:?}", res);
        res
    }
}

/// A wrapper over a [`BitWrite`] that logs at trace level all operations
/// performed, together with their results.
#[derive(Debug, Clone)]
pub struct DbgBitWriter<W> {
    writer: W,
}

impl<W> DbgBitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: BitWrite> BitWrite for DbgBitWriter<W> {
    type Error = W::Error;

    fn len(&self) -> usize {
        self.writer.len()
    }

    fn write_bits(&mut self, bits: &str) -> Result<usize, Self::Error> {
        let res = self.writer.write_bits(bits);
        trace!("write_bits({:?}): {:?} (len = {})", bits, res, self.writer.len());
        res
    }

    fn write_value(&mut self, value: u8, n_bits: usize) -> Result<usize, Self::Error> {
        let res = self.writer.write_value(value, n_bits);
        trace!(
            "write_value({:#04x}, {}): {:?} (len = {})",
            value,
            n_bits,
            res,
            self.writer.len()
        );
        res
    }

    fn write_byte(&mut self, byte: u8) -> Result<usize, Self::Error> {
        let res = self.writer.write_byte(byte);
        trace!("write_byte({:#04x}): {:?}", byte, res);
        res
    }

    fn pad_to_byte_boundary(&mut self, force: bool) -> usize {
        let n_pad = self.writer.pad_to_byte_boundary(force);
        trace!("pad_to_byte_boundary({}): {}", force, n_pad);
        n_pad
    }

    fn pop(&mut self, n_bits: usize) -> Result<String, Self::Error> {
        let res = self.writer.pop(n_bits);
        trace!("pop({}): {:?}", n_bits, res);
        res
    }

    fn finalize(&mut self, force: bool) -> Vec<u8> {
        let bytes = self.writer.finalize(force);
        trace!("finalize({}): {:?}", force, bytes);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::impls::{BitReader, BitWriter};

    #[test]
    fn test_transparent() -> Result<()> {
        let mut writer = DbgBitWriter::new(BitWriter::new());
        writer.write_bits("101")?;
        writer.write_byte(0xFF)?;
        assert_eq!(writer.pop(2)?, "11");
        let bytes = writer.finalize(false);
        assert_eq!(bytes, [0b1011_1111, 0b1000_0001]);

        let mut reader = DbgBitReader::new(BitReader::new(bytes));
        assert_eq!(reader.read_bits(3)?, 0b101);
        reader.move_to_byte_boundary(false)?;
        assert_eq!(reader.bit_pos(), 8);
        assert_eq!(reader.read_byte()?, 0b1000_0001);
        assert!(reader.eof());
        Ok(())
    }
}
