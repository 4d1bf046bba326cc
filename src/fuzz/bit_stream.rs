/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
    force: bool,
    read_widths: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    WriteBits(Vec<bool>),
    WriteChars(String),
    WriteValue(u8, u8),
    WriteByte(u8),
    Pad(bool),
    Pop(u8),
}

fn to_bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn pad(model: &mut Vec<bool>, n_pad: usize) {
    if n_pad != 0 {
        model.extend(core::iter::repeat_n(false, n_pad - 1));
        model.push(true);
    }
}

/// Checks a [`BitWriter`] against a vector of bits, and then reads back
/// the finalized bytes with a truncating [`BitReader`].
pub fn bit_stream(data: FuzzCase) {
    let mut writer = BitWriter::new();
    let mut model: Vec<bool> = vec![];

    for command in data.commands {
        match command {
            RandomCommand::WriteBits(bits) => {
                let bit_string = to_bit_string(&bits);
                assert_eq!(writer.write_bits(&bit_string).ok(), Some(bits.len()));
                model.extend(bits);
            }
            RandomCommand::WriteChars(chars) => {
                let valid = chars.chars().all(|c| c == '0' || c == '1');
                assert_eq!(writer.write_bits(&chars).is_ok(), valid);
                if valid {
                    model.extend(chars.chars().map(|c| c == '1'));
                }
            }
            RandomCommand::WriteValue(value, n_bits) => {
                let n_bits = (n_bits % 9) as usize;
                let fits = n_bits == 8 || value >> n_bits == 0;
                assert_eq!(writer.write_value(value, n_bits).is_ok(), fits);
                if fits {
                    model.extend((0..n_bits).rev().map(|i| (value >> i) & 1 == 1));
                }
            }
            RandomCommand::WriteByte(byte) => {
                assert_eq!(writer.write_byte(byte).ok(), Some(8));
                model.extend((0..8).rev().map(|i| (byte >> i) & 1 == 1));
            }
            RandomCommand::Pad(force) => {
                let expected = match model.len() % 8 {
                    0 if force => 8,
                    0 => 0,
                    rem => 8 - rem,
                };
                assert_eq!(writer.pad_to_byte_boundary(force), expected);
                pad(&mut model, expected);
            }
            RandomCommand::Pop(n_bits) => {
                let n_bits = n_bits as usize;
                match writer.pop(n_bits) {
                    Ok(bits) => {
                        let tail = model.split_off(model.len() - n_bits);
                        assert_eq!(bits, to_bit_string(&tail));
                    }
                    Err(_) => assert!(n_bits > model.len()),
                }
            }
        }
        assert_eq!(writer.len(), model.len());
    }

    let bytes = writer.finalize(data.force);
    let expected = match model.len() % 8 {
        0 if data.force => 8,
        0 => 0,
        rem => 8 - rem,
    };
    pad(&mut model, expected);
    assert_eq!(bytes.len() * 8, model.len());
    for (i, byte) in bytes.iter().enumerate() {
        let expected = model[i * 8..(i + 1) * 8]
            .iter()
            .fold(0_u8, |acc, &bit| (acc << 1) | bit as u8);
        assert_eq!(*byte, expected);
    }

    let mut reader = BitReader::new(&bytes);
    let mut pos = 0;
    for width in data.read_widths {
        let n_bits = 1 + (width % 8) as usize;
        match reader.read_bits(n_bits) {
            Ok(value) => {
                let to_read = n_bits.min(model.len() - pos);
                let expected = model[pos..pos + to_read]
                    .iter()
                    .fold(0_u8, |acc, &bit| (acc << 1) | bit as u8);
                assert_eq!(value, expected);
                pos += to_read;
            }
            Err(err) => {
                assert_eq!(pos, model.len());
                assert_eq!(err.kind(), ErrorKind::EndOfBuffer);
            }
        }
        assert_eq!(reader.bit_pos(), pos);
    }
}
