/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers and debug wrappers.

The functions in this module are stateless: [`mask_bits`], [`pad_bits`],
[`byte_to_bits`] and [`get_bit`] work on bits of bytes and on bit strings,
whereas [`pad_bytes`], [`compare_bytes`] and [`equals_bytes`] work on byte
sequences. [`BytesLike`] coerces hexadecimal strings, buffers and byte
streams into bytes.

Integers can be turned into minimal big- or little-endian byte sequences
using [`encode_int_be`] and [`encode_int_le`], and signed integers can be
mapped bijectively onto naturals using [`ToNat`] and [`ToInt`]. The
[`uint64`] module assembles 64-bit words from halves, bytes or hexadecimal
strings.

[`DbgBitReader`] and [`DbgBitWriter`] log at trace level all operations
performed by a [`BitRead`](crate::traits::BitRead) or
[`BitWrite`](crate::traits::BitWrite).

*/

mod ops;
pub use ops::*;

mod bytes;
pub use bytes::*;

mod bytes_like;
pub use bytes_like::BytesLike;

mod int;
pub use int::*;

pub mod uint64;

mod zigzag;
pub use zigzag::*;

mod dbg;
pub use dbg::*;
