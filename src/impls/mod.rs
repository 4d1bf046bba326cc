/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit and byte streams over memory.

[`BitReader`] reads runs of at most 8 bits starting at arbitrary bit
positions of a byte slice; its behavior at the end of the slice (truncation
or zero padding) is chosen at construction time.

[`BitWriter`] accumulates bits in memory, and supports rolling back the last
bits written with [`pop`](crate::traits::BitWrite::pop), which makes it
suitable for speculative writes. Its output is padded to a byte boundary
using a self-delimiting `0*1` scheme.

[`ByteStream`] is a plain byte cursor with peeking.

*/

mod bit_reader;
pub use bit_reader::BitReader;

mod bit_writer;
pub use bit_writer::BitWriter;

mod byte_stream;
pub use byte_stream::ByteStream;
