/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Text codecs for byte sequences.

[`Base32`] and [`Base64`] implement the RFC 4648 encodings with
configurable alphabet, pad character and strictness (see [`CodecConfig`]).
With the `std` feature, free functions such as [`encode_base32`] and
[`decode_base64`] use a shared codec with the default configuration.

Hexadecimal strings are handled by [`hex_to_bytes`] and [`bytes_to_hex`].

*/

mod base_n;
pub use base_n::*;

mod base16;
pub use base16::*;
