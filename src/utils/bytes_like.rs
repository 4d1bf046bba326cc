/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::codecs::hex_to_bytes;
use crate::error::Result;
use crate::impls::ByteStream;

/// Anything that can be coerced into a sequence of bytes.
///
/// Hexadecimal strings are decoded; byte buffers are taken as they are;
/// byte streams contribute their remaining, not yet shifted, bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytesLike<'a> {
    /// A hexadecimal string, see [`hex_to_bytes`].
    Hex(Cow<'a, str>),
    /// Raw bytes.
    Bytes(Cow<'a, [u8]>),
    /// The bytes of a [`ByteStream`] that have not been shifted yet.
    Stream(&'a [u8]),
}

impl BytesLike<'_> {
    /// Converts into an owned vector of bytes.
    ///
    /// Fails only for malformed hexadecimal strings.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            BytesLike::Hex(hex) => hex_to_bytes(hex),
            BytesLike::Bytes(bytes) => Ok(bytes.to_vec()),
            BytesLike::Stream(remaining) => Ok(remaining.to_vec()),
        }
    }
}

impl<'a> From<&'a str> for BytesLike<'a> {
    fn from(hex: &'a str) -> Self {
        BytesLike::Hex(Cow::Borrowed(hex))
    }
}

impl From<String> for BytesLike<'_> {
    fn from(hex: String) -> Self {
        BytesLike::Hex(Cow::Owned(hex))
    }
}

impl<'a> From<&'a [u8]> for BytesLike<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        BytesLike::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for BytesLike<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        BytesLike::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for BytesLike<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        BytesLike::Bytes(Cow::Owned(bytes))
    }
}

impl<'a, B: AsRef<[u8]>> From<&'a ByteStream<B>> for BytesLike<'a> {
    fn from(stream: &'a ByteStream<B>) -> Self {
        BytesLike::Stream(stream.peek_remaining())
    }
}
