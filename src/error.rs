/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Error types.

All fallible operations of this crate return an [`Error`], whose
[`kind`](Error::kind) classifies the failure as a malformed argument, an
attempt to read past the end of a buffer, or a malformed encoded string.

*/

use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed call parameters, including malformed codec configurations.
    InvalidArgument,
    /// A read was attempted with no bits (or bytes) left.
    EndOfBuffer,
    /// A malformed encoded string.
    InvalidFormat,
}

/// The error type of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid bit range [{start}, {end}) (must satisfy 0 <= start < end <= 8)")]
    BitRange { start: usize, end: usize },

    #[error("invalid pad length (must be > 0, got {0})")]
    PadLength(usize),

    #[error("invalid number of bits {bits} (must be in [1, {max}])")]
    BitCount { bits: usize, max: usize },

    #[error("invalid number of bits {bits} (must be at least {min})")]
    BitWidth { bits: usize, min: usize },

    #[error("invalid byte count {0} (must be >= 1)")]
    ByteCount(usize),

    #[error("value {value} does not fit in {bits} bits")]
    ValueOverflow { value: u64, bits: usize },

    #[error("bit string contains invalid character {0:?}")]
    InvalidBitChar(char),

    #[error("too many bits to pop, only have {available} bits, but want {requested}")]
    PopOverflow { requested: usize, available: usize },

    #[error("integer of {bytes} bytes does not fit in {capacity} bytes")]
    IntegerOverflow { bytes: usize, capacity: usize },

    #[error("buffer of {len} bytes is too short (need at least {min})")]
    ShortBuffer { len: usize, min: usize },

    #[error("expected {name} alphabet with {expected} characters, got {found} characters")]
    AlphabetLength {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid {name} alphabet, character {symbol:?} occurs more than once")]
    DuplicateSymbol { name: &'static str, symbol: char },

    #[error("{name} pad character {pad_char:?} can't be part of the alphabet")]
    PadCharInAlphabet { name: &'static str, pad_char: char },

    #[error("unexpected end of buffer at bit position {bit_pos}")]
    EndOfBuffer { bit_pos: usize },

    #[error("invalid length {length} (expected multiple of {multiple})")]
    InvalidLength { length: usize, multiple: usize },

    #[error("invalid {name} length, {count} characters can't end on a byte boundary")]
    InvalidSymbolCount { name: &'static str, count: usize },

    #[error("invalid number of {name} padding characters ({count})")]
    InvalidPadding { name: &'static str, count: usize },

    #[error("unexpected {name} padding character at position {position}")]
    UnexpectedPadding { name: &'static str, position: usize },

    #[error("invalid {name} character {symbol:?} at position {position}")]
    InvalidSymbol {
        name: &'static str,
        symbol: char,
        position: usize,
    },

    #[error("invalid {name} final character {symbol:?}")]
    InvalidFinalSymbol { name: &'static str, symbol: char },

    #[error("invalid hexadecimal string (uneven length {0})")]
    OddHexLength(usize),

    #[error("invalid hexadecimal digit {symbol:?} at position {position}")]
    InvalidHexDigit { symbol: char, position: usize },
}

impl Error {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BitRange { .. }
            | Error::PadLength(_)
            | Error::BitCount { .. }
            | Error::BitWidth { .. }
            | Error::ByteCount(_)
            | Error::ValueOverflow { .. }
            | Error::InvalidBitChar(_)
            | Error::PopOverflow { .. }
            | Error::IntegerOverflow { .. }
            | Error::ShortBuffer { .. }
            | Error::AlphabetLength { .. }
            | Error::DuplicateSymbol { .. }
            | Error::PadCharInAlphabet { .. } => ErrorKind::InvalidArgument,
            Error::EndOfBuffer { .. } => ErrorKind::EndOfBuffer,
            Error::InvalidLength { .. }
            | Error::InvalidSymbolCount { .. }
            | Error::InvalidPadding { .. }
            | Error::UnexpectedPadding { .. }
            | Error::InvalidSymbol { .. }
            | Error::InvalidFinalSymbol { .. }
            | Error::OddHexLength(_)
            | Error::InvalidHexDigit { .. } => ErrorKind::InvalidFormat,
        }
    }
}

/// A [`Result`](core::result::Result) defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            Error::BitCount { bits: 9, max: 8 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::BitWidth { bits: 2, min: 3 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::ShortBuffer { len: 7, min: 8 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::EndOfBuffer { bit_pos: 0 }.kind(), ErrorKind::EndOfBuffer);
        assert_eq!(
            Error::InvalidPadding {
                name: "base64",
                count: 3
            }
            .kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::PopOverflow {
                requested: 3,
                available: 2
            }
            .to_string(),
            "too many bits to pop, only have 2 bits, but want 3"
        );
        assert_eq!(
            Error::PadCharInAlphabet {
                name: "base32",
                pad_char: 'a'
            }
            .to_string(),
            "base32 pad character 'a' can't be part of the alphabet"
        );
        assert_eq!(
            Error::BitWidth { bits: 2, min: 3 }.to_string(),
            "invalid number of bits 2 (must be at least 3)"
        );
    }
}
