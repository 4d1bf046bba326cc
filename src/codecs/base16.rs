/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::error::{Error, Result};

/// Returns whether `hex` is a well-formed hexadecimal string, that is,
/// it has even length and contains only hexadecimal digits of either case.
pub fn is_valid_hex(hex: &str) -> bool {
    hex.len() % 2 == 0 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decodes a hexadecimal string into bytes.
///
/// Surrounding whitespace is ignored, and digits are case-insensitive.
///
/// # Examples
///
/// ```
/// use bitcodec::codecs::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("00ff34")?, [0, 255, 52]);
/// assert_eq!(hex_to_bytes(" 0A\n")?, [10]);
/// assert!(hex_to_bytes("abc").is_err());
/// # Ok::<(), bitcodec::Error>(())
/// ```
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let hex = hex.trim();
    let digits = hex.chars().collect::<Vec<_>>();
    if digits.len() % 2 != 0 {
        return Err(Error::OddHexLength(digits.len()));
    }

    let nibble = |position: usize| {
        let symbol = digits[position];
        symbol
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| Error::InvalidHexDigit { symbol, position })
    };

    (0..digits.len())
        .step_by(2)
        .map(|i| Ok((nibble(i)? << 4) | nibble(i + 1)?))
        .collect()
}

/// Encodes bytes as a lowercase hexadecimal string, two digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() -> Result<()> {
        assert_eq!(bytes_to_hex(&[0, 255, 52]), "00ff34");
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(hex_to_bytes("DEADbeef")?, [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(hex_to_bytes("")?, [] as [u8; 0]);
        assert_eq!(
            hex_to_bytes("0g"),
            Err(Error::InvalidHexDigit {
                symbol: 'g',
                position: 1
            })
        );
        assert_eq!(hex_to_bytes("123"), Err(Error::OddHexLength(3)));
        assert!(is_valid_hex("00fF"));
        assert!(!is_valid_hex("0"));
        assert!(!is_valid_hex("zz"));
        Ok(())
    }
}
