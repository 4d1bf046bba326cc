/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Base32 and base64 codecs (RFC 4648).
//!
//! A [`Codec`] is parameterized by a [`Radix`] selector, which fixes the
//! number of bits per symbol, the padding group and the allowed padding
//! runs. [`Base32`] and [`Base64`] are the two instantiations.
//!
//! Encoding drives a zero-padding [`BitReader`] over the input, reading one
//! symbol at a time; decoding writes symbols into a [`BitWriter`], dropping
//! the low bits of the last symbol so that the output ends on a byte
//! boundary. Those dropped bits must be zero, so every byte sequence has
//! exactly one unpadded encoding.

use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::impls::{BitReader, BitWriter};
use crate::traits::*;

/// The configuration of a [`Codec`].
///
/// The default configuration uses the RFC 4648 alphabet of the radix, the
/// pad character `=`, and accepts unpadded input. When deserializing,
/// missing fields take their default value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CodecConfig {
    /// The alphabet, or `None` for the RFC 4648 alphabet of the radix.
    pub alphabet: Option<String>,
    /// The pad character, or `None` for an unpadded codec, which rejects
    /// padded input.
    pub pad_char: Option<char>,
    /// Whether padded codecs require the encoded length to be a multiple of
    /// the padding group even when no padding is present.
    pub strict: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alphabet: None,
            pad_char: Some('='),
            strict: false,
        }
    }
}

impl CodecConfig {
    /// A configuration with the default alphabet and no padding.
    pub fn unpadded() -> Self {
        Self {
            pad_char: None,
            ..Self::default()
        }
    }

    /// Sets the alphabet, replacing the RFC 4648 one.
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Sets the pad character; `None` disables padding.
    pub fn with_pad_char(mut self, pad_char: Option<char>) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Sets whether unpadded input must have a length multiple of the group.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// A validated, immutable base-N codec.
///
/// # Examples
///
/// ```
/// use bitcodec::codecs::{Base32, Base64, CodecConfig};
///
/// let base32 = Base32::default();
/// assert_eq!(base32.encode(b"f"), "my======");
/// assert_eq!(base32.decode("MY")?, b"f");
///
/// let base64 = Base64::new(CodecConfig::unpadded())?;
/// assert_eq!(base64.encode(&[0x14, 0xfb, 0x9c, 0x03]), "FPucAw");
/// assert!(base64.decode("FPucAw==").is_err());
/// # Ok::<(), bitcodec::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec<R: Radix> {
    alphabet: Vec<char>,
    /// Symbol codes indexed by ASCII character, `NO_SYMBOL` if absent.
    ascii_codes: [u8; 128],
    pad_char: Option<char>,
    strict: bool,
    _marker: PhantomData<R>,
}

const NO_SYMBOL: u8 = u8::MAX;

/// A base32 codec.
pub type Base32 = Codec<Radix32>;
/// A base64 codec.
pub type Base64 = Codec<Radix64>;

impl<R: Radix> Default for Codec<R> {
    /// Returns the RFC 4648 codec of the radix, with padding, not strict.
    fn default() -> Self {
        Self::from_validated(R::DEFAULT_ALPHABET.chars().collect(), Some('='), false)
    }
}

impl<R: Radix> TryFrom<CodecConfig> for Codec<R> {
    type Error = Error;

    fn try_from(config: CodecConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl<R: Radix> Codec<R> {
    /// Creates a new codec, validating the configuration.
    ///
    /// The alphabet must contain exactly `2^BITS` distinct characters, and
    /// must not contain the pad character. For base32, characters differing
    /// only by ASCII case count as the same character.
    pub fn new(config: CodecConfig) -> Result<Self> {
        let alphabet = config
            .alphabet
            .as_deref()
            .unwrap_or(R::DEFAULT_ALPHABET)
            .chars()
            .collect::<Vec<_>>();

        if alphabet.len() != R::SIZE {
            return Err(Error::AlphabetLength {
                name: R::NAME,
                expected: R::SIZE,
                found: alphabet.len(),
            });
        }

        for (i, &symbol) in alphabet.iter().enumerate() {
            if alphabet[..i].iter().any(|&c| Self::same_symbol(c, symbol)) {
                return Err(Error::DuplicateSymbol {
                    name: R::NAME,
                    symbol,
                });
            }
        }

        if let Some(pad_char) = config.pad_char {
            if alphabet.iter().any(|&c| Self::same_symbol(c, pad_char)) {
                return Err(Error::PadCharInAlphabet {
                    name: R::NAME,
                    pad_char,
                });
            }
        }

        debug!(
            "Created {} codec (pad_char: {:?}, strict: {})",
            R::NAME,
            config.pad_char,
            config.strict
        );

        Ok(Self::from_validated(alphabet, config.pad_char, config.strict))
    }

    fn from_validated(alphabet: Vec<char>, pad_char: Option<char>, strict: bool) -> Self {
        let mut ascii_codes = [NO_SYMBOL; 128];
        for (code, &c) in alphabet.iter().enumerate() {
            if c.is_ascii() {
                ascii_codes[c as usize] = code as u8;
                if R::CASE_INSENSITIVE {
                    ascii_codes[c.to_ascii_lowercase() as usize] = code as u8;
                    ascii_codes[c.to_ascii_uppercase() as usize] = code as u8;
                }
            }
        }
        Self {
            alphabet,
            ascii_codes,
            pad_char,
            strict,
            _marker: PhantomData,
        }
    }

    /// Returns the configuration of this codec, with an explicit alphabet.
    pub fn config(&self) -> CodecConfig {
        CodecConfig {
            alphabet: Some(self.alphabet.iter().collect()),
            pad_char: self.pad_char,
            strict: self.strict,
        }
    }

    #[inline]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[inline]
    pub fn pad_char(&self) -> Option<char> {
        self.pad_char
    }

    #[inline]
    pub fn strict(&self) -> bool {
        self.strict
    }

    #[inline(always)]
    fn same_symbol(a: char, b: char) -> bool {
        if R::CASE_INSENSITIVE {
            a.eq_ignore_ascii_case(&b)
        } else {
            a == b
        }
    }

    #[inline]
    fn lookup(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            // ASCII symbols can only match ASCII alphabet characters.
            let code = self.ascii_codes[symbol as usize];
            (code != NO_SYMBOL).then_some(code)
        } else {
            self.alphabet
                .iter()
                .position(|&c| c == symbol)
                .map(|code| code as u8)
        }
    }

    fn reject(&self, err: Error) -> Error {
        trace!("Rejecting {} input: {}", R::NAME, err);
        err
    }

    /// Splits `bytes` into symbols of `BITS` bits, the last one padded
    /// with zeros on the right.
    pub fn encode_raw(&self, bytes: &[u8]) -> Vec<u8> {
        let mut reader = BitReader::with_truncate(bytes, false);
        let mut symbols = Vec::with_capacity((bytes.len() * 8).div_ceil(R::BITS));
        // Reads only fail at the end of the data.
        while let Ok(symbol) = reader.read_bits(R::BITS) {
            symbols.push(symbol);
        }
        symbols
    }

    /// Encodes `bytes`, padding the result to a multiple of the padding
    /// group if this codec has a pad character.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let symbols = self.encode_raw(bytes);
        let n_symbols = symbols.len();
        let mut encoded = symbols
            .into_iter()
            .map(|symbol| self.alphabet[symbol as usize])
            .collect::<String>();

        if let Some(pad_char) = self.pad_char {
            let rem = n_symbols % R::GROUP;
            if rem != 0 {
                encoded.extend(core::iter::repeat_n(pad_char, R::GROUP - rem));
            }
        }
        encoded
    }

    /// Validates `encoded` and returns its symbols, without padding.
    ///
    /// Padding must be a single run at the end of the string of an allowed
    /// length, in which case the whole string length must be a multiple of
    /// the padding group. Strict codecs check the length even without
    /// padding. The unused low bits of the last symbol must be zero.
    pub fn decode_raw(&self, encoded: &str) -> Result<Vec<u8>> {
        let chars = encoded.chars().collect::<Vec<_>>();
        let total = chars.len();
        let mut n = total;

        if let Some(pad_char) = self.pad_char {
            while n > 0 && chars[n - 1] == pad_char {
                n -= 1;
            }
            let n_pad = total - n;

            if (self.strict || n_pad != 0) && total % R::GROUP != 0 {
                return Err(self.reject(Error::InvalidLength {
                    length: total,
                    multiple: R::GROUP,
                }));
            }

            if n_pad != 0 {
                if !R::PAD_RUNS.contains(&n_pad) {
                    return Err(self.reject(Error::InvalidPadding {
                        name: R::NAME,
                        count: n_pad,
                    }));
                }
                trace!("Stripped {} {} padding characters", n_pad, R::NAME);
            }
        }

        let mut symbols = Vec::with_capacity(n);
        for (position, &c) in chars[..n].iter().enumerate() {
            if Some(c) == self.pad_char {
                return Err(self.reject(Error::UnexpectedPadding {
                    name: R::NAME,
                    position,
                }));
            }
            match self.lookup(c) {
                Some(code) => symbols.push(code),
                None => {
                    return Err(self.reject(Error::InvalidSymbol {
                        name: R::NAME,
                        symbol: c,
                        position,
                    }));
                }
            }
        }

        if let Some(&last) = symbols.last() {
            let n_extra = n * R::BITS % 8;
            // The last symbol must carry at least one data bit.
            if n_extra >= R::BITS {
                return Err(self.reject(Error::InvalidSymbolCount {
                    name: R::NAME,
                    count: n,
                }));
            }
            if last & ((1 << n_extra) - 1) != 0 {
                return Err(self.reject(Error::InvalidFinalSymbol {
                    name: R::NAME,
                    symbol: chars[n - 1],
                }));
            }
        }

        Ok(symbols)
    }

    /// Decodes `encoded` into bytes.
    ///
    /// See [`decode_raw`](Codec::decode_raw) for the accepted inputs.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>> {
        let symbols = self.decode_raw(encoded)?;
        let mut writer = BitWriter::new();

        if let Some((&last, init)) = symbols.split_last() {
            for &symbol in init {
                writer.write_value(symbol, R::BITS)?;
            }
            let n_extra = symbols.len() * R::BITS % 8;
            writer.write_value(last >> n_extra, R::BITS - n_extra)?;
        }

        Ok(writer.finalize(false))
    }

    /// Returns whether [`decode`](Codec::decode) would accept `encoded`.
    pub fn is_valid(&self, encoded: &str) -> bool {
        self.decode_raw(encoded).is_ok()
    }
}

#[cfg(feature = "std")]
mod default_codecs {
    use super::*;
    use std::sync::LazyLock;

    static BASE32: LazyLock<Base32> = LazyLock::new(Base32::default);
    static BASE64: LazyLock<Base64> = LazyLock::new(Base64::default);

    /// Encodes `bytes` using the default [`Base32`] codec.
    pub fn encode_base32(bytes: &[u8]) -> String {
        BASE32.encode(bytes)
    }

    /// Decodes `encoded` using the default [`Base32`] codec.
    pub fn decode_base32(encoded: &str) -> Result<Vec<u8>> {
        BASE32.decode(encoded)
    }

    /// Returns whether the default [`Base32`] codec accepts `encoded`.
    pub fn is_valid_base32(encoded: &str) -> bool {
        BASE32.is_valid(encoded)
    }

    /// Encodes `bytes` using the default [`Base64`] codec.
    pub fn encode_base64(bytes: &[u8]) -> String {
        BASE64.encode(bytes)
    }

    /// Decodes `encoded` using the default [`Base64`] codec.
    pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
        BASE64.decode(encoded)
    }

    /// Returns whether the default [`Base64`] codec accepts `encoded`.
    pub fn is_valid_base64(encoded: &str) -> bool {
        BASE64.is_valid(encoded)
    }
}

#[cfg(feature = "std")]
pub use default_codecs::*;
