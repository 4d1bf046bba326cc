/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    bytes: Vec<u8>,
    encoded: String,
    pad_char: Option<char>,
    strict: bool,
}

fn check<R: Radix>(data: &FuzzCase) {
    let config = CodecConfig::default()
        .with_pad_char(data.pad_char)
        .with_strict(data.strict);
    let Ok(codec) = Codec::<R>::new(config) else {
        // Only a pad character from the alphabet is rejected.
        let pad_char = data.pad_char.map(|c| c.to_ascii_lowercase());
        assert!(
            R::DEFAULT_ALPHABET
                .chars()
                .any(|c| Some(c.to_ascii_lowercase()) == pad_char)
        );
        return;
    };

    let encoded = codec.encode(&data.bytes);
    if codec.pad_char().is_some() {
        assert_eq!(encoded.chars().count() % R::GROUP, 0);
    }
    assert!(codec.is_valid(&encoded));
    assert_eq!(codec.decode(&encoded).ok().as_ref(), Some(&data.bytes));

    match codec.decode(&data.encoded) {
        Ok(decoded) => {
            assert!(codec.is_valid(&data.encoded));
            assert_eq!(codec.decode(&codec.encode(&decoded)).ok(), Some(decoded.clone()));
            if codec.pad_char().is_none() {
                // Unpadded encodings are canonical, up to case for base32.
                let expected = if R::CASE_INSENSITIVE {
                    data.encoded.to_ascii_lowercase()
                } else {
                    data.encoded.clone()
                };
                assert_eq!(codec.encode(&decoded), expected);
            }
        }
        Err(err) => {
            assert!(!codec.is_valid(&data.encoded));
            assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        }
    }
}

/// Checks round trips and validation of base32 and base64 codecs.
pub fn base_n(data: FuzzCase) {
    check::<Radix32>(&data);
    check::<Radix64>(&data);
}
