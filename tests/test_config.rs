/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![cfg(feature = "serde")]

use bitcodec::codecs::{Base32, Base64, CodecConfig};
use bitcodec::ErrorKind;
use std::error::Error as StdError;

#[test]
fn test_defaults() -> Result<(), Box<dyn StdError>> {
    let config: CodecConfig = serde_json::from_str("{}")?;
    assert_eq!(config, CodecConfig::default());
    assert_eq!(Base64::try_from(config)?, Base64::default());
    Ok(())
}

#[test]
fn test_unpadded_strict() -> Result<(), Box<dyn StdError>> {
    let config: CodecConfig = serde_json::from_str(r#"{"pad_char": null, "strict": true}"#)?;
    assert_eq!(config, CodecConfig::unpadded().with_strict(true));
    let codec = Base32::try_from(config)?;
    assert_eq!(codec.encode(b"f"), "my");
    Ok(())
}

#[test]
fn test_round_trip() -> Result<(), Box<dyn StdError>> {
    let codec = Base32::new(
        CodecConfig::default()
            .with_alphabet("0123456789abcdefghijklmnopqrstuv")
            .with_pad_char(Some('*')),
    )?;
    let json = serde_json::to_string(&codec.config())?;
    let config: CodecConfig = serde_json::from_str(&json)?;
    assert_eq!(Base32::new(config)?, codec);
    Ok(())
}

#[test]
fn test_invalid() -> Result<(), Box<dyn StdError>> {
    let config: CodecConfig = serde_json::from_str(r#"{"alphabet": "0123"}"#)?;
    assert_eq!(
        Base64::new(config).map_err(|e| e.kind()),
        Err(ErrorKind::InvalidArgument)
    );
    Ok(())
}
