/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{Error, Result};

/// Appends zeros to `bytes` so that its length is a positive multiple of `n`.
///
/// # Examples
///
/// ```
/// use bitcodec::utils::pad_bytes;
///
/// assert_eq!(pad_bytes(&[1, 2, 3], 2)?, [1, 2, 3, 0]);
/// assert_eq!(pad_bytes(&[], 4)?, [0, 0, 0, 0]);
/// # Ok::<(), bitcodec::Error>(())
/// ```
pub fn pad_bytes(bytes: &[u8], n: usize) -> Result<Vec<u8>> {
    if n == 0 {
        return Err(Error::PadLength(n));
    }
    let len = bytes.len();
    let n_pad = match len % n {
        0 if len != 0 => 0,
        rem => n - rem,
    };
    let mut res = Vec::with_capacity(len + n_pad);
    res.extend_from_slice(bytes);
    res.resize(len + n_pad, 0);
    Ok(res)
}

/// Compares two byte sequences.
///
/// The comparison is lexicographic, unless `shortest_first` is true, in
/// which case sequences of different lengths are ordered by length.
pub fn compare_bytes(a: &[u8], b: &[u8], shortest_first: bool) -> Ordering {
    if shortest_first && a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    a.cmp(b)
}

#[inline]
pub fn equals_bytes(a: &[u8], b: &[u8]) -> bool {
    compare_bytes(a, b, false).is_eq()
}
