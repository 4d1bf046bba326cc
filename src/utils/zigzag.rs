/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Zigzag bijections between signed and unsigned integers.
//!
//! Nonnegative values are mapped to even naturals and negative values to
//! odd naturals, so that integers of small absolute value have small
//! encodings: 0 → 0, -1 → 1, 1 → 2, -2 → 3, and so on.

/// Maps a signed integer to a natural number of the same width.
pub trait ToNat {
    type Nat;
    fn to_nat(self) -> Self::Nat;
}

/// Maps a natural number back to the signed integer of the same width.
///
/// This is the inverse of [`ToNat`].
pub trait ToInt {
    type Int;
    fn to_int(self) -> Self::Int;
}

macro_rules! impl_zigzag {
    ($($nat:ty => $int:ty),*) => {$(
        impl ToNat for $int {
            type Nat = $nat;
            #[inline(always)]
            fn to_nat(self) -> $nat {
                ((self << 1) ^ (self >> (<$int>::BITS - 1))) as $nat
            }
        }

        impl ToInt for $nat {
            type Int = $int;
            #[inline(always)]
            fn to_int(self) -> $int {
                ((self >> 1) as $int) ^ -((self & 1) as $int)
            }
        }
    )*};
}

impl_zigzag!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128, usize => isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let expected = [(0_i32, 0_u32), (-1, 1), (1, 2), (-2, 3), (2, 4)];
        for (int, nat) in expected {
            assert_eq!(int.to_nat(), nat);
            assert_eq!(nat.to_int(), int);
        }
        assert_eq!(i64::MIN.to_nat(), u64::MAX);
        assert_eq!(i64::MAX.to_nat(), u64::MAX - 1);
    }
}
