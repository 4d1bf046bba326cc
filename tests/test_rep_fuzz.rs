/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Replays the fuzzing harnesses on deterministic pseudorandom inputs.

macro_rules! impl_fuzz_repr {
    ($func_name:ident, $fuzz_name:ident) => {
        #[cfg(feature = "fuzz")]
        #[test]
        fn $func_name() -> Result<(), Box<dyn std::error::Error>> {
            use arbitrary::Arbitrary;
            use bitcodec::fuzz::$fuzz_name::*;
            use rand::rngs::SmallRng;
            use rand::{Rng, SeedableRng};

            let mut r = SmallRng::seed_from_u64(0);
            for _ in 0..1000 {
                let mut bytes = vec![0_u8; r.random_range(0..4096)];
                r.fill(&mut bytes[..]);
                let mut unstructured = arbitrary::Unstructured::new(&bytes);
                let data = FuzzCase::arbitrary(&mut unstructured)?;
                bitcodec::fuzz::$fuzz_name::$fuzz_name(data);
            }

            Ok(())
        }
    };
}

impl_fuzz_repr!(test_rep_fuzz_bit_stream, bit_stream);
impl_fuzz_repr!(test_rep_fuzz_base_n, base_n);
