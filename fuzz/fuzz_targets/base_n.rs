#![no_main]

use bitcodec::fuzz::base_n::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| base_n(data));
