#![no_main]

use bitcodec::fuzz::bit_stream::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| bit_stream(data));
