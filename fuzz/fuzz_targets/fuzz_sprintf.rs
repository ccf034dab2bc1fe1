#![no_main]
use libfuzzer_sys::fuzz_target;
use linelog::fmt::{Arg, sprintf};

fuzz_target!(|data: &str| {
    // Errors are fine, panics are not
    let args = [
        Arg::from(-17),
        Arg::from(3u64),
        Arg::from(2.5),
        Arg::from("text"),
        Arg::from('c'),
        Arg::Ptr(0x1000),
    ];
    for n in 0..=args.len() {
        let _ = sprintf(data, &args[..n]);
    }
});
