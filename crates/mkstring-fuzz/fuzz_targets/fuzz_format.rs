#![no_main]
use libfuzzer_sys::fuzz_target;
use mkstring_core::{Arg, make_string};

fuzz_target!(|data: &[u8]| {
    // First byte selects the argument mix; the rest is the template.
    // The only property under test is that no input panics.
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let template = String::from_utf8_lossy(rest);

    let args: Vec<Arg> = match selector % 5 {
        0 => vec![],
        1 => vec![Arg::from(i64::from(selector))],
        2 => vec![Arg::from("fuzz"), Arg::from(3.5_f64)],
        3 => vec![Arg::NullStr, Arg::from('x'), Arg::from(u64::from(selector))],
        _ => vec![Arg::Ptr(usize::from(selector)), Arg::from(-1_i32)],
    };

    let _ = make_string(&template, &args);
});
