#![no_main]
use libfuzzer_sys::fuzz_target;
use mkstring_core::find_spec;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    if let Some(m) = find_spec(&s) {
        // Any reported match is in bounds, nonempty, and anchored on '%'.
        assert!(m.len >= 2);
        assert!(m.end() <= s.len());
        assert_eq!(s.as_bytes()[m.pos], b'%');
        assert!(s.as_bytes()[m.end() - 1].is_ascii_alphabetic());
    }
});
