//! End-to-end vectors for the public formatting entry point, exercising the
//! same scenario mix the demonstration harness replays: plain substitution,
//! escapes, long arguments, argument exhaustion, and type mismatch.

use mkstring_core::{Arg, make_string};

#[test]
fn escape_survives_substitution() {
    assert_eq!(make_string!("%d%%\n", 1), "1%\n");
}

#[test]
fn single_string() {
    let item = String::from("arrows");
    assert_eq!(make_string!("%s\n", &item), "arrows\n");
}

#[test]
fn int_and_string() {
    assert_eq!(make_string!("%d %s\n", 2, "arrows"), "2 arrows\n");
    assert_eq!(make_string!("%d %s", 10, "arrows"), "10 arrows");
}

#[test]
fn long_argument_round_trips() {
    let long = "A".repeat(200);
    let out = make_string!("%s\n", long.as_str());
    assert_eq!(out.len(), 201);
    assert!(out.starts_with(&long));
}

#[test]
fn three_arguments() {
    assert_eq!(
        make_string!("%s picks up %d %s.", "The orc", 27, "arrows"),
        "The orc picks up 27 arrows."
    );
}

#[test]
fn starved_template_degrades_both_specifiers() {
    // One string argument against %f then %s: the string cannot satisfy
    // %f (no pointer pass-through here), and %s is out of arguments.
    assert_eq!(
        make_string!("My number is %f and my string is %s", "The orc"),
        "My number is ERR and my string is ERR"
    );
}

#[test]
fn integer_under_string_conversion_degrades() {
    assert_eq!(make_string!("My string is %s", 27), "My string is ERR");
}

#[test]
fn null_string_is_empty() {
    assert_eq!(make_string!("[%s]", None::<&str>), "[]");
}

#[test]
fn hot_loop_template_is_stable() {
    let args = [Arg::from("The orc"), Arg::from(27), Arg::from("arrows")];
    let expected = "The orc bends down and picks up 27 arrows.";
    for _ in 0..1000 {
        assert_eq!(
            make_string("%s bends down and picks up %d %s.", &args),
            expected
        );
    }
}
