//! Scenario table for the demonstration driver.
//!
//! Each scenario pairs a template with an argument mix and records the
//! rendered output. Degraded outputs (those containing the error token)
//! are expected for the mismatch scenarios; they are outcomes, not errors.

use serde::Serialize;

use mkstring_core::{Arg, ERROR_TOKEN, make_string};

/// Outcome of one replayed scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub template: String,
    pub output: String,
    /// True when the output contains the error token.
    pub degraded: bool,
}

/// Replay the full scenario table.
pub fn run_all() -> Vec<ScenarioReport> {
    let long = "A".repeat(200);

    let table: Vec<(&str, &str, Vec<Arg>)> = vec![
        ("escape_roundtrip", "%d%%", vec![Arg::from(1)]),
        ("single_string", "%s", vec![Arg::from("arrows")]),
        (
            "int_and_string",
            "%d %s",
            vec![Arg::from(2), Arg::from("arrows")],
        ),
        (
            "two_digit_int",
            "%d %s",
            vec![Arg::from(10), Arg::from("arrows")],
        ),
        ("long_string", "%s", vec![Arg::from(long.as_str())]),
        (
            "three_args",
            "%s picks up %d %s.",
            vec![Arg::from("The orc"), Arg::from(27), Arg::from("arrows")],
        ),
        (
            "starved_template",
            "My number is %f and my string is %s",
            vec![Arg::from("The orc")],
        ),
        ("type_mismatch", "My string is %s", vec![Arg::from(27)]),
        ("null_string", "[%s]", vec![Arg::from(None::<&str>)]),
    ];

    table
        .into_iter()
        .map(|(name, template, args)| {
            let output = make_string(template, &args);
            let degraded = output.contains(ERROR_TOKEN);
            ScenarioReport {
                name: name.to_owned(),
                template: template.to_owned(),
                output,
                degraded,
            }
        })
        .collect()
}
