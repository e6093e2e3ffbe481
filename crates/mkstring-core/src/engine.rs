//! Substitution engine.
//!
//! Pairs conversion specifiers with arguments strictly left to right by
//! splitting the template after its first specifier and peeling off one
//! argument per layer. Each layer rewrites a private working copy of its
//! slice of the template; nothing shared survives a call.

use crate::arg::Arg;
use crate::render;
use crate::scan::find_spec;

/// Literal token substituted when a specifier cannot be safely resolved.
pub const ERROR_TOKEN: &str = "ERR";

/// Substitute `args` into `template`, printf style.
///
/// Never panics. Specifiers beyond the argument count substitute
/// [`ERROR_TOKEN`]; arguments beyond the specifier count are unused. A
/// trailing unterminated `%` passes through untouched, and every `%%`
/// collapses to a single `%` on the way out.
///
/// ```
/// use mkstring_core::{Arg, make_string};
///
/// let out = make_string("%d %s", &[Arg::from(2), Arg::from("arrows")]);
/// assert_eq!(out, "2 arrows");
/// ```
pub fn make_string(template: &str, args: &[Arg]) -> String {
    match args {
        [] => format_exhausted(template),
        [arg] => format_single(template, arg),
        [first, rest @ ..] => {
            // Split the original template just after its first specifier;
            // this layer consumes exactly one specifier and one argument.
            let (head, tail) = match find_spec(template) {
                Some(m) => template.split_at(m.end()),
                None => (template, ""),
            };
            let mut out = format_single(head, first);
            out.push_str(&make_string(tail, rest));
            out
        }
    }
}

/// Variadic front end for [`make_string`]. Arguments are converted through
/// [`Arg::from`], so string slices, integers, floats, chars, and
/// `Option<&str>` (for nullable strings) all work directly.
///
/// ```
/// use mkstring_core::make_string;
///
/// assert_eq!(make_string!("%s x%d", "hit", 3), "hit x3");
/// assert_eq!(make_string!("no args"), "no args");
/// ```
#[macro_export]
macro_rules! make_string {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::make_string($template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Base case: one argument. The first specifier found resolves against it;
/// any later specifier in this slice is out of arguments and degrades.
fn format_single(template: &str, arg: &Arg) -> String {
    let mut result = template.to_owned();
    let mut first = true;

    // Rescan the whole working copy after each substitution; substituted
    // text takes part in later scans.
    while let Some(m) = find_spec(&result) {
        let replacement = if first {
            resolve(&result[m.pos..m.end()], arg)
        } else {
            // Out of arguments.
            ERROR_TOKEN.to_owned()
        };
        result.replace_range(m.pos..m.end(), &replacement);
        first = false;
    }

    unescape(result)
}

/// Base case: no arguments at all. Every specifier degrades.
fn format_exhausted(template: &str) -> String {
    let mut result = template.to_owned();

    while let Some(m) = find_spec(&result) {
        result.replace_range(m.pos..m.end(), ERROR_TOKEN);
    }

    unescape(result)
}

/// Resolve one specifier span against one argument.
fn resolve(spec_text: &str, arg: &Arg) -> String {
    let conversion = spec_text.as_bytes()[spec_text.len() - 1];

    if let Some(s) = arg.as_str() {
        if conversion != b's' {
            // A string argument cannot safely satisfy a non-string
            // conversion; C's pointer reinterpretation has no safe
            // equivalent here.
            return ERROR_TOKEN.to_owned();
        }
        if spec_text.len() == 2 {
            // Bare %s: straight replacement, no renderer round trip.
            return s.to_owned();
        }
        return render::render(spec_text, arg).unwrap_or_else(|| ERROR_TOKEN.to_owned());
    }

    if conversion == b's' {
        // Non-string value under a string conversion.
        return ERROR_TOKEN.to_owned();
    }

    render::render(spec_text, arg).unwrap_or_else(|| ERROR_TOKEN.to_owned())
}

/// Collapse every `%%` to `%`. Runs once per base-case layer, so percent
/// signs inside substituted argument text survive verbatim.
fn unescape(result: String) -> String {
    result.replace("%%", "%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_specifier_is_identity() {
        assert_eq!(make_string!("plain text"), "plain text");
        assert_eq!(make_string!("plain text", 1, 2.0, "x"), "plain text");
    }

    #[test]
    fn test_escape_roundtrip_zero_args() {
        assert_eq!(make_string!("100%%"), "100%");
    }

    #[test]
    fn test_escape_after_substitution() {
        assert_eq!(make_string!("%d%%", 1), "1%");
    }

    #[test]
    fn test_string_substitution() {
        assert_eq!(make_string!("%s", "abc"), "abc");
        assert_eq!(make_string!("%s", None::<&str>), "");
    }

    #[test]
    fn test_int_then_string() {
        assert_eq!(make_string!("%d %s", 2, "arrows"), "2 arrows");
    }

    #[test]
    fn test_non_string_under_string_conversion() {
        assert_eq!(make_string!("%s", 27), "ERR");
        assert!(make_string!("My string is %s", 27).contains(ERROR_TOKEN));
    }

    #[test]
    fn test_argument_exhaustion() {
        assert_eq!(make_string!("%d %d", 1), "1 ERR");
        assert_eq!(make_string!("%d and %s and %f", 1), "1 and ERR and ERR");
    }

    #[test]
    fn test_zero_args_degrades_specifiers() {
        assert_eq!(make_string!("%d"), "ERR");
        assert_eq!(make_string!("a %s b %d c"), "a ERR b ERR c");
    }

    #[test]
    fn test_excess_arguments_unused() {
        assert_eq!(make_string!("%d", 1, 2, 3), "1");
    }

    #[test]
    fn test_single_percent_untouched() {
        // An unterminated specifier is not a match and not unescaped.
        assert_eq!(make_string!("100% "), "100% ");
        assert_eq!(make_string!("%"), "%");
        assert_eq!(make_string!("50% + 10%", 1), "50% + 10%");
    }

    #[test]
    fn test_string_arg_to_numeric_conversion_errs_instead_of_pointer_coercion() {
        // C printf would forward the string's address to the numeric
        // conversion; this implementation substitutes the error token.
        assert_eq!(make_string!("%d", "abc"), "ERR");
        assert_eq!(make_string!("%x", "abc"), "ERR");
        assert_eq!(make_string!("%f", "The orc"), "ERR");
    }

    #[test]
    fn test_decorated_string_spec() {
        assert_eq!(make_string!("[%8s]", "hi"), "[      hi]");
        assert_eq!(make_string!("[%.3s]", "hello"), "[hel]");
    }

    #[test]
    fn test_numeric_formats_match_native() {
        assert_eq!(make_string!("%05d", 42), "00042");
        assert_eq!(make_string!("%x", 42u32), "2a");
        assert_eq!(make_string!("%+d", 7), "+7");
        assert_eq!(make_string!("%ld", 123456789i64), "123456789");
        assert_eq!(make_string!("%.3f", 3.14159), "3.142");
        assert_eq!(make_string!("%c", 'Z'), "Z");
    }

    #[test]
    fn test_pointer_spec() {
        assert_eq!(make_string("%p", &[Arg::Ptr(0)]), "(nil)");
        assert_eq!(make_string("%p", &[Arg::Ptr(0xbeef)]), "0xbeef");
    }

    #[test]
    fn test_large_string_not_truncated() {
        let long = "A".repeat(400);
        assert_eq!(make_string!("%s", long.as_str()), long);
        assert_eq!(make_string!("<%s>", long.as_str()).len(), long.len() + 2);
    }

    #[test]
    fn test_unescape_is_per_layer() {
        // Percent signs carried in by arguments must survive; a single
        // top-level unescape over the concatenation would collapse the
        // seam between these two substitutions.
        assert_eq!(make_string!("%s%s", "a%", "%1"), "a%%1");
    }

    #[test]
    fn test_substituted_text_is_rescanned() {
        // The working copy is rescanned after substitution, so an argument
        // that smuggles in a specifier consumes the ERR path rather than
        // another argument.
        assert_eq!(make_string!("%s", "%d"), "ERR");
        // ...and %% smuggled in through an argument unescapes with its
        // layer.
        assert_eq!(make_string!("%s", "50%%"), "50%");
    }

    #[test]
    fn test_malformed_spec_consumes_argument_as_err() {
        // Runtime width is out of scope; the renderer rejects it.
        assert_eq!(make_string!("%*d", 5), "ERR");
    }

    #[test]
    fn test_never_panics_on_junk() {
        for template in ["%", "%%%", "%-%", "% 5q", "%zzz", "héllo %ld %"] {
            let _ = make_string!(template);
            let _ = make_string!(template, 1);
            let _ = make_string!(template, "x", 2.5, 'c');
        }
    }
}
