//! Single-conversion renderer.
//!
//! Interprets one specifier span (flags, width, precision, length modifier,
//! conversion letter) and renders one typed value, mirroring POSIX fprintf
//! semantics for that single directive. Positional arguments and `*`
//! width/precision are out of scope and parse as malformed.
//!
//! All rendering is bounded: a numeric substitution never exceeds
//! [`NUMERIC_LIMIT`] bytes, and width padding is capped, so no specifier can
//! grow the output without bound. String content itself is never truncated
//! unless an explicit precision asks for it.

use crate::arg::Arg;

/// Bound for one numeric conversion. Longer renderings are truncated
/// instead of growing the scratch space.
pub const NUMERIC_LIMIT: usize = 128;

/// Cap on padding produced by a width specification.
const PAD_LIMIT: usize = 4096;

// ---------------------------------------------------------------------------
// Specifier parsing
// ---------------------------------------------------------------------------

/// Flags parsed from a specifier span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub left_justify: bool, // '-'
    pub force_sign: bool,   // '+'
    pub space_sign: bool,   // ' '
    pub alt_form: bool,     // '#'
    pub zero_pad: bool,     // '0'
}

/// A parsed conversion specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: u8,
}

/// Parse a full specifier span, `%` through conversion letter inclusive.
/// Returns `None` when the span is malformed.
pub fn parse_spec(text: &str) -> Option<Spec> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut pos = match bytes.first() {
        Some(b'%') => 1,
        _ => return None,
    };

    let mut flags = Flags::default();
    while pos < len {
        match bytes[pos] {
            b'-' => flags.left_justify = true,
            b'+' => flags.force_sign = true,
            b' ' => flags.space_sign = true,
            b'#' => flags.alt_form = true,
            b'0' => flags.zero_pad = true,
            _ => break,
        }
        pos += 1;
    }
    // POSIX: '+' overrides ' '; '-' overrides '0'.
    if flags.force_sign {
        flags.space_sign = false;
    }
    if flags.left_justify {
        flags.zero_pad = false;
    }

    let width = parse_decimal_run(bytes, &mut pos);

    let precision = if pos < len && bytes[pos] == b'.' {
        pos += 1;
        Some(parse_decimal_run(bytes, &mut pos).unwrap_or(0))
    } else {
        None
    };

    // Length modifiers qualify the argument size in C. Values arrive here
    // already typed, so the letters are absorbed without effect.
    while pos + 1 < len && matches!(bytes[pos], b'h' | b'l' | b'j' | b'z' | b't' | b'L') {
        pos += 1;
    }

    if pos + 1 != len {
        return None;
    }
    let conversion = bytes[pos];
    match conversion {
        b'd' | b'i' | b'u' | b'o' | b'x' | b'X' | b'f' | b'F' | b'e' | b'E' | b'g' | b'G'
        | b'c' | b's' | b'p' => {}
        _ => return None,
    }

    Some(Spec {
        flags,
        width,
        precision,
        conversion,
    })
}

fn parse_decimal_run(bytes: &[u8], pos: &mut usize) -> Option<usize> {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        return None;
    }
    let mut value = 0_usize;
    for &d in &bytes[start..*pos] {
        value = value
            .saturating_mul(10)
            .saturating_add((d - b'0') as usize);
    }
    Some(value)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Render one specifier span against one value.
///
/// `None` means the pairing cannot be satisfied (malformed span, or a value
/// shape the conversion letter does not accept); the engine substitutes the
/// error token in that case.
pub fn render(spec_text: &str, arg: &Arg) -> Option<String> {
    let spec = parse_spec(spec_text)?;

    let body = match (spec.conversion, *arg) {
        (b'd' | b'i', Arg::Int(v)) => format_int(v.unsigned_abs(), v < 0, &spec),
        (b'd' | b'i', Arg::Uint(v)) => format_int(v, false, &spec),
        (b'd' | b'i', Arg::Char(c)) => format_int(u64::from(u32::from(c)), false, &spec),
        (b'u' | b'o' | b'x' | b'X', Arg::Uint(v)) => format_int(v, false, &spec),
        // Negative values reinterpret as unsigned, as C's conversion does.
        (b'u' | b'o' | b'x' | b'X', Arg::Int(v)) => format_int(v as u64, false, &spec),
        (b'u' | b'o' | b'x' | b'X', Arg::Char(c)) => {
            format_int(u64::from(u32::from(c)), false, &spec)
        }
        (b'f' | b'F' | b'e' | b'E' | b'g' | b'G', Arg::Float(v)) => format_float(v, &spec),
        (b'c', Arg::Char(c)) => format_char(c, &spec),
        (b'c', Arg::Int(v)) => format_char(char::from(v as u8), &spec),
        (b'c', Arg::Uint(v)) => format_char(char::from(v as u8), &spec),
        (b'p', Arg::Ptr(addr)) => format_pointer(addr, &spec),
        // String content is unbounded; skip the numeric clamp.
        (b's', Arg::Str(s)) => return Some(format_str(s, &spec)),
        (b's', Arg::NullStr) => return Some(format_str("", &spec)),
        _ => return None,
    };

    Some(clamp_numeric(body))
}

/// Truncate a numeric rendering to the scratch bound, staying on a
/// character boundary.
fn clamp_numeric(mut s: String) -> String {
    if s.len() > NUMERIC_LIMIT {
        let mut cut = NUMERIC_LIMIT;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    s
}

// ---------------------------------------------------------------------------
// Integer rendering
// ---------------------------------------------------------------------------

fn format_int(value: u64, negative: bool, spec: &Spec) -> String {
    let (base, uppercase) = match spec.conversion {
        b'o' => (8, false),
        b'x' => (16, false),
        b'X' => (16, true),
        _ => (10, false),
    };
    let digits = render_digits(value, base, uppercase);

    let signed = matches!(spec.conversion, b'd' | b'i');
    let sign = if negative {
        Some('-')
    } else if signed && spec.flags.force_sign {
        Some('+')
    } else if signed && spec.flags.space_sign {
        Some(' ')
    } else {
        None
    };

    // Precision is the minimum digit count; explicit precision 0 with
    // value 0 emits no digits at all.
    let suppress_zero = value == 0 && spec.precision == Some(0);
    let zero_prefix = spec
        .precision
        .unwrap_or(1)
        .saturating_sub(digits.len());

    let prefix = if spec.flags.alt_form && value != 0 {
        match spec.conversion {
            b'o' => "0",
            b'x' => "0x",
            b'X' => "0X",
            _ => "",
        }
    } else {
        ""
    };

    let content = sign.is_some() as usize
        + prefix.len()
        + if suppress_zero {
            0
        } else {
            zero_prefix + digits.len()
        };
    let pad_total = spec.width.unwrap_or(0).saturating_sub(content);

    let mut out = String::with_capacity(content + pad_total.min(PAD_LIMIT));
    if !spec.flags.left_justify && !spec.flags.zero_pad {
        push_pad(&mut out, ' ', pad_total);
    }
    if let Some(sign) = sign {
        out.push(sign);
    }
    out.push_str(prefix);
    if !spec.flags.left_justify && spec.flags.zero_pad {
        push_pad(&mut out, '0', pad_total);
    }
    if !suppress_zero {
        push_pad(&mut out, '0', zero_prefix);
        out.push_str(&digits);
    }
    if spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out
}

/// Render `value` in `base` with no sign or padding.
fn render_digits(mut value: u64, base: u64, uppercase: bool) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut digits = [0u8; 64];
    let mut pos = digits.len();
    while value > 0 {
        pos -= 1;
        let d = (value % base) as u8;
        digits[pos] = if d < 10 { b'0' + d } else { alpha + (d - 10) };
        value /= base;
    }
    digits[pos..].iter().map(|&b| char::from(b)).collect()
}

// ---------------------------------------------------------------------------
// Float rendering
// ---------------------------------------------------------------------------

fn format_float(value: f64, spec: &Spec) -> String {
    let precision = spec.precision.unwrap_or(6); // POSIX default

    if value.is_nan() {
        let s = if spec.conversion.is_ascii_uppercase() {
            "NAN"
        } else {
            "nan"
        };
        return pad_text(s, spec);
    }
    if value.is_infinite() {
        let s = match (spec.conversion.is_ascii_uppercase(), value > 0.0) {
            (true, true) => "INF",
            (true, false) => "-INF",
            (false, true) => "inf",
            (false, false) => "-inf",
        };
        return pad_text(s, spec);
    }

    let negative = value.is_sign_negative();
    let abs = value.abs();
    let uppercase = spec.conversion.is_ascii_uppercase();

    let body = match spec.conversion.to_ascii_lowercase() {
        b'e' => render_scientific(abs, precision, uppercase),
        b'g' => render_shortest(abs, precision, uppercase, spec.flags.alt_form),
        _ => render_fixed(abs, precision, spec.flags.alt_form),
    };

    let sign = if negative {
        Some('-')
    } else if spec.flags.force_sign {
        Some('+')
    } else if spec.flags.space_sign {
        Some(' ')
    } else {
        None
    };

    let content = sign.is_some() as usize + body.len();
    let pad_total = spec.width.unwrap_or(0).saturating_sub(content);

    let mut out = String::with_capacity(content + pad_total.min(PAD_LIMIT));
    if !spec.flags.left_justify && !spec.flags.zero_pad {
        push_pad(&mut out, ' ', pad_total);
    }
    if let Some(sign) = sign {
        out.push(sign);
    }
    if !spec.flags.left_justify && spec.flags.zero_pad {
        push_pad(&mut out, '0', pad_total);
    }
    out.push_str(&body);
    if spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out
}

/// `%f` / `%F`: fixed-point decimal.
fn render_fixed(value: f64, precision: usize, alt_form: bool) -> String {
    if precision == 0 {
        let int_part = value.round() as u64;
        if alt_form {
            format!("{int_part}.")
        } else {
            format!("{int_part}")
        }
    } else {
        format!("{value:.precision$}")
    }
}

/// `%e` / `%E`: scientific notation with a two-digit minimum exponent.
fn render_scientific(value: f64, precision: usize, uppercase: bool) -> String {
    let e_char = if uppercase { 'E' } else { 'e' };
    if value == 0.0 {
        if precision == 0 {
            return format!("0{e_char}+00");
        }
        let zeros = "0".repeat(precision);
        return format!("0.{zeros}{e_char}+00");
    }
    let exp = value.log10().floor() as i32;
    let mantissa = value / 10_f64.powi(exp);
    let sign = if exp < 0 { '-' } else { '+' };
    let abs_exp = exp.unsigned_abs();
    if precision == 0 {
        format!("{}{e_char}{sign}{abs_exp:02}", mantissa.round() as u64)
    } else {
        format!("{mantissa:.precision$}{e_char}{sign}{abs_exp:02}")
    }
}

/// `%g` / `%G`: the shorter of fixed and scientific.
fn render_shortest(value: f64, precision: usize, uppercase: bool, alt_form: bool) -> String {
    let p = precision.max(1);

    if value == 0.0 {
        if alt_form {
            if p <= 1 {
                return "0.".to_owned();
            }
            let zeros = "0".repeat(p - 1);
            return format!("0.{zeros}");
        }
        return "0".to_owned();
    }

    let exp = value.log10().floor() as i32;
    // C11: fixed style when P > X >= -4, scientific otherwise.
    if exp >= -4 && exp < p as i32 {
        let frac_digits = (p as i32 - 1 - exp).max(0) as usize;
        let mut s = format!("{value:.frac_digits$}");
        if !alt_form {
            strip_trailing_zeros(&mut s);
        }
        s
    } else {
        let mut s = render_scientific(value, p.saturating_sub(1), uppercase);
        if !alt_form {
            // Strip trailing zeros from the mantissa only.
            if let Some(e_pos) = s.bytes().position(|b| b == b'e' || b == b'E') {
                let mut mantissa = s[..e_pos].to_owned();
                strip_trailing_zeros(&mut mantissa);
                let exp_part = &s[e_pos..];
                s = format!("{mantissa}{exp_part}");
            }
        }
        s
    }
}

/// Remove trailing zeros after the decimal point.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Char, pointer, string rendering
// ---------------------------------------------------------------------------

fn format_char(c: char, spec: &Spec) -> String {
    let pad_total = spec.width.unwrap_or(0).saturating_sub(1);
    let mut out = String::new();
    if !spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out.push(c);
    if spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out
}

fn format_pointer(addr: usize, spec: &Spec) -> String {
    if addr == 0 {
        return pad_text("(nil)", spec);
    }
    let digits = render_digits(addr as u64, 16, false);
    let content = 2 + digits.len(); // "0x" + digits
    let pad_total = spec.width.unwrap_or(0).saturating_sub(content);

    let mut out = String::with_capacity(content + pad_total.min(PAD_LIMIT));
    if !spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out.push_str("0x");
    out.push_str(&digits);
    if spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out
}

/// `%s` with width or precision. Precision truncates the content; width
/// pads it. The content itself is never otherwise bounded.
fn format_str(s: &str, spec: &Spec) -> String {
    let effective = match spec.precision {
        Some(max) if max < s.len() => {
            // Precision counts bytes; land on a character boundary at or
            // below it.
            let mut cut = max;
            while !s.is_char_boundary(cut) {
                cut -= 1;
            }
            &s[..cut]
        }
        _ => s,
    };
    pad_text(effective, spec)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Emit `text` honoring width and justification only.
fn pad_text(text: &str, spec: &Spec) -> String {
    let pad_total = spec
        .width
        .unwrap_or(0)
        .saturating_sub(text.chars().count());
    let mut out = String::with_capacity(text.len() + pad_total.min(PAD_LIMIT));
    if !spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out.push_str(text);
    if spec.flags.left_justify {
        push_pad(&mut out, ' ', pad_total);
    }
    out
}

fn push_pad(out: &mut String, ch: char, count: usize) {
    // Bounded: maximum pad from a width or precision spec.
    for _ in 0..count.min(PAD_LIMIT) {
        out.push(ch);
    }
}
