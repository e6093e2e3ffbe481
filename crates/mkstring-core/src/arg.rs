//! Argument model for one formatting call.
//!
//! A closed sum over the value shapes the engine can substitute. Arguments
//! are borrowed for the duration of a single call and never retained.

/// One caller-supplied formatting argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    /// A string value, substituted by `%s`.
    Str(&'a str),
    /// A null string pointer. Substitutes as the empty string.
    NullStr,
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    /// An address-like value for `%p`.
    Ptr(usize),
}

impl Arg<'_> {
    /// String-typed arguments satisfy `%s`; everything else does not.
    pub fn is_string(&self) -> bool {
        matches!(self, Arg::Str(_) | Arg::NullStr)
    }

    /// The text a string-typed argument substitutes, or `None` for
    /// non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            Arg::NullStr => Some(""),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(s) => Arg::Str(s),
            None => Arg::NullStr,
        }
    }
}

impl From<i64> for Arg<'_> {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<u64> for Arg<'_> {
    fn from(value: u64) -> Self {
        Arg::Uint(value)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, isize);
impl_from_int!(Uint as u64: u8, u16, u32, usize);
