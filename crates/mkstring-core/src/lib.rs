//! # mkstring-core
//!
//! Safe printf-style string formatting.
//!
//! Substitutes `%`-style conversion specifiers in a template with a caller
//! supplied sequence of typed arguments, pairing them strictly left to
//! right. The call never panics: a specifier with no argument, or one whose
//! type disagrees with its argument, degrades to the literal token `"ERR"`
//! in the output. A null string argument substitutes as the empty string.
//! `%%` is always a literal percent and consumes no argument.
//!
//! ```
//! use mkstring_core::make_string;
//!
//! assert_eq!(make_string!("%s picks up %d arrows.", "The orc", 27),
//!            "The orc picks up 27 arrows.");
//! assert_eq!(make_string!("%d %d", 1), "1 ERR");
//! assert_eq!(make_string!("100%%"), "100%");
//! ```

#![deny(unsafe_code)]

pub mod arg;
pub mod engine;
pub mod render;
pub mod scan;

pub use arg::Arg;
pub use engine::{ERROR_TOKEN, make_string};
pub use scan::{SpecMatch, find_spec};
