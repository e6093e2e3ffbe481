//! Conversion-specifier scanner.
//!
//! Locates the first unescaped `%`-introduced conversion specifier in a
//! template snapshot. The scanner is a single left-to-right pass over the
//! bytes of the string; a specifier span is always ASCII, so the reported
//! offsets fall on character boundaries even in UTF-8 templates.

/// Letters that qualify a conversion's argument size without terminating
/// the specifier (`%ld`, `%zu`, ...).
const LENGTH_MODIFIERS: &[u8] = b"hljztL";

/// Location of a conversion specifier within a template snapshot.
///
/// `len` spans the opening `%` through the terminating conversion letter
/// inclusive. Matches are computed fresh on every scan and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecMatch {
    /// Byte offset of the opening `%`.
    pub pos: usize,
    /// Byte length of the specifier.
    pub len: usize,
}

impl SpecMatch {
    /// End of the specifier span, exclusive.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }
}

/// Find the first unescaped conversion specifier in `s`.
///
/// A `%` opens a candidate specifier. `%%` is an escaped literal percent
/// and closes the candidate without a match; a later `%` re-anchors an
/// unterminated candidate. The candidate terminates at the first alphabetic
/// byte that is not a length-modifier letter. A candidate still open at the
/// end of the string is unterminated and yields no match.
///
/// ```
/// use mkstring_core::find_spec;
///
/// let m = find_spec("have %ld items").unwrap();
/// assert_eq!((m.pos, m.len), (5, 3));
/// assert!(find_spec("100%%").is_none());
/// ```
pub fn find_spec(s: &str) -> Option<SpecMatch> {
    let mut open: Option<usize> = None;

    for (i, &b) in s.as_bytes().iter().enumerate() {
        match open {
            Some(start) => {
                if b == b'%' {
                    if start + 1 == i {
                        // Escaped percent; discard the candidate.
                        open = None;
                    } else {
                        // Unterminated candidate; re-anchor here.
                        open = Some(i);
                    }
                } else if b.is_ascii_alphabetic() && !LENGTH_MODIFIERS.contains(&b) {
                    return Some(SpecMatch {
                        pos: start,
                        len: i - start + 1,
                    });
                }
            }
            None => {
                if b == b'%' {
                    open = Some(i);
                }
            }
        }
    }

    None
}
