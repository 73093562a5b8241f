//! SGR escape sequence inspection.

use std::sync::LazyLock;

use regex::Regex;

/// Matches SGR sequences: `ESC[` followed by numeric parameters and `m`.
static SGR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid SGR regex"));

/// Removes every SGR (color/style) sequence from `content`.
///
/// ## Examples
///
/// ```
/// use tincture::escape::strip_sgr;
///
/// assert_eq!(strip_sgr("\x1b[1;31mred\x1b[0m"), "red");
/// assert_eq!(strip_sgr("plain"), "plain");
/// ```
pub fn strip_sgr<T: AsRef<str>>(content: T) -> String {
    SGR_RE.replace_all(content.as_ref(), "").into_owned()
}

/// Whether `content` contains at least one SGR sequence.
pub fn has_sgr<T: AsRef<str>>(content: T) -> bool {
    SGR_RE.is_match(content.as_ref())
}
