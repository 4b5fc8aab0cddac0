//! Backslash escape decoding for string rules.
//!
//! Escapes: `\n` `\t` `\r` `\a` `\b` `\v` `\f` `\"` `\'` `\0` `\\`.
//! Anything else after a backslash is kept as written, backslash included.

/// Resolve the character following a backslash.
///
/// Returns `None` for characters outside the escape table.
#[inline]
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'v' => Some('\u{0B}'),
        'f' => Some('\u{0C}'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Append the decoding of `\<c>` to `out`.
#[inline]
pub(crate) fn push_escape(c: char, out: &mut String) {
    if let Some(resolved) = resolve_escape(c) {
        out.push(resolved);
    } else {
        out.push('\\');
        out.push(c);
    }
}
