//! Character cursor with line/column accounting.
//!
//! All position tracking goes through [`Cursor::advance`], so every consumed
//! character is counted exactly once.

use rulex_ir::{Location, Settings};

/// Cursor over the remaining source text.
///
/// The cursor is `Clone`, and a clone is a full snapshot of scan state.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    /// Unconsumed text.
    rest: &'a str,
    line: u32,
    column: u32,
    tab_size: u32,
    all_one_line: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, settings: &Settings) -> Self {
        Cursor {
            rest: source,
            line: 0,
            column: 0,
            tab_size: settings.tab_size,
            all_one_line: settings.all_one_line,
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest.chars().next()
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// The next `n` characters, or fewer near end of input.
    pub(crate) fn window(&self, n: usize) -> &'a str {
        match self.rest.char_indices().nth(n) {
            Some((end, _)) => &self.rest[..end],
            None => self.rest,
        }
    }

    /// Check whether the upcoming text equals `pattern`.
    pub(crate) fn check_str(&self, pattern: &str, ignore_case: bool) -> bool {
        text_eq(self.window(pattern.chars().count()), pattern, ignore_case)
    }

    /// Consume one character and return it.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.rest = &self.rest[c.len_utf8()..];
        self.count(c);
        Some(c)
    }

    /// Consume up to `n` characters.
    pub(crate) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    fn count(&mut self, c: char) {
        if self.all_one_line {
            self.column += 1;
            return;
        }
        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            '\r' => self.column = 0,
            '\t' => self.column += self.tab_size,
            _ => self.column += 1,
        }
    }
}

/// Compare two strings, optionally ignoring case.
pub(crate) fn text_eq(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    } else {
        a == b
    }
}
