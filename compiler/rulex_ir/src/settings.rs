//! Scanner configuration.

use crate::TokenType;

/// Options controlling how text is scanned.
///
/// One `Settings` value is bound to one lexer for its lifetime. Build it with
/// struct update syntax over the defaults:
///
/// ```ignore
/// let settings = Settings {
///     skip_whitespace: false,
///     tab_size: 8,
///     ..Settings::default()
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "flat option record mirrors the rule-file format"
)]
pub struct Settings {
    /// Extra characters allowed inside words.
    pub word_included: String,
    /// Extra characters (besides letters) that can start a word.
    pub word_starters: String,
    /// Type for single characters nothing else claims. `None` or a blank
    /// name uses the character itself as the type name.
    pub catch_all: Option<TokenType>,
    pub skip_whitespace: bool,
    pub comments_as_tokens: bool,
    pub ignore_case: bool,
    /// Count every character, newlines included, as one column on a single
    /// line.
    pub all_one_line: bool,
    pub allow_negatives: bool,
    pub negative_char: char,
    /// With `skip_whitespace`, emit `\r\n` as a `Newline` token.
    pub newlines_as_tokens: bool,
    pub tab_size: u32,
    /// Decode backslash escapes inside string rules.
    pub parse_escape_sequences: bool,
}

impl Settings {
    /// Check whether `c` may start a word.
    #[inline]
    pub fn is_word_start(&self, c: char) -> bool {
        c == '_' || c.is_alphabetic() || self.word_starters.contains(c)
    }

    /// Check whether `c` may continue a word.
    #[inline]
    pub fn is_word_continue(&self, c: char) -> bool {
        c == '_' || c.is_alphanumeric() || self.word_included.contains(c)
    }

    /// The configured catch-all type. A blank name counts as unset.
    pub fn catch_all_type(&self) -> Option<&TokenType> {
        self.catch_all
            .as_ref()
            .filter(|kind| !kind.as_str().trim().is_empty())
    }

    /// Check whether `c` may start a number.
    #[inline]
    pub fn is_number_start(&self, c: char) -> bool {
        c.is_ascii_digit() || (self.allow_negatives && c == self.negative_char)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            word_included: String::new(),
            word_starters: String::from("_"),
            catch_all: None,
            skip_whitespace: true,
            comments_as_tokens: false,
            ignore_case: false,
            all_one_line: false,
            allow_negatives: false,
            negative_char: '-',
            newlines_as_tokens: false,
            tab_size: 4,
            parse_escape_sequences: true,
        }
    }
}
