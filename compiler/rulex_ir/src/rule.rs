//! Declarative match rules.

use crate::TokenType;

/// A rule mapping literal or delimited input text to a token type.
///
/// A plain rule matches `match_text` and produces a token whose lexeme is
/// the rule's replacement (the match text unless overridden). An enclosed
/// rule matches its left delimiter and the scanner then reads up to the
/// right delimiter.
///
/// ```ignore
/// let rules = vec![
///     Rule::new("Let", "let"),
///     Rule::new("Eq", "==").with_replacement("equals"),
///     Rule::enclosed(TokenType::String, "\"", ""),
///     Rule::enclosed(TokenType::MultiLineComment, "/*", "*/"),
/// ];
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RuleDef", into = "RuleDef")
)]
pub struct Rule {
    kind: TokenType,
    match_text: String,
    replacement: String,
    enclosing_left: String,
    enclosing_right: String,
    ignore_case: bool,
}

impl Rule {
    /// A plain literal rule.
    pub fn new(kind: impl Into<TokenType>, match_text: impl Into<String>) -> Self {
        let match_text = match_text.into();
        Rule {
            kind: kind.into(),
            replacement: match_text.clone(),
            match_text,
            enclosing_left: String::new(),
            enclosing_right: String::new(),
            ignore_case: false,
        }
    }

    /// A delimited rule. An empty `right` means the rule is symmetric.
    ///
    /// The match text is the left delimiter, so the rule sorts by the length
    /// of what it actually compares against.
    pub fn enclosed(
        kind: impl Into<TokenType>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        let left = left.into();
        Rule::new(kind, left.clone()).enclosed_by(left, right)
    }

    /// Set the lexeme emitted for plain matches.
    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    /// Attach delimiters. An empty `right` defaults to `left`.
    #[must_use]
    pub fn enclosed_by(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.enclosing_left = left.into();
        self.enclosing_right = right.into();
        if !self.enclosing_left.is_empty() && self.enclosing_right.is_empty() {
            self.enclosing_right.clone_from(&self.enclosing_left);
        }
        self
    }

    /// Compare this rule case-insensitively regardless of settings.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    #[inline]
    pub fn kind(&self) -> &TokenType {
        &self.kind
    }

    #[inline]
    pub fn match_text(&self) -> &str {
        &self.match_text
    }

    #[inline]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    #[inline]
    pub fn enclosing_left(&self) -> &str {
        &self.enclosing_left
    }

    #[inline]
    pub fn enclosing_right(&self) -> &str {
        &self.enclosing_right
    }

    #[inline]
    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Length of the match text in characters. Rules sort by this.
    pub fn len(&self) -> usize {
        self.match_text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.match_text.is_empty()
    }

    /// Both delimiters are present.
    #[inline]
    pub fn is_enclosed(&self) -> bool {
        !self.enclosing_left.is_empty() && !self.enclosing_right.is_empty()
    }

    /// The text compared against input: the left delimiter for enclosed
    /// rules, the match text otherwise.
    #[inline]
    pub fn pattern(&self) -> &str {
        if self.is_enclosed() {
            &self.enclosing_left
        } else {
            &self.match_text
        }
    }
}

/// Rule-file representation of a [`Rule`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RuleDef {
    kind: TokenType,
    #[serde(default)]
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replacement: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    left: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    right: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    ignore_case: bool,
}

#[cfg(feature = "serde")]
impl From<RuleDef> for Rule {
    fn from(def: RuleDef) -> Self {
        let mut rule = Rule::new(def.kind, def.text).enclosed_by(def.left, def.right);
        if let Some(replacement) = def.replacement {
            rule = rule.with_replacement(replacement);
        }
        rule.ignore_case = def.ignore_case;
        rule
    }
}

#[cfg(feature = "serde")]
impl From<Rule> for RuleDef {
    fn from(rule: Rule) -> Self {
        let replacement = (rule.replacement != rule.match_text).then_some(rule.replacement);
        RuleDef {
            kind: rule.kind,
            text: rule.match_text,
            replacement,
            left: rule.enclosing_left,
            right: rule.enclosing_right,
            ignore_case: rule.ignore_case,
        }
    }
}
