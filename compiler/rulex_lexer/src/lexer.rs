//! Scanning engine.
//!
//! [`Lexer`] holds the sorted rule table and settings; [`Lexer::scan`] hands
//! out a [`Tokens`] iterator that owns all mutable scan state. Each scan
//! therefore starts from a clean cursor, and the lexer itself is never
//! mutated while scanning.
//!
//! # Dispatch
//!
//! At each step the scanner tries, in order: NUL skipping, whitespace
//! handling, word scanning, rule matching (longest first), number scanning,
//! and finally a single-character catch-all token. End of input yields one
//! `EndOfFile` token and the iterator is done.

use std::cmp::Reverse;
use std::iter::FusedIterator;

use rulex_ir::{Location, Rule, Settings, Token, TokenType};
use tracing::{debug, trace};

use crate::cursor::{text_eq, Cursor};
use crate::escape::push_escape;

/// Lexeme carried by the terminal token of a scan.
const EOF_LEXEME: &str = "EndOfFile";

/// Rule-driven lexer.
///
/// Rules are kept sorted by descending match length so that `==` is tried
/// before `=`. The sort is stable: equal-length rules keep the caller's
/// order.
#[derive(Clone, Debug)]
pub struct Lexer {
    rules: Vec<Rule>,
    settings: Settings,
}

impl Lexer {
    /// Create a lexer from a rule set and settings.
    pub fn new(rules: impl IntoIterator<Item = Rule>, settings: Settings) -> Self {
        let mut rules: Vec<Rule> = rules.into_iter().collect();
        rules.sort_by_key(|rule| Reverse(rule.len()));
        debug!(
            rules = rules.len(),
            skip_whitespace = settings.skip_whitespace,
            comments_as_tokens = settings.comments_as_tokens,
            "lexer created"
        );
        Lexer { rules, settings }
    }

    /// Create a lexer with default settings.
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Lexer::new(rules, Settings::default())
    }

    /// Rules in match order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Settings this lexer scans with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lazily scan `text`.
    ///
    /// The returned iterator always ends with a single `EndOfFile` token.
    pub fn scan<'l, 's>(&'l self, text: &'s str) -> Tokens<'l, 's> {
        Tokens {
            lexer: self,
            cursor: Cursor::new(text, &self.settings),
            done: false,
        }
    }

    /// Scan `text` and collect every token, `EndOfFile` included.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.scan(text).collect()
    }

    /// Whether a rule compares case-insensitively under these settings.
    #[inline]
    fn ignores_case(&self, rule: &Rule) -> bool {
        self.settings.ignore_case || rule.is_ignore_case()
    }

    /// First rule whose pattern matches the upcoming text.
    ///
    /// Rules with an empty pattern never match; they would produce tokens
    /// without consuming input.
    fn match_at(&self, cursor: &Cursor<'_>) -> Option<&Rule> {
        self.rules.iter().find(|rule| {
            let pattern = rule.pattern();
            !pattern.is_empty() && cursor.check_str(pattern, self.ignores_case(rule))
        })
    }

    /// First rule whose pattern equals a whole scanned word.
    fn match_word(&self, word: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| {
            let pattern = rule.pattern();
            !pattern.is_empty() && text_eq(word, pattern, self.ignores_case(rule))
        })
    }
}

/// Lazy token stream over one piece of text.
///
/// Created by [`Lexer::scan`].
#[derive(Clone, Debug)]
pub struct Tokens<'l, 's> {
    lexer: &'l Lexer,
    cursor: Cursor<'s>,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        loop {
            let token = self.next_token();
            if token.is(&TokenType::EndOfFile) {
                self.done = true;
            } else if token.kind.is_comment() && !self.lexer.settings.comments_as_tokens {
                trace!(kind = %token.kind, start = %token.start, "comment dropped");
                continue;
            }
            trace!(kind = %token.kind, lexeme = ?token.lexeme, start = %token.start, "token");
            return Some(token);
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

impl<'l> Tokens<'l, '_> {
    /// Current caret position.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    fn next_token(&mut self) -> Token {
        let lexer: &'l Lexer = self.lexer;
        let settings = &lexer.settings;

        while let Some(c) = self.cursor.current() {
            let start = self.cursor.location();

            if c == '\0' {
                self.cursor.advance();
                continue;
            }

            if c.is_whitespace() {
                if settings.skip_whitespace {
                    if !settings.newlines_as_tokens {
                        self.cursor.advance();
                        continue;
                    }
                    if self.cursor.window(2) == "\r\n" {
                        self.cursor.advance_n(2);
                        return self.make(TokenType::Newline, "\r\n", start);
                    }
                    // Any other whitespace falls through to the rules.
                } else if let Some(kind) = whitespace_kind(c) {
                    self.cursor.advance();
                    return self.make(kind, c, start);
                }
            }

            if settings.is_word_start(c) {
                return self.word(start);
            }

            if let Some(rule) = lexer.match_at(&self.cursor) {
                self.cursor.advance_n(rule.pattern().chars().count());
                return self.apply_rule(rule, start);
            }

            if settings.is_number_start(c) {
                return self.number(start);
            }

            // The catch-all token is zero-width: it ends where it starts.
            let kind = settings
                .catch_all_type()
                .cloned()
                .unwrap_or_else(|| TokenType::from(c));
            let token = Token::new(kind, c, start, start);
            self.cursor.advance();
            return token;
        }

        let here = self.cursor.location();
        Token::new(TokenType::EndOfFile, EOF_LEXEME, here, here)
    }

    /// Build a token ending at the current position.
    #[inline]
    fn make(&self, kind: TokenType, lexeme: impl Into<String>, start: Location) -> Token {
        Token::new(kind, lexeme, start, self.cursor.location())
    }

    /// Produce the token for a rule whose pattern has just been consumed.
    fn apply_rule(&mut self, rule: &Rule, start: Location) -> Token {
        match rule.kind() {
            TokenType::EndOfLineComment => self.line_comment(start),
            TokenType::MultiLineComment => self.enclosed(rule, start),
            TokenType::String if rule.is_enclosed() => self.string(rule, start),
            _ if rule.is_enclosed() => self.enclosed(rule, start),
            kind => self.make(kind.clone(), rule.replacement(), start),
        }
    }

    // ─── Words ──────────────────────────────────────────────────────────

    /// Scan a word, then give the rules a chance to claim it whole.
    fn word(&mut self, start: Location) -> Token {
        let lexer: &'l Lexer = self.lexer;
        let settings = &lexer.settings;
        let mut text = String::new();

        // The starter may be a character that cannot continue a word.
        if let Some(first) = self.cursor.advance() {
            text.push(first);
        }
        while let Some(c) = self.cursor.current() {
            if c == '\0' {
                self.cursor.advance();
                continue;
            }
            if !settings.is_word_continue(c) {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }

        if let Some(rule) = lexer.match_word(&text) {
            return self.apply_rule(rule, start);
        }
        self.make(TokenType::Word, text, start)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self, start: Location) -> Token {
        let settings = &self.lexer.settings;
        let mut digits = String::new();
        let mut had_decimal = false;
        let mut suffix = None;

        while let Some(c) = self.cursor.current() {
            match c {
                '0'..='9' => {}
                '.' if !had_decimal => had_decimal = true,
                'f' | 'd' if had_decimal => {
                    suffix = Some(c);
                    self.cursor.advance();
                    break;
                }
                'u' | 'b' if !had_decimal => {
                    suffix = Some(c);
                    self.cursor.advance();
                    break;
                }
                _ if settings.allow_negatives
                    && c == settings.negative_char
                    && digits.is_empty() => {}
                _ => break,
            }
            digits.push(c);
            self.cursor.advance();
        }

        self.make(classify_number(had_decimal, suffix), digits, start)
    }

    // ─── Delimited content ──────────────────────────────────────────────

    /// Read to the end of the line, leaving the line break in place.
    fn line_comment(&mut self, start: Location) -> Token {
        let mut text = String::new();
        while let Some(c) = self.cursor.current() {
            if c == '\r' || c == '\n' {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }
        self.make(TokenType::EndOfLineComment, text, start)
    }

    /// Copy verbatim up to the rule's closing delimiter.
    fn enclosed(&mut self, rule: &Rule, start: Location) -> Token {
        let close = rule.enclosing_right();
        let mut body = String::new();

        while let Some(c) = self.cursor.current() {
            if self.cursor.check_str(close, false) {
                break;
            }
            body.push(c);
            self.cursor.advance();
        }
        self.finish_enclosed(close);

        self.make(rule.kind().clone(), body, start)
    }

    /// Like [`enclosed`](Self::enclosed), decoding escapes on the way.
    ///
    /// An escaped character never closes the string.
    fn string(&mut self, rule: &Rule, start: Location) -> Token {
        let parse_escapes = self.lexer.settings.parse_escape_sequences;
        let close = rule.enclosing_right();
        let mut body = String::new();
        let mut escaped = false;

        while let Some(c) = self.cursor.current() {
            if !escaped && self.cursor.check_str(close, false) {
                break;
            }
            self.cursor.advance();
            if escaped {
                push_escape(c, &mut body);
                escaped = false;
            } else if c == '\\' && parse_escapes {
                escaped = true;
            } else {
                body.push(c);
            }
        }
        self.finish_enclosed(close);

        self.make(TokenType::String, body, start)
    }

    /// Consume the closing delimiter if the body ended on one.
    ///
    /// Reaching end of input first leaves the token truncated, without error.
    fn finish_enclosed(&mut self, close: &str) {
        if !self.cursor.is_eof() {
            self.cursor.advance_n(close.chars().count());
        }
    }
}

/// Token type for a whitespace character scanned verbatim.
fn whitespace_kind(c: char) -> Option<TokenType> {
    match c {
        ' ' => Some(TokenType::Space),
        '\t' => Some(TokenType::Tab),
        '\r' => Some(TokenType::CarriageReturn),
        '\n' => Some(TokenType::LineFeed),
        _ => None,
    }
}

/// Numeric type from the decimal point and an optional suffix.
fn classify_number(had_decimal: bool, suffix: Option<char>) -> TokenType {
    match (had_decimal, suffix) {
        (true, Some('f')) => TokenType::Float,
        (true, _) => TokenType::Double,
        (false, Some('u')) => TokenType::UnsignedInteger,
        (false, Some('b')) => TokenType::Byte,
        (false, _) => TokenType::Integer,
    }
}
