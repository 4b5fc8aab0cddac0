//! Token types.

use std::fmt;

/// The type of a token.
///
/// Built-in types cover what the scanner itself produces. Rule-defined types
/// live in `Custom`, so the namespace stays open while matches over the
/// built-in set stay exhaustive.
///
/// Names convert losslessly: [`TokenType::from`] maps a built-in name onto
/// its variant and everything else onto `Custom`, so a rule typed `"String"`
/// behaves as a string rule.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum TokenType {
    /// A single space, when whitespace is not skipped.
    Space,
    /// A single tab, when whitespace is not skipped.
    Tab,
    /// A single `\r`, when whitespace is not skipped.
    CarriageReturn,
    /// A single `\n`, when whitespace is not skipped.
    LineFeed,
    /// `\r\n`, only when newlines are requested as tokens.
    Newline,
    Word,
    String,
    Integer,
    UnsignedInteger,
    Double,
    Float,
    Byte,
    /// Comment running to the end of the line.
    EndOfLineComment,
    /// Comment bounded by a pair of delimiters.
    MultiLineComment,
    EndOfFile,
    /// Last-resort fallback type.
    Default,
    /// Any caller-defined type.
    Custom(String),
}

impl TokenType {
    /// Canonical name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Space => "Space",
            TokenType::Tab => "Tab",
            TokenType::CarriageReturn => "CarriageReturn",
            TokenType::LineFeed => "LineFeed",
            TokenType::Newline => "Newline",
            TokenType::Word => "Word",
            TokenType::String => "String",
            TokenType::Integer => "Integer",
            TokenType::UnsignedInteger => "UnsignedInteger",
            TokenType::Double => "Double",
            TokenType::Float => "Float",
            TokenType::Byte => "Byte",
            TokenType::EndOfLineComment => "EndOfLineComment",
            TokenType::MultiLineComment => "MultiLineComment",
            TokenType::EndOfFile => "EndOfFile",
            TokenType::Default => "_Default",
            TokenType::Custom(name) => name,
        }
    }

    /// Look up a built-in type by its canonical name.
    fn builtin(name: &str) -> Option<TokenType> {
        let kind = match name {
            "Space" => TokenType::Space,
            "Tab" => TokenType::Tab,
            "CarriageReturn" => TokenType::CarriageReturn,
            "LineFeed" => TokenType::LineFeed,
            "Newline" => TokenType::Newline,
            "Word" => TokenType::Word,
            "String" => TokenType::String,
            "Integer" => TokenType::Integer,
            "UnsignedInteger" => TokenType::UnsignedInteger,
            "Double" => TokenType::Double,
            "Float" => TokenType::Float,
            "Byte" => TokenType::Byte,
            "EndOfLineComment" => TokenType::EndOfLineComment,
            "MultiLineComment" => TokenType::MultiLineComment,
            "EndOfFile" => TokenType::EndOfFile,
            "_Default" => TokenType::Default,
            _ => return None,
        };
        Some(kind)
    }

    /// True for the two comment types, which the scanner drops unless asked
    /// to keep them.
    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenType::EndOfLineComment | TokenType::MultiLineComment
        )
    }
}

impl From<&str> for TokenType {
    fn from(name: &str) -> Self {
        TokenType::builtin(name).unwrap_or_else(|| TokenType::Custom(name.to_owned()))
    }
}

impl From<String> for TokenType {
    fn from(name: String) -> Self {
        TokenType::builtin(&name).unwrap_or(TokenType::Custom(name))
    }
}

impl From<char> for TokenType {
    fn from(c: char) -> Self {
        let mut buf = [0; 4];
        TokenType::from(&*c.encode_utf8(&mut buf))
    }
}

impl From<TokenType> for String {
    fn from(kind: TokenType) -> Self {
        match kind {
            TokenType::Custom(name) => name,
            other => other.as_str().to_owned(),
        }
    }
}

impl PartialEq<str> for TokenType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TokenType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
