//! Lexical tokens of the selector language.
use std::fmt;

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A contiguous run of characters that are neither delimiters nor whitespace.
    /// `foo/bar` holds two identifiers, `foo` and `bar`.
    Identifier,
    /// `/`
    ForwardSlash,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// A run of spaces, tabs, carriage returns or line feeds.
    WhiteSpace,
    /// The source is exhausted.
    EndOfInput,
}

impl TokenKind {
    /// Maps a single-character delimiter to its kind.
    pub fn delimiter(c: char) -> Option<TokenKind> {
        match c {
            '/' => Some(TokenKind::ForwardSlash),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::ForwardSlash => "forward slash",
            TokenKind::LeftParen => "left parenthesis",
            TokenKind::RightParen => "right parenthesis",
            TokenKind::Comma => "comma",
            TokenKind::WhiteSpace => "whitespace",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A token produced by the [`Tokenizer`](crate::Tokenizer).
///
/// `position` is the character offset in the source at which the token starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, position: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            position,
        }
    }

    pub fn end_of_input(position: usize) -> Self {
        Self::new(String::new(), TokenKind::EndOfInput, position)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
