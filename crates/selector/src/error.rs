use crate::token::{Token, TokenKind};
use thiserror::Error;

/// A malformed selector, pointing at the token the parser did not expect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected {} at position {}", describe(.token), .token.position)]
pub struct SyntaxError {
    token: Token,
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::EndOfInput => "end of input".to_string(),
        _ => format!("'{}'", token.text),
    }
}

impl SyntaxError {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }

    pub fn position(&self) -> usize {
        self.token.position
    }
}
