//! A pull-based tokenizer for selector strings.
use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_identifier_char(c: char) -> bool {
    TokenKind::delimiter(c).is_none() && !is_whitespace(c)
}

/// Splits a selector into [`Token`]s one at a time.
///
/// The tokenizer never re-examines consumed characters. Once the source is
/// exhausted, [`next_token`](Tokenizer::next_token) keeps returning
/// [`TokenKind::EndOfInput`].
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            position: 0,
        }
    }

    /// Character offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        let start = self.position;

        let Some(&current) = self.chars.peek() else {
            return Token::end_of_input(start);
        };

        if let Some(kind) = TokenKind::delimiter(current) {
            self.take();
            return Token::new(current, kind, start);
        }

        if is_whitespace(current) {
            let text = self.take_while(is_whitespace);
            return Token::new(text, TokenKind::WhiteSpace, start);
        }

        let text = self.take_while(is_identifier_char);
        Token::new(text, TokenKind::Identifier, start)
    }

    fn take(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += 1;
        Some(c)
    }

    fn take_while(&mut self, predicate: fn(char) -> bool) -> String {
        let mut buffer = String::new();
        while let Some(&c) = self.chars.peek() {
            if !predicate(c) {
                break;
            }
            buffer.push(c);
            self.take();
        }
        buffer
    }
}

/// Yields every token up to, but not including, the end of input.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}
