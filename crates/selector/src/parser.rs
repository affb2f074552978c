//! A state-machine parser for the selector grammar.
//!
//! ```text
//! selector        := identifier-path (',' identifier-path)*
//! identifier-path := segment ('/' segment)* group?
//! group           := '(' selector ')'
//! segment         := IDENTIFIER
//! ```
//!
//! Whitespace tokens are skipped between productions. Groups are distributed
//! over the path in front of them, so `foo(bar(baz),qux)` yields `foo/bar/baz`
//! and `foo/qux`.
use crate::error::SyntaxError;
use crate::field::Field;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Input and output of a single parse.
///
/// On failure `error` is set and `fields` must be discarded.
#[derive(Debug)]
pub struct ParseContext<'a> {
    pub source: &'a str,
    pub fields: Vec<Field>,
    pub error: Option<SyntaxError>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            fields: Vec::new(),
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// An identifier must come next. `accept_end` is only set at the very start.
    Identifier { accept_end: bool },
    /// A path segment was consumed.
    AfterIdentifier,
    /// The current token is the first of a run of `)`.
    CloseGroup,
    Done,
}

/// Consumes tokens and fills a [`ParseContext`].
pub struct Parser<'a, 'c> {
    context: &'c mut ParseContext<'a>,
    tokenizer: Tokenizer<'a>,
    prefixes: Vec<String>,
    depth: usize,
    current: Token,
    previous: TokenKind,
}

impl<'a, 'c> Parser<'a, 'c> {
    pub fn new(context: &'c mut ParseContext<'a>) -> Self {
        let tokenizer = Tokenizer::new(context.source);
        Self {
            context,
            tokenizer,
            prefixes: Vec::new(),
            depth: 0,
            current: Token::end_of_input(0),
            previous: TokenKind::EndOfInput,
        }
    }

    /// Parses the whole source. Malformed input sets `context.error`; it never panics.
    pub fn parse(mut self) {
        if let Err(error) = self.run() {
            log::debug!("Selector {:?} rejected: {}", self.context.source, error);
            self.context.error = Some(error);
        }
    }

    fn run(&mut self) -> Result<(), SyntaxError> {
        self.advance();
        let mut state = State::Identifier { accept_end: true };
        loop {
            state = match state {
                State::Identifier { accept_end } => self.identifier(accept_end)?,
                State::AfterIdentifier => self.after_identifier()?,
                State::CloseGroup => self.close_group()?,
                State::Done => return Ok(()),
            };
        }
    }

    fn identifier(&mut self, accept_end: bool) -> Result<State, SyntaxError> {
        match self.current.kind {
            TokenKind::EndOfInput if accept_end && self.depth == 0 => Ok(State::Done),
            TokenKind::Identifier => {
                let prefix = if self.prefixes.is_empty() {
                    self.current.text.clone()
                } else {
                    // Inside a group a sibling inherits the group's prefix;
                    // after a slash the path itself is extended.
                    let base = if self.depth > 0 && self.previous != TokenKind::ForwardSlash {
                        self.prefixes.last().cloned()
                    } else {
                        self.prefixes.pop()
                    };
                    format!("{}/{}", base.unwrap_or_default(), self.current.text)
                };
                self.prefixes.push(prefix);
                self.advance();
                Ok(State::AfterIdentifier)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn after_identifier(&mut self) -> Result<State, SyntaxError> {
        match self.current.kind {
            TokenKind::ForwardSlash => {
                self.advance();
                Ok(State::Identifier { accept_end: false })
            }
            TokenKind::LeftParen => {
                self.depth += 1;
                self.advance();
                Ok(State::Identifier { accept_end: false })
            }
            TokenKind::RightParen => Ok(State::CloseGroup),
            TokenKind::Comma => {
                self.emit();
                self.advance();
                Ok(State::Identifier { accept_end: false })
            }
            TokenKind::EndOfInput if self.depth == 0 => {
                self.emit();
                Ok(State::Done)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn close_group(&mut self) -> Result<State, SyntaxError> {
        loop {
            // Only the innermost `)` closes a freshly written path; the rest
            // just drop the prefixes their groups inherited.
            if self.previous == TokenKind::Identifier {
                self.emit();
            } else {
                self.prefixes.pop();
            }
            if self.depth == 0 {
                return Err(self.unexpected());
            }
            self.depth -= 1;
            self.advance();
            if self.current.kind != TokenKind::RightParen {
                break;
            }
        }

        match self.current.kind {
            TokenKind::EndOfInput if self.depth == 0 => Ok(State::Done),
            TokenKind::Comma => {
                self.prefixes.pop();
                self.advance();
                Ok(State::Identifier { accept_end: false })
            }
            _ => Err(self.unexpected()),
        }
    }

    fn emit(&mut self) {
        if let Some(path) = self.prefixes.pop() {
            self.context.fields.push(Field::new(&path));
        }
    }

    fn unexpected(&self) -> SyntaxError {
        SyntaxError::new(self.current.clone())
    }

    /// Moves to the next non-whitespace token.
    fn advance(&mut self) {
        let next = loop {
            let token = self.tokenizer.next_token();
            if token.kind != TokenKind::WhiteSpace {
                break token;
            }
        };
        self.previous = std::mem::replace(&mut self.current, next).kind;
    }
}
