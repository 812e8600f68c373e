use std::fmt::{self, Display, Formatter};

use crate::span::Origin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifiers and keywords alike.
    Word,
    /// Operators and delimiters.
    Punctuation,
    String,
    Char,
    Number,
    Boolean,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "WORD",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Box<str>,
    pub origin: Origin,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Box<str>>, origin: Origin) -> Self {
        Self {
            kind,
            text: text.into(),
            origin,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// True for a punctuation token spelled exactly `punct`.
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuation && &*self.text == punct
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.origin.line(), self.kind, self.text)
    }
}

/// Immutable token buffer with a single live cursor.
///
/// `pos` is the next unconsumed token. Everything before `start` has been
/// committed by [`TokenStream::consume_prefix`] and is no longer part of the
/// stream; the cursor never moves backwards.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Box<[Token]>,
    start: usize,
    pos: usize,
}

impl TokenStream {
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens not yet committed, including any the cursor has already
    /// stepped over since the last commit.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.start..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the current token and moves the cursor past it.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Origin of the token before the cursor, falling back to the first
    /// token. `None` only for an empty stream.
    pub fn last_origin(&self) -> Option<&Origin> {
        let idx = self.pos.min(self.tokens.len()).saturating_sub(1);
        self.tokens.get(idx).map(|t| &t.origin)
    }

    /// Drops every token before the cursor from the stream and returns how
    /// many were dropped.
    pub fn consume_prefix(&mut self) -> usize {
        let dropped = self.pos - self.start;
        self.start = self.pos;
        dropped
    }
}

impl From<Box<[Token]>> for TokenStream {
    fn from(tokens: Box<[Token]>) -> Self {
        TokenStream {
            tokens,
            start: 0,
            pos: 0,
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::from(tokens.into_boxed_slice())
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for token in self.remaining() {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}
