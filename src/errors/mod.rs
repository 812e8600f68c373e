use std::fmt::{self, Display, Formatter};

use colored::Colorize;

use crate::span::Origin;

/// Common shape of every diagnostic the front-end emits: one message tied
/// to one source line.
pub trait Diagnostic {
    /// Verb naming the pipeline stage, e.g. "analyzing".
    fn stage(&self) -> &'static str;
    fn message(&self) -> &str;
    fn origin(&self) -> &Origin;

    /// Renders the diagnostic for a terminal. Only the header is coloured,
    /// and with colouring disabled the output is byte-identical to `Display`.
    fn report(&self) -> String {
        format!(
            "{} {} at line {}:\n{}",
            format!("Error encountered while {}", self.stage())
                .red()
                .bold(),
            self.origin().filename(),
            self.origin().line(),
            self.message()
        )
    }
}

fn write_diagnostic(f: &mut Formatter<'_>, diag: &impl Diagnostic) -> fmt::Result {
    write!(
        f,
        "Error encountered while {} {} at line {}:\n{}",
        diag.stage(),
        diag.origin().filename(),
        diag.origin().line(),
        diag.message()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token of the wrong kind, or the wrong punctuation.
    UnexpectedToken,
    /// The stream ended in the middle of a declaration.
    UnexpectedEof,
    TooManyOpeningBraces,
    TooManyClosingBraces,
}

/// Structural violation found while turning tokens into declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    kind: ErrorKind,
    message: Box<str>,
    origin: Origin,
}

impl SemanticError {
    pub fn new(kind: ErrorKind, message: impl Into<Box<str>>, origin: Origin) -> Self {
        Self {
            kind,
            message: message.into(),
            origin,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Diagnostic for SemanticError {
    fn stage(&self) -> &'static str {
        "analyzing"
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, self)
    }
}

impl std::error::Error for SemanticError {}

/// Source text the tokenizer could not split into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    message: Box<str>,
    origin: Origin,
}

impl LexError {
    pub fn new(message: impl Into<Box<str>>, origin: Origin) -> Self {
        Self {
            message: message.into(),
            origin,
        }
    }
}

impl Diagnostic for LexError {
    fn stage(&self) -> &'static str {
        "tokenizing"
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, self)
    }
}

impl std::error::Error for LexError {}

pub mod builders {
    use super::*;

    pub fn unexpected_token(message: impl Into<Box<str>>, origin: Origin) -> SemanticError {
        SemanticError::new(ErrorKind::UnexpectedToken, message, origin)
    }

    pub fn unexpected_eof(message: impl Into<Box<str>>, origin: Origin) -> SemanticError {
        SemanticError::new(ErrorKind::UnexpectedEof, message, origin)
    }

    pub fn too_many_opening_braces(origin: Origin) -> SemanticError {
        SemanticError::new(
            ErrorKind::TooManyOpeningBraces,
            "There are too many opening braces.",
            origin,
        )
    }

    pub fn too_many_closing_braces(origin: Origin) -> SemanticError {
        SemanticError::new(
            ErrorKind::TooManyClosingBraces,
            "There are too many closing braces.",
            origin,
        )
    }
}
