//! Declaration analyzer
//!
//! Walks a [`TokenStream`] front to back and turns every top-level unit into
//! a struct or function declaration:
//! - `structs`: `struct <name> { <type> <name>; ... }`
//! - `functions`: `<rtype> <name>(<type> <name>, ...) { ... }` plus the
//!   nested block skeleton of the body (`block`)
//!
//! The first structural violation aborts the run with a [`SemanticError`];
//! no partial [`TranslationUnit`] is ever returned.

mod block;
mod functions;
mod structs;

use crate::{
    ast::TranslationUnit,
    elogln,
    errors::{SemanticError, builders},
    lexer::token::{Token, TokenStream},
    span::Origin,
};

type Result<T> = std::result::Result<T, SemanticError>;

pub struct Analyzer<'a> {
    stream: &'a mut TokenStream,
}

impl<'a> Analyzer<'a> {
    pub fn new(stream: &'a mut TokenStream) -> Self {
        Self { stream }
    }

    pub fn analyze(&mut self) -> Result<TranslationUnit> {
        let mut unit = TranslationUnit::default();

        while let Some(token) = self.stream.current() {
            if token.is_punct("}") {
                return Err(builders::too_many_closing_braces(token.origin.clone()));
            }

            if token.is_word() && &*token.text == "struct" {
                let origin = token.origin.clone();
                self.stream.advance();
                let decl = self.parse_struct(origin)?;
                elogln!(
                    "parsed struct {} ({} members)",
                    decl.name,
                    decl.members.len()
                );
                unit.structs.add_last(decl);
            } else {
                let func = self.parse_function()?;
                elogln!(
                    "parsed function {} ({} parameters, {} blocks deep)",
                    func.name,
                    func.parameters.len(),
                    func.body.block_depth(func.body.root())
                );
                unit.functions.add_last(func);
            }

            self.stream.consume_prefix();
        }

        Ok(unit)
    }

    /// Origin for errors raised once the stream has run dry.
    fn eof_origin(&self) -> Origin {
        self.stream
            .last_origin()
            .cloned()
            .unwrap_or_else(|| Origin::new("<input>", 0))
    }

    /// Consumes the current token if `accept` holds for it.
    ///
    /// `message` describes the violated rule when the token is wrong;
    /// `eof_message` is used when there is no token at all.
    fn expect(
        &mut self,
        accept: impl FnOnce(&Token) -> bool,
        message: &str,
        eof_message: &str,
    ) -> Result<Token> {
        let Some(token) = self.stream.current() else {
            return Err(builders::unexpected_eof(eof_message, self.eof_origin()));
        };

        if !accept(token) {
            return Err(builders::unexpected_token(message, token.origin.clone()));
        }

        let token = token.clone();
        self.stream.advance();
        Ok(token)
    }

    fn expect_word(&mut self, message: &str, eof_message: &str) -> Result<Box<str>> {
        self.expect(Token::is_word, message, eof_message)
            .map(|token| token.text)
    }

    fn expect_punct(&mut self, punct: &str, message: &str, eof_message: &str) -> Result<()> {
        self.expect(|t| t.is_punct(punct), message, eof_message)
            .map(|_| ())
    }
}

/// Analyzes every declaration in `tokens`, leaving the cursor exhausted on
/// success.
pub fn analyze(tokens: &mut TokenStream) -> Result<TranslationUnit> {
    Analyzer::new(tokens).analyze()
}
