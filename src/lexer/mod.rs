pub mod token;

use std::path::Path;

use crate::{
    errors::LexError,
    lexer::token::{Token, TokenKind, TokenStream},
    span::Origin,
};
use lazy_static::lazy_static;
use regex::Regex;

type TokenHandler = Box<dyn Fn(&str, &Origin) -> Result<Option<Token>, LexError> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Lexer {
    file_content: String,
    file_len: usize,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(file: String) -> Self {
        Self {
            file_len: file.len(),
            file_content: file,
            pos: 0,
            line: 1,
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.file_len
    }

    fn advance(&mut self, len: usize) {
        let advanced_text = &self.file_content[self.pos..self.pos + len];
        self.line += advanced_text.matches('\n').count();
        self.pos += len;
    }

    fn remaining_input(&self) -> &str {
        &self.file_content[self.pos..]
    }

    pub fn tokenize(&mut self, file_path: &Path) -> Result<TokenStream, LexError> {
        let file = Origin::from_path(file_path, 1);
        let mut tokens: Vec<Token> = vec![];

        while !self.at_eof() {
            let remaining = self.remaining_input();
            let origin = file.at_line(self.line);
            let mut match_len = None;

            for handler in REGEXES.iter() {
                if let Some(mat) = handler.regex.find(remaining) {
                    if let Some(token) = (handler.handler)(mat.as_str(), &origin)? {
                        tokens.push(token);
                    }
                    match_len = Some(mat.len());
                    break;
                }
            }

            let Some(match_len) = match_len else {
                let next_char = remaining.chars().next().unwrap_or('\0');
                return Err(LexError::new(
                    format!("Unexpected character '{next_char}'"),
                    origin,
                ));
            };

            self.advance(match_len);
        }

        Ok(TokenStream::from(tokens))
    }
}

pub fn tokenize(file: String, path: &Path) -> Result<TokenStream, LexError> {
    let mut lexer = Lexer::new(file);
    lexer.tokenize(path)
}

fn default_handler(kind: TokenKind) -> TokenHandler {
    Box::new(move |val: &str, origin: &Origin| Ok(Some(Token::new(kind, val, origin.clone()))))
}

fn skip_handler() -> TokenHandler {
    Box::new(|_: &str, _: &Origin| Ok(None))
}

/// Strips the surrounding quote characters; escapes stay verbatim.
fn quoted_handler(kind: TokenKind) -> TokenHandler {
    Box::new(move |val: &str, origin: &Origin| {
        let inner = &val[1..val.len() - 1];
        Ok(Some(Token::new(kind, inner, origin.clone())))
    })
}

fn word_handler() -> TokenHandler {
    Box::new(|val: &str, origin: &Origin| {
        let kind = match val {
            "true" | "false" => TokenKind::Boolean,
            _ => TokenKind::Word,
        };
        Ok(Some(Token::new(kind, val, origin.clone())))
    })
}

fn error_handler(message: &'static str) -> TokenHandler {
    Box::new(move |_: &str, origin: &Origin| Err(LexError::new(message, origin.clone())))
}

struct RegexHandler {
    regex: Regex,
    handler: TokenHandler,
}

impl RegexHandler {
    fn new(regex: Regex, handler: TokenHandler) -> Self {
        Self { regex, handler }
    }
}

macro_rules! regex_handler {
    ($pattern:expr, $handler:expr) => {
        RegexHandler::new(Regex::new($pattern).unwrap(), $handler)
    };

    ($pattern:expr, def $kind:expr) => {
        RegexHandler::new(Regex::new($pattern).unwrap(), default_handler($kind))
    };
}

use TokenKind as T;
lazy_static! {
    static ref REGEXES: Vec<RegexHandler> = vec![
        // Skip
        regex_handler!(r"^\s+", skip_handler()),
        regex_handler!(r"^//[^\n]*", skip_handler()),
        regex_handler!(r"^/\*(?s:.*?)\*/", skip_handler()),
        regex_handler!(r"^/\*", error_handler("Unterminated block comment")),
        // Lit & Word
        regex_handler!(r#"^"(?:\\.|[^"\\])*""#, quoted_handler(T::String)),
        regex_handler!(r#"^""#, error_handler("Unterminated string literal")),
        regex_handler!(r"^'(?:\\.|[^'\\])'", quoted_handler(T::Char)),
        regex_handler!(r"^'", error_handler("Malformed character literal")),
        regex_handler!(r"^[0-9]+(\.[0-9]+)?", def T::Number),
        regex_handler!(r"^[a-zA-Z_][a-zA-Z0-9_]*", word_handler()),
        // Multi-char
        regex_handler!(
            r"^(>>>|<<|>>|<=|>=|==|!=|&&|\|\||\^\^|->|\+\+|--|\+=|-=|\*=|/=|%=)",
            def T::Punctuation
        ),
        // Single-char
        regex_handler!(r"^[{}()\[\];,.:?+\-*/%&|^~!<>=#@$]", def T::Punctuation),
    ];
}
