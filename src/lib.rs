//! Structural front-end for a small C-like language.
//!
//! ```text
//! Source → Lexer → TokenStream → Analyzer → TranslationUnit
//! ```
//!
//! The analyzer builds declarations (structs, functions and their
//! parameter lists) and the nested block skeleton of every function body.

pub mod analyzer;
pub mod ast;
pub mod collections;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod span;

use std::{cell::RefCell, path::Path};

use anyhow::Result;

use crate::ast::TranslationUnit;

thread_local! {
    pub static ENABLE_PRINTING: RefCell<bool> = const { RefCell::new(false) };
}

pub fn set_verbose(enabled: bool) {
    ENABLE_PRINTING.with(|e| *e.borrow_mut() = enabled);
}

/// Tokenizes and analyzes one in-memory source file.
pub fn analyze_source(source: &str, path: &Path) -> Result<TranslationUnit> {
    let mut tokens = lexer::tokenize(source.to_string(), path)?;
    let unit = analyzer::analyze(&mut tokens)?;
    Ok(unit)
}
