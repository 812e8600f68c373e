use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    analyzer::{Analyzer, Result},
    ast::{StatementKind, StatementTree, StmtId},
    errors::builders,
    lexer::token::{Token, TokenKind},
};

/// Statement-building state for one function body.
struct BlockBuilder<'t> {
    tree: &'t mut StatementTree,
    current: StmtId,
    depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockStep {
    Continue,
    /// The body's closing brace was consumed.
    Done,
}

type BlockHandler = fn(&mut BlockBuilder<'_>, &Token) -> BlockStep;
type BlockLookup = HashMap<&'static str, BlockHandler>;

lazy_static! {
    /// Punctuation that shapes the body skeleton. Tokens without an entry are
    /// stepped over; statement and expression population hooks in here.
    static ref BLOCK_LU: BlockLookup = {
        let mut lu: BlockLookup = HashMap::new();
        lu.insert("{", open_block);
        lu.insert("}", close_block);
        lu
    };
}

fn open_block(builder: &mut BlockBuilder<'_>, _: &Token) -> BlockStep {
    builder.current = builder
        .tree
        .push(StatementKind::Block, "", Some(builder.current));
    builder.depth += 1;
    BlockStep::Continue
}

fn close_block(builder: &mut BlockBuilder<'_>, _: &Token) -> BlockStep {
    if builder.depth == 0 {
        return BlockStep::Done;
    }
    builder.depth -= 1;
    if let Some(parent) = builder.tree.parent(builder.current) {
        builder.current = parent;
    }
    BlockStep::Continue
}

impl Analyzer<'_> {
    /// Builds the block skeleton of a function body under `tree`'s root. The
    /// body's opening brace has already been consumed; on success the cursor
    /// sits one past the matching closing brace.
    pub(super) fn parse_block(&mut self, tree: &mut StatementTree) -> Result<()> {
        let current = tree.root();
        let mut builder = BlockBuilder {
            tree,
            current,
            depth: 0,
        };

        loop {
            let Some(token) = self.stream.advance() else {
                return Err(builders::too_many_opening_braces(self.eof_origin()));
            };

            if token.kind != TokenKind::Punctuation {
                continue;
            }

            if let Some(handler) = BLOCK_LU.get(&*token.text)
                && handler(&mut builder, token) == BlockStep::Done
            {
                return Ok(());
            }
        }
    }
}
