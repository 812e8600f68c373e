pub mod display;
pub mod visit;

use std::fmt::{self, Display, Formatter};

use crate::{collections::List, span::Origin};

/// Everything declared in one source file, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationUnit {
    pub structs: List<StructDeclaration>,
    pub functions: List<FunctionDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclaration {
    pub name: Box<str>,
    pub members: List<StructMember>,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember {
    pub ty: Box<str>,
    pub name: Box<str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub return_type: Box<str>,
    pub name: Box<str>,
    pub parameters: List<Parameter>,
    pub body: StatementTree,
    pub origin: Origin,
}

impl FunctionDeclaration {
    pub fn root(&self) -> &Statement {
        self.body.get(self.body.root())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: Box<str>,
    pub name: Box<str>,
    /// TYPE node in the function's [`StatementTree`] owning a single NAME child.
    pub node: StmtId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StmtId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Exp,
    BitAnd,
    BoolAnd,
    BitOr,
    BoolOr,
    BitXor,
    BoolXor,
    BitNot,
    BoolNot,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
    NotEqual,
    ShiftLeft,
    ShiftRight,
    BitShiftRight,
    Assign,
    Init,
    Member,
    GetRef,
    Deref,
    Index,
    Return,
    Break,
    Continue,
    FuncCall,
    StackInit,
    HeapInit,
    If,
    Else,
    ElseIf,
    While,
    For,
    Foreach,
    Block,
    Type,
    Name,
    Root,
    String,
    Char,
    Num,
    True,
    False,
}

impl StatementKind {
    pub fn is_operator(&self) -> bool {
        use StatementKind as K;
        matches!(
            self,
            K::Add
                | K::Sub
                | K::Mult
                | K::Div
                | K::Mod
                | K::Exp
                | K::BitAnd
                | K::BoolAnd
                | K::BitOr
                | K::BoolOr
                | K::BitXor
                | K::BoolXor
                | K::BitNot
                | K::BoolNot
                | K::Greater
                | K::Less
                | K::GreaterEqual
                | K::LessEqual
                | K::Equal
                | K::NotEqual
                | K::ShiftLeft
                | K::ShiftRight
                | K::BitShiftRight
                | K::Assign
                | K::Init
                | K::Member
                | K::GetRef
                | K::Deref
                | K::Index
        )
    }

    pub fn is_literal(&self) -> bool {
        use StatementKind as K;
        matches!(self, K::String | K::Char | K::Num | K::True | K::False)
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use StatementKind as K;
        let label = match self {
            K::Return => "RETURN",
            K::Break => "BREAK",
            K::Continue => "CONTINUE",
            K::FuncCall => "CALL",
            K::StackInit => "STACK_INIT",
            K::HeapInit => "HEAP_INIT",
            K::If => "IF",
            K::Else => "ELSE",
            K::ElseIf => "ELSEIF",
            K::While => "WHILE",
            K::For => "FOR",
            K::Foreach => "FOREACH",
            K::Block => "BLOCK",
            K::Type => "TYPE",
            K::Name => "NAME",
            K::Root => "ROOT",
            K::String => "STRING",
            K::Char => "CHAR",
            K::Num => "NUM",
            K::True => "TRUE",
            K::False => "FALSE",
            _ => "OP",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub data: Box<str>,
    parent: Option<StmtId>,
    children: List<StmtId>,
}

impl Statement {
    pub fn parent(&self) -> Option<StmtId> {
        self.parent
    }

    pub fn children(&self) -> &List<StmtId> {
        &self.children
    }
}

/// Arena holding every statement node of one function.
///
/// The body hangs off [`StatementTree::root`]. Parameter TYPE nodes live in
/// the same arena without a parent; they are owned by the function's
/// parameter list instead.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTree {
    nodes: Vec<Statement>,
    root: StmtId,
}

impl StatementTree {
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: StmtId(0),
        };
        tree.root = tree.push(StatementKind::Root, "", None);
        tree
    }

    pub fn root(&self) -> StmtId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: StmtId) -> &Statement {
        &self.nodes[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: StmtId) -> &mut Statement {
        &mut self.nodes[id.0 as usize]
    }

    /// Adds a node, appending it to `parent`'s children when given.
    pub fn push(
        &mut self,
        kind: StatementKind,
        data: impl Into<Box<str>>,
        parent: Option<StmtId>,
    ) -> StmtId {
        let id = StmtId(self.nodes.len() as u32);
        self.nodes.push(Statement {
            kind,
            data: data.into(),
            parent,
            children: List::new(),
        });
        if let Some(parent) = parent {
            self.get_mut(parent).children.add_last(id);
        }
        id
    }

    pub fn parent(&self, id: StmtId) -> Option<StmtId> {
        self.get(id).parent
    }

    pub fn children(&self, id: StmtId) -> impl Iterator<Item = StmtId> + '_ {
        self.get(id).children.iter().copied()
    }

    /// Length of the longest chain of BLOCK nodes below `id`.
    pub fn block_depth(&self, id: StmtId) -> usize {
        self.children(id)
            .filter(|&child| self.get(child).kind == StatementKind::Block)
            .map(|child| 1 + self.block_depth(child))
            .max()
            .unwrap_or(0)
    }
}

impl Default for StatementTree {
    fn default() -> Self {
        Self::new()
    }
}
