use crate::ast::{StatementTree, StmtId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    Continue,
    SkipChildren,
    Stop,
}

pub trait Visitor {
    /// Called once per node in pre-order. `depth` is 0 for the node the walk
    /// started from.
    fn visit_statement(&mut self, tree: &StatementTree, id: StmtId, depth: usize) -> VisitAction;
}

impl StatementTree {
    /// Walks the subtree under `from` in pre-order. Returns `false` if the
    /// visitor stopped the walk early.
    pub fn walk(&self, from: StmtId, visitor: &mut impl Visitor) -> bool {
        self.walk_at(from, 0, visitor)
    }

    fn walk_at(&self, id: StmtId, depth: usize, visitor: &mut impl Visitor) -> bool {
        match visitor.visit_statement(self, id, depth) {
            VisitAction::Stop => false,
            VisitAction::SkipChildren => true,
            VisitAction::Continue => self
                .children(id)
                .all(|child| self.walk_at(child, depth + 1, visitor)),
        }
    }
}
