use std::fmt::Write;

use colored::Colorize;

use crate::ast::{
    FunctionDeclaration, StatementTree, StmtId, StructDeclaration, TranslationUnit,
    visit::{VisitAction, Visitor},
};

#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    color: bool,
    indent: usize,
}

impl DisplayContext {
    pub fn new(color: bool) -> Self {
        Self { color, indent: 0 }
    }

    fn indented(&self) -> Self {
        self.at(self.indent + 1)
    }

    fn at(&self, indent: usize) -> Self {
        Self {
            color: self.color,
            indent,
        }
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    fn label(&self, s: &str) -> String {
        if self.color {
            s.cyan().bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn ty(&self, s: &str) -> String {
        if self.color {
            s.magenta().to_string()
        } else {
            s.to_string()
        }
    }
}

impl TranslationUnit {
    /// Text dump of every declaration: structs first, then functions.
    pub fn display(&self, color: bool) -> Result<String, std::fmt::Error> {
        let ctx = DisplayContext::new(color);
        let mut output = String::new();
        for decl in &self.structs {
            write_struct(&mut output, decl, &ctx)?;
        }
        for func in &self.functions {
            write_function(&mut output, func, &ctx)?;
        }
        Ok(output)
    }
}

pub fn write_struct(
    out: &mut String,
    decl: &StructDeclaration,
    ctx: &DisplayContext,
) -> std::fmt::Result {
    writeln!(out, "{}{} {}", ctx.indent_str(), ctx.label("STRUCT:"), decl.name)?;
    let member_ctx = ctx.indented();
    for member in &decl.members {
        writeln!(
            out,
            "{}{} {} | {} {}",
            member_ctx.indent_str(),
            ctx.label("MEMBER: NAME:"),
            member.name,
            ctx.label("TYPE:"),
            ctx.ty(&member.ty)
        )?;
    }
    Ok(())
}

pub fn write_function(
    out: &mut String,
    func: &FunctionDeclaration,
    ctx: &DisplayContext,
) -> std::fmt::Result {
    writeln!(
        out,
        "{}{} {} | {} {}",
        ctx.indent_str(),
        ctx.label("FUNC:"),
        func.name,
        ctx.label("TYPE:"),
        ctx.ty(&func.return_type)
    )?;
    let body_ctx = ctx.indented();
    for param in &func.parameters {
        write_statements(out, &func.body, param.node, &body_ctx)?;
    }
    write_statements(out, &func.body, func.body.root(), &body_ctx)
}

/// Writes the subtree under `from`, one node per line.
pub fn write_statements(
    out: &mut String,
    tree: &StatementTree,
    from: StmtId,
    ctx: &DisplayContext,
) -> std::fmt::Result {
    let mut dumper = Dumper {
        out,
        ctx: *ctx,
        result: Ok(()),
    };
    tree.walk(from, &mut dumper);
    dumper.result
}

struct Dumper<'a> {
    out: &'a mut String,
    ctx: DisplayContext,
    result: std::fmt::Result,
}

impl Visitor for Dumper<'_> {
    fn visit_statement(&mut self, tree: &StatementTree, id: StmtId, depth: usize) -> VisitAction {
        let node = tree.get(id);
        let ctx = self.ctx.at(self.ctx.indent + depth);
        let label = ctx.label(&format!("{}:", node.kind));

        self.result = if node.data.is_empty() {
            writeln!(self.out, "{}{}", ctx.indent_str(), label)
        } else {
            writeln!(self.out, "{}{} {}", ctx.indent_str(), label, node.data)
        };

        if self.result.is_err() {
            VisitAction::Stop
        } else {
            VisitAction::Continue
        }
    }
}
