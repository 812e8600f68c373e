use crate::{
    analyzer::{Analyzer, Result},
    ast::{StructDeclaration, StructMember},
    collections::List,
    errors::builders,
    span::Origin,
};

const STRUCT_SHAPE: &str = "Struct declarations must be in the form struct <name> {<members>}";
const MEMBER_SHAPE: &str = "Struct members must be declared as <type> <value>;";
const STRUCT_EOF: &str = "Unexpected EOF encountered in struct declaration";

impl Analyzer<'_> {
    /// Parses the rest of a struct declaration; `struct` itself has already
    /// been consumed.
    pub(super) fn parse_struct(&mut self, origin: Origin) -> Result<StructDeclaration> {
        let name = self.expect_word(STRUCT_SHAPE, STRUCT_EOF)?;
        self.expect_punct(
            "{",
            "Expected opening brace after name in struct declaration.",
            STRUCT_EOF,
        )?;

        let mut members = List::new();
        loop {
            match self.stream.current() {
                None => return Err(builders::unexpected_eof(STRUCT_EOF, self.eof_origin())),
                Some(token) if token.is_punct("}") => {
                    self.stream.advance();
                    break;
                }
                Some(_) => members.add_last(self.parse_member()?),
            }
        }

        Ok(StructDeclaration {
            name,
            members,
            origin,
        })
    }

    fn parse_member(&mut self) -> Result<StructMember> {
        let ty = self.expect_word(MEMBER_SHAPE, STRUCT_EOF)?;
        let name = self.expect_word(MEMBER_SHAPE, STRUCT_EOF)?;
        self.expect_punct(";", MEMBER_SHAPE, STRUCT_EOF)?;
        Ok(StructMember { ty, name })
    }
}
