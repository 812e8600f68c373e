use crate::{
    analyzer::{Analyzer, Result},
    ast::{FunctionDeclaration, Parameter, StatementKind, StatementTree},
    collections::List,
    errors::builders,
};

const FUNCTION_SHAPE: &str =
    "Function declaration must be in the form <rtype> <name>(<parameters>) {<block>}";
const FUNCTION_EOF: &str = "Unexpected EOF encountered in function declaration";

impl Analyzer<'_> {
    pub(super) fn parse_function(&mut self) -> Result<FunctionDeclaration> {
        let origin = match self.stream.current() {
            Some(token) => token.origin.clone(),
            None => self.eof_origin(),
        };

        let return_type = self.expect_word(FUNCTION_SHAPE, FUNCTION_EOF)?;
        let name = self.expect_word(FUNCTION_SHAPE, FUNCTION_EOF)?;
        self.expect_punct(
            "(",
            "Function name must be followed by an open parenthesis",
            FUNCTION_EOF,
        )?;

        let mut body = StatementTree::new();
        let parameters = self.parse_parameters(&mut body)?;

        self.expect_punct(
            "{",
            "Function bodies must start with an open brace ('{')",
            FUNCTION_EOF,
        )?;
        self.parse_block(&mut body)?;

        Ok(FunctionDeclaration {
            return_type,
            name,
            parameters,
            body,
            origin,
        })
    }

    /// Parses `<type> <name>` pairs up to and including the closing `)`.
    /// Each pair is also recorded in `body` as a TYPE node with a NAME child.
    fn parse_parameters(&mut self, body: &mut StatementTree) -> Result<List<Parameter>> {
        let mut parameters = List::new();

        if self.stream.current().is_some_and(|t| t.is_punct(")")) {
            self.stream.advance();
            return Ok(parameters);
        }

        loop {
            let ty = self.expect_word("Parameter types must be a valid identifier", FUNCTION_EOF)?;
            let name = self.expect_word("Parameter names must be valid identifiers.", FUNCTION_EOF)?;

            let node = body.push(StatementKind::Type, ty.clone(), None);
            body.push(StatementKind::Name, name.clone(), Some(node));
            parameters.add_last(Parameter { ty, name, node });

            match self.stream.current() {
                None => return Err(builders::unexpected_eof(FUNCTION_EOF, self.eof_origin())),
                Some(token) if token.is_punct(",") => {
                    self.stream.advance();
                }
                Some(token) if token.is_punct(")") => {
                    self.stream.advance();
                    return Ok(parameters);
                }
                Some(token) => {
                    return Err(builders::unexpected_token(
                        "Function parameters must be separated by commas",
                        token.origin.clone(),
                    ));
                }
            }
        }
    }
}
