mod common;

use clite::{ast::StatementKind, errors::ErrorKind};
use common::it;

#[test]
fn test_01_point_struct() {
    it("should analyze a struct with members in order", |ctx| {
        ctx.add_source(
            r#"
            struct Point {
                int x;
                int y;
            }
        "#,
        )
        .analyzes(true)
        .inspect(|unit| {
            let point = unit.structs.get_first().unwrap();
            assert_eq!(&*point.name, "Point");
            let names: Vec<_> = point.members.iter().map(|m| &*m.name).collect();
            assert_eq!(names, vec!["x", "y"]);
        });
    })
}

#[test]
fn test_02_add_function() {
    it("should analyze a function with two parameters", |ctx| {
        ctx.add_source(
            r#"
            int add(int a, int b) {
                return a + b;
            }
        "#,
        )
        .dump_eq(
            "FUNC: add | TYPE: int\n  TYPE: int\n    NAME: a\n  TYPE: int\n    NAME: b\n  ROOT:\n",
        );
    })
}

#[test]
fn test_03_nested_blocks() {
    it("should mirror nested braces as block nodes", |ctx| {
        ctx.add_source(
            r#"
            void loop(int n) {
                while (n) {
                    if (n) {
                        n = n - 1;
                    }
                }
                { }
            }
        "#,
        )
        .inspect(|unit| {
            let f = unit.functions.get_first().unwrap();
            let root = f.body.root();
            assert_eq!(f.body.block_depth(root), 2);
            assert_eq!(f.body.children(root).count(), 2);
            assert!(
                f.body
                    .children(root)
                    .all(|c| f.body.get(c).kind == StatementKind::Block)
            );
        });
    })
}

#[test]
fn test_04_mixed_file() {
    it("should keep structs and functions in source order", |ctx| {
        ctx.add_source(
            r#"
            struct Node {
                int value;
                Node next;
            }

            int sum(Node head) {
                int total = 0;
                while (head) { total = total + head.value; }
                return total;
            }

            struct Empty { }

            void main() { }
        "#,
        )
        .dump_eq(
            "STRUCT: Node\n\
             \x20 MEMBER: NAME: value | TYPE: int\n\
             \x20 MEMBER: NAME: next | TYPE: Node\n\
             STRUCT: Empty\n\
             FUNC: sum | TYPE: int\n\
             \x20 TYPE: Node\n\
             \x20   NAME: head\n\
             \x20 ROOT:\n\
             \x20   BLOCK:\n\
             FUNC: main | TYPE: void\n\
             \x20 ROOT:\n",
        );
    })
}

#[test]
fn test_05_missing_member_semicolon() {
    it("should report the token after a missing semicolon", |ctx| {
        ctx.add_source(
            r#"
struct Point {
    int x
    int y;
}
        "#,
        )
        .fails_with(ErrorKind::UnexpectedToken, 3)
        .message("Struct members must be declared as <type> <value>;");
    })
}

#[test]
fn test_06_unclosed_block() {
    it("should report too many opening braces at the last line", |ctx| {
        ctx.add_source(
            r#"
int f() {
    if (x) {
        return 1;
}
        "#,
        )
        .fails_with(ErrorKind::TooManyOpeningBraces, 4)
        .message("There are too many opening braces.");
    })
}

#[test]
fn test_07_extra_closing_brace() {
    it("should report too many closing braces at the stray brace", |ctx| {
        ctx.add_source(
            r#"
int f() {
    return 1;
}
}
        "#,
        )
        .fails_with(ErrorKind::TooManyClosingBraces, 4)
        .message("There are too many closing braces.");
    })
}

#[test]
fn test_08_eof_in_parameters() {
    it("should fail when the stream ends inside a parameter list", |ctx| {
        ctx.add_source("int f(int a,")
            .fails_with(ErrorKind::UnexpectedEof, 1)
            .message("Unexpected EOF encountered in function declaration");
    })
}

#[test]
fn test_09_cli_dump() {
    it("should print the dump from the command line", |ctx| {
        ctx.add_source("struct P { int x; }").execute(|res| {
            res.exit_code(0)
                .stdout("STRUCT: P\n  MEMBER: NAME: x | TYPE: int\n")
                .stderr("");
        });
    })
}

#[test]
fn test_10_cli_error_report() {
    it("should print the diagnostic and exit non-zero", |ctx| {
        ctx.add_source("struct P {\n int x\n}")
            .fails_with(ErrorKind::UnexpectedToken, 3)
            .execute(|res| {
                res.exit_code(1).stdout("").stderr(
                    "Error encountered while analyzing main.c at line 3:\n\
                     Struct members must be declared as <type> <value>;\n",
                );
            });
    })
}

#[test]
fn test_11_cli_forced_color_keeps_message_plain() {
    it("should color only the diagnostic header", |ctx| {
        ctx.add_source("struct P {\n int x\n}")
            .fails_with(ErrorKind::UnexpectedToken, 3)
            .args(&["--color=always"])
            .execute(|res| {
                res.exit_code(1).stdout("");
                let mut lines = res.stderr.lines();
                let header = lines.next().unwrap();
                assert!(header.contains('\x1b'), "header not colored: {header:?}");
                assert!(header.contains("Error encountered while analyzing"));
                assert_eq!(
                    lines.next(),
                    Some("Struct members must be declared as <type> <value>;")
                );
            });
    })
}

#[test]
fn test_12_cli_verbose_logs_to_stderr() {
    it("should log each declaration on stderr when verbose", |ctx| {
        ctx.add_source(
            r#"
            struct P { int x; }
            int f() {
                if (x) { return 1; }
                return 0;
            }
        "#,
        )
        .analyzes(true)
        .args(&["--verbose", "--color=never"])
        .execute(|res| {
            res.exit_code(0).stdout("").stderr(
                "parsed struct P (1 members)\n\
                 parsed function f (0 parameters, 1 blocks deep)\n",
            );
        });
    })
}
