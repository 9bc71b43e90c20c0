#![cfg(test)]

use crate::lexer::{Span, TokenKind};
use crate::parser::{Parser, ParserError, ParserErrorKind};
use crate::parser::ast::{Program, Expr};
use crate::parser::stmt::Stmt;


fn parse(source: &str) -> Program {
    match Parser::new(source).parse_program() {
        Ok(program) => program,
        Err(error) => panic!("failed to parse {:?}: {}", source, error),
    }
}

fn parse_error(source: &str) -> ParserError {
    match Parser::new(source).parse_program() {
        Ok(program) => panic!("expected syntax error for {:?}, got: {}", source, program),
        Err(error) => error,
    }
}

fn assert_string_form(source: &str, expected: &str) {
    let program = parse(source);
    assert_eq!(program.to_string(), expected, "unexpected output for source: {:?}", source);
}


#[test]
fn parser_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)\n"),
        ("!-a", "(!(-a))\n"),
        ("a + b + c", "((a + b) + c)\n"),
        ("a + b - c", "((a + b) - c)\n"),
        ("a * b / c", "((a * b) / c)\n"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)\n"),
        ("3 + 4; -5 * 5", "(3 + 4)\n((-5) * 5)\n"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))\n"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))\n"),
        ("true == !false", "(true == (!false))\n"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)\n"),
        ("-(5 + 5)", "(-(5 + 5))\n"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)\n"),
        ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))", "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))\n"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)\n"),
        ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))\n"),
        ("f(1)(2)", "f(1)(2)\n"),
    ];

    for (source, expected) in cases.iter() {
        assert_string_form(source, expected);
    }
}

#[test]
fn parser_statement_string_forms() {
    assert_string_form("let x = 5;", "let x = 5;\n");
    assert_string_form("let y = x", "let y = x;\n");
    assert_string_form("return;", "return;\n");
    assert_string_form("return x + 1", "return (x + 1);\n");
    assert_string_form("while (x < 3) { x; }", "while ((x < 3)) {\n  x\n}\n");
}

#[test]
fn parser_if_expression() {
    assert_string_form("if (x < y) { x }", "if ((x < y)) {\n  x\n}\n");
    assert_string_form("if (x < y) { x } else { y }", "if ((x < y)) {\n  x\n} else {\n  y\n}\n");

    let program = parse("if (a) { 1 } else if (b) { 2 }");
    assert_eq!(program.to_string(), "if (a) {\n  1\n} else {\n  if (b) {\n  2\n}\n}\n");

    let out = &program.statements()[0];
    let if_expr = match out {
        Stmt::Expression(Expr::If(if_expr)) => if_expr,
        _ => panic!("unexpected output: {:?}", out),
    };
    let alternative = if_expr.alternative().map(|block| block.statements());
    assert!(matches!(alternative, Some([Stmt::Expression(Expr::If(..))])), "unexpected output: {:?}", alternative);
}

#[test]
fn parser_function_literal() {
    assert_string_form("fn(x, y) { x + y; }", "fn(x, y) {\n  (x + y)\n}\n");
    assert_string_form("fn() {}", "fn() {\n}\n");

    let program = parse("fn(a, b, c) { }");
    let out = &program.statements()[0];
    match out {
        Stmt::Expression(Expr::Function(fun)) => {
            let params = fun.params().iter().map(|param| param.to_string()).collect::<Vec<_>>();
            assert_eq!(params, ["a", "b", "c"]);
            assert!(fun.body().is_empty());
        },
        _ => panic!("unexpected output: {:?}", out),
    }
}

#[test]
fn parser_collection_literals() {
    assert_string_form("[]", "[]\n");
    assert_string_form("[1, 2 * 2, \"three\"]", "[1, (2 * 2), \"three\"]\n");
    assert_string_form("{}", "{}\n");
    assert_string_form("{\"one\": 1, true: 2 + 3, 4: x}", "{\"one\": 1, true: (2 + 3), 4: x}\n");
    assert_string_form("{\"a\": 1}[\"a\"]", "({\"a\": 1}[\"a\"])\n");
}

#[test]
fn parser_string_literal_round_trips() {
    let program = parse(r#""tab\tquote\"slash\\""#);
    let rendered = program.to_string();
    assert_eq!(rendered, "\"tab\\tquote\\\"slash\\\\\"\n");

    // the rendered form parses back to the same value
    let reparsed = parse(&rendered);
    let out = &reparsed.statements()[0];
    assert!(matches!(out, Stmt::Expression(Expr::StringLiteral(value)) if &**value == "tab\tquote\"slash\\"), "unexpected output: {:?}", out);
}

#[test]
fn parser_integer_literals_round_trip() {
    for value in [0_i64, 7, 42, 1234567, i64::MAX].iter() {
        let rendered = parse(&value.to_string()).to_string();
        assert_eq!(rendered, format!("{}\n", value));

        let reparsed = parse(&rendered);
        let out = &reparsed.statements()[0];
        assert!(matches!(out, Stmt::Expression(Expr::IntegerLiteral(n)) if n == value), "unexpected output: {:?}", out);
    }
}

#[test]
fn parser_token_literals() {
    assert_eq!(parse("let x = 1;").token_literal(), "let");
    assert_eq!(parse("return 1;").token_literal(), "return");
    assert_eq!(parse("add(1)").token_literal(), "(");
    assert_eq!(parse("-5").token_literal(), "-");
    assert_eq!(parse("fn(x) { x }").token_literal(), "fn");
    assert_eq!(parse("foobar").token_literal(), "foobar");
    assert_eq!(parse("").token_literal(), "");
}

#[test]
fn parser_reports_unexpected_tokens() {
    let error = parse_error("let = 5;");
    assert_eq!(error.kind(), &ParserErrorKind::UnexpectedToken { found: TokenKind::OpAssign, expected: "identifier" });
    assert_eq!(error.span(), &Span { index: 4, length: 1 });
    assert_eq!(error.to_string(), "syntax error: expected identifier, found '='");

    let error = parse_error("fn(x, 1) {}");
    assert_eq!(error.kind(), &ParserErrorKind::UnexpectedToken { found: TokenKind::IntegerLiteral, expected: "identifier" });

    let error = parse_error("let x = ;");
    assert_eq!(error.kind(), &ParserErrorKind::UnexpectedToken { found: TokenKind::Semicolon, expected: "expression" });
}

#[test]
fn parser_reports_illegal_tokens() {
    let error = parse_error("let x = 5 @");
    assert_eq!(error.kind(), &ParserErrorKind::IllegalToken("@".to_string()));
    assert_eq!(error.span(), &Span { index: 10, length: 1 });
}

#[test]
fn parser_reports_unexpected_eof() {
    let error = parse_error("(1 + 2");
    assert_eq!(error.kind(), &ParserErrorKind::UnexpectedEOF { expected: "')'" });

    let error = parse_error("if (x) { 1 ");
    assert_eq!(error.kind(), &ParserErrorKind::UnexpectedEOF { expected: "'}'" });

    let error = parse_error("{1: 2");
    assert_eq!(error.kind(), &ParserErrorKind::UnexpectedEOF { expected: "'}'" });
}

#[test]
fn parser_rejects_out_of_range_integers() {
    let error = parse_error("99999999999999999999");
    assert_eq!(error.kind(), &ParserErrorKind::InvalidIntegerLiteral("99999999999999999999".to_string()));
}

#[test]
fn parser_handles_deep_nesting() {
    let depth = 5000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let program = parse(&source);
    assert_eq!(program.to_string(), "1\n");
}

#[test]
fn parser_builds_and_drops_deep_trees() {
    let depth = 100_000;

    let program = parse(&format!("{}1", "!".repeat(depth)));
    let rendered = program.to_string();
    assert_eq!(rendered.len(), 3 * depth + 2);
    assert!(rendered.starts_with("(!(!"));
    drop(program);

    // left-nested chain built without recursion in the parser
    let source = format!("1{}", " + 1".repeat(depth));
    let program = parse(&source);
    assert_eq!(program.statements().len(), 1);
    drop(program);

    let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    drop(parse(&source));
}

#[test]
fn parser_builds_and_drops_deeply_nested_blocks() {
    let depth = 20_000;
    let source = format!("{}{}", "while (x) { ".repeat(depth), "}".repeat(depth));
    let program = parse(&source);

    let rendered = program.to_string();
    assert!(rendered.starts_with("while (x) {\n  while (x) {"));
    drop(program);

    let source = format!("{}1{}", "if (x) { ".repeat(depth), " }".repeat(depth));
    drop(parse(&source));
}
