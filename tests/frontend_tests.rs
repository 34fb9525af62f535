// Integration tests for the AutoSpeed front end

use autospeed::{AstPrinter, Expr, Lexer, Stmt, TokenKind};

fn scan(source: &str) -> Vec<autospeed::Token> {
    let (tokens, errors) = Lexer::new(source).scan();
    assert!(errors.is_empty(), "lexing failed: {:?}", errors);
    tokens
}

fn parse(source: &str) -> (Vec<Stmt>, Vec<autospeed::ParseError>) {
    autospeed::Parser::new(scan(source)).parse()
}

#[test]
fn test_scan_always_ends_with_one_eof() {
    for source in ["", "gear x = 1;", "announce \"unterminated", "@ $ %", "1.2.3.4"] {
        let (tokens, _) = Lexer::new(source).scan();
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1,
            "source {:?}",
            source
        );
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_entry_point_program_shape() {
    let source = r#"ignite() {
        gear fuel = 100;
        fuel = fuel - 10;
        announce fuel;
        finishline 0;
    }"#;

    let (stmts, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected diagnostics: {:?}", errors);
    assert_eq!(stmts.len(), 1);

    let (name, body) = match &stmts[0] {
        Stmt::FuncDef { name, body } => (name, body),
        other => panic!("expected function definition, got {:?}", other),
    };
    assert_eq!(name.text, "ignite");

    let statements = match &**body {
        Stmt::Block { statements } => statements,
        other => panic!("expected block body, got {:?}", other),
    };
    assert_eq!(statements.len(), 4);
    assert!(matches!(statements[0], Stmt::VarDecl { .. }));
    assert!(matches!(statements[1], Stmt::Expression { .. }));
    assert!(matches!(statements[2], Stmt::Announce { .. }));
    assert!(matches!(statements[3], Stmt::Finishline { .. }));
}

#[test]
fn test_entry_point_program_prints_verbatim_pieces() {
    let source = r#"ignite() {
        gear fuel = 100;
        fuel = fuel - 10;
        announce fuel;
        finishline 0;
    }"#;

    let (stmts, errors) = parse(source);
    assert!(errors.is_empty());

    let out = AstPrinter.print(&stmts);
    assert!(out.contains("(function ignite ()"));
    assert!(out.contains("(gear fuel 100)"));
    assert!(out.contains("(= fuel (- (var fuel) 10))"));
    assert!(out.contains("(announce (var fuel))"));
    assert!(out.contains("(finishline 0)"));
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let (stmts, errors) = parse("1 + 2 * 3;");
    assert!(errors.is_empty());

    let expr = match &stmts[0] {
        Stmt::Expression { expr } => expr,
        other => panic!("expected expression statement, got {:?}", other),
    };
    match expr {
        Expr::Binary { op, right, .. } => {
            assert_eq!(op.text, "+");
            assert!(matches!(&**right, Expr::Binary { op, .. } if op.text == "*"));
        }
        other => panic!("expected binary expression, got {:?}", other),
    }
}

#[test]
fn test_literal_is_invalid_assignment_target() {
    let (_, errors) = parse("5 = x;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Invalid assignment target"));
}

#[test]
fn test_recovery_keeps_well_formed_statements() {
    // One malformed statement up to its ';', then a well-formed one: the
    // result holds only the good statement, with one diagnostic.
    let (stmts, errors) = parse("gear = 10; announce \"ok\";");
    assert_eq!(errors.len(), 1);
    assert_eq!(stmts.len(), 1);
    assert!(matches!(&stmts[0], Stmt::Announce { .. }));
}

#[test]
fn test_malformed_loop_condition_recovers_to_finishline() {
    let source = "looplap (5 > ) {\n    announce \"Bad code\";\n}\nfinishline 0;";
    let (stmts, errors) = parse(source);

    // The missing operand is reported once, at the line of the ')'.
    let on_paren_line: Vec<_> = errors.iter().filter(|e| e.line == 1).collect();
    assert_eq!(on_paren_line.len(), 1);
    assert!(on_paren_line[0].message.contains("Expected expression"));

    // Recovery lets the trailing statement parse.
    assert!(stmts
        .iter()
        .any(|s| matches!(s, Stmt::Finishline { .. })));
}

#[test]
fn test_diagnostic_count_matches_malformed_statements() {
    // Two malformed statements, two well-formed ones, original order kept.
    let source = "gear = 1; announce 1; turbo = 2; announce 2;";
    let (stmts, errors) = parse(source);
    assert_eq!(errors.len(), 2);
    assert_eq!(stmts.len(), 2);
    assert!(stmts.iter().all(|s| matches!(s, Stmt::Announce { .. })));
}

#[test]
fn test_statements_survive_in_source_order() {
    let source = "gear a = 1; engine go() { announce a; } announce a;";
    let (stmts, errors) = parse(source);
    assert!(errors.is_empty());
    assert_eq!(stmts.len(), 3);
    assert!(matches!(stmts[0], Stmt::VarDecl { .. }));
    assert!(matches!(stmts[1], Stmt::FuncDef { .. }));
    assert!(matches!(stmts[2], Stmt::Announce { .. }));
}

#[test]
fn test_unknown_characters_reach_the_parser() {
    // The lexer reports the character but keeps going; the parser then
    // rejects the Unknown token structurally.
    let (tokens, lex_errors) = Lexer::new("announce $;").scan();
    assert_eq!(lex_errors.len(), 1);

    let (stmts, parse_errors) = autospeed::Parser::new(tokens).parse();
    assert!(stmts.is_empty());
    assert!(!parse_errors.is_empty());
}
