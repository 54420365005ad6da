//! End-to-end tests for the parse → compile pipeline.
//!
//! These exercise the full library surface the way a front-end would:
//! formula text in, populated truth table (or structured error) out.

use test_log::test;

use truthtable_rs::error::ParseError;
use truthtable_rs::parser::parse;
use truthtable_rs::table::Table;
use truthtable_rs::token::TokenKind;

fn values(formula: &str, order: &[&str]) -> Vec<bool> {
    let ast = parse(formula).unwrap();
    let table = Table::compile(&ast, order);
    table.root().values().to_vec()
}

// ─── Table shape ───────────────────────────────────────────────────────────────

#[test]
fn repeated_variable_compiles_to_one_column() {
    let ast = parse("p & p & p").unwrap();
    let table = Table::compile(&ast, &[]);
    assert_eq!(table.variable_count(), 1);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn three_variables_give_eight_rows() {
    let ast = parse("(a | b) & c").unwrap();
    let table = Table::compile(&ast, &[]);
    assert_eq!(table.row_count(), 8);
    for column in table.variables().chain(table.expressions()) {
        assert_eq!(column.values().len(), 8);
    }
}

#[test]
fn duplicate_subexpressions_are_shared() {
    let ast = parse("(p & q) | (p & q)").unwrap();
    let table = Table::compile(&ast, &[]);

    let headers: Vec<&str> = table.expressions().map(|c| c.display()).collect();
    assert_eq!(headers, vec!["p ∧ q", "(p ∧ q) ∨ (p ∧ q)"]);

    let and = table.expressions().next().unwrap();
    assert_eq!(and.values(), table.root().values());
}

// ─── Ordering contracts ────────────────────────────────────────────────────────

#[test]
fn preferred_order_wins_over_discovery_order() {
    let ast = parse("p | q").unwrap();
    let table = Table::compile(&ast, &["q", "p"]);
    assert_eq!(table.variable_names().collect::<Vec<_>>(), vec!["q", "p"]);

    let q = table.variables().next().unwrap();
    let p = table.variables().nth(1).unwrap();
    assert!(q.values()[0]);
    assert!(p.values()[0]);
}

#[test]
fn enumeration_is_true_first_slowest_first() {
    let ast = parse("a | b").unwrap();
    let table = Table::compile(&ast, &["a", "b"]);
    let columns: Vec<Vec<bool>> = table.variables().map(|c| c.values().to_vec()).collect();
    assert_eq!(columns[0], vec![true, true, false, false]);
    assert_eq!(columns[1], vec![true, false, true, false]);
}

// ─── Operator semantics ────────────────────────────────────────────────────────

#[test]
fn operator_truth_tables() {
    // Two-variable enumeration order is (T,T), (T,F), (F,T), (F,F).
    assert_eq!(values("!a", &[]), vec![false, true]);
    assert_eq!(values("a & b", &["a", "b"]), vec![true, false, false, false]);
    assert_eq!(values("a | b", &["a", "b"]), vec![true, true, true, false]);
    assert_eq!(values("a -> b", &["a", "b"]), vec![true, false, true, true]);
    assert_eq!(values("a <-> b", &["a", "b"]), vec![true, false, false, true]);
    assert_eq!(values("a ^ b", &["a", "b"]), vec![false, true, true, false]);
}

#[test]
fn precedence_shows_in_values() {
    // p & q | r groups as (p & q) | r.
    assert_eq!(
        values("p & q | r", &["p", "q", "r"]),
        values("(p & q) | r", &["p", "q", "r"])
    );
    assert_ne!(
        values("p & q | r", &["p", "q", "r"]),
        values("p & (q | r)", &["p", "q", "r"])
    );

    // p -> q <-> r groups as (p -> q) <-> r.
    assert_eq!(
        values("p -> q <-> r", &["p", "q", "r"]),
        values("(p -> q) <-> r", &["p", "q", "r"])
    );

    // !p & q groups as (!p) & q.
    assert_eq!(values("!p & q", &["p", "q"]), values("(!p) & q", &["p", "q"]));
}

#[test]
fn tautology_and_contradiction() {
    assert_eq!(values("p | !p", &[]), vec![true, true]);
    assert_eq!(values("p & !p", &[]), vec![false, false]);
    assert_eq!(values("(p -> q) <-> (!p | q)", &["p", "q"]), vec![true; 4]);
}

// ─── Display contract ──────────────────────────────────────────────────────────

#[test]
fn display_parenthesizes_binary_operands_only() {
    let ast = parse("p & q | r").unwrap();
    let table = Table::compile(&ast, &[]);
    assert_eq!(table.root().display(), "(p ∧ q) ∨ r");

    let ast = parse("!(p & q) | r").unwrap();
    let table = Table::compile(&ast, &[]);
    assert_eq!(table.root().display(), "¬p ∧ q ∨ r");
}

// ─── Error surface ─────────────────────────────────────────────────────────────

#[test]
fn lex_error_with_offset_and_character() {
    assert_eq!(
        parse("p @ q").unwrap_err(),
        ParseError::InvalidCharacter {
            offset: 2,
            character: '@'
        }
    );
}

#[test]
fn missing_operand_is_reported_at_end_of_input() {
    let err = parse("p &").unwrap_err();
    assert_eq!(err.offset(), 3);
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            kind: TokenKind::Eof,
            ..
        }
    ));
}

#[test]
fn unclosed_group_expects_rparen() {
    let err = parse("(p").unwrap_err();
    assert_eq!(err.offset(), 2);
    assert!(matches!(
        err,
        ParseError::ExpectedToken {
            expected: TokenKind::RParen,
            ..
        }
    ));
}

#[test]
fn errors_render_with_offsets() {
    let err = parse("p @ q").unwrap_err();
    assert_eq!(err.to_string(), "[2] invalid character: '@'");
}
