use pretty_assertions::assert_eq;
use reckon::{
    ParserLimits,
    ast::{BinaryOperator, Expr},
    error::ParseError,
    evaluate,
    interpreter::{
        parser::core::{MAX_DEPTH_LIMIT, MAX_NODES_LIMIT},
        token::Token,
    },
    parse, parse_with,
};

#[test]
fn single_number() {
    assert_eq!(parse("  42 "), Ok(Expr::number(42.0, 2)));
}

#[test]
fn builds_tree_with_positions() {
    let expected = Expr::binary(Expr::number(1.0, 0),
                                BinaryOperator::Add,
                                Expr::binary(Expr::number(2.0, 4),
                                             BinaryOperator::Mul,
                                             Expr::number(3.0, 8),
                                             6),
                                2);
    assert_eq!(parse("1 + 2 * 3"), Ok(expected));
}

#[test]
fn left_associative_tiers() {
    assert_eq!(parse("8 - 3 - 2").unwrap().to_string(), "((8 - 3) - 2)");
    assert_eq!(parse("8 / 4 / 2").unwrap().to_string(), "((8 / 4) / 2)");
    assert_eq!(parse("1 + 2 - 3 + 4").unwrap().to_string(), "(((1 + 2) - 3) + 4)");
}

#[test]
fn precedence_is_structural() {
    assert_eq!(parse("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
    assert_eq!(parse("(2 + 3) * 4").unwrap().to_string(), "((2 + 3) * 4)");
    assert_eq!(parse("2 * 3 - 4 / 5").unwrap().to_string(), "((2 * 3) - (4 / 5))");
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(parse("((5))"), Ok(Expr::number(5.0, 2)));
}

#[test]
fn missing_operand() {
    assert_eq!(parse("2 + "),
               Err(ParseError::ExpectedOperand { found:    Token::End,
                                                 position: 4, }));
    assert_eq!(parse("* 2"),
               Err(ParseError::ExpectedOperand { found:    Token::Multiply,
                                                 position: 0, }));
    assert_eq!(parse(""),
               Err(ParseError::ExpectedOperand { found:    Token::End,
                                                 position: 0, }));
    assert_eq!(parse("( )"),
               Err(ParseError::ExpectedOperand { found:    Token::RParen,
                                                 position: 2, }));
}

#[test]
fn missing_closing_paren() {
    assert_eq!(parse("(2 + 3"),
               Err(ParseError::ExpectedClosingParen { found:    Token::End,
                                                      position: 6, }));
    assert_eq!(parse("(2 + 3 4)"),
               Err(ParseError::ExpectedClosingParen { found:    Token::Number(4.0),
                                                      position: 7, }));
}

#[test]
fn trailing_input() {
    assert_eq!(parse("2 3"),
               Err(ParseError::UnexpectedTrailingToken { found:    Token::Number(3.0),
                                                         position: 2, }));
    assert_eq!(parse("2 + 3)"),
               Err(ParseError::UnexpectedTrailingToken { found:    Token::RParen,
                                                         position: 5, }));
}

#[test]
fn invalid_characters() {
    assert_eq!(parse("2 @ 3"),
               Err(ParseError::InvalidCharacter { lexeme:   "@".to_string(),
                                                  position: 2, }));
    assert_eq!(parse("$"),
               Err(ParseError::InvalidCharacter { lexeme:   "$".to_string(),
                                                  position: 0, }));
    assert_eq!(parse("(1 # 2)"),
               Err(ParseError::InvalidCharacter { lexeme:   "#".to_string(),
                                                  position: 3, }));
}

#[test]
fn huge_literal_is_not_an_invalid_character() {
    let source = format!("1 + {}", "9".repeat(400));
    assert_eq!(parse(&source), Err(ParseError::NumberTooLarge { position: 4 }));
    assert_eq!(parse(&format!("({})", "9".repeat(400))),
               Err(ParseError::NumberTooLarge { position: 1 }));
}

#[test]
fn error_positions() {
    assert_eq!(parse("2 @ 3").unwrap_err().position(), Some(2));
    assert_eq!(parse("(2 + 3").unwrap_err().position(), Some(6));
    assert_eq!(parse(&"9".repeat(400)).unwrap_err().position(), Some(0));
    let limits = ParserLimits { max_nodes: 1,
                                ..ParserLimits::default() };
    assert_eq!(parse_with("1 + 2", limits).unwrap_err().position(), None);
}

#[test]
fn first_error_wins() {
    // The missing operand is found before the stray characters further on.
    assert_eq!(parse("(1 + ) @ $"),
               Err(ParseError::ExpectedOperand { found:    Token::RParen,
                                                 position: 5, }));
}

#[test]
fn node_budget_is_enforced() {
    let limits = ParserLimits { max_nodes: 5,
                                ..ParserLimits::default() };
    assert!(parse_with("1 + 2 + 3", limits).is_ok());
    assert_eq!(parse_with("1 + 2 + 3 + 4", limits),
               Err(ParseError::OutOfMemory { limit: 5 }));
}

#[test]
fn nesting_limit_is_enforced() {
    let limits = ParserLimits { max_depth: 3,
                                ..ParserLimits::default() };
    assert!(parse_with("(((1)))", limits).is_ok());
    assert_eq!(parse_with("((((1))))", limits),
               Err(ParseError::NestingTooDeep { limit:    3,
                                                position: 3, }));
    // Depth is released when a group closes.
    assert!(parse_with("(((1))) + (((2)))", limits).is_ok());
}

#[test]
fn default_limits_reject_runaway_nesting() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(parse(&source), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn oversized_limits_are_clamped() {
    let limits = ParserLimits { max_nodes: usize::MAX,
                                max_depth: usize::MAX, };

    let nested = format!("{}1{}", "(".repeat(2_000), ")".repeat(2_000));
    assert_eq!(parse_with(&nested, limits),
               Err(ParseError::NestingTooDeep { limit:    MAX_DEPTH_LIMIT,
                                                position: MAX_DEPTH_LIMIT, }));

    let chain = vec!["1"; 10_000].join(" + ");
    assert_eq!(parse_with(&chain, limits),
               Err(ParseError::OutOfMemory { limit: MAX_NODES_LIMIT }));
}

#[test]
fn largest_allowed_trees_evaluate_and_drop() {
    let limits = ParserLimits { max_nodes: usize::MAX,
                                max_depth: usize::MAX, };

    let nested = format!("{}1{}", "(".repeat(MAX_DEPTH_LIMIT), ")".repeat(MAX_DEPTH_LIMIT));
    assert_eq!(evaluate(&parse_with(&nested, limits).unwrap()), Ok(1.0));

    // n terms build 2n - 1 nodes, all in one left-leaning spine.
    let terms = MAX_NODES_LIMIT / 2;
    let chain = vec!["1"; terms].join(" + ");
    let expr = parse_with(&chain, limits).unwrap();
    assert_eq!(expr.node_count(), 2 * terms - 1);
    assert_eq!(evaluate(&expr), Ok(terms as f64));
}

#[test]
fn tree_metrics() {
    let expr = parse("(1 + 2) * (3 - 4) / 5").unwrap();
    assert_eq!(expr.node_count(), 9);
    assert_eq!(expr.depth(), 4);
    assert_eq!(expr.position(), 18);
}
