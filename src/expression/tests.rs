use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

#[test]
fn test_parse_literal() {
    let result = Expression::parse("5555");
    assert_eq!(result, Ok(Expression::Number(5555)));
}

#[test]
fn test_parse_nested() {
    let result = Expression::parse("((5^5)-(5555/5))");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        let expected = Expression::binary(
            Operator::Sub,
            Expression::binary(Operator::Pow, Expression::Number(5), Expression::Number(5)),
            Expression::binary(
                Operator::Div,
                Expression::Number(5555),
                Expression::Number(5),
            ),
        );
        assert_eq!(expr, expected);
        assert_eq!(expr.evaluate(), Ok(2014));
    }
}

#[test]
fn test_display_matches_catalog_text() {
    let text = "(((5*5)+55)/(5+5))";
    let result = Expression::parse(text);
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(format!("{}", expr), text);
        assert_eq!(expr.evaluate(), Ok(8));
    }
}

#[test]
fn test_parse_rejects_missing_parenthesis() {
    assert_eq!(
        Expression::parse("(5+5"),
        Err(ExpressionError::UnexpectedEnd)
    );
}

#[test]
fn test_parse_rejects_unparenthesized_operator() {
    assert_eq!(
        Expression::parse("5+5"),
        Err(ExpressionError::UnexpectedCharacter {
            found: '+',
            position: 1
        })
    );
}

#[test]
fn test_parse_rejects_unknown_operator() {
    assert_eq!(
        Expression::parse("(5%5)"),
        Err(ExpressionError::UnexpectedCharacter {
            found: '%',
            position: 2
        })
    );
}

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(Expression::parse(""), Err(ExpressionError::UnexpectedEnd));
}

#[test]
fn test_parse_rejects_huge_literal() {
    let result = Expression::parse("99999999999999999999999");
    assert!(matches!(result, Err(ExpressionError::LiteralTooLarge(_))));
}

#[test]
fn test_evaluate_negative_subtraction() {
    let result = Expression::parse("(5-55)").and_then(|e| e.evaluate());
    assert_eq!(result, Err(ExpressionError::NegativeResult(5, 55)));
}

#[test]
fn test_evaluate_inexact_division() {
    let result = Expression::parse("(55/555)").and_then(|e| e.evaluate());
    assert_eq!(result, Err(ExpressionError::InexactDivision(55, 555)));
}

#[test]
fn test_uses_only_digit() {
    let result = Expression::parse("((5^5)-(5555/5))");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert!(expr.uses_only_digit(5));
        assert!(!expr.uses_only_digit(3));
        assert_eq!(expr.digit_count(), 7);
    }

    let mixed = Expression::binary(Operator::Add, Expression::Number(5), Expression::Number(15));
    assert!(!mixed.uses_only_digit(5));
}
