use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

struct Parser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn next_char(&mut self) -> Result<(usize, char), ExpressionError> {
        self.chars.next().ok_or(ExpressionError::UnexpectedEnd)
    }

    fn expression(&mut self) -> Result<Expression, ExpressionError> {
        match self.chars.peek().copied() {
            Some((_, '(')) => {
                self.chars.next();
                let left = self.expression()?;
                let (position, symbol) = self.next_char()?;
                let op = Operator::from_symbol(symbol).ok_or(
                    ExpressionError::UnexpectedCharacter {
                        found: symbol,
                        position,
                    },
                )?;
                let right = self.expression()?;
                match self.next_char()? {
                    (_, ')') => Ok(Expression::binary(op, left, right)),
                    (position, found) => {
                        Err(ExpressionError::UnexpectedCharacter { found, position })
                    }
                }
            }
            Some((start, c)) if c.is_ascii_digit() => {
                let mut end = start;
                while let Some(&(i, c)) = self.chars.peek()
                    && c.is_ascii_digit()
                {
                    end = i + c.len_utf8();
                    self.chars.next();
                }
                let literal = self.text.get(start..end).unwrap_or_default();
                literal
                    .parse::<u64>()
                    .map(Expression::Number)
                    .map_err(|_| ExpressionError::LiteralTooLarge(literal.to_string()))
            }
            Some((position, found)) => {
                Err(ExpressionError::UnexpectedCharacter { found, position })
            }
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

impl Expression {
    /// Parses the fully parenthesized form produced by the catalog builder.
    ///
    /// The grammar is `expr := number | '(' expr op expr ')'` with
    /// `op` one of `+ - * / ^`. Whitespace is not accepted.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed input, trailing characters, or a literal
    /// that does not fit in a `u64`.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        debug!("Parsing expression: '{}'", text);

        let mut parser = Parser::new(text);
        let expr = parser.expression()?;
        if let Some((position, found)) = parser.chars.next() {
            return Err(ExpressionError::UnexpectedCharacter { found, position });
        }
        Ok(expr)
    }
}
