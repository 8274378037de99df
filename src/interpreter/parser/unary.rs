use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::{EvalError, Expected},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::{ParseResult, nest, parse_expression, peek},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators bind tighter than any binary operator and may be chained,
/// so `--3` is parsed as `-(-3)` and `-2 * 3` as `(-2) * 3`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
///
/// # Errors
/// Returns [`EvalError::NestingTooDeep`] if the operator chain exceeds the
/// nesting limit.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let &Lexeme { token, offset } = peek(tokens)?;
    let op = match token {
        Token::Minus => UnaryOperator::Neg,
        Token::Plus => UnaryOperator::Pos,
        _ => return parse_primary(tokens, depth),
    };

    let depth = nest(depth, offset)?;
    tokens.next();
    let operand = parse_unary(tokens, depth)?;

    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       position: offset })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - [`EvalError::UnexpectedEnd`] if the input ends where an operand is
///   required, as in `2 +`.
/// - [`EvalError::UnexpectedToken`] for any other token, as in `2 + *`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let &Lexeme { token, offset } = peek(tokens)?;

    match token {
        Token::Number(value) => {
            tokens.next();
            Ok(Expr::Literal { value,
                               position: offset })
        },
        Token::LParen => parse_grouping(tokens, depth),
        Token::End => Err(EvalError::UnexpectedEnd { position: offset }),
        found => Err(EvalError::UnexpectedToken { position: offset,
                                                  expected: Expected::Operand,
                                                  found }),
    }
}

/// Parses an expression in parentheses.
///
/// The group itself leaves no trace in the tree; it only decides how the
/// enclosed operators are grouped.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The enclosed expression.
///
/// # Errors
/// - [`EvalError::NestingTooDeep`] if the group exceeds the nesting limit.
/// - [`EvalError::UnexpectedEnd`] if the input ends before the closing `)`.
/// - [`EvalError::UnexpectedToken`] if another token stands where `)` is
///   required.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let &Lexeme { offset, .. } = peek(tokens)?;
    let depth = nest(depth, offset)?;
    tokens.next();

    let expr = parse_expression(tokens, depth)?;

    let &Lexeme { token, offset } = peek(tokens)?;
    match token {
        Token::RParen => {
            tokens.next();
            Ok(expr)
        },
        Token::End => Err(EvalError::UnexpectedEnd { position: offset }),
        found => Err(EvalError::UnexpectedToken { position: offset,
                                                  expected: Expected::ClosingParen,
                                                  found }),
    }
}
