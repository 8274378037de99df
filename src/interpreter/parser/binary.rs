use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `1 - 2 - 3`
/// parses as `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `depth`: Current nesting depth, passed through to the operands.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some(Lexeme { token, offset }) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *offset;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`, so `8 / 4 / 2` parses as
/// `(8 / 4) / 2`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// There is no implicit multiplication: in `2(3)` the parenthesis is left
/// unconsumed and rejected by the caller.
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `depth`: Current nesting depth, passed through to the operands.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some(Lexeme { token, offset }) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = *offset;
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, and `None` for all
/// other tokens. Whether `+` and `-` are read as binary or unary depends on
/// the position in the grammar, not on the token.
///
/// # Example
/// ```
/// use arithmetic_engine::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
