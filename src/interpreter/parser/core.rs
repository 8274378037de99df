use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{EvalError, Expected, InternalError},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Maximum number of prefix operators and parentheses that may enclose one
/// another.
///
/// Only these two constructs make the parser recurse. Binary operator chains
/// are parsed in a loop and are not limited.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parses a complete token stream into an expression tree.
///
/// The stream must end with [`Token::End`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). The whole stream has to
/// form a single expression: empty input and tokens left over after the
/// expression are both errors.
///
/// Grammar: `input := expression END`
///
/// # Parameters
/// - `tokens`: All lexemes of the source, including the final end marker.
///
/// # Returns
/// The root node of the parsed expression.
///
/// # Errors
/// - [`EvalError::EmptyExpression`] if the stream holds only the end marker.
/// - [`EvalError::UnexpectedToken`] if tokens remain after the expression.
/// - Anything reported by the lower grammar levels.
///
/// # Example
/// ```
/// use arithmetic_engine::{
///     error::{EvalError, Expected},
///     interpreter::{
///         lexer::{Token, tokenize},
///         parser::core::parse,
///     },
/// };
///
/// let tokens: Vec<_> = tokenize("2 + 2 3").collect::<Result<_, _>>().unwrap();
/// assert_eq!(parse(&tokens),
///            Err(EvalError::UnexpectedToken { position: 6,
///                                             expected: Expected::End,
///                                             found:    Token::Number(3.0) }));
/// ```
pub fn parse(tokens: &[Lexeme]) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();

    if peek(&mut tokens)?.token == Token::End {
        return Err(EvalError::EmptyExpression);
    }

    let expr = parse_expression(&mut tokens, 0)?;
    expect_end(&mut tokens)?;

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, both at the top level and
/// inside parentheses. It begins at the lowest-precedence level, addition, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
/// - `depth`: Number of prefix operators and groups enclosing this point.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    parse_additive(tokens, depth)
}

/// Checks that every token up to the end marker has been consumed.
fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Lexeme>
{
    match *peek(tokens)? {
        Lexeme { token: Token::End, .. } => Ok(()),
        Lexeme { token, offset } => Err(EvalError::UnexpectedToken { position: offset,
                                                                     expected: Expected::End,
                                                                     found:    token, }),
    }
}

/// Returns the next lexeme without consuming it.
///
/// The end marker is never consumed, so running out of lexemes means the
/// stream was built without one.
///
/// # Errors
/// Returns [`InternalError::TokenStreamExhausted`] if no lexeme is left.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>)
                                                  -> ParseResult<&'a Lexeme>
    where I: Iterator<Item = &'a Lexeme>
{
    tokens.peek()
          .copied()
          .ok_or(EvalError::Internal(InternalError::TokenStreamExhausted))
}

/// Enters one more level of nesting.
///
/// # Parameters
/// - `depth`: Current nesting depth.
/// - `position`: Offset of the operator or parenthesis opening the new level.
///
/// # Returns
/// The depth for the new level.
///
/// # Errors
/// Returns [`EvalError::NestingTooDeep`] once [`MAX_NESTING_DEPTH`] levels
/// are already open.
pub(in crate::interpreter::parser) const fn nest(depth: usize,
                                                 position: usize)
                                                 -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        Err(EvalError::NestingTooDeep { position,
                                        limit: MAX_NESTING_DEPTH })
    } else {
        Ok(depth + 1)
    }
}
