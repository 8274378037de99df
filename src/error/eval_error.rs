use std::fmt;

use thiserror::Error;

use crate::{error::InternalError, interpreter::lexer::Token};

/// Represents every way an evaluation can fail.
///
/// Positions are byte offsets into the source string. The lexer rejects any
/// non-ASCII character before it can appear in front of a later token, so for
/// every error produced from real input the byte offset equals the character
/// offset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The lexer met a character that does not start any token.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedChar {
        /// Offset of the offending character.
        position:  usize,
        /// The offending character.
        character: char,
    },
    /// The parser met a token that cannot appear at this point.
    #[error("Error at position {position}: Expected {expected}, but found {found}.")]
    UnexpectedToken {
        /// Offset of the offending token.
        position: usize,
        /// What the parser was looking for.
        expected: Expected,
        /// The token that was found instead.
        found:    Token,
    },
    /// The input ended while an operand or a closing parenthesis was still
    /// required.
    #[error("Error at position {position}: Unexpected end of expression.")]
    UnexpectedEnd {
        /// Offset of the end of input, i.e. the length of the source.
        position: usize,
    },
    /// The right-hand side of a division evaluated to zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Offset of the `/` operator.
        position: usize,
    },
    /// The input contained no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// Prefix operators and parentheses were nested deeper than the parser
    /// allows.
    #[error("Error at position {position}: Expression is nested too deeply, at most {limit} levels are allowed.")]
    NestingTooDeep {
        /// Offset of the operator or parenthesis that exceeded the limit.
        position: usize,
        /// The nesting limit.
        limit:    usize,
    },
    /// An invariant of the engine was violated. This is never caused by the
    /// input and indicates a bug.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl EvalError {
    /// Returns the offset the error refers to, if it has one.
    ///
    /// # Example
    /// ```
    /// use arithmetic_engine::evaluate;
    ///
    /// let err = evaluate("1 + 2 / 0").unwrap_err();
    /// assert_eq!(err.position(), Some(6));
    ///
    /// let err = evaluate("   ").unwrap_err();
    /// assert_eq!(err.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedChar { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEnd { position }
            | Self::DivisionByZero { position }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::EmptyExpression | Self::Internal(_) => None,
        }
    }

    /// Returns `true` if the error is an engine bug rather than a problem with
    /// the input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// What the parser was looking for when it reported
/// [`EvalError::UnexpectedToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A number, a prefix operator or an opening parenthesis.
    Operand,
    /// The `)` closing a group.
    ClosingParen,
    /// The end of the input; anything else is trailing garbage.
    End,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand => write!(f, "a number or '('"),
            Self::ClosingParen => write!(f, "')'"),
            Self::End => write!(f, "end of expression"),
        }
    }
}
