use std::{fmt, iter::FusedIterator};

use logos::Logos;

use crate::error::EvalError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. Signs and exponents are
    /// not part of a literal.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched in the source; [`Tokens`] appends it after
    /// the last real token.
    End,
    /// ASCII whitespace.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of expression"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Lexeme {
    /// The token.
    pub token:  Token,
    /// Byte offset of the first character of the token. For [`Token::End`]
    /// this is the length of the source.
    pub offset: usize,
}

/// A lazy stream of [`Lexeme`]s over a source string.
///
/// The stream yields every token of the source followed by exactly one
/// [`Token::End`]. The first character that does not start a token produces an
/// [`EvalError::UnexpectedChar`] and the stream stops there. It cannot be
/// resumed; call [`tokenize`] again to start over.
pub struct Tokens<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Lexeme, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(token)) => Some(Ok(Lexeme { token,
                                                offset: self.inner.span().start })),
            Some(Err(())) => {
                self.finished = true;
                let position = self.inner.span().start;
                let character = self.source[position..].chars().next().unwrap_or_default();
                Some(Err(EvalError::UnexpectedChar { position, character }))
            },
            None => {
                self.finished = true;
                Some(Ok(Lexeme { token:  Token::End,
                                 offset: self.source.len(), }))
            },
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Starts tokenizing `source`.
///
/// Nothing is read until the returned iterator is polled.
///
/// # Example
/// ```
/// use arithmetic_engine::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("2 * (1.5)").map(|lexeme| lexeme.unwrap().token)
///                                               .collect();
/// assert_eq!(tokens,
///            [Token::Number(2.0),
///             Token::Star,
///             Token::LParen,
///             Token::Number(1.5),
///             Token::RParen,
///             Token::End]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens { source,
             inner: Token::lexer(source),
             finished: false }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Literals too large for `f64` become
///   infinity.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Result<Vec<Lexeme>, EvalError> {
        tokenize(source).collect()
    }

    fn kinds(source: &str) -> Vec<Token> {
        lex(source).unwrap().into_iter().map(|lexeme| lexeme.token).collect()
    }

    #[test]
    fn all_basic_tokens_are_recognized() {
        assert_eq!(kinds("+-*/()"),
                   [Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::End]);
    }

    #[test]
    fn empty_and_blank_input_yield_only_end() {
        assert_eq!(lex("").unwrap(),
                   [Lexeme { token:  Token::End,
                             offset: 0, }]);
        assert_eq!(lex(" \t\r\n ").unwrap(),
                   [Lexeme { token:  Token::End,
                             offset: 5, }]);
    }

    #[test]
    fn numbers_are_read_with_their_offsets() {
        assert_eq!(lex("5 75  0.25").unwrap(),
                   [Lexeme { token:  Token::Number(5.0),
                             offset: 0, },
                    Lexeme { token:  Token::Number(75.0),
                             offset: 2, },
                    Lexeme { token:  Token::Number(0.25),
                             offset: 6, },
                    Lexeme { token:  Token::End,
                             offset: 10, }]);
    }

    #[test]
    fn signs_are_separate_tokens() {
        assert_eq!(kinds("-3"), [Token::Minus, Token::Number(3.0), Token::End]);
    }

    #[test]
    fn invalid_symbols_report_their_position() {
        for (source, position, character) in
            [("%", 0, '%'), ("123+456=579", 7, '='), ("abc", 0, 'a'), ("1e5", 1, 'e')]
        {
            assert_eq!(lex(source),
                       Err(EvalError::UnexpectedChar { position, character }),
                       "input: {source:?}");
        }
    }

    #[test]
    fn incomplete_decimals_are_rejected() {
        assert!(matches!(lex("1."), Err(EvalError::UnexpectedChar { .. })));
        assert_eq!(lex(".5"),
                   Err(EvalError::UnexpectedChar { position:  0,
                                                   character: '.', }));
        assert_eq!(lex("1,5"),
                   Err(EvalError::UnexpectedChar { position:  1,
                                                   character: ',', }));
    }

    #[test]
    fn stream_stops_after_an_error() {
        let mut tokens = tokenize("1 # 2");
        assert!(matches!(tokens.next(), Some(Ok(Lexeme { token: Token::Number(_), .. }))));
        assert!(matches!(tokens.next(), Some(Err(EvalError::UnexpectedChar { .. }))));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn stream_is_fused_after_end() {
        let mut tokens = tokenize("7");
        assert_eq!(tokens.by_ref().count(), 2);
        assert_eq!(tokens.next(), None);
    }
}
