/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST produced by the parser and applies IEEE-754
/// double arithmetic to it. It is the only phase that can fail on a
/// well-formed expression, namely on division by zero.
///
/// # Responsibilities
/// - Evaluates AST nodes without recursion.
/// - Reports division by zero instead of producing infinity or NaN.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and lazily produces tokens for numbers,
/// operators and parentheses, each with the offset it starts at, followed by
/// an end marker.
///
/// # Responsibilities
/// - Skips whitespace and recognizes number literals and operators.
/// - Reports the first character that does not start a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the token stream that
/// encodes operator precedence and associativity in its call structure.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] trees.
/// - Reports unexpected tokens, missing operands, trailing input and empty
///   input with their positions.
pub mod parser;
