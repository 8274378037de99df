use thiserror::Error;

/// A violated invariant inside the engine.
///
/// None of these can be triggered by input: the lexer always terminates the
/// token stream with an end marker and the evaluator's stack discipline is
/// fixed by the shape of the tree. Seeing one means the engine has a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// The parser consumed the end marker and asked for another token.
    #[error("Internal error: Token stream ended without an end marker.")]
    TokenStreamExhausted,
    /// An operator found fewer operands on the value stack than it needs.
    #[error("Internal error: Missing operand for '{operator}'.")]
    MissingOperand {
        /// The operator being applied.
        operator: &'static str,
    },
    /// The tree walk finished with a number of values other than one.
    #[error("Internal error: Evaluation left {count} values on the stack.")]
    UnbalancedStack {
        /// How many values were left.
        count: usize,
    },
}
