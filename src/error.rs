/// Errors reported to callers of the engine.
///
/// Defines [`EvalError`], the single error type returned by every public entry
/// point, together with [`Expected`], which describes what the parser was
/// looking for when it met an unexpected token. Lexical, syntactic and
/// semantic failures are all variants of `EvalError` and carry the byte offset
/// at which they were detected.
pub mod eval_error;
/// Errors caused by bugs in the engine itself.
///
/// [`InternalError`] is kept apart from the user-facing variants so that a
/// caller can tell malformed input from a broken invariant.
pub mod internal_error;

pub use eval_error::{EvalError, Expected};
pub use internal_error::InternalError;
