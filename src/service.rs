use serde::Serialize;
use thiserror::Error;

use crate::{error::EvalError, evaluate};

/// Default limit on the length of an expression, in characters.
pub const DEFAULT_MAX_EXPRESSION_LENGTH: usize = 10_000;

/// Expression evaluated by [`EvaluatorService::health_check`].
const HEALTH_CHECK_EXPRESSION: &str = "2+2";

/// Message reported in place of an internal error.
const INTERNAL_ERROR_MESSAGE: &str = "Internal error while evaluating the expression.";

/// Outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The expression was evaluated.
    Ok,
    /// The expression was rejected.
    Fail,
}

/// The uniform envelope a caller returns for every request.
///
/// Successful requests carry a `result`, failed ones a `message`. Serialized
/// with `serde`, an envelope looks like
/// `{"status":"OK","result":4.0,"message":null}`. Non-finite results have no
/// JSON representation and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Whether the request succeeded.
    pub status:  Status,
    /// The value of the expression, on success.
    pub result:  Option<f64>,
    /// A human-readable note, always present on failure.
    pub message: Option<String>,
}

impl Response {
    /// Creates a success envelope.
    #[must_use]
    pub const fn ok(result: f64, message: Option<String>) -> Self {
        Self { status: Status::Ok,
               result: Some(result),
               message }
    }

    /// Creates a failure envelope.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self { status:  Status::Fail,
               result:  None,
               message: Some(message.into()), }
    }

    /// Maps an engine result to an envelope.
    ///
    /// Errors become their display message. Internal errors are replaced by a
    /// generic message so that no engine details reach the caller's client.
    ///
    /// # Example
    /// ```
    /// use arithmetic_engine::{
    ///     evaluate,
    ///     service::{Response, Status},
    /// };
    ///
    /// let response = Response::from_result(evaluate("1 +"));
    /// assert_eq!(response.status, Status::Fail);
    /// assert_eq!(response.message.as_deref(),
    ///            Some("Error at position 3: Unexpected end of expression."));
    /// ```
    #[must_use]
    pub fn from_result(result: Result<f64, EvalError>) -> Self {
        match result {
            Ok(value) => Self::ok(value, None),
            Err(err) => Self::from(&ServiceError::Eval(err)),
        }
    }
}

impl From<&ServiceError> for Response {
    fn from(err: &ServiceError) -> Self {
        if let ServiceError::Eval(eval) = err
           && eval.is_internal()
        {
            return Self::fail(INTERNAL_ERROR_MESSAGE);
        }
        Self::fail(err.to_string())
    }
}

/// Errors a caller reports for a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The expression is longer than the configured limit and was not
    /// evaluated.
    #[error("Expression is too long: {length} characters, but at most {limit} are allowed.")]
    TooLong {
        /// Length of the expression in characters.
        length: usize,
        /// The configured limit.
        limit:  usize,
    },
    /// The engine rejected the expression.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Configuration of an [`EvaluatorService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Longest accepted expression, in characters. `None` accepts any length.
    pub max_expression_length: Option<usize>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { max_expression_length: Some(DEFAULT_MAX_EXPRESSION_LENGTH) }
    }
}

/// A calling layer around [`evaluate`].
///
/// The service holds only its configuration, so one instance can be shared
/// across threads and requests.
///
/// # Example
/// ```
/// use arithmetic_engine::service::{EvaluatorService, ServiceConfig, ServiceError};
///
/// let service = EvaluatorService::new(ServiceConfig { max_expression_length: Some(5) });
/// assert_eq!(service.try_evaluate("1+2*3"), Ok(7.0));
/// assert_eq!(service.try_evaluate("1 + 2 * 3"),
///            Err(ServiceError::TooLong { length: 9,
///                                        limit:  5 }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvaluatorService {
    config: ServiceConfig,
}

impl EvaluatorService {
    /// Creates a service with the given configuration.
    #[must_use]
    pub const fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the service.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Checks an expression against the configured length limit.
    pub fn check_length(&self, expression: &str) -> Result<(), ServiceError> {
        let Some(limit) = self.config.max_expression_length else {
            return Ok(());
        };

        let length = expression.chars().count();
        if length > limit {
            tracing::warn!(length, limit, "rejected overlong expression");
            return Err(ServiceError::TooLong { length, limit });
        }

        Ok(())
    }

    /// Evaluates an expression after checking its length.
    pub fn try_evaluate(&self, expression: &str) -> Result<f64, ServiceError> {
        self.check_length(expression)?;
        let value = evaluate(expression).inspect_err(|err| {
                                             if err.is_internal() {
                                                 tracing::error!(%err, "engine invariant violated");
                                             } else {
                                                 tracing::debug!(%err, "rejected expression");
                                             }
                                         })?;
        Ok(value)
    }

    /// Evaluates an expression and wraps the outcome in an envelope.
    #[must_use]
    pub fn evaluate(&self, expression: &str) -> Response {
        match self.try_evaluate(expression) {
            Ok(value) => Response::ok(value, None),
            Err(err) => Response::from(&err),
        }
    }

    /// Evaluates `2+2` to show that the engine works.
    ///
    /// # Example
    /// ```
    /// use arithmetic_engine::service::{EvaluatorService, Status};
    ///
    /// let response = EvaluatorService::default().health_check();
    /// assert_eq!(response.status, Status::Ok);
    /// assert_eq!(response.result, Some(4.0));
    /// assert_eq!(response.message.as_deref(), Some("2 + 2 = 4.0"));
    /// ```
    #[must_use]
    pub fn health_check(&self) -> Response {
        match evaluate(HEALTH_CHECK_EXPRESSION) {
            Ok(result) => Response::ok(result, Some(format!("2 + 2 = {result:?}"))),
            Err(err) => Response::from(&ServiceError::Eval(err)),
        }
    }
}
