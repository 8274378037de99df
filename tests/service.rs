use arithmetic_engine::{
    error::EvalError,
    evaluate,
    service::{
        DEFAULT_MAX_EXPRESSION_LENGTH, EvaluatorService, Response, ServiceConfig, ServiceError,
        Status,
    },
};
use pretty_assertions::assert_eq;

fn limited(limit: usize) -> EvaluatorService {
    EvaluatorService::new(ServiceConfig { max_expression_length: Some(limit) })
}

#[test]
fn default_config_uses_the_default_limit() {
    assert_eq!(EvaluatorService::default().config().max_expression_length,
               Some(DEFAULT_MAX_EXPRESSION_LENGTH));
}

#[test]
fn success_envelope() {
    assert_eq!(EvaluatorService::default().evaluate("6 * 7"),
               Response { status:  Status::Ok,
                          result:  Some(42.0),
                          message: None, });
}

#[test]
fn failure_envelope_carries_the_diagnostic() {
    assert_eq!(EvaluatorService::default().evaluate("1 / 0"),
               Response { status:  Status::Fail,
                          result:  None,
                          message: Some("Error at position 2: Division by zero.".to_string()), });
}

#[test]
fn length_is_checked_before_evaluation() {
    let service = limited(3);
    assert_eq!(service.try_evaluate("1+2"), Ok(3.0));
    assert_eq!(service.try_evaluate("1 / 0"),
               Err(ServiceError::TooLong { length: 5,
                                           limit:  3, }));
    assert_eq!(service.evaluate("1 + 2").message.as_deref(),
               Some("Expression is too long: 5 characters, but at most 3 are allowed."));
}

#[test]
fn length_counts_characters() {
    let service = limited(3);
    assert_eq!(service.check_length("ééé"), Ok(()));
    assert!(service.check_length("éééé").is_err());
}

#[test]
fn length_limit_can_be_disabled() {
    let service = EvaluatorService::new(ServiceConfig { max_expression_length: None });
    let sum = vec!["1"; 20_000].join("+");
    assert_eq!(service.try_evaluate(&sum), Ok(20_000.0));
}

#[test]
fn engine_errors_pass_through() {
    assert_eq!(EvaluatorService::default().try_evaluate(""),
               Err(ServiceError::Eval(EvalError::EmptyExpression)));
}

#[test]
fn from_result_maps_both_outcomes() {
    assert_eq!(Response::from_result(evaluate("2+2")), Response::ok(4.0, None));
    assert_eq!(Response::from_result(evaluate("")), Response::fail("Expression is empty."));
}

#[test]
fn internal_errors_are_not_leaked() {
    let err = EvalError::Internal(arithmetic_engine::error::InternalError::UnbalancedStack { count: 2 });
    let response = Response::from_result(Err(err));
    assert_eq!(response.status, Status::Fail);
    assert_eq!(response.message.as_deref(),
               Some("Internal error while evaluating the expression."));
}

#[test]
fn health_check_reports_two_plus_two() {
    assert_eq!(EvaluatorService::default().health_check(),
               Response::ok(4.0, Some("2 + 2 = 4.0".to_string())));
}

#[test]
fn envelopes_serialize_to_json() {
    let ok = serde_json::to_string(&Response::ok(4.0, None)).unwrap();
    assert_eq!(ok, r#"{"status":"OK","result":4.0,"message":null}"#);

    let fail = serde_json::to_string(&Response::fail("Expression is empty.")).unwrap();
    assert_eq!(fail, r#"{"status":"FAIL","result":null,"message":"Expression is empty."}"#);
}

#[test]
fn infinite_results_serialize_as_null() {
    let huge = format!("1{}", "0".repeat(400));
    let response = EvaluatorService::default().evaluate(&huge);
    assert_eq!(response.result, Some(f64::INFINITY));
    assert_eq!(serde_json::to_string(&response).unwrap(),
               r#"{"status":"OK","result":null,"message":null}"#);
}
