use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unsupported_operation_message() {
    let err = unsupported_operation(Operator::Intersect, ValueKind::Float);
    assert_eq!(
        err.kind(),
        &OpErrorKind::UnsupportedOperation {
            operator: Operator::Intersect,
            kind: ValueKind::Float,
        }
    );
    assert_eq!(err.to_string(), "Cannot perform operation '^' on Float");
}

#[test]
fn test_arity_mismatch_message() {
    assert_eq!(
        arity_mismatch(Operator::Negate, Arity::Unary, 2).to_string(),
        "operator '_' expects 1 operand, got 2"
    );
    assert_eq!(
        arity_mismatch(Operator::Add, Arity::Binary, 1).to_string(),
        "operator '+' expects 2 operands, got 1"
    );
}

#[test]
fn test_message_matches_kind() {
    let errors = [
        arity_mismatch(Operator::Add, Arity::Binary, 3),
        void_operand(Operator::Not),
        unsupported_operation(Operator::Add, ValueKind::DivertTarget),
        division_by_zero(),
        modulo_by_zero(),
        unknown_operator("**"),
    ];
    for err in errors {
        assert_eq!(err.message(), err.kind().to_string());
        assert_eq!(err.to_string(), err.message());
    }
}

#[test]
fn test_void_operand_carries_guidance() {
    let err = void_operand(Operator::Add);
    assert_eq!(
        err.kind(),
        &OpErrorKind::VoidOperand {
            operator: Operator::Add
        }
    );
    assert!(err.message().contains("void value"));
    assert!(err.message().contains("'return'"));
}

#[test]
fn test_cast_error_is_transparent() {
    let cast = CastError::Unsupported {
        from: ValueKind::DivertTarget,
        to: ValueKind::Int,
    };
    let err = OpError::from(cast.clone());
    assert_eq!(err.kind(), &OpErrorKind::Cast(cast.clone()));
    assert_eq!(err.to_string(), cast.to_string());
    assert_eq!(err.into_kind(), OpErrorKind::Cast(cast));
}

#[test]
fn test_cast_error_is_source() {
    use std::error::Error as _;

    let err = OpError::from(CastError::Void { to: ValueKind::Int });
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("cannot cast a void value to Int"));
    assert!(division_by_zero().source().is_none());
}

#[test]
fn test_division_errors_are_grouped() {
    assert!(division_by_zero().is_division_by_zero());
    assert!(modulo_by_zero().is_division_by_zero());
    assert!(!unknown_operator("??").is_division_by_zero());
    assert_eq!(division_by_zero().kind(), &OpErrorKind::DivisionByZero);
    assert_eq!(modulo_by_zero().kind(), &OpErrorKind::ModuloByZero);
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(modulo_by_zero().to_string(), "modulo by zero");
}

#[test]
fn test_operand_mismatch_classifies_void() {
    assert_eq!(
        operand_mismatch(Operator::Add, &Value::Void).kind(),
        &OpErrorKind::VoidOperand {
            operator: Operator::Add
        }
    );
    assert_eq!(
        operand_mismatch(Operator::Add, &Value::string("x")).kind(),
        &OpErrorKind::UnsupportedOperation {
            operator: Operator::Add,
            kind: ValueKind::String
        }
    );
}

#[test]
fn test_unknown_operator_message() {
    let err = unknown_operator("**");
    assert_eq!(
        err.kind(),
        &OpErrorKind::UnknownOperator {
            symbol: "**".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown native operator '**'");
}
