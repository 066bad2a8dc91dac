//! Binary and unary operator semantics.
//!
//! The operand types are a closed set, so dispatch is a direct match.

use std::rc::Rc;

use lox_ir::{BinaryOp, UnaryOp};

use crate::{EvalErrorKind, OperandRule, Value};

/// Apply a binary operator to evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => numeric(left, right, |a, b| Value::Number(a - b)),
        BinaryOp::Mul => numeric(left, right, |a, b| Value::Number(a * b)),
        // IEEE: division by zero yields an infinity or NaN.
        BinaryOp::Div => numeric(left, right, |a, b| Value::Number(a / b)),
        BinaryOp::Lt => numeric(left, right, |a, b| Value::Bool(a < b)),
        BinaryOp::LtEq => numeric(left, right, |a, b| Value::Bool(a <= b)),
        BinaryOp::Gt => numeric(left, right, |a, b| Value::Bool(a > b)),
        BinaryOp::GtEq => numeric(left, right, |a, b| Value::Bool(a >= b)),
    }
}

#[inline]
fn numeric(left: &Value, right: &Value, f: fn(f64, f64) -> Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(f(*a, *b)),
        _ => Err(EvalErrorKind::TypeMismatch(OperandRule::Numbers)),
    }
}

/// `+` adds two numbers or concatenates two strings.
fn add(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        _ => Err(EvalErrorKind::TypeMismatch(OperandRule::NumbersOrStrings)),
    }
}

/// Apply a unary operator to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(EvalErrorKind::TypeMismatch(OperandRule::Number)),
        },
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}
