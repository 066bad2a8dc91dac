//! Expression evaluation.

use std::rc::Rc;

use lox_ir::{ExprId, ExprKind, Ident, Literal, LogicalOp, Name};
use lox_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use super::Interpreter;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalError, EvalErrorKind, EvalResult, PropertyAccess, Value};

impl Interpreter {
    /// Evaluate an expression of the current unit.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.unit.arena.get_expr(id);
        match expr.kind {
            ExprKind::Literal(literal) => Ok(self.literal_value(literal)),
            ExprKind::Grouping(inner) => self.eval_expr(inner),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(op, &operand).map_err(|kind| kind.at_line(expr.line))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(op, &left, &right).map_err(|kind| kind.at_line(expr.line))
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.eval_expr(left)?;
                let decided = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.eval_expr(right)
                }
            }
            ExprKind::Variable(ident) => self.look_up_variable(id, ident),
            ExprKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                let assigned = match self.unit.table.get(id) {
                    Some(distance) => self.env.assign_at(distance, target.name, value.clone()),
                    None => self.globals().assign(target.name, value.clone()),
                };
                assigned.map_err(|_| self.undefined_variable(target))?;
                Ok(value)
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee)?;
                let unit = Rc::clone(&self.unit);
                let mut values: SmallVec<[Value; 8]> = SmallVec::new();
                for &arg in unit.arena.get_expr_list(args) {
                    values.push(self.eval_expr(arg)?);
                }
                self.call_value(&callee, &values, expr.line)
            }
            ExprKind::Get { object, name } => {
                let Value::Instance(instance) = self.eval_expr(object)? else {
                    return Err(EvalErrorKind::PropertyOnNonInstance(PropertyAccess::Get)
                        .at_line(name.line));
                };
                instance
                    .get(name.name)
                    .ok_or_else(|| self.undefined_property(name))
            }
            ExprKind::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.eval_expr(object)? else {
                    return Err(EvalErrorKind::PropertyOnNonInstance(PropertyAccess::Set)
                        .at_line(name.line));
                };
                let value = self.eval_expr(value)?;
                instance.set(name.name, value.clone());
                Ok(value)
            }
            ExprKind::This => self.look_up_variable(id, Ident::new(Name::THIS, expr.line)),
            ExprKind::Super { method } => self.eval_super(id, method, expr.line),
        }
    }

    fn literal_value(&self, literal: Literal) -> Value {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(bits) => Value::Number(f64::from_bits(bits)),
            Literal::Str(name) => Value::Str(Rc::from(self.name_str(name))),
        }
    }

    fn undefined_property(&self, name: Ident) -> EvalError {
        EvalErrorKind::UndefinedProperty(self.name_str(name.name).to_string()).at_line(name.line)
    }

    /// `super.method`: look the method up starting at the superclass bound
    /// around the enclosing class's methods, and bind it to the current
    /// `this`, which lives one scope closer.
    fn eval_super(&mut self, id: ExprId, method: Ident, line: u32) -> EvalResult {
        let super_ident = Ident::new(Name::SUPER, line);
        let this_ident = Ident::new(Name::THIS, line);

        let Some(distance) = self.unit.table.get(id) else {
            return Err(self.undefined_variable(super_ident));
        };
        let superclass = self
            .env
            .get_at(distance, Name::SUPER)
            .map_err(|_| self.undefined_variable(super_ident))?;
        let Value::Class(superclass) = superclass else {
            return Err(EvalErrorKind::SuperclassNotAClass.at_line(line));
        };

        let instance = distance
            .checked_sub(1)
            .and_then(|d| self.env.get_at(d, Name::THIS).ok());
        let Some(Value::Instance(instance)) = instance else {
            return Err(self.undefined_variable(this_ident));
        };

        let found = superclass
            .find_method(method.name)
            .ok_or_else(|| self.undefined_property(method))?;
        Ok(Value::Function(Rc::new(found.bind(instance))))
    }
}
