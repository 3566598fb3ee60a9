//! Binary operator evaluation.

use quill_ir::BinaryOp;

use crate::Value;

/// Apply `op` to two evaluated operands.
///
/// Operators are defined on numbers only; any other operand type yields
/// `null` rather than an error. Division and remainder by zero yield an
/// infinity carrying the sign of the dividend.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    let (Value::Number(l), Value::Number(r)) = (left, right) else {
        return Value::Null;
    };
    let (l, r) = (*l, *r);
    match op {
        BinaryOp::Add => Value::Number(l + r),
        BinaryOp::Sub => Value::Number(l - r),
        BinaryOp::Mul => Value::Number(l * r),
        BinaryOp::Div => Value::Number(divide(l, r, |l, r| l / r)),
        BinaryOp::Mod => Value::Number(divide(l, r, |l, r| l % r)),
        BinaryOp::Lt => Value::Boolean(l < r),
        BinaryOp::Gt => Value::Boolean(l > r),
    }
}

fn divide(l: f64, r: f64, op: impl FnOnce(f64, f64) -> f64) -> f64 {
    if r == 0.0 {
        f64::INFINITY.copysign(l)
    } else {
        op(l, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(evaluate_binary(BinaryOp::Add, &num(1.0), &num(2.0)), num(3.0));
        assert_eq!(evaluate_binary(BinaryOp::Sub, &num(1.0), &num(2.0)), num(-1.0));
        assert_eq!(evaluate_binary(BinaryOp::Mul, &num(3.0), &num(2.5)), num(7.5));
        assert_eq!(evaluate_binary(BinaryOp::Div, &num(7.0), &num(2.0)), num(3.5));
        assert_eq!(evaluate_binary(BinaryOp::Mod, &num(7.0), &num(4.0)), num(3.0));
    }

    #[test]
    fn operand_order_is_preserved() {
        assert_eq!(evaluate_binary(BinaryOp::Sub, &num(10.0), &num(4.0)), num(6.0));
        assert_eq!(evaluate_binary(BinaryOp::Div, &num(8.0), &num(2.0)), num(4.0));
        assert_eq!(evaluate_binary(BinaryOp::Mod, &num(2.0), &num(8.0)), num(2.0));
    }

    #[test]
    fn comparisons() {
        assert_eq!(evaluate_binary(BinaryOp::Lt, &num(3.0), &num(5.0)), Value::Boolean(true));
        assert_eq!(evaluate_binary(BinaryOp::Gt, &num(5.0), &num(3.0)), Value::Boolean(true));
        assert_eq!(evaluate_binary(BinaryOp::Lt, &num(5.0), &num(5.0)), Value::Boolean(false));
    }

    #[test]
    fn division_by_zero_is_signed_infinity() {
        let inf = num(f64::INFINITY);
        let neg_inf = num(f64::NEG_INFINITY);
        assert_eq!(evaluate_binary(BinaryOp::Div, &num(5.0), &num(0.0)), inf);
        assert_eq!(evaluate_binary(BinaryOp::Mod, &num(5.0), &num(0.0)), inf);
        assert_eq!(evaluate_binary(BinaryOp::Div, &num(-5.0), &num(0.0)), neg_inf);
        assert_eq!(evaluate_binary(BinaryOp::Mod, &num(-5.0), &num(0.0)), neg_inf);
    }

    #[test]
    fn non_numbers_yield_null() {
        let s = Value::string("1");
        for op in [BinaryOp::Add, BinaryOp::Lt, BinaryOp::Div] {
            assert_eq!(evaluate_binary(op, &s, &num(1.0)), Value::Null);
            assert_eq!(evaluate_binary(op, &num(1.0), &Value::Null), Value::Null);
            assert_eq!(evaluate_binary(op, &Value::Boolean(true), &Value::Boolean(true)), Value::Null);
        }
    }
}
