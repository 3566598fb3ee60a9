#![allow(clippy::unwrap_used, reason = "generated inputs are valid by construction")]

use super::{eval, interpreter, run_in};
use crate::Value;
use proptest::prelude::*;

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(n in any::<u32>()) {
        prop_assert_eq!(eval(&n.to_string()), Value::Number(f64::from(n)));
    }

    #[test]
    fn digit_runs_evaluate_to_their_parsed_value(digits in "[0-9]{1,40}") {
        let expected: f64 = digits.parse().unwrap();
        prop_assert_eq!(eval(&digits), Value::Number(expected));
    }

    #[test]
    fn arithmetic_matches_host_arithmetic(a in 0u16..1000, b in 1u16..1000) {
        let (x, y) = (f64::from(a), f64::from(b));
        prop_assert_eq!(eval(&format!("{a} + {b}")), Value::Number(x + y));
        prop_assert_eq!(eval(&format!("{a} - {b}")), Value::Number(x - y));
        prop_assert_eq!(eval(&format!("{a} * {b}")), Value::Number(x * y));
        prop_assert_eq!(eval(&format!("{a} / {b}")), Value::Number(x / y));
        prop_assert_eq!(eval(&format!("{a} % {b}")), Value::Number(x % y));
        prop_assert_eq!(eval(&format!("{a} < {b}")), Value::Boolean(x < y));
    }

    #[test]
    fn declared_values_read_back(n in any::<u32>()) {
        let mut interp = interpreter();
        let declared = run_in(&mut interp, &format!("let value = {n};")).unwrap();
        prop_assert_eq!(declared.clone(), Value::Number(f64::from(n)));
        prop_assert_eq!(run_in(&mut interp, "value").unwrap(), declared);
    }
}
