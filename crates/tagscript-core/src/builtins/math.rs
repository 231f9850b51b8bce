//! Integer arithmetic placeholders
//!
//! Arguments that are not integers make `sub`, `mul` and `div` render `0`;
//! `sum` skips them. Overflow is a handler error.

use serde_json::{json, Value};

use super::args::{at_most, parse_int, required};
use crate::interpolation::{HandlerDescriptor, HandlerError, HandlerResult};

pub(crate) fn handlers<C: 'static>() -> Vec<HandlerDescriptor<C>> {
    vec![
        HandlerDescriptor::sync_function("sum", |_, _, args| sum(&args)),
        HandlerDescriptor::sync_function("sub", |_, _, args| sub(&args)),
        HandlerDescriptor::sync_function("mul", |_, _, args| mul(&args)),
        HandlerDescriptor::sync_function("div", |_, _, args| div(&args)),
    ]
}

fn overflow() -> HandlerError {
    HandlerError::failed("integer overflow")
}

/// Both operands, or `None` if either is not an integer
fn operands(args: &[String]) -> Result<Option<(i64, i64)>, HandlerError> {
    at_most(args, 2)?;
    let a = required(args, 0)?;
    let b = required(args, 1)?;
    Ok(parse_int(a).zip(parse_int(b)))
}

/// `{sum:a;b;...}`
pub fn sum(args: &[String]) -> HandlerResult {
    let mut total: i64 = 0;
    for value in args.iter().filter_map(|arg| parse_int(arg)) {
        total = total.checked_add(value).ok_or_else(overflow)?;
    }
    Ok(json!(total))
}

/// `{sub:a;b}`
pub fn sub(args: &[String]) -> HandlerResult {
    match operands(args)? {
        Some((a, b)) => Ok(json!(a.checked_sub(b).ok_or_else(overflow)?)),
        None => Ok(json!(0)),
    }
}

/// `{mul:a;b}`
pub fn mul(args: &[String]) -> HandlerResult {
    match operands(args)? {
        Some((a, b)) => Ok(json!(a.checked_mul(b).ok_or_else(overflow)?)),
        None => Ok(json!(0)),
    }
}

/// `{div:a;b}`, rounding toward negative infinity
///
/// A zero divisor renders `undefined`.
pub fn div(args: &[String]) -> HandlerResult {
    at_most(args, 2)?;
    let a = required(args, 0)?;
    let b = required(args, 1)?;

    // Divisor first: a zero divisor wins over an invalid dividend
    let Some(divisor) = parse_int(b) else {
        return Ok(json!(0));
    };
    if divisor == 0 {
        return Ok(Value::String("undefined".to_string()));
    }
    let Some(dividend) = parse_int(a) else {
        return Ok(json!(0));
    };
    Ok(json!(floor_div(dividend, divisor).ok_or_else(overflow)?))
}

fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}
