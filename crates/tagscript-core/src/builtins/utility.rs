//! Reaction marker and conditional placeholders

use serde_json::{json, Value};

use super::args::{at_most, optional, required};
use crate::interpolation::{HandlerDescriptor, HandlerResult, RenderResult};

pub(crate) fn handlers<C: 'static>() -> Vec<HandlerDescriptor<C>> {
    vec![
        HandlerDescriptor::sync_function("emoji", |_, result, args| emoji(result, &args)),
        HandlerDescriptor::sync_function("if", |_, _, args| condition(&args)),
    ]
}

/// `{emoji:marker}` records a tag and renders nothing
pub fn emoji(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    at_most(args, 1)?;
    result.add_tag(required(args, 0)?);
    Ok(Value::Null)
}

/// `{if:cond;then;else}`
pub fn condition(args: &[String]) -> HandlerResult {
    at_most(args, 3)?;
    let cond = required(args, 0)?;
    let then = required(args, 1)?;
    let otherwise = optional(args, 2, "");

    if is_truthy(cond) {
        Ok(json!(then))
    } else {
        Ok(json!(otherwise))
    }
}

/// Anything but empty, `0`, `false` or `no` (any case)
pub fn is_truthy(value: &str) -> bool {
    !matches!(value.to_lowercase().as_str(), "" | "0" | "false" | "no")
}
