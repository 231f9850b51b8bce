//! Text placeholders

use serde_json::json;

use super::args::{at_most, parse_int, required};
use crate::config::consts::text::MAX_REPEAT;
use crate::interpolation::{HandlerDescriptor, HandlerResult};

pub(crate) fn handlers<C: 'static>() -> Vec<HandlerDescriptor<C>> {
    vec![
        HandlerDescriptor::sync_function("upper", |_, _, args| upper(&args)),
        HandlerDescriptor::sync_function("lower", |_, _, args| lower(&args)),
        HandlerDescriptor::sync_function("title", |_, _, args| title(&args)),
        HandlerDescriptor::sync_function("length", |_, _, args| length(&args)),
        HandlerDescriptor::sync_function("repeat", |_, _, args| repeat(&args)),
    ]
}

/// `{upper:text}`
pub fn upper(args: &[String]) -> HandlerResult {
    at_most(args, 1)?;
    Ok(json!(required(args, 0)?.to_uppercase()))
}

/// `{lower:text}`
pub fn lower(args: &[String]) -> HandlerResult {
    at_most(args, 1)?;
    Ok(json!(required(args, 0)?.to_lowercase()))
}

/// `{title:text}`, each run of letters starts upper case and continues lower case
pub fn title(args: &[String]) -> HandlerResult {
    at_most(args, 1)?;
    let text = required(args, 0)?;

    let mut titled = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(c);
            in_word = false;
        }
    }
    Ok(json!(titled))
}

/// `{length:text}`, counted in characters
pub fn length(args: &[String]) -> HandlerResult {
    at_most(args, 1)?;
    Ok(json!(required(args, 0)?.chars().count()))
}

/// `{repeat:text;times}`
///
/// `times` is clamped to `0..=10`; a non-integer count returns the text once.
pub fn repeat(args: &[String]) -> HandlerResult {
    at_most(args, 2)?;
    let text = required(args, 0)?;
    let times = required(args, 1)?;

    match parse_int(times) {
        Some(count) => {
            let count = count.clamp(0, MAX_REPEAT) as usize;
            Ok(json!(text.repeat(count)))
        }
        None => Ok(json!(text)),
    }
}
