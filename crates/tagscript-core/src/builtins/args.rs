//! Argument access helpers shared by the builtins

use crate::interpolation::HandlerError;

/// Argument at `index`, or `MissingArgument`
pub(crate) fn required(args: &[String], index: usize) -> Result<&str, HandlerError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(HandlerError::MissingArgument { index })
}

pub(crate) fn optional<'a>(args: &'a [String], index: usize, default: &'a str) -> &'a str {
    args.get(index).map(String::as_str).unwrap_or(default)
}

/// Reject arguments past the handler's last parameter
pub(crate) fn at_most(args: &[String], count: usize) -> Result<(), HandlerError> {
    if args.len() > count {
        return Err(HandlerError::InvalidArgument {
            index: count,
            reason: format!("expected at most {} arguments, got {}", count, args.len()),
        });
    }
    Ok(())
}

/// Integer with surrounding whitespace ignored
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// First `max` characters of `text`
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
