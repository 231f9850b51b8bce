//! Rich-content block placeholders
//!
//! Blocks are JSON objects appended to the render result's extras:
//!
//! ```json
//! {
//!   "title": "...",
//!   "description": "...",
//!   "color": 16711680,
//!   "footer": { "text": "..." },
//!   "image": { "url": "..." },
//!   "thumbnail": { "url": "..." },
//!   "fields": [{ "name": "...", "value": "...", "inline": true }]
//! }
//! ```
//!
//! `embed.title` always starts a new block. Every other placeholder edits
//! the most recent block, creating an empty one when there is none.

use serde_json::{json, Map, Value};

use super::args::{at_most, optional, required, truncate_chars};
use crate::config::consts::embed::{
    DESCRIPTION_MAX_CHARS, FIELD_NAME_MAX_CHARS, FIELD_VALUE_MAX_CHARS, FOOTER_MAX_CHARS,
    TITLE_MAX_CHARS,
};
use crate::interpolation::{HandlerDescriptor, HandlerError, HandlerResult, RenderResult};

pub(crate) fn handlers<C: 'static>() -> Vec<HandlerDescriptor<C>> {
    vec![
        HandlerDescriptor::sync_function("embed.title", |_, result, args| title(result, &args)),
        HandlerDescriptor::sync_function("embed.description", |_, result, args| {
            description(result, &args)
        }),
        HandlerDescriptor::sync_function("embed.color", |_, result, args| color(result, &args)),
        HandlerDescriptor::sync_function("embed.footer", |_, result, args| footer(result, &args)),
        HandlerDescriptor::sync_function("embed.image", |_, result, args| image(result, &args)),
        HandlerDescriptor::sync_function("embed.thumbnail", |_, result, args| {
            thumbnail(result, &args)
        }),
        HandlerDescriptor::sync_function("embed.field", |_, result, args| field(result, &args)),
    ]
}

/// Most recent block, created if the result has none yet
fn last_block(result: &mut RenderResult) -> Result<&mut Map<String, Value>, HandlerError> {
    if result.extras().is_empty() {
        result.push_extra(Value::Object(Map::new()));
    }
    match result.last_extra_mut() {
        Some(Value::Object(block)) => Ok(block),
        _ => Err(HandlerError::UnexpectedExtra {
            reason: "last extra is not a content block".to_string(),
        }),
    }
}

/// Single required argument of a block setter
fn single(args: &[String]) -> Result<&str, HandlerError> {
    at_most(args, 1)?;
    required(args, 0)
}

/// `{embed.title:text}`
pub fn title(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let text = single(args)?;
    result.push_extra(json!({ "title": truncate_chars(text, TITLE_MAX_CHARS) }));
    Ok(Value::Null)
}

/// `{embed.description:text}`
pub fn description(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let text = single(args)?;
    last_block(result)?.insert(
        "description".to_string(),
        json!(truncate_chars(text, DESCRIPTION_MAX_CHARS)),
    );
    Ok(Value::Null)
}

/// `{embed.color:#rrggbb}`, the `#` is optional and invalid colors are ignored
pub fn color(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let hex = single(args)?;
    let block = last_block(result)?;
    if let Some(value) = parse_color(hex) {
        block.insert("color".to_string(), json!(value));
    }
    Ok(Value::Null)
}

fn parse_color(hex: &str) -> Option<u32> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// `{embed.footer:text}`
pub fn footer(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let text = single(args)?;
    last_block(result)?.insert(
        "footer".to_string(),
        json!({ "text": truncate_chars(text, FOOTER_MAX_CHARS) }),
    );
    Ok(Value::Null)
}

/// `{embed.image:url}`
pub fn image(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let url = single(args)?;
    last_block(result)?.insert("image".to_string(), json!({ "url": url }));
    Ok(Value::Null)
}

/// `{embed.thumbnail:url}`
pub fn thumbnail(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let url = single(args)?;
    last_block(result)?.insert("thumbnail".to_string(), json!({ "url": url }));
    Ok(Value::Null)
}

/// `{embed.field:name;value;inline}`, `inline` defaults to `true`
pub fn field(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    at_most(args, 3)?;
    let name = required(args, 0)?;
    let value = required(args, 1)?;
    let inline = optional(args, 2, "true").to_lowercase();

    let field = json!({
        "name": truncate_chars(name, FIELD_NAME_MAX_CHARS),
        "value": truncate_chars(value, FIELD_VALUE_MAX_CHARS),
        "inline": matches!(inline.as_str(), "true" | "yes" | "1"),
    });

    let block = last_block(result)?;
    match block
        .entry("fields")
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        Value::Array(fields) => fields.push(field),
        _ => {
            return Err(HandlerError::UnexpectedExtra {
                reason: "block fields are not a list".to_string(),
            })
        }
    }
    Ok(Value::Null)
}
