//! Lexer: template text to nodes
//!
//! Lexing never fails. Malformed placeholders (unclosed or empty braces)
//! degrade to literal text nodes.

use super::scan::{find_closing, find_top_level, is_escapable, split_top_level, MarkKind, ESCAPE};
use crate::config::consts::nesting::MAX_PARSE_DEPTH;
use crate::interpolation::nodes::{ArgumentGroup, Node};

/// Parse a template into its top-level nodes
///
/// # Example
///
/// ```
/// use tagscript_core::interpolation::{parse, Node};
///
/// let nodes = parse("Hi {user.name}!");
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[1].raw(), "{user.name}");
/// ```
pub fn parse(text: &str) -> Vec<Node> {
    parse_at_level(text, 0)
}

/// Text accumulated between placeholders
///
/// Tracks the undecoded source span separately from the decoded value so a
/// text node can always reproduce its source.
struct TextBuffer {
    /// Start of the source span
    start: usize,
    /// Start of the source run not yet copied into `value`
    run_start: usize,
    value: String,
}

impl TextBuffer {
    fn at(start: usize) -> Self {
        Self {
            start,
            run_start: start,
            value: String::new(),
        }
    }

    /// Record the escape sequence at `pos` (backslash plus one ASCII byte)
    fn push_escaped(&mut self, text: &str, pos: usize) {
        self.value.push_str(&text[self.run_start..pos]);
        self.value.push(char::from(text.as_bytes()[pos + 1]));
        self.run_start = pos + 2;
    }

    fn flush(self, text: &str, end: usize, nodes: &mut Vec<Node>) {
        if end <= self.start {
            return;
        }
        let mut value = self.value;
        value.push_str(&text[self.run_start..end]);
        nodes.push(Node::decoded_text(&text[self.start..end], value));
    }
}

fn parse_at_level(text: &str, level: usize) -> Vec<Node> {
    let bytes = text.as_bytes();
    let mut nodes = Vec::new();
    let mut buffer = TextBuffer::at(0);
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            ESCAPE if pos + 1 < bytes.len() && is_escapable(bytes[pos + 1]) => {
                buffer.push_escaped(text, pos);
                pos += 2;
            }
            b'{' => {
                buffer.flush(text, pos, &mut nodes);

                let Some(close) = find_closing(&text[pos + 1..]) else {
                    // Unclosed: the remainder is literal, escapes and all
                    nodes.push(Node::text(&text[pos..]));
                    return nodes;
                };

                let end = pos + 1 + close + 1;
                nodes.push(parse_placeholder(&text[pos..end], level));
                pos = end;
                buffer = TextBuffer::at(end);
            }
            _ => pos += 1,
        }
    }

    buffer.flush(text, bytes.len(), &mut nodes);
    nodes
}

/// Parse a closed `{...}` span
fn parse_placeholder(raw: &str, level: usize) -> Node {
    let inner = &raw[1..raw.len() - 1];
    if inner.trim().is_empty() {
        return Node::text(raw);
    }

    let Some(colon) = find_top_level(inner, MarkKind::Colon) else {
        return Node::placeholder(raw, inner.trim(), Vec::new());
    };

    let name = inner[..colon].trim();
    let args = split_top_level(&inner[colon + 1..])
        .into_iter()
        .map(|segment| parse_argument(segment, level + 1))
        .collect();

    Node::placeholder(raw, name, args)
}

fn parse_argument(segment: &str, level: usize) -> ArgumentGroup {
    if level > MAX_PARSE_DEPTH {
        return vec![Node::text(segment)];
    }
    parse_at_level(segment, level)
}
