//! AST nodes produced by the lexer
//!
//! Every node keeps the exact source span it was parsed from (`raw`), which
//! the interpreter emits whenever a node cannot be evaluated.

/// Parsed nodes of one semicolon-delimited argument
pub type ArgumentGroup = Vec<Node>;

/// A parsed template component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text
    Text(TextNode),
    /// `{name}` or `{name:arg;...}`
    Placeholder(PlaceholderNode),
}

impl Node {
    /// Literal text whose source contains no escape sequences
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        Node::Text(TextNode {
            raw: value.clone(),
            value,
        })
    }

    /// Literal text decoded from a source span with escape sequences
    pub fn decoded_text(raw: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Text(TextNode {
            raw: raw.into(),
            value: value.into(),
        })
    }

    pub fn placeholder(
        raw: impl Into<String>,
        name: impl Into<String>,
        args: Vec<ArgumentGroup>,
    ) -> Self {
        Node::Placeholder(PlaceholderNode {
            raw: raw.into(),
            name: name.into(),
            args,
        })
    }

    /// Original source text of this node
    pub fn raw(&self) -> &str {
        match self {
            Node::Text(text) => &text.raw,
            Node::Placeholder(placeholder) => &placeholder.raw,
        }
    }
}

/// Literal text in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    raw: String,
    value: String,
}

impl TextNode {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text to emit, escape sequences resolved
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A placeholder and its argument groups
///
/// Argument groups keep the boundaries found at parse time, so a nested
/// placeholder whose output contains `;` still yields a single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderNode {
    raw: String,
    name: String,
    args: Vec<ArgumentGroup>,
}

impl PlaceholderNode {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed dotted identifier, e.g. `user.name`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[ArgumentGroup] {
        &self.args
    }
}
