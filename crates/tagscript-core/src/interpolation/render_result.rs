//! Output of one render call

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;

/// Rendered content plus the side-artifacts handlers collected
///
/// - `content` grows append-only while nodes are evaluated
/// - `extras` are opaque structured blocks (rich-content embeds), kept in
///   insertion order, duplicates allowed
/// - `tags` are deduplicated markers (reactions), kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderResult {
    content: String,
    extras: Vec<Value>,
    tags: IndexSet<String>,
}

impl RenderResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn extras(&self) -> &[Value] {
        &self.extras
    }

    /// Tags in first-seen order
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    pub(crate) fn push_content(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Append a structured block
    pub fn push_extra(&mut self, extra: Value) {
        self.extras.push(extra);
    }

    /// Most recently appended block, for handlers that build one up in steps
    pub fn last_extra_mut(&mut self) -> Option<&mut Value> {
        self.extras.last_mut()
    }

    /// Record a tag; returns false if it was already present
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Fold another result into this one
    ///
    /// Content is appended, extras are appended in order and tags keep
    /// their deduplication.
    pub fn merge(&mut self, other: RenderResult) {
        self.content.push_str(&other.content);
        self.extras.extend(other.extras);
        self.tags.extend(other.tags);
    }

    /// Content, extras and tags (first-seen order)
    pub fn into_parts(self) -> (String, Vec<Value>, Vec<String>) {
        (self.content, self.extras, self.tags.into_iter().collect())
    }
}
