//! Limits shared by the engine and the builtin placeholders

/// Nesting limits for parsing and evaluation
pub mod nesting {
    /// Default evaluation depth; deeper placeholders render as their raw text
    pub const MAX_NESTING: usize = 15;

    /// Largest evaluation depth a configuration may request
    pub const MAX_CONFIGURABLE_DEPTH: usize = 32;

    /// Argument nesting level past which the lexer stops building placeholders.
    /// Must stay above `MAX_CONFIGURABLE_DEPTH + 1`.
    pub const MAX_PARSE_DEPTH: usize = 64;
}

/// Character limits applied by the `embed.*` placeholders
pub mod embed {
    pub const TITLE_MAX_CHARS: usize = 256;
    pub const DESCRIPTION_MAX_CHARS: usize = 4096;
    pub const FOOTER_MAX_CHARS: usize = 2048;
    pub const FIELD_NAME_MAX_CHARS: usize = 256;
    pub const FIELD_VALUE_MAX_CHARS: usize = 1024;
}

/// Text placeholder limits
pub mod text {
    /// Upper bound for `{repeat:text;n}`
    pub const MAX_REPEAT: i64 = 10;
}
