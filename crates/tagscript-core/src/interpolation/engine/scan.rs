//! Structural scanning for placeholder bodies
//!
//! Reports the bytes that give a template its shape (`{`, `}`, `:`, `;`)
//! together with the brace depth they were found at. Escaped bytes are
//! skipped, so `\{` or `\;` never counts as structure.

/// Escape introducer
pub(crate) const ESCAPE: u8 = b'\\';

/// Bytes that lose their structural meaning when escaped
pub(crate) const ESCAPABLE: [u8; 5] = [b'{', b'}', b'\\', b';', b':'];

pub(crate) fn is_escapable(byte: u8) -> bool {
    ESCAPABLE.contains(&byte)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkKind {
    Open,
    Close,
    Colon,
    Semicolon,
}

/// A structural byte at `pos`
///
/// `depth` is the number of braces opened (and not yet closed) inside the
/// scanned text before this byte. A `Close` at depth 0 therefore closes the
/// brace that encloses the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mark {
    pub kind: MarkKind,
    pub pos: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Normal,
    /// Previous byte was an unescaped backslash
    Escaped,
}

/// Forward-only iterator over the structural marks of a string
///
/// Each byte is visited once. Only ASCII bytes are ever reported, so every
/// `pos` is a valid char boundary.
pub(crate) struct MarkStream<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    state: ScanState,
}

impl<'a> MarkStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            state: ScanState::Normal,
        }
    }
}

impl Iterator for MarkStream<'_> {
    type Item = Mark;

    fn next(&mut self) -> Option<Mark> {
        while self.pos < self.bytes.len() {
            let pos = self.pos;
            let byte = self.bytes[pos];
            self.pos += 1;

            if self.state == ScanState::Escaped {
                self.state = ScanState::Normal;
                continue;
            }

            let (kind, depth) = match byte {
                ESCAPE => {
                    self.state = ScanState::Escaped;
                    continue;
                }
                b'{' => {
                    self.depth += 1;
                    (MarkKind::Open, self.depth - 1)
                }
                b'}' => {
                    let before = self.depth;
                    self.depth = self.depth.saturating_sub(1);
                    (MarkKind::Close, before)
                }
                b':' => (MarkKind::Colon, self.depth),
                b';' => (MarkKind::Semicolon, self.depth),
                _ => continue,
            };

            return Some(Mark { kind, pos, depth });
        }
        None
    }
}

/// Position of the `}` closing the brace that precedes `text`
pub(crate) fn find_closing(text: &str) -> Option<usize> {
    find_top_level(text, MarkKind::Close)
}

/// First mark of `kind` outside any nested braces
pub(crate) fn find_top_level(text: &str, kind: MarkKind) -> Option<usize> {
    MarkStream::new(text)
        .find(|mark| mark.kind == kind && mark.depth == 0)
        .map(|mark| mark.pos)
}

/// Split on top-level semicolons
///
/// Empty segments are dropped; whitespace-only segments are kept.
pub(crate) fn split_top_level(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for mark in MarkStream::new(text) {
        if mark.kind == MarkKind::Semicolon && mark.depth == 0 {
            if mark.pos > start {
                segments.push(&text[start..mark.pos]);
            }
            start = mark.pos + 1;
        }
    }
    if text.len() > start {
        segments.push(&text[start..]);
    }

    segments
}
