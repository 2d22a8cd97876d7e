//! Splitting an animation document into state blocks.
//!
//! A document is a sequence of blocks. Each block starts with a line
//! `anim <StateName>` and is followed by its body, which holds the frame
//! lines (`frame ...`). Markers only count at the start of a line.

use crate::error::{PreviewError, Result};
use crate::frame::FRAME_MARKER;

pub const STATE_MARKER: &str = "anim ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Recover from a header without a newline by treating the rest of the
    /// block as the name.
    #[default]
    Lenient,
    Strict,
}

/// One unparsed block and the 1-based source line of its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// Lazy iterator over the blocks of a document.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    text: &'a str,
    first: Option<usize>,
    cursor: Option<usize>,
    line: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(text: &'a str) -> Self {
        let cursor = find_marker(text, 0);
        let line = 1 + cursor.map_or(0, |c| count_newlines(&text[..c]));
        Self { text, first: cursor, cursor, line }
    }

    /// Text ahead of the first marker. Not part of any block.
    pub fn preamble(&self) -> &'a str {
        &self.text[..self.first.unwrap_or(self.text.len())]
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let next = find_marker(self.text, start + STATE_MARKER.len());
        let end = next.unwrap_or(self.text.len());
        let block = RawBlock { text: &self.text[start..end], line: self.line };
        self.line += count_newlines(block.text);
        self.cursor = next;
        Some(block)
    }
}

fn find_marker(text: &str, from: usize) -> Option<usize> {
    text[from..]
        .match_indices(STATE_MARKER)
        .map(|(i, _)| from + i)
        .find(|&i| i == 0 || text.as_bytes()[i - 1] == b'\n')
}

fn count_newlines(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}

/// A frame line together with its source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSource<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// A block split into its state name and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBlock<'a> {
    pub name: &'a str,
    pub line: usize,
    body: &'a str,
}

impl<'a> StateBlock<'a> {
    pub fn parse(raw: RawBlock<'a>, strictness: Strictness) -> Result<Self> {
        let malformed = |reason: &str| PreviewError::MalformedBlockHeader { line: raw.line, reason: reason.to_string() };
        let rest = raw.text.strip_prefix(STATE_MARKER).ok_or_else(|| malformed("missing `anim ` marker"))?;

        let (name, body) = match rest.split_once('\n') {
            Some(split) => split,
            None if strictness == Strictness::Strict => {
                return Err(malformed("state name is not terminated by a newline"));
            }
            None => {
                log::warn!("block at line {} has no newline after its name; treating it as header only", raw.line);
                (rest, "")
            }
        };
        let name = name.strip_suffix('\r').unwrap_or(name);

        if name.is_empty() {
            return Err(malformed("empty state name"));
        }
        if name.contains(['/', '\\']) || name.contains("..") {
            return Err(malformed(&format!("state name `{}` is not usable as a file name", name)));
        }

        Ok(Self { name, line: raw.line, body })
    }

    /// Body lines that start with the frame marker, in order.
    pub fn frames(&self) -> impl Iterator<Item = FrameSource<'a>> + '_ {
        let first = self.line + 1;
        self.body
            .lines()
            .enumerate()
            .filter(|(_, l)| l.starts_with(FRAME_MARKER))
            .map(move |(i, text)| FrameSource { line: first + i, text })
    }
}
