//! Frame line tokenizer and origin patching.
//!
//! A frame line is a run of space separated tokens. Tokens of the form
//! `key=value` are attributes; everything else (the `frame` keyword, flags,
//! repeated spaces) is carried through untouched when a line is rebuilt.

use std::borrow::Cow;

use thiserror::Error;

use crate::rules::Offset;

pub const FRAME_MARKER: &str = "frame ";
pub const ORIGIN_X: &str = "originx";
pub const ORIGIN_Y: &str = "originy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("missing `{0}=` attribute")]
    MissingAttribute(&'static str),
    #[error("`{key}` value {value:?} is not a finite number")]
    InvalidNumber { key: &'static str, value: String },
}

/// Tokenized view over a single frame line.
#[derive(Debug, Clone)]
pub struct FrameLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> FrameLine<'a> {
    pub fn tokenize(line: &'a str) -> Self {
        Self { tokens: line.split(' ').collect() }
    }

    /// All `key=value` attributes in line order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.tokens.iter().copied().filter_map(|t| t.split_once('='))
    }

    /// Raw value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.position(key).map(|(_, v)| v)
    }

    fn position(&self, key: &str) -> Option<(usize, &'a str)> {
        self.tokens.iter().copied().enumerate().find_map(|(i, t)| match t.split_once('=') {
            Some((k, v)) if k == key => Some((i, v)),
            _ => None,
        })
    }

    fn number(&self, key: &'static str) -> Result<(usize, f64), FrameError> {
        let (idx, raw) = self.position(key).ok_or(FrameError::MissingAttribute(key))?;
        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FrameError::InvalidNumber { key, value: raw.to_string() })?;
        Ok((idx, value))
    }

    /// The `(originx, originy)` pivot of this frame.
    pub fn origin(&self) -> Result<(f64, f64), FrameError> {
        let (_, x) = self.number(ORIGIN_X)?;
        let (_, y) = self.number(ORIGIN_Y)?;
        Ok((x, y))
    }
}

/// Shift the origin of `line` by `-offset`, keeping every other byte as is.
pub fn patch_frame(line: &str, offset: Offset) -> Result<String, FrameError> {
    let frame = FrameLine::tokenize(line);
    let (xi, x) = frame.number(ORIGIN_X)?;
    let (yi, y) = frame.number(ORIGIN_Y)?;

    let mut out: Vec<Cow<'_, str>> = frame.tokens.iter().map(|t| Cow::Borrowed(*t)).collect();
    out[xi] = Cow::Owned(format!("{}={}", ORIGIN_X, format_number(x - offset.x)));
    out[yi] = Cow::Owned(format!("{}={}", ORIGIN_Y, format_number(y - offset.y)));
    Ok(out.join(" "))
}

/// Shortest round-trip form; integral values print without a fraction.
pub fn format_number(v: f64) -> String {
    // -0 prints as "-0"
    let v = if v == 0.0 { 0.0 } else { v };
    v.to_string()
}
