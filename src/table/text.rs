//! Bounded text fields
//!
//! Text stored in a slot must fit a fixed on-disk field of [`MAX_DATA`]
//! bytes with room left for a NUL terminator.

use std::fmt;

use super::MAX_DATA;

/// UTF-8 text of at most [`BoundedText::MAX_LEN`] bytes, free of NUL bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedText(String);

impl BoundedText {
    /// Longest content that still leaves a byte for the terminator
    pub const MAX_LEN: usize = MAX_DATA - 1;

    /// Build from arbitrary input, truncating if needed
    pub fn new(text: &str) -> Self {
        Self::truncating(text).0
    }

    /// Build from arbitrary input and report whether anything was cut off
    ///
    /// Input stops at its first NUL byte, then is cut back to the largest
    /// char boundary within [`Self::MAX_LEN`] bytes.
    pub fn truncating(text: &str) -> (Self, bool) {
        let head = match text.find('\0') {
            Some(nul) => &text[..nul],
            None => text,
        };

        let mut end = head.len().min(Self::MAX_LEN);
        while !head.is_char_boundary(end) {
            end -= 1;
        }

        (Self(head[..end].to_string()), end < text.len())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BoundedText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BoundedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
