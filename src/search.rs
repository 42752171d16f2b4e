//! City code search input
//!
//! Buffers keystrokes for the search form. Input is uppercased as it is
//! typed and capped at three characters, so the only thing left to check on
//! submit is that the buffer is full.

use crate::error::Result;
use crate::types::{CITY_CODE_LEN, CityCode};

/// Search form input buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    buffer: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character, uppercased. Whitespace is dropped and the
    /// character is ignored once the buffer is full.
    pub fn push(&mut self, c: char) {
        if c.is_control() || c.is_whitespace() {
            return;
        }
        for upper in c.to_uppercase() {
            if self.buffer.chars().count() >= CITY_CODE_LEN {
                break;
            }
            self.buffer.push(upper);
        }
    }

    /// Remove the last character
    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Replace the buffer, applying the same normalization as typing
    pub fn set(&mut self, raw: &str) {
        self.buffer.clear();
        raw.chars().for_each(|c| self.push(c));
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Validate the buffer for submission.
    ///
    /// The buffer itself is left untouched either way.
    pub fn submit(&self) -> Result<CityCode> {
        CityCode::parse(&self.buffer)
    }
}
