//! Path-scoped circular reference detection.
//!
//! The guard keeps a stack of keys whose values are still being expanded.
//! Each entry remembers where its inserted value ends (as a [`TailSpan`]
//! distance from the end of the buffer), so once scanning moves past that
//! point the key is no longer on the active path and may be referenced
//! again without tripping the guard.

use super::buffer::TailSpan;
use crate::error::{Error, Result};

#[derive(Debug)]
struct Visit {
    key: String,
    #[cfg_attr(not(test), allow(dead_code))]
    value: String,
    /// Bytes remaining after the inserted value.
    tail: usize,
}

#[derive(Debug, Default)]
pub(crate) struct CycleGuard {
    active: Vec<Visit>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `key` resolved to `value` at `span`.
    ///
    /// Keys whose inserted value does not contain the whole placeholder are
    /// dropped from the active path first: either the value ends at or
    /// before `span.start`, or the placeholder closes after the value ends.
    /// Fails when `key` is still active.
    pub fn visited(&mut self, key: &str, value: Option<&str>, span: TailSpan) -> Result<()> {
        while self
            .active
            .last()
            .is_some_and(|visit| visit.tail >= span.start || span.end < visit.tail)
        {
            self.active.pop();
        }

        if self.active.iter().any(|visit| visit.key == key) {
            let mut chain: Vec<&str> = self
                .active
                .iter()
                .skip_while(|visit| visit.key != key)
                .map(|visit| visit.key.as_str())
                .collect();
            chain.push(key);
            return Err(Error::CircularReference {
                key: key.to_string(),
                chain: chain.join(" -> "),
            });
        }

        // Unresolved keys stay literal, so nothing gets expanded under them
        if let Some(value) = value {
            self.active.push(Visit {
                key: key.to_string(),
                value: value.to_string(),
                tail: span.end,
            });
        }
        Ok(())
    }

    /// Value recorded for `key` while it is on the active path.
    #[cfg(test)]
    pub fn active_value(&self, key: &str) -> Option<&str> {
        self.active
            .iter()
            .rev()
            .find(|visit| visit.key == key)
            .map(|visit| visit.value.as_str())
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.active.len()
    }
}
