//! Cursor-based scanner over the string being expanded.
//!
//! The buffer owns the working content and a scan cursor. Text before the
//! cursor is final and never scanned again; text from the cursor onwards may
//! still contain placeholders, including ones introduced by values spliced
//! in by [`ExpansionBuffer::add`].

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Location of a placeholder measured from the end of the content.
///
/// Splicing a value in only shifts the text *before* the splice point, so
/// distances from the end stay meaningful across substitutions. `start` is
/// the number of bytes from the `$` of the open marker to the end of the
/// content, `end` the number of bytes after the close marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TailSpan {
    pub start: usize,
    pub end: usize,
}

/// Byte range of a located `${key}` occurrence, close marker included.
#[derive(Debug, Clone, Copy)]
struct Placeholder {
    start: usize,
    end: usize,
}

impl Placeholder {
    fn key<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start + OPEN.len()..self.end - 1]
    }
}

#[derive(Debug)]
pub(crate) struct ExpansionBuffer {
    content: String,
    cursor: usize,
    next: Option<Placeholder>,
}

impl ExpansionBuffer {
    pub fn new(value: &str) -> Self {
        Self {
            content: value.to_string(),
            cursor: 0,
            next: None,
        }
    }

    /// Locates the next legal placeholder at or after the cursor.
    ///
    /// The key runs from the open marker to the first close marker after
    /// it, so `${a${b}}` locates `${a${b}` with key `a${b`. An empty key
    /// (`${}`) is stepped over and stays in the content verbatim. An open
    /// marker with no close marker after it ends the scan.
    pub fn has_more_legal_placeholders(&mut self) -> bool {
        if self.next.is_some() {
            return true;
        }

        while let Some(offset) = self.content[self.cursor..].find(OPEN) {
            let start = self.cursor + offset;
            let key_start = start + OPEN.len();
            let Some(key_len) = self.content[key_start..].find(CLOSE) else {
                // Unterminated: nothing after this point can close either
                self.cursor = self.content.len();
                return false;
            };
            let key = &self.content[key_start..key_start + key_len];

            if key.is_empty() {
                self.cursor = key_start + CLOSE.len_utf8();
            } else {
                self.next = Some(Placeholder {
                    start,
                    end: key_start + key_len + CLOSE.len_utf8(),
                });
                return true;
            }
        }

        self.cursor = self.content.len();
        false
    }

    /// Returns the key of the located placeholder without removing it.
    ///
    /// Returns `None` when [`has_more_legal_placeholders`] has not located
    /// one.
    ///
    /// [`has_more_legal_placeholders`]: ExpansionBuffer::has_more_legal_placeholders
    pub fn extract_property_key(&self) -> Option<String> {
        self.next
            .map(|placeholder| placeholder.key(&self.content).to_string())
    }

    /// Position of the located placeholder, measured from the end.
    pub fn span(&self) -> Option<TailSpan> {
        let len = self.content.len();
        self.next.map(|placeholder| TailSpan {
            start: len - placeholder.start,
            end: len - placeholder.end,
        })
    }

    /// Splices `value` in place of the located `${key}`.
    ///
    /// With a value, the cursor moves to the start of the inserted text so
    /// placeholders inside it are found by the next scan. Without one, the
    /// placeholder stays as literal text and scanning resumes after it.
    pub fn add(&mut self, key: &str, value: Option<&str>) {
        debug_assert!(self.next.is_some(), "add called before a placeholder was located");
        let Some(placeholder) = self.next.take() else {
            return;
        };
        debug_assert_eq!(placeholder.key(&self.content), key);

        match value {
            Some(value) => {
                self.content
                    .replace_range(placeholder.start..placeholder.end, value);
                self.cursor = placeholder.start;
            }
            None => self.cursor = placeholder.end,
        }
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ExpansionBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}
