//! Search queries and match records.

/// How query text is compared against line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Compare chars after lowercasing both sides.
    #[default]
    Insensitive,
    /// Compare chars exactly.
    Sensitive,
}

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    case: CaseSensitivity,
}

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty.
    pub fn new(raw: impl Into<String>, case: CaseSensitivity) -> Option<Self> {
        let text = raw.into();
        if text.is_empty() {
            None
        } else {
            Some(Self { text, case })
        }
    }

    /// The query text as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case handling for this query.
    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// Length of the query in chars.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Find all non-overlapping occurrences of the query in `text`.
    ///
    /// Scans left to right; after a hit the scan resumes at the end of the
    /// matched range.
    pub fn occurrences(&self, text: &str) -> Vec<Occurrence> {
        let needle: Vec<char> = self.text.chars().collect();
        let hay: Vec<(usize, char)> = text.char_indices().collect();
        let mut found = Vec::new();

        let mut i = 0;
        while i + needle.len() <= hay.len() {
            let hit = needle
                .iter()
                .zip(&hay[i..i + needle.len()])
                .all(|(q, (_, c))| self.chars_equal(*q, *c));
            if hit {
                let start = hay[i].0;
                let end = hay
                    .get(i + needle.len())
                    .map(|(b, _)| *b)
                    .unwrap_or(text.len());
                found.push(Occurrence {
                    char_offset: i,
                    byte_range: start..end,
                });
                i += needle.len();
            } else {
                i += 1;
            }
        }

        found
    }

    fn chars_equal(&self, a: char, b: char) -> bool {
        match self.case {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// One occurrence of a query inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Offset of the first matched char, counted in chars.
    pub char_offset: usize,
    /// Byte range of the match within the line.
    pub byte_range: std::ops::Range<usize>,
}

/// A search match location, reported to whoever navigates between matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// 1-based index of the line among body lines only.
    pub body_line: usize,
    /// Char offset of the match start within that line.
    pub char_offset: usize,
}

impl SearchMatch {
    /// Create a match record.
    pub fn new(body_line: usize, char_offset: usize) -> Self {
        Self {
            body_line,
            char_offset,
        }
    }
}
