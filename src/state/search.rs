//! Search state machine.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No search active
//! - Typing: User is entering a query; highlights follow every keystroke
//! - Active: Query submitted, matches can be navigated

use crate::model::{SearchMatch, SearchQuery};

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    /// No active search.
    #[default]
    Inactive,
    /// User is typing a query.
    Typing {
        /// Raw input so far.
        input: String,
        /// Cursor position, in characters.
        cursor: usize,
        /// Matches of the input as typed.
        matches: Vec<SearchMatch>,
    },
    /// Query submitted.
    Active {
        /// The submitted query.
        query: SearchQuery,
        /// All matches in body-line order.
        matches: Vec<SearchMatch>,
        /// Index into `matches` of the match navigated to, if any yet.
        current: Option<usize>,
    },
}

impl SearchState {
    /// Matches of the current input or query. Empty when inactive.
    pub fn matches(&self) -> &[SearchMatch] {
        match self {
            SearchState::Inactive => &[],
            SearchState::Typing { matches, .. } | SearchState::Active { matches, .. } => matches,
        }
    }

    /// The match navigated to, with its index.
    pub fn current_match(&self) -> Option<(usize, SearchMatch)> {
        match self {
            SearchState::Active {
                matches,
                current: Some(index),
                ..
            } => matches.get(*index).map(|m| (*index, *m)),
            _ => None,
        }
    }

    /// Whether the user is typing a query.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== Match navigation =====

/// Index of the match after `current`, wrapping to the first.
///
/// With no current match, the first match is next.
pub fn next_index(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match current {
        Some(index) if index + 1 < count => index + 1,
        Some(_) | None => 0,
    })
}

/// Index of the match before `current`, wrapping to the last.
///
/// With no current match, the last match is previous.
pub fn prev_index(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match current {
        Some(index) if index > 0 && index < count => index - 1,
        Some(_) | None => count - 1,
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
