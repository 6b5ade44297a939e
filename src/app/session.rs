//! The interactive session state machine.
//!
//! [Session] holds everything the interactive phase mutates: the query, the
//! last ranked result list, the highlight set, and the display window
//! (selection index plus visible-entry count). Every keystroke flows through
//! [Session::apply]; mutating keystrokes trigger a full re-rank of the corpus,
//! navigation keystrokes only move the window.
//!
//! The corpus itself is immutable for the session's lifetime; the result list
//! is discarded and rebuilt wholesale on every query edit, never cached.

use crate::app::keymap::InputEvent;
use crate::config::Config;
use crate::core::rank::rank;
use crate::core::score::highlight_set;
use std::collections::HashSet;

/// Fixed text shown (and printed on exit) when nothing is selected.
pub const NO_SELECTION: &str = "No Directory Chosen";

/// Outcome of applying one input event.
pub enum Transition {
    /// Stay in the interactive loop.
    Continue,
    /// Enter was pressed; the current selection is final.
    Confirmed,
    /// The session was abandoned; no selection is produced.
    Cancelled,
}

/// State for one interactive session.
pub struct Session<'a> {
    config: &'a Config,
    corpus: Vec<String>,
    query: String,
    results: Vec<String>,
    highlight: HashSet<char>,
    selection: isize,
    visible: usize,
}

impl<'a> Session<'a> {
    /// Build the initial state: empty query, results in discovery order.
    pub fn new(config: &'a Config, corpus: Vec<String>) -> Self {
        let results = rank(&corpus, "");
        Self {
            config,
            corpus,
            query: String::new(),
            results,
            highlight: HashSet::new(),
            selection: 0,
            visible: config.visible_entries(),
        }
    }

    // Getters / accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn results(&self) -> &[String] {
        &self.results
    }

    #[inline]
    pub fn highlight(&self) -> &HashSet<char> {
        &self.highlight
    }

    #[inline]
    pub fn selection(&self) -> isize {
        self.selection
    }

    /// Number of entries currently on screen.
    pub fn visible_len(&self) -> usize {
        self.results.len().min(self.visible)
    }

    /// The path under the cursor, or `None` when nothing is visible.
    pub fn selected(&self) -> Option<&str> {
        if self.visible_len() == 0 {
            return None;
        }
        self.results.get(self.selection as usize).map(String::as_str)
    }

    /// Apply one input event and wrap the selection back into range.
    pub fn apply(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::Insert(c) => {
                self.query.push(c);
                self.requery();
                self.selection = 0;
            }
            InputEvent::Erase => {
                self.query.pop();
                self.requery();
            }
            InputEvent::MovePrev => self.selection -= 1,
            InputEvent::MoveNext => self.selection += 1,
            InputEvent::Shrink => self.visible = self.visible.saturating_sub(1),
            InputEvent::Grow => self.visible += 1,
            InputEvent::Confirm => return Transition::Confirmed,
            InputEvent::Cancel => return Transition::Cancelled,
        }

        self.selection = wrap_selection(self.selection, self.visible_len());
        Transition::Continue
    }

    /// Re-rank the whole corpus for the current query and rebuild highlights.
    fn requery(&mut self) {
        self.results = rank(&self.corpus, &self.query);
        self.highlight = highlight_set(&self.query);
    }
}

/// Wrap a selection index into `[0, n)`; out-of-range values jump to the
/// opposite end. With nothing visible the index parks at 0, and the caller
/// reports "no selection" through [Session::selected].
fn wrap_selection(selection: isize, n: usize) -> isize {
    if n == 0 {
        return 0;
    }
    if selection < 0 {
        n as isize - 1
    } else if selection >= n as isize {
        0
    } else {
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_modular_at_both_ends() {
        assert_eq!(wrap_selection(-1, 3), 2);
        assert_eq!(wrap_selection(3, 3), 0);
        assert_eq!(wrap_selection(1, 3), 1);
        assert_eq!(wrap_selection(5, 0), 0);
    }
}
