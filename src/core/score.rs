//! The fuzzy scoring function for fcd.
//!
//! This module implements the [score] function, the relevance measure applied to
//! every corpus entry on each keystroke, and the [highlight_set] helper used by
//! the UI to color query characters inside displayed paths.
//!
//! A score is only meaningful relative to other candidates of the *same* query:
//! it is never persisted and never compared across queries. Callers must treat
//! any result `<= 0` as "no match" and discard the candidate.

use std::collections::HashSet;

/// Score returned by the exact-substring fast path before the length penalty.
const EXACT_BASE: i32 = 10000;
/// Bonus for a match directly following the previous matched character.
const CONSECUTIVE_BONUS: i32 = 50;
/// Extra bonus for a match at the very start of the candidate.
const START_BONUS: i32 = 20;
/// Bonus for a match at a segment boundary (start, or after `/`, `_`, `-`).
const SEGMENT_BONUS: i32 = 90;

/// Score one candidate path against the current query.
///
/// Two match paths exist, and they deliberately disagree on case handling:
///
/// 1. Queries of three or more characters that occur as a contiguous
///    case-sensitive substring score `10000 - candidate.len()`, which dominates
///    every subsequence score. Shorter candidates win among exact matches.
/// 2. Otherwise the query must be an ordered subsequence of the candidate,
///    compared ASCII case-insensitively. A space in the query is skipped without
///    consuming a candidate character, so queries may mimic path spacing.
///
/// Each matched position earns `100 - idx`, plus bonuses for consecutive
/// matches and segment boundaries; the total is reduced by `len / 6` to favor
/// shorter paths. Positions are byte offsets, so multi-byte characters never
/// match a query byte and only shift later positions.
pub fn score(candidate: &str, query: &str) -> i32 {
    let cand = candidate.as_bytes();
    let q = query.as_bytes();

    if q.len() >= 3 && candidate.contains(query) {
        return EXACT_BASE - cand.len() as i32;
    }

    let mut matches: Vec<usize> = Vec::with_capacity(q.len());
    let mut qi = 0;
    for (i, &b) in cand.iter().enumerate() {
        if qi >= q.len() {
            break;
        }
        if q[qi] == b' ' {
            qi += 1;
        }
        if qi < q.len() && b.eq_ignore_ascii_case(&q[qi]) {
            matches.push(i);
            qi += 1;
        }
    }
    if qi < q.len() {
        return 0;
    }

    let mut total = 0i32;
    let mut prev: Option<usize> = None;
    for &idx in &matches {
        total += 100 - idx as i32;

        if let Some(p) = prev
            && idx == p + 1
        {
            total += CONSECUTIVE_BONUS;
        }
        if idx == 0 || matches!(cand[idx - 1], b'/' | b'_' | b'-') {
            total += SEGMENT_BONUS;
        }
        if idx == 0 {
            total += START_BONUS;
        }
        prev = Some(idx);
    }

    total -= (cand.len() / 6) as i32;
    total
}

/// The set of distinct lowercased characters of the query.
///
/// The UI marks *every* occurrence of these characters in a displayed path, not
/// only the positions the scorer actually matched. An approximation, kept
/// because it reads well and costs nothing.
pub fn highlight_set(query: &str) -> HashSet<char> {
    query.chars().map(|c| c.to_ascii_lowercase()).collect()
}
