//! Parallel ranking of the corpus for one query.
//!
//! [rank] fans the scoring work out over the available hardware threads and
//! merges the per-chunk batches back into one descending-by-score list. The
//! corpus is shared read-only into scoped workers; every worker returns its
//! local batch by value and the calling thread performs the merge, so no lock
//! is ever taken.
//!
//! The per-chunk truncation (`local.len() / threads`, keep-all when that is 0)
//! bounds the merge cost but can drop a globally well-ranked candidate that
//! lands in an otherwise sparse chunk. Kept for compatibility with the known
//! ranking behavior; see DESIGN.md before changing it.

use crate::core::score::score;
use std::thread;

/// Rank the corpus against a query, best matches first.
///
/// The empty query is an identity: the corpus comes back unchanged in discovery
/// order without any scoring. Otherwise only candidates with a strictly
/// positive [score] appear, sorted descending; ties keep discovery order
/// because both the chunk-local sort and the final merge sort are stable.
///
/// Every call runs to completion; keystroke invocations are independent and
/// there is no cancellation of a superseded query. A panicking scoring worker
/// is fatal, scoring is pure computation and has no recoverable failure mode.
pub fn rank(corpus: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return corpus.to_vec();
    }

    let threads = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk_size = corpus.len().div_ceil(threads);
    if chunk_size == 0 {
        return Vec::new();
    }

    let mut merged: Vec<(i32, &String)> = Vec::new();
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        for chunk in corpus.chunks(chunk_size) {
            handles.push(scope.spawn(move || rank_chunk(chunk, query, threads)));
        }
        // Merge in chunk-index order so the final stable sort is deterministic.
        for handle in handles {
            merged.extend(handle.join().expect("scoring worker panicked"));
        }
    });

    merged.sort_by(|a, b| b.0.cmp(&a.0));
    merged.into_iter().map(|(_, path)| path.clone()).collect()
}

/// Score one contiguous corpus chunk and return the surviving candidates.
fn rank_chunk<'a>(chunk: &'a [String], query: &str, threads: usize) -> Vec<(i32, &'a String)> {
    let mut local: Vec<(i32, &String)> = chunk
        .iter()
        .filter_map(|candidate| {
            let s = score(candidate, query);
            (s > 0).then_some((s, candidate))
        })
        .collect();

    local.sort_by(|a, b| b.0.cmp(&a.0));

    let keep = local.len() / threads;
    if keep > 0 {
        local.truncate(keep);
    }
    local
}
