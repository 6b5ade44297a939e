//! Ranking tests for fcd
//!
//! These tests pin down the observable contract of the parallel ranker: the
//! empty-query identity, exclusion of non-matching candidates, descending
//! score order, and determinism across repeated calls despite the internal
//! fan-out.

use fcd::core::rank::rank;
use fcd::core::score::score;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn corpus() -> Vec<String> {
    ["/a/b/foo.txt", "/a/bar.txt", "/a/foobar"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn empty_query_is_identity() {
    let corpus = corpus();
    assert_eq!(rank(&corpus, ""), corpus);
}

#[test]
fn empty_corpus_ranks_empty() {
    assert!(rank(&[], "foo").is_empty());
    assert!(rank(&[], "").is_empty());
}

#[test]
fn exact_matches_rank_shorter_path_first() {
    let result = rank(&corpus(), "foo");

    // Both exact-substring matches tie on the 10000 - len term, so the
    // shorter path wins; "/a/bar.txt" is not a match at all.
    assert_eq!(
        result,
        vec!["/a/foobar".to_string(), "/a/b/foo.txt".to_string()]
    );
}

#[test]
fn non_matching_candidates_never_appear() {
    let result = rank(&corpus(), "zq");
    assert!(result.is_empty(), "unexpected matches: {:?}", result);
}

#[test]
fn output_scores_are_non_increasing() {
    let corpus = synthetic_corpus(400);
    let query = "src";
    let result = rank(&corpus, query);

    for pair in result.windows(2) {
        assert!(
            score(&pair[0], query) >= score(&pair[1], query),
            "order violated between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
    for path in &result {
        assert!(score(path, query) > 0);
    }
}

#[test]
fn ranking_is_deterministic() {
    let corpus = synthetic_corpus(1000);

    let first = rank(&corpus, "lib");
    let second = rank(&corpus, "lib");
    assert_eq!(first, second);
}

#[test]
fn erased_query_returns_to_identity() {
    let corpus = synthetic_corpus(100);
    let _ = rank(&corpus, "main");
    assert_eq!(rank(&corpus, ""), corpus);
}

/// Seeded pseudo-random path strings so parallel chunking is exercised on
/// something bigger than a hand-written list.
fn synthetic_corpus(len: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz/_-.";
    let mut rng = StdRng::seed_from_u64(7);

    (0..len)
        .map(|_| {
            let n = rng.random_range(8..40);
            let mut path = String::from("/");
            for _ in 0..n {
                let idx = rng.random_range(0..ALPHABET.len());
                path.push(ALPHABET[idx] as char);
            }
            path
        })
        .collect()
}
