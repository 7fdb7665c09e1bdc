//! Boolean query evaluation: AND binds tighter than OR, juxtaposition is
//! implicit AND, no parentheses.

use std::collections::HashMap;

use crate::indexer::index::{InvertedIndex, Posting};
use super::parser::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    /// No term has been evaluated yet — the first term behaves like OR
    /// (nothing to flush, nothing to intersect against).
    FirstTerm,
    And,
    Or,
}

/// Evaluate a token stream against `index`, returning owned posting
/// copies (never aliases into the index's posting lists).
pub fn evaluate(tokens: &[Token], index: &InvertedIndex) -> Vec<Posting> {
    let mut accumulator: Vec<Posting> = Vec::new();
    let mut current: Vec<Posting> = Vec::new();
    let mut have_current = false;
    let mut pending = PendingOp::FirstTerm;

    for token in tokens {
        match token {
            // A leading/stray operator before any term has been seen has
            // nothing to flush or intersect against — it's a no-op, and
            // `pending` stays `FirstTerm` until a term actually arrives.
            Token::And => {
                if have_current {
                    pending = PendingOp::And;
                }
            }
            Token::Or => {
                if have_current {
                    pending = PendingOp::Or;
                }
            }
            Token::Term(word) => {
                let postings = lookup(index, word);
                match pending {
                    PendingOp::FirstTerm | PendingOp::Or => {
                        if have_current {
                            accumulator.append(&mut current);
                        }
                        current = postings;
                        have_current = true;
                    }
                    PendingOp::And => {
                        current = intersect(&current, &postings);
                    }
                }
                // Juxtaposition (no explicit operator before the *next*
                // term) means implicit AND, so the default resets here.
                pending = PendingOp::And;
            }
        }
    }

    if have_current {
        accumulator.append(&mut current);
    }
    accumulator
}

fn lookup(index: &InvertedIndex, word: &str) -> Vec<Posting> {
    index
        .get(word)
        .map(|entry| entry.postings.clone())
        .unwrap_or_default()
}

/// Pair postings by `doc_id`, summing frequencies. A document absent from
/// either side drops out of the result.
fn intersect(a: &[Posting], b: &[Posting]) -> Vec<Posting> {
    let by_doc: HashMap<u32, u32> = b.iter().map(|p| (p.doc_id, p.frequency)).collect();
    a.iter()
        .filter_map(|p| {
            by_doc
                .get(&p.doc_id)
                .map(|&other_freq| Posting {
                    doc_id: p.doc_id,
                    frequency: p.frequency + other_freq,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queryengine::parser::tokenize_query;

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.record_occurrence("cat", 1);
        index.record_occurrence("cat", 1);
        index.record_occurrence("cat", 2);
        index.record_occurrence("dog", 1);
        index.record_occurrence("mouse", 2);
        index
    }

    #[test]
    fn single_term_returns_its_own_postings() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("dog"), &index);
        assert_eq!(results, vec![Posting { doc_id: 1, frequency: 1 }]);
    }

    #[test]
    fn and_intersects_and_sums_frequencies() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("cat AND mouse"), &index);
        assert_eq!(results, vec![Posting { doc_id: 2, frequency: 2 }]);
    }

    #[test]
    fn or_unions_both_sides() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("dog OR mouse"), &index);
        assert_eq!(
            results,
            vec![
                Posting { doc_id: 1, frequency: 1 },
                Posting { doc_id: 2, frequency: 1 },
            ]
        );
    }

    #[test]
    fn stray_operators_only_flip_the_pending_flag() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("AND OR dog cat AND OR AND"), &index);
        assert_eq!(results, vec![Posting { doc_id: 1, frequency: 3 }]);
    }

    #[test]
    fn leading_and_before_the_first_term_is_ignored() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("AND dog"), &index);
        assert_eq!(results, vec![Posting { doc_id: 1, frequency: 1 }]);
    }

    #[test]
    fn leading_or_before_the_first_term_is_ignored() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("OR dog"), &index);
        assert_eq!(results, vec![Posting { doc_id: 1, frequency: 1 }]);
    }

    #[test]
    fn unknown_term_zeroes_an_and_conjunct_without_error() {
        let index = sample_index();
        let results = evaluate(&tokenize_query("cat AND nonexistent"), &index);
        assert!(results.is_empty());
    }

    #[test]
    fn juxtaposition_is_implicit_and() {
        let index = sample_index();
        let explicit = evaluate(&tokenize_query("cat AND mouse"), &index);
        let implicit = evaluate(&tokenize_query("cat mouse"), &index);
        assert_eq!(explicit, implicit);
    }
}
