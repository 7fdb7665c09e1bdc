//! Ranks evaluated results by frequency, highest first. Ties keep the
//! order the evaluator produced them in (accumulation/insertion order).

use crate::indexer::index::Posting;

pub fn rank(mut postings: Vec<Posting>) -> Vec<Posting> {
    postings.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    postings
}
