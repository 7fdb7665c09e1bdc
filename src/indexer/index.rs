//! The inverted index: word → posting list, with a serialize/reload
//! protocol that round-trips exactly.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to scan artifact directory: {0}")]
    DirScan(#[source] std::io::Error),
    #[error("failed to write index file: {0}")]
    WriteFailed(#[source] std::io::Error),
    #[error("failed to read index file: {0}")]
    ReadFailed(#[source] std::io::Error),
}

/// `(document_id, term_frequency)` for one (word, document) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: u32,
    pub frequency: u32,
}

/// A word and its posting list. Document IDs within one entry are unique.
#[derive(Debug, Clone)]
pub struct WordEntry {
    pub word: String,
    pub postings: Vec<Posting>,
}

/// word → word entry, average O(1) lookup by word.
///
/// The source system this was ported from bucketed words with a djb2
/// string hash mod a fixed slot count (see [`djb2_hash`]); a `HashMap`
/// gives the same average-O(1) lookup without a fixed slot count to size
/// up front, so postings are stored there directly. `djb2_hash` is kept
/// for callers (and tests) that need the original word → slot mapping.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    words: HashMap<String, WordEntry>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            words: HashMap::new(),
        }
    }

    /// Record one occurrence of `word` in `doc_id`: create the word entry
    /// if absent, otherwise find the existing posting for `doc_id` (if
    /// any) and increment it, else append a fresh one. The scan checks
    /// every existing posting for a `doc_id` match before falling through
    /// to "append a new one" — never the reverse order.
    pub fn record_occurrence(&mut self, word: &str, doc_id: u32) {
        let entry = self.words.entry(word.to_string()).or_insert_with(|| WordEntry {
            word: word.to_string(),
            postings: Vec::new(),
        });
        match entry.postings.iter_mut().find(|p| p.doc_id == doc_id) {
            Some(posting) => posting.frequency += 1,
            None => entry.postings.push(Posting { doc_id, frequency: 1 }),
        }
    }

    /// Set (not increment) the posting's frequency — used when
    /// reconstructing an index from a serialized file.
    pub fn set_posting(&mut self, word: &str, doc_id: u32, frequency: u32) {
        let entry = self.words.entry(word.to_string()).or_insert_with(|| WordEntry {
            word: word.to_string(),
            postings: Vec::new(),
        });
        match entry.postings.iter_mut().find(|p| p.doc_id == doc_id) {
            Some(posting) => posting.frequency = frequency,
            None => entry.postings.push(Posting { doc_id, frequency }),
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn total_occurrences(&self) -> u64 {
        self.words
            .values()
            .flat_map(|entry| entry.postings.iter())
            .map(|p| p.frequency as u64)
            .sum()
    }

    /// Serialize to the on-disk format: one `<word> <n> <doc> <freq> ...`
    /// line per word, sorted lexicographically by line.
    pub fn serialize(&self) -> String {
        let mut lines: Vec<String> = self
            .words
            .values()
            .map(|entry| {
                let mut fields = vec![entry.word.clone(), entry.postings.len().to_string()];
                for posting in &entry.postings {
                    fields.push(posting.doc_id.to_string());
                    fields.push(posting.frequency.to_string());
                }
                fields.join(" ")
            })
            .collect();
        lines.sort();

        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    pub fn write_to_file(&self, path: &Path) -> Result<(), IndexError> {
        fs::write(path, self.serialize()).map_err(IndexError::WriteFailed)
    }

    /// Reload an index from its serialized form. Malformed lines are
    /// logged and skipped rather than treated as fatal.
    pub fn reload_from_file(path: &Path) -> Result<Self, IndexError> {
        let contents = fs::read_to_string(path).map_err(IndexError::ReadFailed)?;
        let mut index = InvertedIndex::new();

        for (line_no, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            if let Err(reason) = index.apply_line(line) {
                tracing::warn!(line = line_no + 1, reason, "skipping malformed index line");
            }
        }
        Ok(index)
    }

    fn apply_line(&mut self, line: &str) -> Result<(), &'static str> {
        let mut tokens = line.split(' ');
        let word = tokens.next().ok_or("empty line")?;
        let _posting_count: usize = tokens
            .next()
            .ok_or("missing posting count")?
            .parse()
            .map_err(|_| "posting count is not a decimal integer")?;

        let rest: Vec<&str> = tokens.collect();
        if rest.len() % 2 != 0 {
            return Err("odd number of posting fields");
        }

        for pair in rest.chunks(2) {
            let doc_id: u32 = pair[0].parse().map_err(|_| "doc id is not a decimal integer")?;
            let frequency: u32 = pair[1].parse().map_err(|_| "frequency is not a decimal integer")?;
            self.set_posting(word, doc_id, frequency);
        }
        Ok(())
    }
}

/// djb2-family string hash: `h = 5381; h = h*33 + c`.
pub fn djb2_hash(word: &str) -> u64 {
    let mut hash: u64 = 5381;
    for byte in word.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(byte as u64);
    }
    hash
}

/// Slot a word would occupy in a fixed `max_slots`-bucket hash table.
pub fn slot(word: &str, max_slots: usize) -> usize {
    (djb2_hash(word) % max_slots as u64) as usize
}
