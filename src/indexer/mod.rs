pub mod discovery;
pub mod index;
pub mod sanitize;
pub mod tokenizer;

use std::path::Path;

use crate::artifact::{self, ArtifactError};
use index::{IndexError, InvertedIndex};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("could not read document {0}: {1}")]
    DocumentRead(u32, #[source] ArtifactError),
}

#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    pub documents_indexed: u32,
    pub words_emitted: u64,
}

/// Build an inverted index over every artifact in `artifact_dir`.
///
/// A missing or unreadable artifact is fatal — the directory scan found
/// the file, so its disappearance means the filesystem lied to us.
pub fn build_index(artifact_dir: &Path, word_len: usize) -> Result<(InvertedIndex, BuildStats), BuildError> {
    let doc_ids = discovery::discover_document_ids(artifact_dir)?;
    let mut index = InvertedIndex::new();
    let mut words_emitted: u64 = 0;

    for doc_id in &doc_ids {
        let doc = artifact::read_artifact(artifact_dir, *doc_id)
            .map_err(|e| BuildError::DocumentRead(*doc_id, e))?;

        let sanitized = sanitize::sanitize(&doc.html);
        let words = tokenizer::tokenize(&sanitized, word_len);
        words_emitted += words.len() as u64;

        for word in &words {
            index.record_occurrence(word, *doc_id);
        }
        tracing::debug!(doc_id, words = words.len(), "document indexed");
    }

    tracing::info!(
        documents = doc_ids.len(),
        words = index.word_count(),
        occurrences = words_emitted,
        "index built"
    );

    Ok((
        index,
        BuildStats {
            documents_indexed: doc_ids.len() as u32,
            words_emitted,
        },
    ))
}
