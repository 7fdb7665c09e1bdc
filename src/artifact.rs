//! The page artifact format shared by all three stages.
//!
//! A page artifact is a file named by a monotonic positive integer (the
//! document ID), holding the URL it was fetched from, the depth it was
//! discovered at, and the raw HTML body, in that order:
//!
//! ```text
//! <absolute URL>\n
//! <depth as decimal integer>\n
//! <raw HTML bytes, to EOF>
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact {0} is missing or unreadable: {1}")]
    Missing(u32, #[source] io::Error),
    #[error("artifact {0} is malformed: {1}")]
    Malformed(u32, &'static str),
    #[error("failed to write artifact {0}: {1}")]
    WriteFailed(u32, #[source] io::Error),
}

/// A fully decoded page artifact.
pub struct Artifact {
    pub url: String,
    pub depth: u32,
    pub html: Vec<u8>,
}

/// Path of the artifact file for `doc_id` inside `dir`.
pub fn artifact_path(dir: &Path, doc_id: u32) -> PathBuf {
    dir.join(doc_id.to_string())
}

/// Write a page artifact, overwriting any existing file with the same ID.
pub fn write_artifact(
    dir: &Path,
    doc_id: u32,
    url: &str,
    depth: u32,
    html: &[u8],
) -> Result<(), ArtifactError> {
    let path = artifact_path(dir, doc_id);
    let mut file =
        File::create(&path).map_err(|e| ArtifactError::WriteFailed(doc_id, e))?;
    write!(file, "{}\n{}\n", url, depth).map_err(|e| ArtifactError::WriteFailed(doc_id, e))?;
    file.write_all(html)
        .map_err(|e| ArtifactError::WriteFailed(doc_id, e))?;
    Ok(())
}

/// Read and fully decode the artifact for `doc_id`.
pub fn read_artifact(dir: &Path, doc_id: u32) -> Result<Artifact, ArtifactError> {
    let path = artifact_path(dir, doc_id);
    let bytes = fs::read(&path).map_err(|e| ArtifactError::Missing(doc_id, e))?;

    let first_nl = memchr_nl(&bytes, 0).ok_or(ArtifactError::Malformed(doc_id, "missing URL line"))?;
    let url = String::from_utf8_lossy(&bytes[..first_nl]).into_owned();

    let second_nl = memchr_nl(&bytes, first_nl + 1)
        .ok_or(ArtifactError::Malformed(doc_id, "missing depth line"))?;
    let depth_str = String::from_utf8_lossy(&bytes[first_nl + 1..second_nl]);
    let depth: u32 = depth_str
        .trim()
        .parse()
        .map_err(|_| ArtifactError::Malformed(doc_id, "depth is not a decimal integer"))?;

    let html = bytes[second_nl + 1..].to_vec();

    Ok(Artifact { url, depth, html })
}

/// Read only the URL line of an artifact — cheaper than [`read_artifact`]
/// when the query engine only needs the URL to print a result.
pub fn read_url_line(dir: &Path, doc_id: u32) -> Result<String, ArtifactError> {
    let path = artifact_path(dir, doc_id);
    let file = File::open(&path).map_err(|e| ArtifactError::Missing(doc_id, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| ArtifactError::Missing(doc_id, e))?;
    if line.is_empty() {
        return Err(ArtifactError::Malformed(doc_id, "missing URL line"));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn memchr_nl(haystack: &[u8], from: usize) -> Option<usize> {
    haystack[from..].iter().position(|&b| b == b'\n').map(|p| p + from)
}
