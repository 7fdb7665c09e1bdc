pub mod eval;
pub mod parser;
pub mod rank;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::artifact;
use crate::indexer::index::InvertedIndex;

const PROMPT: &str = "KEY WORD:> ";
const EXIT_SENTINEL: &str = "!exit";

/// Run the interactive query loop until the `!exit` sentinel, reading
/// from `input` and writing prompts/results to `output`.
///
/// A missing artifact for a result is logged and skipped; every other
/// result in the same query still prints.
pub fn run_interactive<R: BufRead, W: Write>(
    index: &InvertedIndex,
    pages_dir: &Path,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            // stdin closed without an explicit !exit
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == EXIT_SENTINEL {
            break;
        }

        run_one_query(index, pages_dir, line, &mut output)?;
    }
    Ok(())
}

fn run_one_query<W: Write>(
    index: &InvertedIndex,
    pages_dir: &Path,
    line: &str,
    output: &mut W,
) -> io::Result<()> {
    let tokens = parser::tokenize_query(line);
    let results = eval::evaluate(&tokens, index);
    let ranked = rank::rank(results);

    for posting in ranked {
        match artifact::read_url_line(pages_dir, posting.doc_id) {
            Ok(url) => writeln!(output, "Document ID:{} URL:{}", posting.doc_id, url)?,
            Err(e) => tracing::warn!(doc_id = posting.doc_id, error = %e, "skipping result: artifact unreadable"),
        }
    }
    Ok(())
}
