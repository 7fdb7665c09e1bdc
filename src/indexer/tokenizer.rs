//! The word-extraction automaton: an explicit two-flag state machine over
//! a sanitized byte buffer, rather than an in-place destructive split.
//!
//! While *recording* (outside a tag) bytes accumulate into a run; hitting
//! `<` flushes the run — split on ASCII space, each piece of length >= 3
//! emitted as a word, truncated to `word_len` — and enters tag state.
//! Hitting `>` leaves tag state and resumes recording.

/// Tokenize an already-[sanitized](super::sanitize::sanitize) buffer.
pub fn tokenize(html: &[u8], word_len: usize) -> Vec<String> {
    let mut words = Vec::new();
    let mut run: Vec<u8> = Vec::new();
    let mut inside_tag = false;

    for &b in html {
        match b {
            b'<' => {
                if !inside_tag {
                    flush_run(&mut run, word_len, &mut words);
                }
                inside_tag = true;
            }
            b'>' => {
                inside_tag = false;
            }
            _ => {
                if !inside_tag {
                    run.push(b);
                }
            }
        }
    }
    flush_run(&mut run, word_len, &mut words);
    words
}

fn flush_run(run: &mut Vec<u8>, word_len: usize, words: &mut Vec<String>) {
    for candidate in run.split(|&b| b == b' ') {
        if candidate.len() >= 3 {
            let end = candidate.len().min(word_len);
            words.push(String::from_utf8_lossy(&candidate[..end]).into_owned());
        }
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::sanitize::sanitize;

    #[test]
    fn extracts_words_outside_tags_only() {
        let sanitized = sanitize(b"<p>Cat cat DOG</p>");
        let words = tokenize(&sanitized, 1000);
        assert_eq!(words, vec!["cat", "cat", "dog"]);
    }

    #[test]
    fn drops_words_shorter_than_three_bytes() {
        let sanitized = sanitize(b"<p>a an the cat</p>");
        let words = tokenize(&sanitized, 1000);
        assert_eq!(words, vec!["the", "cat"]);
    }

    #[test]
    fn truncates_words_longer_than_word_len() {
        let long = "x".repeat(20);
        let html = format!("<p>{long}</p>");
        let sanitized = sanitize(html.as_bytes());
        let words = tokenize(&sanitized, 5);
        assert_eq!(words, vec!["x".repeat(5)]);
    }

    #[test]
    fn attribute_text_inside_a_tag_is_ignored() {
        let sanitized = sanitize(br#"<a href="big important value">short</a>"#);
        let words = tokenize(&sanitized, 1000);
        assert_eq!(words, vec!["short"]);
    }
}
