//! Byte-level sanitization applied to a page's raw HTML before
//! tokenization (and, with the operator bytes exempted, before a query is
//! tokenized too — see [`crate::queryengine::parser`]).

/// True if a byte should be dropped by sanitization.
///
/// `<` and `>` are always preserved — the tokenizer's tag-skipping state
/// machine depends on them.
pub fn should_drop(b: u8) -> bool {
    if b <= 13 {
        return true;
    }
    if b == b'\'' || b == b',' || b == b'.' || b == b'"' {
        return true;
    }
    if (0x21..=0x2C).contains(&b) && b != b'&' {
        return true;
    }
    if (0x3B..=0x40).contains(&b) && b != b'<' && b != b'>' {
        return true;
    }
    if (0x5B..=0x60).contains(&b) {
        return true;
    }
    if (0x7B..=0x7F).contains(&b) {
        return true;
    }
    false
}

/// Sanitize one byte: `Some(lowered)` to keep it, `None` to drop it.
pub fn sanitize_byte(b: u8) -> Option<u8> {
    if should_drop(b) {
        None
    } else {
        Some(b.to_ascii_lowercase())
    }
}

/// Apply [`sanitize_byte`] across a buffer, dropping bytes that fail it
/// and folding the rest to lowercase.
pub fn sanitize(input: &[u8]) -> Vec<u8> {
    input.iter().copied().filter_map(sanitize_byte).collect()
}

/// Apply the same drop rules as [`sanitize`] but without folding case —
/// used by the query engine, which preserves the case of `AND`/`OR`
/// operator tokens.
pub fn sanitize_preserve_case(input: &[u8]) -> Vec<u8> {
    input.iter().copied().filter(|&b| !should_drop(b)).collect()
}
