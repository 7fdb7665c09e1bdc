//! Turns one line of query input into a flat token stream: terms folded
//! to lowercase, `AND`/`OR` operators kept exactly as typed (operators are
//! case-sensitive; terms are not).

use crate::indexer::sanitize::sanitize_preserve_case;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    And,
    Or,
    Term(String),
}

pub fn tokenize_query(line: &str) -> Vec<Token> {
    let sanitized = sanitize_preserve_case(line.as_bytes());
    let sanitized = String::from_utf8_lossy(&sanitized);

    sanitized
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(|word| match word {
            "AND" => Token::And,
            "OR" => Token::Or,
            other => Token::Term(other.to_ascii_lowercase()),
        })
        .collect()
}
