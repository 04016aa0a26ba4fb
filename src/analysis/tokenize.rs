//! Text normalization shared by every revision metric.
//!
//! Tokenization is total over any string input: punctuation and whitespace
//! are separators, tokens are lowercased, and contractions keep their
//! apostrophe ("don't" stays one token). Duplicates and order are preserved.

/// Splits text into lowercase alphanumeric tokens.
///
/// Apostrophes inside a token survive; surrounding quote-style apostrophes
/// are stripped. Empty or whitespace-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            // Lowercasing can expand to several chars and introduce
            // combining marks (U+0130 maps to "i" plus U+0307); only the
            // alphanumeric parts survive.
            for lower in ch.to_lowercase() {
                if lower.is_alphanumeric() || lower == '\'' {
                    current.push(lower);
                }
            }
        } else if !current.is_empty() {
            push_token(&mut tokens, &current);
            current.clear();
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, &current);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim_matches('\'');
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
}

/// Number of tokens in the text.
pub fn word_count(text: &str) -> u32 {
    tokenize(text).len() as u32
}

/// The operational "thesis" of an essay snapshot: the first run of
/// characters up to and including the first `.`, `!`, or `?`.
///
/// Returns the whole trimmed text when no sentence-terminal punctuation
/// exists, and the empty string for empty/whitespace-only input.
pub fn first_sentence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.find(['.', '!', '?']) {
        Some(idx) => {
            // Byte index of a one-byte ASCII terminator, so idx + 1 is a
            // valid char boundary.
            &trimmed[..=idx]
        }
        None => trimmed,
    }
}
