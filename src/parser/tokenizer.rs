//! Splits bracketed text into tokens.

/// Tokenize input: `(` and `)` are standalone tokens, everything else is
/// split on whitespace.
///
/// Equivalent to padding every bracket with spaces and splitting on
/// whitespace, without building the padded string.
#[must_use]
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        let is_bracket = c == '(' || c == ')';
        if is_bracket || c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&input[s..i]);
            }
            if is_bracket {
                tokens.push(&input[i..i + 1]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }

    tokens
}
