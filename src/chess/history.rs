use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Ordered list of the accepted move tokens of a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    tokens: Vec<String>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Numbered move pairs: `"1. e4 e5 2. Nf3 "`
    pub fn to_movetext(&self) -> String {
        let mut text = String::new();
        for (index, pair) in self.tokens.chunks(2).enumerate() {
            let _ = write!(text, "{}. ", index + 1);
            for token in pair {
                let _ = write!(text, "{} ", token);
            }
        }
        text
    }
}

impl<S: Into<String>> FromIterator<S> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Game termination markers found at the end of recorded movetext
const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Extract move tokens from recorded movetext.
///
/// Drops move numbers (`12.` and `12...`, also when glued to the move as in
/// `12.e4`), result markers, and check/mate suffixes.
pub fn parse_movetext(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let word = match word.rfind('.') {
                Some(dot) => &word[dot + 1..],
                None => word,
            };
            let word = word.trim_end_matches(['+', '#']);
            if word.is_empty() || RESULT_MARKERS.contains(&word) {
                None
            } else {
                Some(word.to_string())
            }
        })
        .collect()
}
