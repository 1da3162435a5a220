use serde::{Deserialize, Serialize};

/// A user-supplied phrase. Phrases that differ only in case or whitespace
/// share an id and therefore overwrite each other in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: String,
    pub text: String,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: normalize_id(&text),
            text,
        }
    }

    /// Store key for this phrase under the given index prefix.
    pub fn key(&self, prefix: &str) -> String {
        format!("{prefix}:{}", self.id)
    }
}

/// Lowercase the whole string first (so a word-final capital sigma becomes
/// `ς`), then drop every character in the ECMAScript `\s` class.
pub fn normalize_id(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !is_id_whitespace(*c))
        .collect()
}

/// Line terminators plus Unicode `Zs`, tab, vertical tab, form feed and the
/// byte order mark. U+0085 is not included.
fn is_id_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000b}'
            | '\u{000c}'
            | '\r'
            | ' '
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}
