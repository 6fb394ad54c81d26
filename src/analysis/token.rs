use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text
    pub position: u32,     // Ordinal of the token in the text
    pub offset: usize,     // Byte offset in original text
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        Token {
            text,
            position,
            offset,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_word(&self.text)
    }
}

/// A word is valid unless it contains a control character (code point below 0x20).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < '\u{20}')
}
