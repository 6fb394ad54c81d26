use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Splits on the ASCII space only. Tabs, newlines and other control
/// characters stay inside tokens so word validation can reject them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut offset = 0;

        for piece in text.split(' ') {
            if !piece.is_empty() {
                tokens.push(Token::new(piece.to_string(), position, offset));
                position += 1;
            }
            offset += piece.len() + 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(*self)
    }
}
