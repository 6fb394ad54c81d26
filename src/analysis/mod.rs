pub mod token;
pub mod tokenizer;
pub mod stopword;
