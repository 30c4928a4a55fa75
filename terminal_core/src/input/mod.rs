pub mod buffer;
pub mod tokenizer;
