pub mod assembler;
pub mod composer;
pub mod converter;
pub mod engine;
pub mod reorder;
pub mod romanizer;
pub mod tables;
pub mod tokenizer;
pub mod trie;
pub mod types;
