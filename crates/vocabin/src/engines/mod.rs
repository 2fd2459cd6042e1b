//! # Tokenizer Engines
//!
//! An engine is built once from a binary vocab buffer and then performs
//! the actual text/token conversion. The [`TokenizerAdapter`](crate::adapter::TokenizerAdapter)
//! only talks to engines through [`TokenizerEngine`] and [`EngineFactory`].
//!
//! [`TrieEngine`] is the bundled greedy longest-match engine.

mod tokenizer_engine;
mod trie_engine;

#[doc(inline)]
pub use tokenizer_engine::*;
#[doc(inline)]
pub use trie_engine::*;
