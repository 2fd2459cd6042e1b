//! # `vocabin` Binary BPE Vocabularies
//!
//! `vocabin` compiles `tiktoken`-style text vocabularies (one base64 token
//! per line) into a compact length-prefixed binary form, and serves them
//! through a small tokenizer adapter.
//!
//! See:
//! * [`vocab`] for the [`vocab::Vocabulary`] model and its text/binary codecs.
//! * [`store`] to load and save vocab artifacts.
//! * [`convert`] for the build-time `compile` / `decompile` steps.
//! * [`engines`] for the engine capability traits, and the bundled
//!   [`engines::TrieEngine`].
//! * [`adapter`] for the `encode` / `decode` / `count` front.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps the engine's HashMap implementation for ``ahash``.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation points on the adapter
//! operations.
//!
//! ## Binary Format
//!
//! ```terminaloutput
//! {LEN: u8} {LEN BYTES} {LEN: u8} {LEN BYTES} ...
//! ```
//!
//! No header, count, or checksum; a token's rank is its record index.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vocabin::{
//!     adapter::TrieTokenizerAdapter,
//!     convert::{ConvertOptions, compile},
//! };
//!
//! fn example() -> vocabin::VBResult<()> {
//!     compile("cl100k_base.tiktoken", "cl100k_base.bin", ConvertOptions::default())?;
//!
//!     let tokenizer = TrieTokenizerAdapter::<u32>::create("cl100k_base.bin")?;
//!     let tokens = tokenizer.encode("hello world")?;
//!     assert_eq!(tokenizer.decode(&tokens)?, "hello world");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod adapter;
pub mod convert;
pub mod engines;
pub mod errors;
pub mod store;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use adapter::{TokenizerAdapter, TokenizerAdapterOptions, TrieTokenizerAdapter};
#[doc(inline)]
pub use errors::{VBResult, VocabinError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{VocabEntry, Vocabulary};
