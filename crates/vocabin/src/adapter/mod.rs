//! # Tokenizer Adapter
//!
//! ```rust,no_run
//! use vocabin::adapter::TrieTokenizerAdapter;
//!
//! fn example() -> vocabin::VBResult<()> {
//!     let tokenizer = TrieTokenizerAdapter::<u32>::create("cl100k_base.bin")?;
//!
//!     let tokens = tokenizer.encode("hello world")?;
//!     assert_eq!(tokenizer.count("hello world")?, tokens.len());
//!     assert_eq!(tokenizer.decode(&tokens)?, "hello world");
//!     Ok(())
//! }
//! ```

mod adapter_options;
mod tokenizer_adapter;

#[doc(inline)]
pub use adapter_options::*;
#[doc(inline)]
pub use tokenizer_adapter::*;
