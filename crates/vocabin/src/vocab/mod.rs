//! # Token Vocabularies
//!
//! A [`Vocabulary`] is an ordered list of byte tokens; a token's rank
//! is its position in that list.
//!
//! See [`io`] for the text (``.tiktoken``) and binary (``.bin``) codecs.

pub mod io;
mod vocabulary;

#[doc(inline)]
pub use vocabulary::*;
