//! # Vocabulary IO
//!
//! Two representations of a [`Vocabulary`](crate::vocab::Vocabulary):
//! * base64 text, one ``{BASE64 TOKEN} {RANK}`` line per token;
//! * binary, one ``{LEN: u8} {BYTES}`` record per token.
//!
//! In both, rank is the token's position.
//!
//! ## Converting A Vocab
//!
//! ```rust
//! use vocabin::vocab::io::{
//!     RankPolicy,
//!     decode_base64_vocab,
//!     decode_binary_vocab,
//!     encode_binary_vocab,
//! };
//!
//! let vocab = decode_base64_vocab("QQ== 0\nQkM= 1\n", RankPolicy::Ignore)?;
//! let bin = encode_binary_vocab(&vocab)?;
//! assert_eq!(bin, vec![1, b'A', 2, b'B', b'C']);
//! assert_eq!(decode_binary_vocab(&bin)?, vocab);
//! # Ok::<(), vocabin::VocabinError>(())
//! ```

mod base64_vocab;
mod binary_vocab;

#[doc(inline)]
pub use base64_vocab::*;
#[doc(inline)]
pub use binary_vocab::*;
