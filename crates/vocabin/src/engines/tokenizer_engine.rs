//! # Tokenizer Engine Traits

use crate::{errors::VBResult, types::TokenType};

/// The capability interface of a tokenizer engine.
///
/// Methods take `&mut self`; callers serialize access, so an engine
/// need not be reentrant.
pub trait TokenizerEngine<T: TokenType>: Send {
    /// The number of token ids known to the engine.
    fn vocab_size(&self) -> usize;

    /// Encode text into tokens.
    ///
    /// ## Errors
    /// [`VocabinError::EngineEncode`](crate::VocabinError::EngineEncode)
    /// when the text cannot be tokenized.
    fn encode(
        &mut self,
        text: &str,
    ) -> VBResult<Vec<T>>;

    /// Decode tokens into bytes.
    ///
    /// ## Errors
    /// [`VocabinError::UnknownTokenId`](crate::VocabinError::UnknownTokenId)
    /// for any token without a vocabulary entry.
    fn decode_to_bytes(
        &mut self,
        tokens: &[T],
    ) -> VBResult<Vec<u8>>;

    /// Count the tokens `text` encodes to.
    ///
    /// Must agree with `encode(text)?.len()`.
    fn count(
        &mut self,
        text: &str,
    ) -> VBResult<usize> {
        Ok(self.encode(text)?.len())
    }
}

/// Builds engines from binary vocab buffers.
///
/// A factory value stands for any one-time engine module setup; `build`
/// is the per-vocabulary constructor. The buffer is only borrowed for
/// the duration of `build`.
pub trait EngineFactory<T: TokenType> {
    /// The engine type produced.
    type Engine: TokenizerEngine<T>;

    /// Build an engine from a binary vocab buffer.
    ///
    /// ## Errors
    /// [`VocabinError::EngineInit`](crate::VocabinError::EngineInit)
    /// if the engine rejects the buffer.
    fn build(
        &self,
        vocab_bytes: &[u8],
    ) -> VBResult<Self::Engine>;
}
