//! # Tokenizer Adapter

use core::marker::PhantomData;
use std::path::Path;

use parking_lot::Mutex;

use crate::{
    adapter::TokenizerAdapterOptions,
    engines::{TokenizerEngine, TrieEngine, TrieEngineFactory},
    errors::VBResult,
    types::TokenType,
    vocab::Vocabulary,
};

/// Binds one loaded vocabulary to one engine instance.
///
/// The adapter is immutable once built. Every call holds the engine
/// lock for its duration, so calls are serialized whether or not the
/// engine is reentrant; the adapter itself is `Send + Sync`.
///
/// Engine errors are returned unmodified.
pub struct TokenizerAdapter<T, E>
where
    T: TokenType,
    E: TokenizerEngine<T>,
{
    engine: Mutex<E>,
    vocab: Option<Vocabulary>,
    _marker: PhantomData<T>,
}

/// A [`TokenizerAdapter`] over the bundled [`TrieEngine`].
pub type TrieTokenizerAdapter<T = u32> = TokenizerAdapter<T, TrieEngine<T>>;

impl<T: TokenType> TokenizerAdapter<T, TrieEngine<T>> {
    /// Load the binary vocab at `locator` and build a [`TrieEngine`] adapter.
    ///
    /// ## Errors
    /// * [`VocabinError::ResourceNotFound`](crate::VocabinError::ResourceNotFound)
    /// * [`VocabinError::ResourceUnreadable`](crate::VocabinError::ResourceUnreadable)
    /// * [`VocabinError::EngineInit`](crate::VocabinError::EngineInit)
    pub fn create<L: AsRef<Path>>(locator: L) -> VBResult<Self> {
        TokenizerAdapterOptions::default().create(&TrieEngineFactory::new(), locator)
    }
}

impl<T, E> TokenizerAdapter<T, E>
where
    T: TokenType,
    E: TokenizerEngine<T>,
{
    /// Wrap a constructed engine.
    ///
    /// ## Arguments
    /// * `engine` - the engine.
    /// * `vocab` - the parsed vocabulary, if it was verified.
    pub fn new(
        engine: E,
        vocab: Option<Vocabulary>,
    ) -> Self {
        Self {
            engine: Mutex::new(engine),
            vocab,
            _marker: PhantomData,
        }
    }

    /// The parsed vocabulary, present when built with `verify_vocab`.
    pub fn vocab(&self) -> Option<&Vocabulary> {
        self.vocab.as_ref()
    }

    /// The number of token ids known to the engine.
    pub fn vocab_size(&self) -> usize {
        self.engine.lock().vocab_size()
    }

    /// Encode text into tokens.
    ///
    /// Deterministic for a given vocabulary and text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
    ) -> VBResult<Vec<T>> {
        self.engine.lock().encode(text)
    }

    /// Decode tokens into bytes.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> VBResult<Vec<u8>> {
        self.engine.lock().decode_to_bytes(tokens)
    }

    /// Decode tokens into a string.
    ///
    /// UTF-8 lossy decoding is applied to the full decoded byte string.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> VBResult<String> {
        let bytes = self.decode_to_bytes(tokens)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    /// Count the tokens `text` encodes to.
    ///
    /// Always equal to `encode(text)?.len()`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn count(
        &self,
        text: &str,
    ) -> VBResult<usize> {
        self.engine.lock().count(text)
    }
}
