//! # Tokenizer Adapter Options

use std::path::Path;

use crate::{
    adapter::TokenizerAdapter,
    engines::EngineFactory,
    errors::VBResult,
    store::VocabStore,
    types::TokenType,
    vocab::io::decode_binary_vocab,
};

/// Options for building a [`TokenizerAdapter`].
#[derive(Debug, Clone, Default)]
pub struct TokenizerAdapterOptions {
    /// Parse and keep the [`Vocabulary`](crate::vocab::Vocabulary)
    /// before handing the buffer to the engine.
    pub verify_vocab: bool,

    /// Where vocab locators are resolved and loaded from.
    pub store: VocabStore,
}

impl TokenizerAdapterOptions {
    /// Sets the `verify_vocab` option.
    ///
    /// A verified adapter rejects truncated buffers before the engine
    /// sees them, and exposes the parsed vocabulary.
    pub fn with_verify_vocab(
        mut self,
        verify_vocab: bool,
    ) -> Self {
        self.verify_vocab = verify_vocab;
        self
    }

    /// Sets the [`VocabStore`].
    pub fn with_store(
        mut self,
        store: VocabStore,
    ) -> Self {
        self.store = store;
        self
    }

    /// Load the binary vocab at `locator` and build an adapter.
    ///
    /// The loaded buffer is released before this returns, on every path.
    ///
    /// ## Errors
    /// Store errors, verification errors, and `factory` errors, unmodified.
    pub fn create<T, F, L>(
        &self,
        factory: &F,
        locator: L,
    ) -> VBResult<TokenizerAdapter<T, F::Engine>>
    where
        T: TokenType,
        F: EngineFactory<T>,
        L: AsRef<Path>,
    {
        let data = self.store.load(locator)?;
        self.from_vocab_bytes(factory, data)
    }

    /// Build an adapter from an in-memory binary vocab buffer.
    ///
    /// `data` is consumed; it is dropped once the engine is built,
    /// whether or not construction succeeds.
    pub fn from_vocab_bytes<T, F>(
        &self,
        factory: &F,
        data: Vec<u8>,
    ) -> VBResult<TokenizerAdapter<T, F::Engine>>
    where
        T: TokenType,
        F: EngineFactory<T>,
    {
        let vocab = if self.verify_vocab {
            Some(decode_binary_vocab(&data)?)
        } else {
            None
        };

        let engine = factory.build(&data)?;
        log::debug!("tokenizer engine ready ({} vocab bytes)", data.len());

        Ok(TokenizerAdapter::new(engine, vocab))
    }
}
