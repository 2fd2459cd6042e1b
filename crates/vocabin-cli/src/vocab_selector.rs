use std::path::PathBuf;

use vocabin::{
    TokenizerAdapterOptions,
    TrieTokenizerAdapter,
    engines::TrieEngineFactory,
    store::VocabStore,
};

/// Binary vocab selection args.
#[derive(clap::Args, Debug)]
pub struct VocabSelectorArgs {
    /// Binary vocab file; relative names fall back to the data dir.
    #[arg(long)]
    vocab: String,

    /// Data directory for relative vocab names.
    ///
    /// Defaults to `$VOCABIN_DATA_DIR`, then the platform data dir.
    #[arg(long, default_value = None)]
    data_dir: Option<PathBuf>,
}

impl VocabSelectorArgs {
    /// The [`VocabStore`] for these args.
    pub fn store(&self) -> VocabStore {
        VocabStore::new().with_data_dir(self.data_dir.clone())
    }

    /// Load the vocab bytes.
    pub fn load_bytes(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(self.store().load(&self.vocab)?)
    }

    /// Load the tokenizer.
    pub fn load_tokenizer(&self) -> Result<TrieTokenizerAdapter<u32>, Box<dyn std::error::Error>> {
        let tokenizer = TokenizerAdapterOptions::default()
            .with_store(self.store())
            .create(&TrieEngineFactory::new(), &self.vocab)?;
        Ok(tokenizer)
    }
}
