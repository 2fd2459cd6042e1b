#![warn(missing_docs)]
//! WebAssembly bindings for the vocabin tokenizer adapter.
//!
//! A [`Tokenizer`] is built once from vocabulary bytes, and then serves
//! `encode` / `decode` / `count` calls.

use js_sys::{Array, JsString, Uint32Array};
use vocabin::{
    TokenizerAdapterOptions,
    TrieTokenizerAdapter,
    VocabinError,
    engines::TrieEngineFactory,
    vocab::io::{RankPolicy, encode_binary_vocab, read_base64_vocab},
};
use wasm_bindgen::prelude::*;

fn js_error(
    context: &str,
    err: VocabinError,
) -> JsError {
    JsError::new(&format!("{context}: {err}"))
}

/// A tokenizer for encoding text to tokens and decoding tokens to text.
#[wasm_bindgen]
pub struct Tokenizer {
    inner: TrieTokenizerAdapter<u32>,
}

impl Tokenizer {
    fn from_binary(data: Vec<u8>) -> Result<Tokenizer, JsError> {
        let inner = TokenizerAdapterOptions::default()
            .from_vocab_bytes(&TrieEngineFactory::new(), data)
            .map_err(|e| js_error("failed to build tokenizer", e))?;
        Ok(Tokenizer { inner })
    }
}

#[wasm_bindgen]
impl Tokenizer {
    /// Create a tokenizer from the raw bytes of a binary (``.bin``) vocab.
    #[wasm_bindgen(js_name = "fromVocabBytes")]
    pub fn from_vocab_bytes(data: &[u8]) -> Result<Tokenizer, JsError> {
        Self::from_binary(data.to_vec())
    }

    /// Create a tokenizer from the raw bytes of a text (``.tiktoken``) vocab.
    ///
    /// Ranks are assigned by line position.
    #[wasm_bindgen(js_name = "fromTiktokenData")]
    pub fn from_tiktoken_data(data: &[u8]) -> Result<Tokenizer, JsError> {
        let vocab = read_base64_vocab(data, RankPolicy::Ignore)
            .map_err(|e| js_error("failed to parse vocab", e))?;
        let binary =
            encode_binary_vocab(&vocab).map_err(|e| js_error("failed to parse vocab", e))?;
        Self::from_binary(binary)
    }

    /// Encode a string into token IDs.
    pub fn encode(
        &self,
        text: &str,
    ) -> Result<Vec<u32>, JsError> {
        self.inner
            .encode(text)
            .map_err(|e| js_error("encode error", e))
    }

    /// Decode token IDs back into a string.
    ///
    /// Invalid UTF-8 in the decoded bytes is replaced with U+FFFD.
    pub fn decode(
        &self,
        tokens: &[u32],
    ) -> Result<String, JsError> {
        self.inner
            .decode(tokens)
            .map_err(|e| js_error("decode error", e))
    }

    /// Count the tokens a string encodes to.
    pub fn count(
        &self,
        text: &str,
    ) -> Result<usize, JsError> {
        self.inner
            .count(text)
            .map_err(|e| js_error("count error", e))
    }

    /// Encode multiple strings into arrays of token IDs.
    #[wasm_bindgen(js_name = "encodeBatch")]
    pub fn encode_batch(
        &self,
        texts: Vec<JsString>,
    ) -> Result<Array, JsError> {
        let arr = Array::new();
        for text in texts.iter() {
            let text: String = text.into();
            let tokens = self.encode(&text)?;
            let u32_arr = Uint32Array::new_with_length(tokens.len() as u32);
            u32_arr.copy_from(&tokens);
            arr.push(&u32_arr);
        }
        Ok(arr)
    }

    /// Get the vocabulary size.
    #[wasm_bindgen(getter, js_name = "vocabSize")]
    pub fn vocab_size(&self) -> usize {
        self.inner.vocab_size()
    }

    /// Look up the token string for a given token ID. Returns null if not found.
    #[wasm_bindgen(js_name = "idToToken")]
    pub fn id_to_token(
        &self,
        id: u32,
    ) -> JsValue {
        match self.inner.decode(&[id]) {
            Ok(s) => JsValue::from_str(&s),
            Err(_) => JsValue::NULL,
        }
    }
}
