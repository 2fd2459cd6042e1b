//! # Greedy Longest-Match Trie Engine

use core::marker::PhantomData;

use crate::{
    engines::{EngineFactory, TokenizerEngine},
    errors::{VBResult, VocabinError},
    types::{TokenType, VBHashMap, hash_map_new, rank_to_token, token_to_u64},
    vocab::io::BinaryRecords,
};

const ROOT: usize = 0;

#[derive(Debug)]
struct TrieNode<T> {
    children: VBHashMap<u8, usize>,
    token: Option<T>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: hash_map_new(),
            token: None,
        }
    }
}

/// A [`TokenizerEngine`] that encodes by greedy longest match.
///
/// Token ids are vocabulary ranks. At each position the longest token
/// matching the remaining input is emitted.
///
/// * Zero-length tokens keep their rank, and decode to nothing,
///   but are never emitted by encode.
/// * When a byte string appears more than once, encode emits the
///   lowest rank; every rank still decodes.
#[derive(Debug)]
pub struct TrieEngine<T: TokenType> {
    nodes: Vec<TrieNode<T>>,
    id_to_token: Vec<Vec<u8>>,
}

impl<T: TokenType> TrieEngine<T> {
    /// Build an engine from a binary vocab buffer.
    ///
    /// ## Errors
    /// * [`VocabinError::EngineInit`] on a malformed buffer.
    /// * [`VocabinError::VocabSizeOverflow`] if the vocab does not fit `T`.
    pub fn from_binary_vocab(data: &[u8]) -> VBResult<Self> {
        let mut engine = Self {
            nodes: vec![TrieNode::new()],
            id_to_token: Vec::new(),
        };

        let vocab_size = BinaryRecords::new(data).count();

        for (rank, record) in BinaryRecords::new(data).enumerate() {
            let span = record.map_err(|e| VocabinError::EngineInit(e.to_string()))?;
            let token: T = rank_to_token(rank, vocab_size)?;
            engine.insert(span, token);
            engine.id_to_token.push(span.to_vec());
        }

        log::debug!(
            "built trie engine: {} tokens, {} nodes",
            engine.id_to_token.len(),
            engine.nodes.len()
        );

        Ok(engine)
    }

    fn insert(
        &mut self,
        span: &[u8],
        token: T,
    ) {
        if span.is_empty() {
            return;
        }

        let mut node = ROOT;
        for &b in span {
            node = match self.nodes[node].children.get(&b) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node].children.insert(b, next);
                    next
                }
            };
        }

        let slot = &mut self.nodes[node].token;
        if slot.is_none() {
            *slot = Some(token);
        }
    }

    /// Find the longest token that prefixes `bytes`.
    ///
    /// ## Returns
    /// `(token, match length)`, or None if no token matches.
    pub fn longest_match(
        &self,
        bytes: &[u8],
    ) -> Option<(T, usize)> {
        let mut node = ROOT;
        let mut best = None;

        for (idx, b) in bytes.iter().enumerate() {
            match self.nodes[node].children.get(b) {
                Some(&next) => node = next,
                None => break,
            }
            if let Some(token) = self.nodes[node].token {
                best = Some((token, idx + 1));
            }
        }

        best
    }

    fn try_walk<F>(
        &self,
        text: &str,
        mut emit: F,
    ) -> VBResult<()>
    where
        F: FnMut(T),
    {
        let bytes = text.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() {
            match self.longest_match(&bytes[pos..]) {
                Some((token, len)) => {
                    emit(token);
                    pos += len;
                }
                None => {
                    return Err(VocabinError::EngineEncode {
                        offset: pos,
                        message: format!("no token matches byte 0x{:02x}", bytes[pos]),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<T: TokenType> TokenizerEngine<T> for TrieEngine<T> {
    fn vocab_size(&self) -> usize {
        self.id_to_token.len()
    }

    fn encode(
        &mut self,
        text: &str,
    ) -> VBResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len() / 2);
        self.try_walk(text, |t| tokens.push(t))?;
        Ok(tokens)
    }

    fn decode_to_bytes(
        &mut self,
        tokens: &[T],
    ) -> VBResult<Vec<u8>> {
        let mut buf = Vec::new();
        for &token in tokens {
            let span = token
                .to_usize()
                .and_then(|idx| self.id_to_token.get(idx))
                .ok_or_else(|| VocabinError::UnknownTokenId {
                    token: token_to_u64(token),
                })?;
            buf.extend_from_slice(span);
        }
        Ok(buf)
    }

    fn count(
        &mut self,
        text: &str,
    ) -> VBResult<usize> {
        let mut count = 0;
        self.try_walk(text, |_| count += 1)?;
        Ok(count)
    }
}

/// [`EngineFactory`] for [`TrieEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrieEngineFactory<T: TokenType> {
    _marker: PhantomData<T>,
}

impl<T: TokenType> TrieEngineFactory<T> {
    /// Create a new factory.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: TokenType> EngineFactory<T> for TrieEngineFactory<T> {
    type Engine = TrieEngine<T>;

    fn build(
        &self,
        vocab_bytes: &[u8],
    ) -> VBResult<Self::Engine> {
        TrieEngine::from_binary_vocab(vocab_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{Vocabulary, io::encode_binary_vocab};

    fn build_engine<T: TokenType>(tokens: &[&str]) -> TrieEngine<T> {
        let vocab: Vocabulary = tokens.iter().map(|s| s.as_bytes()).collect();
        TrieEngine::from_binary_vocab(&encode_binary_vocab(&vocab).unwrap()).unwrap()
    }

    #[test]
    fn test_longest_match() {
        type T = u32;
        let mut engine: TrieEngine<T> = build_engine(&["a", "b", "ab", "abc", " "]);

        assert_eq!(engine.vocab_size(), 5);
        assert_eq!(engine.longest_match(b"abcd"), Some((3, 3)));
        assert_eq!(engine.longest_match(b"abd"), Some((2, 2)));
        assert_eq!(engine.longest_match(b"x"), None);

        let tokens = engine.encode("abc ab a").unwrap();
        assert_eq!(tokens, vec![3, 4, 2, 4, 0]);
        assert_eq!(engine.count("abc ab a").unwrap(), 5);

        assert_eq!(engine.decode_to_bytes(&tokens).unwrap(), b"abc ab a".to_vec());
    }

    #[test]
    fn test_unmatched_byte() {
        type T = u16;
        let mut engine: TrieEngine<T> = build_engine(&["a", "b"]);

        match engine.encode("abz") {
            Err(VocabinError::EngineEncode { offset, .. }) => assert_eq!(offset, 2),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(engine.count("abz").is_err());
        assert_eq!(engine.encode("").unwrap(), Vec::<T>::new());
    }

    #[test]
    fn test_unknown_token() {
        type T = u32;
        let mut engine: TrieEngine<T> = build_engine(&["a", "b"]);

        match engine.decode_to_bytes(&[0, 1, 2]) {
            Err(VocabinError::UnknownTokenId { token }) => assert_eq!(token, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_and_empty_tokens() {
        type T = u32;
        let mut engine: TrieEngine<T> = build_engine(&["", "x", "y", "x"]);

        assert_eq!(engine.vocab_size(), 4);
        assert_eq!(engine.encode("xyx").unwrap(), vec![1, 2, 1]);
        assert_eq!(engine.decode_to_bytes(&[0, 3, 0]).unwrap(), b"x".to_vec());
    }

    #[test]
    fn test_multibyte_text() {
        type T = u32;
        let mut engine: TrieEngine<T> = build_engine(&["c", "caf", "\u{e9}"]);

        let tokens = engine.encode("caf\u{e9}").unwrap();
        assert_eq!(tokens, vec![1, 2]);
        assert_eq!(
            engine.decode_to_bytes(&tokens).unwrap(),
            "caf\u{e9}".as_bytes().to_vec()
        );
    }

    #[test]
    fn test_init_errors() {
        type T = u32;
        match TrieEngine::<T>::from_binary_vocab(&[0x01, b'a', 0x04, b'b']) {
            Err(VocabinError::EngineInit(_)) => (),
            other => panic!("unexpected: {other:?}"),
        }

        let vocab = Vocabulary::from_token_bytes((0..=256u32).map(|i| i.to_le_bytes().to_vec()));
        let data = encode_binary_vocab(&vocab).unwrap();
        match TrieEngine::<u8>::from_binary_vocab(&data) {
            Err(VocabinError::VocabSizeOverflow { size }) => assert_eq!(size, 257),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(TrieEngine::<u16>::from_binary_vocab(&data).unwrap().vocab_size(), 257);

        // The whole vocab size is reported, not the first rank that overflows.
        match TrieEngine::<u8>::from_binary_vocab(&[0u8; 300]) {
            Err(VocabinError::VocabSizeOverflow { size }) => assert_eq!(size, 300),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(TrieEngine::<u8>::from_binary_vocab(&[0u8; 256]).unwrap().vocab_size(), 256);
    }

    #[test]
    fn test_factory() {
        let factory = TrieEngineFactory::<u32>::new();
        let mut engine = factory.build(&[1, b'q']).unwrap();
        assert_eq!(engine.encode("qq").unwrap(), vec![0, 0]);
    }
}
