//! # Ranked Vocabulary

use core::ops::Index;

/// Max token length representable by a single binary length byte.
pub const MAX_TOKEN_LEN: usize = u8::MAX as usize;

/// A single vocabulary token and its rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabEntry {
    /// The raw token bytes.
    pub token_bytes: Vec<u8>,

    /// The rank; always the entry's position in its [`Vocabulary`].
    pub rank: usize,
}

/// An ordered, immutable sequence of [`VocabEntry`]s.
///
/// Ranks are assigned by position at construction and never change;
/// `vocab[i].rank == i` for every entry. Token bytes are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl<B: Into<Vec<u8>>> FromIterator<B> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self::from_token_bytes(iter)
    }
}

impl Index<usize> for Vocabulary {
    type Output = VocabEntry;

    fn index(
        &self,
        rank: usize,
    ) -> &Self::Output {
        &self.entries[rank]
    }
}

impl Vocabulary {
    /// Build a vocabulary, assigning ranks in iteration order.
    pub fn from_token_bytes<I, B>(tokens: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let entries = tokens
            .into_iter()
            .enumerate()
            .map(|(rank, bytes)| VocabEntry {
                token_bytes: bytes.into(),
                rank,
            })
            .collect();
        Self { entries }
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `rank`.
    pub fn get(
        &self,
        rank: usize,
    ) -> Option<&VocabEntry> {
        self.entries.get(rank)
    }

    /// All entries, in rank order.
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Iterate over entries in rank order.
    pub fn iter(&self) -> core::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }

    /// The highest rank, or None if empty.
    pub fn max_rank(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// Find the lowest rank whose token is `bytes`.
    pub fn lookup_rank(
        &self,
        bytes: &[u8],
    ) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.token_bytes.as_slice() == bytes)
    }

    /// The length of the longest token.
    pub fn longest_token_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.token_bytes.len())
            .max()
            .unwrap_or(0)
    }

    /// Consume the vocabulary, returning the token bytes in rank order.
    pub fn into_token_bytes(self) -> Vec<Vec<u8>> {
        self.entries.into_iter().map(|e| e.token_bytes).collect()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a VocabEntry;
    type IntoIter = core::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_position() {
        let vocab: Vocabulary = ["a", "bc", "", "a"]
            .iter()
            .map(|s| s.as_bytes())
            .collect();

        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_rank(), Some(3));

        for (idx, entry) in vocab.iter().enumerate() {
            assert_eq!(entry.rank, idx);
        }

        assert_eq!(vocab[1].token_bytes, b"bc".to_vec());
        assert_eq!(vocab.get(2).unwrap().token_bytes, Vec::<u8>::new());
        assert!(vocab.get(4).is_none());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let vocab = Vocabulary::from_token_bytes(vec![b"x".to_vec(), b"y".to_vec(), b"x".to_vec()]);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup_rank(b"x"), Some(0));
        assert_eq!(vocab.lookup_rank(b"y"), Some(1));
        assert_eq!(vocab.lookup_rank(b"z"), None);
        assert_eq!(vocab.longest_token_len(), 1);
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_rank(), None);
        assert_eq!(vocab.longest_token_len(), 0);
        assert!(vocab.into_token_bytes().is_empty());
    }
}
