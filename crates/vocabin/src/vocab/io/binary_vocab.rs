//! # Binary Vocabulary Codec
//!
//! Records are:
//! ```terminaloutput
//! {LEN: u8} {LEN BYTES}
//! ```
//!
//! There is no header, count, or trailer; the end of the buffer is the
//! only terminator, and a record's rank is its index in the buffer.

use std::io::Write;

use crate::{
    errors::{VBResult, VocabinError},
    vocab::{MAX_TOKEN_LEN, Vocabulary},
};

/// Zero-copy iterator over the token records of a binary vocab buffer.
///
/// Yields each token's bytes in rank order; a truncated record yields
/// [`VocabinError::TruncatedRecord`] and ends the iteration.
#[derive(Debug, Clone)]
pub struct BinaryRecords<'a> {
    data: &'a [u8],
    offset: usize,
    rank: usize,
    failed: bool,
}

impl<'a> BinaryRecords<'a> {
    /// Iterate the records of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            rank: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for BinaryRecords<'a> {
    type Item = VBResult<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.data.len() {
            return None;
        }

        let offset = self.offset;
        let len = self.data[offset] as usize;
        let start = offset + 1;
        let available = self.data.len() - start;

        if len > available {
            self.failed = true;
            return Some(Err(VocabinError::TruncatedRecord {
                rank: self.rank,
                offset,
                expected: len,
                available,
            }));
        }

        self.offset = start + len;
        self.rank += 1;
        Some(Ok(&self.data[start..start + len]))
    }
}

/// Check that every token fits in a single length byte.
///
/// Returns the encoded size of the vocabulary.
pub fn binary_vocab_size(vocab: &Vocabulary) -> VBResult<usize> {
    vocab.iter().try_fold(0, |acc, entry| {
        let len = entry.token_bytes.len();
        if len > MAX_TOKEN_LEN {
            return Err(VocabinError::TokenTooLong {
                rank: entry.rank,
                len,
            });
        }
        Ok(acc + 1 + len)
    })
}

/// Encode a [`Vocabulary`] into a binary vocab buffer.
///
/// ## Errors
/// [`VocabinError::TokenTooLong`] if any token exceeds 255 bytes;
/// nothing is produced in that case.
pub fn encode_binary_vocab(vocab: &Vocabulary) -> VBResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(binary_vocab_size(vocab)?);
    for entry in vocab {
        buf.push(entry.token_bytes.len() as u8);
        buf.extend_from_slice(&entry.token_bytes);
    }
    Ok(buf)
}

/// Write a [`Vocabulary`] in binary form to a [`Write`] writer.
///
/// The whole vocabulary is validated before the first byte is written.
///
/// ## Returns
/// The number of bytes written.
pub fn write_binary_vocab<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> VBResult<usize> {
    let size = binary_vocab_size(vocab)?;
    for entry in vocab {
        writer.write_all(&[entry.token_bytes.len() as u8])?;
        writer.write_all(&entry.token_bytes)?;
    }
    Ok(size)
}

/// Decode a binary vocab buffer into a [`Vocabulary`].
///
/// Zero-length records are valid tokens, not terminators.
///
/// ## Errors
/// [`VocabinError::TruncatedRecord`] if the final record runs past the
/// end of the buffer; no partial vocabulary is returned.
pub fn decode_binary_vocab(data: &[u8]) -> VBResult<Vocabulary> {
    let tokens = BinaryRecords::new(data)
        .map(|r| r.map(<[u8]>::to_vec))
        .collect::<VBResult<Vec<_>>>()?;
    Ok(Vocabulary::from_token_bytes(tokens))
}
