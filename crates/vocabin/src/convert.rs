//! # Vocabulary Conversion
//!
//! Build-time conversion between the text (``.tiktoken``) and binary
//! (``.bin``) vocab files.

use std::path::Path;

use crate::{
    errors::VBResult,
    store::{load_vocab_bytes, load_vocab_text, save_vocab_text, save_vocab_with},
    vocab::{
        Vocabulary,
        io::{RankPolicy, binary_vocab_size, decode_binary_vocab, write_binary_vocab},
    },
};

/// Options for [`compile`] and [`decompile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// How the text file's rank field is treated.
    pub rank_policy: RankPolicy,
}

impl ConvertOptions {
    /// Sets the rank policy.
    pub fn with_rank_policy(
        mut self,
        rank_policy: RankPolicy,
    ) -> Self {
        self.rank_policy = rank_policy;
        self
    }
}

/// Summary of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    /// The number of vocabulary entries converted.
    pub entries: usize,

    /// The size of the written file.
    pub bytes_written: usize,

    /// The number of zero-length tokens in the vocabulary.
    pub zero_length_tokens: usize,
}

fn count_zero_length(vocab: &Vocabulary) -> usize {
    vocab.iter().filter(|e| e.token_bytes.is_empty()).count()
}

/// Compile a text vocab file into a binary vocab file.
///
/// The whole vocabulary is parsed and validated before the output is
/// touched; on failure no output file is written.
///
/// ## Errors
/// * Resource errors for either path.
/// * [`VocabinError::MalformedBase64`](crate::VocabinError::MalformedBase64),
///   and rank errors under [`RankPolicy::Strict`].
/// * [`VocabinError::TokenTooLong`](crate::VocabinError::TokenTooLong) for
///   tokens over 255 bytes.
pub fn compile<S: AsRef<Path>, D: AsRef<Path>>(
    text_path: S,
    bin_path: D,
    options: ConvertOptions,
) -> VBResult<ConvertReport> {
    let text_path = text_path.as_ref();
    let bin_path = bin_path.as_ref();

    let vocab = load_vocab_text(text_path, options.rank_policy)?;
    let size = binary_vocab_size(&vocab)?;

    save_vocab_with(bin_path, |w| write_binary_vocab(&vocab, w).map(|_| ()))?;

    log::info!(
        "compiled {} tokens ({} bytes): {} -> {}",
        vocab.len(),
        size,
        text_path.display(),
        bin_path.display()
    );

    Ok(ConvertReport {
        entries: vocab.len(),
        bytes_written: size,
        zero_length_tokens: count_zero_length(&vocab),
    })
}

/// Decompile a binary vocab file into a text vocab file.
///
/// Ranks are written by position.
///
/// The text format cannot carry a zero-length token: it is written as a
/// line with an empty token field, which [`compile`] skips, so every later
/// rank shifts down by one on recompile (and a strict recompile fails).
/// Such tokens are counted in the report and logged as a warning.
///
/// ## Errors
/// * Resource errors for either path.
/// * [`VocabinError::TruncatedRecord`](crate::VocabinError::TruncatedRecord)
///   for a malformed binary file.
pub fn decompile<S: AsRef<Path>, D: AsRef<Path>>(
    bin_path: S,
    text_path: D,
) -> VBResult<ConvertReport> {
    let bin_path = bin_path.as_ref();
    let text_path = text_path.as_ref();

    let vocab = decode_binary_vocab(&load_vocab_bytes(bin_path)?)?;
    let bytes_written = save_vocab_text(text_path, &vocab)?;

    let zero_length_tokens = count_zero_length(&vocab);
    if zero_length_tokens > 0 {
        log::warn!(
            "{} has {} zero-length tokens; they do not survive recompiling {}",
            bin_path.display(),
            zero_length_tokens,
            text_path.display()
        );
    }

    log::info!(
        "decompiled {} tokens: {} -> {}",
        vocab.len(),
        bin_path.display(),
        text_path.display()
    );

    Ok(ConvertReport {
        entries: vocab.len(),
        bytes_written,
        zero_length_tokens,
    })
}
