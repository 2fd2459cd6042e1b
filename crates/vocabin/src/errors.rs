//! # Error Types

use std::path::PathBuf;

/// Errors from vocabin operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabinError {
    /// A token is too long to be framed by a single length byte.
    #[error("token {rank} is {len} bytes; binary records hold at most 255")]
    TokenTooLong {
        /// The rank of the offending entry.
        rank: usize,

        /// The length of the offending token.
        len: usize,
    },

    /// A binary record declares more bytes than remain in the buffer.
    #[error(
        "truncated record {rank} at offset {offset}: expected {expected} bytes, {available} available"
    )]
    TruncatedRecord {
        /// The rank the record would have been assigned.
        rank: usize,

        /// The offset of the record's length byte.
        offset: usize,

        /// The declared token length.
        expected: usize,

        /// The bytes remaining after the length byte.
        available: usize,
    },

    /// A text vocab line has an invalid base64 token field.
    #[error("line {line}: malformed base64: {message}")]
    MalformedBase64 {
        /// The 1-based line number.
        line: usize,

        /// The decoder's message.
        message: String,
    },

    /// A text vocab line has a missing or non-numeric rank field.
    #[error("line {line}: malformed rank field {field:?}")]
    MalformedRank {
        /// The 1-based line number.
        line: usize,

        /// The offending field; empty when absent.
        field: String,
    },

    /// A text vocab line's rank field disagrees with its position.
    #[error("line {line}: rank {found} does not match position {expected}")]
    RankMismatch {
        /// The 1-based line number.
        line: usize,

        /// The position-assigned rank.
        expected: usize,

        /// The rank written in the file.
        found: u64,
    },

    /// The vocabulary resource does not exist.
    #[error("vocabulary resource not found: {}", .path.display())]
    ResourceNotFound {
        /// The resolved path.
        path: PathBuf,
    },

    /// The vocabulary resource exists but could not be read.
    #[error("vocabulary resource unreadable: {}", .path.display())]
    ResourceUnreadable {
        /// The resolved path.
        path: PathBuf,

        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The vocabulary resource could not be written.
    #[error("vocabulary resource write failed: {}", .path.display())]
    ResourceWriteFailed {
        /// The target path.
        path: PathBuf,

        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The engine rejected the vocabulary during construction.
    #[error("engine init failed: {0}")]
    EngineInit(String),

    /// The engine failed to encode the input text.
    #[error("engine encode failed at byte {offset}: {message}")]
    EngineEncode {
        /// The byte offset into the input text.
        offset: usize,

        /// The engine's message.
        message: String,
    },

    /// A token id has no vocabulary entry.
    #[error("unknown token id: {token}")]
    UnknownTokenId {
        /// The unknown token, widened to `u64`.
        token: u64,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Stream I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for vocabin operations.
pub type VBResult<T> = core::result::Result<T, VocabinError>;
