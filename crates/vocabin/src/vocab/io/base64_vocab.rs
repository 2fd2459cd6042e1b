//! # Base64 (tiktoken) Vocabulary Codec
//!
//! Lines are:
//! ```terminaloutput
//! {BASE64 TOKEN} {RANK}
//! ```

use std::io::{BufRead, Write};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{VBResult, VocabinError},
    vocab::Vocabulary,
};

/// How the trailing rank field of a text vocab line is treated.
///
/// Ranks are always assigned by line position; the policy only controls
/// whether the written rank is checked against that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankPolicy {
    /// Ignore the rank field; mismatches are logged once.
    #[default]
    Ignore,

    /// Require every line's rank field to equal its position.
    Strict,
}

fn check_rank_field(
    policy: RankPolicy,
    line_no: usize,
    rank: usize,
    field: Option<&str>,
    warned: &mut bool,
) -> VBResult<()> {
    let parsed = field.and_then(|f| f.trim().parse::<u64>().ok());

    match policy {
        RankPolicy::Strict => {
            let found = parsed.ok_or_else(|| VocabinError::MalformedRank {
                line: line_no,
                field: field.unwrap_or_default().to_string(),
            })?;
            if found != rank as u64 {
                return Err(VocabinError::RankMismatch {
                    line: line_no,
                    expected: rank,
                    found,
                });
            }
        }
        RankPolicy::Ignore => {
            if let Some(found) = parsed
                && found != rank as u64
                && !*warned
            {
                log::warn!(
                    "line {line_no}: rank field {found} differs from position {rank}; renumbering by position"
                );
                *warned = true;
            }
        }
    }
    Ok(())
}

/// Read a [`Vocabulary`] from a base64 vocab line reader.
///
/// Each line is split on its first space; the first field is the
/// base64 token. Lines with an empty token field are skipped.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `policy` - how to treat the trailing rank field.
pub fn read_base64_vocab<R: BufRead>(
    reader: R,
    policy: RankPolicy,
) -> VBResult<Vocabulary> {
    let mut tokens: Vec<Vec<u8>> = Vec::new();
    let mut warned = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let s = line.strip_suffix('\r').unwrap_or(&line);

        let (token_field, rank_field) = match s.split_once(' ') {
            Some((token, rest)) => (token, Some(rest)),
            None => (s, None),
        };
        if token_field.is_empty() {
            continue;
        }

        let span = BASE64_STANDARD.decode(token_field).map_err(|e| {
            VocabinError::MalformedBase64 {
                line: line_no,
                message: e.to_string(),
            }
        })?;

        check_rank_field(policy, line_no, tokens.len(), rank_field, &mut warned)?;

        tokens.push(span);
    }

    Ok(Vocabulary::from_token_bytes(tokens))
}

/// Decode a [`Vocabulary`] from base64 vocab text.
///
/// See [`read_base64_vocab`].
pub fn decode_base64_vocab(
    text: &str,
    policy: RankPolicy,
) -> VBResult<Vocabulary> {
    read_base64_vocab(text.as_bytes(), policy)
}

/// Write a [`Vocabulary`] to a [`Write`] writer as base64 vocab lines.
///
/// The rank written is the entry's position.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_vocab<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> VBResult<()> {
    for entry in vocab {
        writeln!(
            writer,
            "{} {}",
            BASE64_STANDARD.encode(&entry.token_bytes),
            entry.rank
        )?;
    }
    Ok(())
}

/// Encode a [`Vocabulary`] as base64 vocab text.
pub fn encode_base64_vocab(vocab: &Vocabulary) -> String {
    vocab
        .iter()
        .map(|e| format!("{} {}\n", BASE64_STANDARD.encode(&e.token_bytes), e.rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let vocab = decode_base64_vocab("QQ== 0", RankPolicy::Ignore).unwrap();

        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab[0].token_bytes, vec![0x41]);
        assert_eq!(vocab[0].rank, 0);
    }

    #[test]
    fn test_skips_blank_and_empty_fields() {
        let text = "\nQQ== 0\n\n 17\r\nQkM= 1\r\n";
        let vocab = decode_base64_vocab(text, RankPolicy::Ignore).unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab[0].token_bytes, b"A".to_vec());
        assert_eq!(vocab[1].token_bytes, b"BC".to_vec());
        assert_eq!(vocab[1].rank, 1);
    }

    #[test]
    fn test_rank_field_is_not_identity() {
        let text = "QQ== 900\nQg== 12\nQw==\n";
        let vocab = decode_base64_vocab(text, RankPolicy::Ignore).unwrap();

        let ranks: Vec<usize> = vocab.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert_eq!(vocab[2].token_bytes, b"C".to_vec());
    }

    #[test]
    fn test_strict_ranks() {
        assert!(decode_base64_vocab("QQ== 0\nQg== 1\n", RankPolicy::Strict).is_ok());

        match decode_base64_vocab("QQ== 0\nQg== 5\n", RankPolicy::Strict) {
            Err(VocabinError::RankMismatch {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 1);
                assert_eq!(found, 5);
            }
            other => panic!("unexpected: {other:?}"),
        }

        match decode_base64_vocab("\nQQ==\n", RankPolicy::Strict) {
            Err(VocabinError::MalformedRank { line, field }) => {
                assert_eq!(line, 2);
                assert_eq!(field, "");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_base64() {
        match decode_base64_vocab("QQ== 0\n!!!! 1\n", RankPolicy::Ignore) {
            Err(VocabinError::MalformedBase64 { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_write_renumbers_by_position() {
        let vocab = decode_base64_vocab("YXBwbGU= 300\nYmFuYW5h 301\n", RankPolicy::Ignore).unwrap();

        let mut out = Vec::new();
        write_base64_vocab(&vocab, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "YXBwbGU= 0\nYmFuYW5h 1\n");

        assert_eq!(encode_base64_vocab(&vocab), "YXBwbGU= 0\nYmFuYW5h 1\n");
    }

    #[test]
    fn test_text_roundtrip_binary_bytes() {
        let vocab = Vocabulary::from_token_bytes(vec![b"A".to_vec(), vec![0x00, 0xFF]]);
        let text = encode_base64_vocab(&vocab);

        assert_eq!(
            decode_base64_vocab(&text, RankPolicy::Strict).unwrap(),
            vocab
        );
    }
}
