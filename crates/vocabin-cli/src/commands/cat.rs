use std::io::{BufRead, Write};

use vocabin::{TokenizerAdapter, engines::TokenizerEngine};

use crate::{
    input_output::{InputArgs, OutputArgs},
    vocab_selector::VocabSelectorArgs,
};

/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    Encode,
    Decode,
    Count,
}

/// Mode selection for the tokenizer.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,

    /// Count the tokens of each line.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    count: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode {
            TokenizerMode::Decode
        } else if self.count {
            TokenizerMode::Count
        } else {
            TokenizerMode::Encode
        }
    }
}

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    vocab_selector: VocabSelectorArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.vocab_selector.load_tokenizer()?;

        let mode = self.tokenizer_mode.mode();
        let mut reader = self.input.open_reader()?;

        self.output
            .write_with(|writer| run_cat(mode, &mut reader, writer, &tokenizer))
    }
}

fn run_cat<E: TokenizerEngine<u32>>(
    mode: TokenizerMode,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &TokenizerAdapter<u32, E>,
) -> Result<(), Box<dyn std::error::Error>> {
    match mode {
        TokenizerMode::Encode => run_cat_encode(reader, writer, tokenizer),
        TokenizerMode::Decode => run_cat_decode(reader, writer, tokenizer),
        TokenizerMode::Count => run_cat_count(reader, writer, tokenizer),
    }
}

fn run_cat_encode<E: TokenizerEngine<u32>>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &TokenizerAdapter<u32, E>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read lines, but keep the end-of-line characters.
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let tokens = tokenizer.encode(&line)?;

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        line.clear();
    }
    Ok(())
}

fn run_cat_decode<E: TokenizerEngine<u32>>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &TokenizerAdapter<u32, E>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Partial utf-8 sequences split across lines are not rejoined.
    for line in reader.lines() {
        let tokens = line?
            .split_whitespace()
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<u32>, _>>()?;

        let text = tokenizer.decode(&tokens)?;

        write!(writer, "{}", text)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_count<E: TokenizerEngine<u32>>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &TokenizerAdapter<u32, E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        writeln!(writer, "{}", tokenizer.count(&line)?)?;
        writer.flush()?;
        line.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use vocabin::{TokenizerAdapterOptions, TrieTokenizerAdapter, engines::TrieEngineFactory};

    use super::*;

    fn tokenizer() -> TrieTokenizerAdapter<u32> {
        // "a", "b", "\n", "ab"
        let data = vec![1, b'a', 1, b'b', 1, b'\n', 2, b'a', b'b'];
        TokenizerAdapterOptions::default()
            .from_vocab_bytes(&TrieEngineFactory::new(), data)
            .unwrap()
    }

    fn cat(
        mode: TokenizerMode,
        input: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        run_cat(mode, &mut reader, &mut out, &tokenizer())?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_cat_modes() {
        assert_eq!(cat(TokenizerMode::Encode, "abab\nba\n").unwrap(), "3 3 2\n1 0 2\n");
        assert_eq!(cat(TokenizerMode::Count, "abab\nba\n").unwrap(), "3\n3\n");
        assert_eq!(cat(TokenizerMode::Decode, "3 3 2\n1 0 2\n").unwrap(), "abab\nba\n");
    }

    #[test]
    fn test_cat_errors() {
        assert!(cat(TokenizerMode::Encode, "abc\n").is_err());
        assert!(cat(TokenizerMode::Decode, "0 x\n").is_err());
        assert!(cat(TokenizerMode::Decode, "0 99\n").is_err());
    }
}
