use std::io::Write;

use vocabin::vocab::{Vocabulary, io::decode_binary_vocab};

use crate::{input_output::OutputArgs, vocab_selector::VocabSelectorArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    vocab_selector: VocabSelectorArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let data = self.vocab_selector.load_bytes()?;
        let vocab = decode_binary_vocab(&data)?;

        self.output
            .write_with(|writer| Ok(write_summary(writer, &vocab, data.len())?))
    }
}

fn write_summary(
    writer: &mut dyn Write,
    vocab: &Vocabulary,
    byte_len: usize,
) -> std::io::Result<()> {
    let empty = vocab.iter().filter(|e| e.token_bytes.is_empty()).count();

    writeln!(writer, "entries: {}", vocab.len())?;
    writeln!(writer, "bytes: {byte_len}")?;
    match vocab.max_rank() {
        Some(rank) => writeln!(writer, "max rank: {rank}")?,
        None => writeln!(writer, "max rank: none")?,
    }
    writeln!(writer, "longest token: {}", vocab.longest_token_len())?;
    writeln!(writer, "zero-length tokens: {empty}")?;
    Ok(())
}
