//! Stdio-or-file input and output for the streaming subcommands.
//!
//! A missing argument, or `-`, selects stdin / stdout.

use std::{
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use vocabin::{
    VocabinError,
    store::{open_vocab_reader, save_vocab_with},
};

fn file_arg(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| *p != Path::new("-"))
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a reader for the input.
    ///
    /// A missing file is reported as
    /// [`VocabinError::ResourceNotFound`].
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_arg(&self.input) {
            None => Box::new(BufReader::new(io::stdin().lock())),
            Some(path) => Box::new(open_vocab_reader(path)?),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Run `write` against the output.
    ///
    /// File output goes through [`save_vocab_with`]: the file is replaced
    /// only once `write` succeeds, and is left untouched otherwise.
    /// Errors from `write` are returned as-is.
    pub fn write_with<F>(
        &self,
        write: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn std::error::Error>>,
    {
        let Some(path) = file_arg(&self.output) else {
            let mut writer = BufWriter::new(io::stdout().lock());
            write(&mut writer)?;
            writer.flush()?;
            return Ok(());
        };

        let mut failure = None;
        let saved = save_vocab_with(path, |writer| {
            let writer: &mut dyn Write = writer;
            write(writer).map_err(|e| {
                failure = Some(e);
                VocabinError::Io(io::Error::other("output aborted"))
            })
        });

        match (saved, failure) {
            (_, Some(err)) => Err(err),
            (Err(err), None) => Err(err.into()),
            (Ok(()), None) => Ok(()),
        }
    }
}
