use std::path::PathBuf;

use vocabin::convert::decompile;

/// Args for the decompile command.
#[derive(clap::Args, Debug)]
pub struct DecompileArgs {
    /// Binary vocab to read.
    #[arg(long)]
    input: PathBuf,

    /// Text vocab to write.
    #[arg(long)]
    output: PathBuf,
}

impl DecompileArgs {
    /// Run the decompile command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let report = decompile(&self.input, &self.output)?;
        log::debug!("{report:?}");

        Ok(())
    }
}
