use std::path::PathBuf;

use vocabin::{
    convert::{ConvertOptions, compile},
    vocab::io::RankPolicy,
};

/// Args for the compile command.
#[derive(clap::Args, Debug)]
pub struct CompileArgs {
    /// Text vocab to read.
    #[arg(long)]
    input: PathBuf,

    /// Binary vocab to write.
    #[arg(long)]
    output: PathBuf,

    /// Fail unless every line's rank field matches its position.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    strict_ranks: bool,
}

impl CompileArgs {
    /// Run the compile command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rank_policy = if self.strict_ranks {
            RankPolicy::Strict
        } else {
            RankPolicy::Ignore
        };
        let options = ConvertOptions::default().with_rank_policy(rank_policy);

        let report = compile(&self.input, &self.output, options)?;
        log::debug!("{report:?}");

        Ok(())
    }
}
