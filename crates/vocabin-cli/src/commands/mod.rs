use log::LevelFilter;

mod cat;
mod compile;
mod decompile;
mod inspect;

/// Subcommands for vocabin
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compile a text (tiktoken) vocab into a binary vocab.
    Compile(compile::CompileArgs),

    /// Decompile a binary vocab into a text (tiktoken) vocab.
    Decompile(decompile::DecompileArgs),

    /// Act as a streaming tokenizer.
    Cat(cat::CatArgs),

    /// Summarize a binary vocab.
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// The log level used when neither `-q` nor `-v` is given.
    ///
    /// `cat` writes its results to stdout line by line, so only warnings
    /// are logged alongside it.
    pub fn default_log_level(&self) -> LevelFilter {
        match self {
            Commands::Cat(_) => LevelFilter::Warn,
            _ => LevelFilter::Info,
        }
    }

    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Compile(cmd) => cmd.run(),
            Commands::Decompile(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
