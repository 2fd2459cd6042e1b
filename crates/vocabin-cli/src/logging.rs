//! Log level selection and ``stderrlog`` setup.

use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more than the command's default (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable timestamped logging.
    #[arg(long, global = true)]
    pub ts: bool,
}

fn level_from_index(idx: usize) -> LevelFilter {
    match idx {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl LogArgs {
    /// The effective level, given the running command's default.
    ///
    /// Each `-v` raises the default by one level; `-q` turns logging off.
    pub fn level(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        level_from_index(default as usize + self.verbose as usize)
    }

    /// Install the ``stderrlog`` logger for the ``vocabin`` crates.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level(default) {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .module("vocabin")
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(
        quiet: bool,
        verbose: u8,
    ) -> LogArgs {
        LogArgs {
            quiet,
            verbose,
            ts: false,
        }
    }

    #[test]
    fn test_level() {
        assert_eq!(args(false, 0).level(LevelFilter::Info), LevelFilter::Info);
        assert_eq!(args(false, 0).level(LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(args(false, 1).level(LevelFilter::Warn), LevelFilter::Info);
        assert_eq!(args(false, 2).level(LevelFilter::Info), LevelFilter::Trace);
        assert_eq!(args(false, 9).level(LevelFilter::Info), LevelFilter::Trace);
        assert_eq!(args(true, 3).level(LevelFilter::Info), LevelFilter::Off);
    }
}
