// cli.rs - Command-line parsing into a validated run configuration
//
// The accepted flags are the classic short ones (-d, -g, -n, -v) plus a few
// long-only extras. Anything clap rejects collapses to the one-line usage
// message; the process still exits with status 0.

use std::ffi::OsString;
use std::num::{NonZeroU64, NonZeroUsize};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;

use crate::driver::RunSettings;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::patterns::{PATTERNS, Pattern, Seed};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_DELAY_MS: u64 = 250;
pub const USAGE: &str = "Usage: cgol [-v] [-dgn <arg>] [file]";

const DEFAULT_GRID_WIDTH: NonZeroUsize = match NonZeroUsize::new(DEFAULT_WIDTH) {
    Some(n) => n,
    None => panic!("default grid width is zero"),
};
const DEFAULT_GRID_HEIGHT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_HEIGHT) {
    Some(n) => n,
    None => panic!("default grid height is zero"),
};

/// Conway's Game of Life, animated in place on the terminal
#[derive(Parser, Debug)]
#[command(name = "cgol", long_about = None)]
pub struct Cli {
    /// Delay between generations, in milliseconds
    #[arg(short = 'd', value_name = "ms", default_value_t = DEFAULT_DELAY_MS)]
    pub delay: u64,

    /// Generations to advance silently before the first frame
    #[arg(short = 'g', value_name = "n", default_value_t = 0)]
    pub generations: u64,

    /// Frames to draw before exiting (0 or absent: run until interrupted)
    #[arg(short = 'n', value_name = "n")]
    pub ticks: Option<u64>,

    /// Print the version and exit
    #[arg(short = 'v')]
    pub version: bool,

    /// Grid width in cells
    #[arg(long, value_name = "cells", default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: NonZeroUsize,

    /// Grid height in cells
    #[arg(long, value_name = "cells", default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: NonZeroUsize,

    /// Seed for the random fill, for reproducible runs
    #[arg(long, value_name = "u64")]
    pub seed: Option<u64>,

    /// Start from a built-in pattern instead of a random fill
    #[arg(short = 'p', long, value_name = "name", value_parser = parse_pattern_name, conflicts_with = "file")]
    pub pattern: Option<&'static Pattern>,

    /// Initial pattern file: one row per line, '1' at every other column is alive
    pub file: Option<PathBuf>,
}

/// Everything needed to build and drive the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings : RunSettings,
    pub width    : usize,
    pub height   : usize,
    pub seed     : Seed,
}

/// What the process should do after looking at its arguments.
#[derive(Debug)]
pub enum Invocation {
    Run(Config),
    Version,
    Help(String),
    Usage(String),
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let seed = match (cli.file, cli.pattern) {
            (Some(path), _) => Seed::File(path),
            (None, Some(pattern)) => Seed::Pattern(pattern),
            (None, None) => Seed::Random { seed: cli.seed },
        };

        Self {
            settings: RunSettings {
                delay: Duration::from_millis(cli.delay),
                warmup: cli.generations,
                ticks: cli.ticks.and_then(NonZeroU64::new),
            },
            width: cli.width.get(),
            height: cli.height.get(),
            seed,
        }
    }
}

pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) if cli.version => Invocation::Version,
        Ok(cli) => Invocation::Run(cli.into()),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Invocation::Help(e.render().to_string()),
        Err(e) => Invocation::Usage(e.to_string()),
    }
}

fn parse_pattern_name(name: &str) -> Result<&'static Pattern, String> {
    Pattern::find(name).ok_or_else(|| {
        let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
        format!("unknown pattern '{}', expected one of: {}", name, known.join(", "))
    })
}
