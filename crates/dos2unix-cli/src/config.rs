// crates/dos2unix-cli/src/config.rs
//
// Flag parsing and mode selection. Validation keeps going after the first
// problem so a single run reports everything wrong with the command line.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::io::glob::{self, GlobError};

#[derive(Parser, Debug)]
#[command(name = "dos2unix")]
#[command(about = "DOS to UNIX text file format converter", long_about = None)]
pub struct Cli {
    /// Quiet mode. Suppress all warnings and messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep the date stamp of output file same as input file
    #[arg(short, long)]
    pub keepdate: bool,

    /// Kept for backwards compatibility with dos2unix
    #[arg(short = 'c', long)]
    pub convmode: bool,

    /// Old file mode. Convert each file and write output to it (default).
    /// Wildcard names may be used.
    #[arg(short, long)]
    pub oldfile: bool,

    /// New file mode. Convert INFILE and write output to OUTFILE.
    /// Names must be given in pairs and wildcards must NOT be used.
    #[arg(short, long)]
    pub newfile: bool,

    /// Log each conversion with byte counts
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to convert; stdin to stdout when none are given
    pub files: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePair {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// stdin -> stdout
    Stdio,
    /// Rewrite each file in place.
    InPlace(Vec<PathBuf>),
    /// Write each input to its paired output.
    NewFile(Vec<FilePair>),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub keepdate: bool,
    pub mode: Mode,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot specify oldfile and newfile simultaneously")]
    ConflictingModes,

    #[error("cannot use globs in newfile mode: {0}")]
    GlobInNewfile(String),

    #[error("newfile mode requires pairs of filenames")]
    OddFileCount,

    #[error("newfile mode requires at least one pair of filenames")]
    NoFilePairs,

    #[error(transparent)]
    Glob(#[from] GlobError),
}

/// Every validation failure found in one pass.
#[derive(Debug, Error)]
#[error("{}", join_lines(.0))]
pub struct ConfigErrors(pub Vec<ConfigError>);

fn join_lines(errs: &[ConfigError]) -> String {
    errs.iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Config, ConfigErrors> {
        let mut errs = Vec::new();

        let mode = if cli.newfile {
            if cli.oldfile {
                errs.push(ConfigError::ConflictingModes);
            }
            Mode::NewFile(pair_files(&cli.files, &mut errs))
        } else if cli.files.is_empty() {
            Mode::Stdio
        } else {
            Mode::InPlace(expand_files(&cli.files, &mut errs))
        };

        if !errs.is_empty() {
            return Err(ConfigErrors(errs));
        }

        Ok(Config {
            keepdate: cli.keepdate,
            mode,
        })
    }
}

fn expand_files(patterns: &[String], errs: &mut Vec<ConfigError>) -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match glob::expand(pattern) {
            Ok(found) => {
                if found.is_empty() {
                    tracing::warn!("no files match {pattern}");
                }
                out.extend(found);
            }
            Err(e) => errs.push(e.into()),
        }
    }
    out
}

fn pair_files(names: &[String], errs: &mut Vec<ConfigError>) -> Vec<FilePair> {
    for name in names {
        if glob::has_meta(name) {
            errs.push(ConfigError::GlobInNewfile(name.clone()));
        }
    }
    if names.len() % 2 == 1 {
        errs.push(ConfigError::OddFileCount);
    }
    if names.is_empty() {
        errs.push(ConfigError::NoFilePairs);
    }

    names
        .chunks_exact(2)
        .map(|pair| FilePair {
            input: PathBuf::from(&pair[0]),
            output: PathBuf::from(&pair[1]),
        })
        .collect()
}
