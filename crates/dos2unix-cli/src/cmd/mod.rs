// crates/dos2unix-cli/src/cmd/mod.rs

pub mod newfile;
pub mod oldfile;
pub mod stdio;

use anyhow::Result;

use crate::config::{Config, Mode};

pub fn run(cfg: &Config) -> Result<()> {
    match &cfg.mode {
        Mode::Stdio => stdio::run(),
        Mode::InPlace(files) => oldfile::run(files, cfg.keepdate),
        Mode::NewFile(pairs) => newfile::run(pairs, cfg.keepdate),
    }
}
