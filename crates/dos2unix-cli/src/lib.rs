// crates/dos2unix-cli/src/lib.rs

pub mod cmd;
pub mod config;
pub mod io;
pub mod logging;
