// crates/dos2unix-cli/src/io/mod.rs

pub mod files;
pub mod glob;

/// Buffer size for every file/stdio reader and writer (64 KiB).
pub const BUF_SIZE: usize = 1 << 16;
