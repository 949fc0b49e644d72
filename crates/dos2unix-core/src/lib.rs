// crates/dos2unix-core/src/lib.rs

pub mod carry;
pub mod error;
pub mod kernel;
pub mod transcode;

pub use crate::error::{Result, TranscodeError};
pub use crate::kernel::{ByteKernel, Kernel, WideKernel};
pub use crate::transcode::{transcode, Transcoder, DEFAULT_CHUNK};

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
