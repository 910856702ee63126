mod error;
mod fs;

pub use error::CodecStdError;
pub use fs::Fs;
