use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecStdError {
    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),

    /// Nothing exists at the path that was read.
    #[error("could not find \"{path}\"")]
    NotFound {
        /// The missing path
        path: String,
    },

    /// This error is thrown when there is an empty file
    #[error("\"{empty_file}\" is an empty file.")]
    EmptyFile {
        /// The empty file path
        empty_file: String,
    },
}
