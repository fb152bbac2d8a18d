#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The source file is missing or unreadable. Nothing has been written
    /// when this surfaces.
    #[error("could not read {path}: {source}")]
    SourceNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("key file {path}: {source}")]
    KeyFile {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Cipher(#[from] hill_crypto::errors::HillCipherError),

    #[error("histogram rendering failed: {0}")]
    Histogram(#[from] image::ImageError),
}
