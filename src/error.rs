use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    #[error("Error decoding fixtures: {source}")]
    Format {
        #[from]
        source: serde_lexpr::Error,
    },
}
