use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputsError {
    /// The payload is not valid JSON.
    #[error("malformed inputs: {0}")]
    Malformed(#[from] serde_json::Error),
}
