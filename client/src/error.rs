use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid server address: {0}")]
    InvalidServer(String),

    #[error("Server rejected request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// True if the server answered but refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }

    /// Process exit status for the CLI: 2 when the server refused the
    /// request, 1 for every other failure
    pub fn exit_code(&self) -> i32 {
        if self.is_rejection() {
            2
        } else {
            1
        }
    }
}
