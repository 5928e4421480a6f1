use thiserror::Error;

/// Message shown when the endpoint answers with a non-success status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch waitlist";

/// Every way a waitlist fetch can fail.
///
/// The controller does not tell these apart for the user: the Display text
/// becomes the error message and the variant only matters for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to fetch waitlist")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FetchError::Network(_) => ErrorCode::Network,
            FetchError::Status(_) => ErrorCode::HttpStatus,
            FetchError::Decode(_) => ErrorCode::Decode,
        }
    }

    /// Message for the error banner.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Network,
    HttpStatus,
    Decode,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Network => "NETWORK_ERROR",
            ErrorCode::HttpStatus => "HTTP_STATUS",
            ErrorCode::Decode => "DECODE_ERROR",
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
