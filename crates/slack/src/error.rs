use thiserror::Error;

/// Rejected fetch. Transport and application failures share this shape;
/// a missing `status_code` means no response was received.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{}", self.describe())]
pub struct FetchFailure {
    pub status_code: Option<u16>,
    pub status_message: Option<String>,
}

/// Why a fetch was rejected, for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    NoResponse,
    Status(u16),
}

/// Failure to build an API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl FetchFailure {
    pub fn no_response() -> Self {
        Self::default()
    }

    pub fn status(status_code: u16, status_message: Option<String>) -> Self {
        Self {
            status_code: Some(status_code),
            status_message,
        }
    }

    pub fn cause(&self) -> FailureCause {
        match self.status_code {
            Some(code) => FailureCause::Status(code),
            None => FailureCause::NoResponse,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self.cause() {
            FailureCause::NoResponse => "No response from the catalog. Check your connection.",
            FailureCause::Status(code) if code >= 500 => "Catalog error. Please try again later.",
            FailureCause::Status(_) => "The catalog rejected the request.",
        }
    }

    fn describe(&self) -> String {
        let message = self.status_message.as_deref().unwrap_or("no message");
        match self.cause() {
            FailureCause::NoResponse => format!("no response received ({message})"),
            FailureCause::Status(code) => format!("status {code}: {message}"),
        }
    }
}
