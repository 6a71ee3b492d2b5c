use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::error;

/// Error returned by the HTTP handlers. Client mistakes (an unknown user)
/// map to 400, a preferences file that cannot be saved to 500.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn storage(err: impl fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("could not save selection: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, "{}", self.message);
        }
        (self.status, self.message).into_response()
    }
}

/// Why a status load ended without results. Both kinds render the same way;
/// `Display` yields only the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The backend answered with `success: false`.
    Application(String),
    /// Network failure or a body that is not a status payload.
    Transport(String),
}

impl LoadError {
    pub fn message(&self) -> &str {
        match self {
            Self::Application(message) | Self::Transport(message) => message,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LoadError {}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
