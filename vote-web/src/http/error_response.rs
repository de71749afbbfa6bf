use crate::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidOption(_) | Error::MissingVote => StatusCode::BAD_REQUEST,
            Error::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // store details stay in the log
        let body = if status.is_server_error() {
            error!(error = %self, "Error while handling request");
            match self {
                Error::StoreUnavailable(_) => "Vote store unavailable".to_owned(),
                _ => "Internal server error".to_owned(),
            }
        } else {
            warn!(error = %self, "Rejected request");
            self.to_string()
        };

        (status, body).into_response()
    }
}
