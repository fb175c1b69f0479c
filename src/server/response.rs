use crate::error::PanelBoardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

impl PanelBoardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 413 などはそのまま返す
            PanelBoardError::Multipart(e) => e.status(),
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PanelBoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            error!(error = %self, "request failed");
            format!("Server error: {}", self)
        } else {
            warn!(status = %status, error = %self, "request rejected");
            self.to_string()
        };

        (status, body).into_response()
    }
}
