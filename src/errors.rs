use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    // 外部 API 回非 2xx 時帶回 response body 原文
    #[error("{0}")]
    InvalidContent(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ConnectionError(anyhow::Error),
    #[error(transparent)]
    RequestError(#[from] RequestError),
    #[error("{0}")]
    Validation(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ConnectionError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            AppError::RequestError(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let error_message = self.to_string();
        (status_code, error_message).into_response()
    }
}
