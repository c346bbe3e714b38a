use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shade_family::{FamilyNotFound, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("color cannot be blank")]
    MissingColor,

    #[error("cannot handle grayscale colors")]
    Grayscale,

    #[error("a valid color (#xxxxxx format) must be input to find the family for it")]
    InvalidColor,

    #[error("could not get color family: {0}")]
    FamilyNotFound(#[from] FamilyNotFound),

    #[error("could not invert color: {0}")]
    InvalidHex(#[from] ParseColorError),

    #[error("Page render error: {0}")]
    Page(#[from] PageError),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Color error: {0}")]
    Color(#[from] ParseColorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every failure is a plaintext 500
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
