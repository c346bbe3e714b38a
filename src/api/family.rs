use axum::{
    extract::{rejection::FormRejection, Form},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Form body carrying a single color
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorForm {
    /// Hex color, e.g. `#e58677` or `#F00`
    #[serde(default)]
    pub color: String,
}

/// Uppercased `color` field of a form post.
///
/// A missing or unreadable form body counts as a blank color.
pub fn form_color(form: Result<Form<ColorForm>, FormRejection>) -> String {
    match form {
        Ok(Form(form)) => form.color.to_uppercase(),
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable form body, treating color as blank");
            String::new()
        }
    }
}

/// List color families
///
/// Returns every family key in ascending order, including the catch-all ALL.
#[utoipa::path(
    get,
    path = "/family",
    responses(
        (status = 200, description = "Sorted family keys", body = Vec<String>),
    ),
    tag = "Family"
)]
pub async fn handle_family_list() -> impl IntoResponse {
    Json(shade_family::list())
}

/// Find the family of a color
///
/// Grayscale colors belong to no family and get a dedicated error message.
#[utoipa::path(
    post,
    path = "/family/find",
    request_body(content = ColorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Family key", body = String, content_type = "text/plain"),
        (status = 500, description = "Blank, grayscale or invalid color", body = String, content_type = "text/plain"),
    ),
    tag = "Family"
)]
pub async fn handle_family_find(
    form: Result<Form<ColorForm>, FormRejection>,
) -> Result<String, ApiError> {
    let color = form_color(form);
    if color.is_empty() {
        return Err(ApiError::MissingColor);
    }

    match shade_family::find_family(&color) {
        Some(key) => {
            tracing::info!(color = %color, family = key, "Found color family");
            Ok(key.to_string())
        }
        None if shade_family::is_grayscale(&color) => {
            tracing::debug!(color = %color, "Grayscale color has no family");
            Err(ApiError::Grayscale)
        }
        None => {
            tracing::debug!(color = %color, "No family for color");
            Err(ApiError::InvalidColor)
        }
    }
}
