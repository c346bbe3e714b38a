use axum::extract::{rejection::FormRejection, Form};

use super::family::{form_color, ColorForm};
use crate::error::ApiError;

/// Invert a color
///
/// Replaces every hex digit with its complement (`0` ↔ `F`).
#[utoipa::path(
    post,
    path = "/invert",
    request_body(content = ColorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Inverted color", body = String, content_type = "text/plain"),
        (status = 500, description = "Blank or malformed color", body = String, content_type = "text/plain"),
    ),
    tag = "Color"
)]
pub async fn handle_invert(
    form: Result<Form<ColorForm>, FormRejection>,
) -> Result<String, ApiError> {
    let color = form_color(form);
    if color.is_empty() {
        return Err(ApiError::MissingColor);
    }

    let inverted = shade_family::invert(&color)?;
    tracing::debug!(color = %color, inverted = %inverted, "Inverted color");
    Ok(inverted)
}
