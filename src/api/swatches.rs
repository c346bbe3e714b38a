use axum::{extract::State, response::Html};

use crate::error::ApiError;
use crate::server::AppState;

/// HTML page of random swatches for every family
#[utoipa::path(
    get,
    path = "/swatches",
    responses(
        (status = 200, description = "Swatch page", body = String, content_type = "text/html"),
        (status = 500, description = "Template error"),
    ),
    tag = "Color"
)]
pub async fn handle_swatches(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = {
        let mut rng = state.rng.lock().await;
        state.swatch_page.render(&mut *rng, state.swatches)?
    };
    Ok(Html(html))
}
