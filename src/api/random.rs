use axum::extract::{Path, State};
use shade_family::Family;

use crate::error::ApiError;
use crate::server::AppState;

/// Random shade of any color
#[utoipa::path(
    get,
    path = "/random",
    responses(
        (status = 200, description = "Random hex color", body = String, content_type = "text/plain"),
    ),
    tag = "Random"
)]
pub async fn handle_random(State(state): State<AppState>) -> Result<String, ApiError> {
    random_shade(&state, "").await
}

/// Random shade of a family
///
/// The family name is case-insensitive.
#[utoipa::path(
    get,
    path = "/random/{color}",
    responses(
        (status = 200, description = "Random hex color", body = String, content_type = "text/plain"),
        (status = 500, description = "Unknown family", body = String, content_type = "text/plain"),
    ),
    params(
        ("color" = String, Path, description = "Family name, e.g. 'blue'"),
    ),
    tag = "Random"
)]
pub async fn handle_random_family(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<String, ApiError> {
    random_shade(&state, &color).await
}

async fn random_shade(state: &AppState, color: &str) -> Result<String, ApiError> {
    let key = match color.to_uppercase() {
        key if key.is_empty() => "ALL".to_string(),
        key => key,
    };

    let family = Family::new(&key)?;
    let shade = {
        let mut rng = state.rng.lock().await;
        family.random(&mut *rng)
    };

    tracing::info!(family = %key, shade = %shade, "Generated random shade");
    Ok(shade)
}
