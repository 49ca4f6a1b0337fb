//! Party generation API routes

use axum::{extract::State, http::StatusCode, response::Html, Json};
use std::sync::Arc;

use crate::application::dto::PartyResponseDto;
use crate::application::services::PartyService;
use crate::infrastructure::state::AppState;

/// Landing page with the generator UI
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

/// Generate one adventuring party
pub async fn generate_party(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PartyResponseDto>, (StatusCode, String)> {
    let party = state
        .party_service
        .generate_party()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(PartyResponseDto::from(party)))
}
