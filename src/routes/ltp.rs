use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::LtpResponse;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_ltp))
}

// `pair` may repeat, so the query is taken as raw key/value pairs.
pub async fn get_ltp(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<LtpResponse>, AppError> {
    let pairs: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "pair")
        .map(|(_, value)| value)
        .collect();

    info!("GET /api/v1/ltp - Fetching LTP for {:?}", pairs);
    let ltp = services::ltp_service::fetch_last_traded_prices(state.quote_provider.clone(), pairs)
        .await
        .map_err(|e| {
            error!("Error fetching LTP: {}", e);
            e
        })?;

    Ok(Json(LtpResponse { ltp }))
}
