use axum::{extract::State, Json};
use creatrate_core::BrandDetails;
use serde::Deserialize;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct EstimateBrandRequest {
    brand_name: String,
}

/// Always answers 200; a failed lookup yields the default classification.
pub(super) async fn estimate_brand(
    State(state): State<AppState>,
    Json(req): Json<EstimateBrandRequest>,
) -> Json<BrandDetails> {
    Json(state.classifier.estimate_brand_details(&req.brand_name).await)
}
