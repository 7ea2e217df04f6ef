use axum::{Extension, Json};
use creatrate_core::{
    DiscountRequest, InstagramPriceRequest, PriceRange, PriceRangeRequest, Quote,
    TiktokPriceRequest, UgcPriceRequest, YoutubePriceRequest,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_pricing_error, ApiError};

#[derive(Debug, Serialize)]
pub(super) struct DiscountResponse {
    price: f64,
}

pub(super) async fn calculate_tiktok_price(
    Extension(req_id): Extension<RequestId>,
    Json(req): Json<TiktokPriceRequest>,
) -> Result<Json<Quote>, ApiError> {
    req.quote()
        .map(Json)
        .map_err(|e| map_pricing_error(req_id.0, &e))
}

pub(super) async fn calculate_instagram_price(
    Extension(req_id): Extension<RequestId>,
    Json(req): Json<InstagramPriceRequest>,
) -> Result<Json<Quote>, ApiError> {
    req.quote()
        .map(Json)
        .map_err(|e| map_pricing_error(req_id.0, &e))
}

pub(super) async fn calculate_youtube_price(
    Extension(req_id): Extension<RequestId>,
    Json(req): Json<YoutubePriceRequest>,
) -> Result<Json<Quote>, ApiError> {
    req.quote()
        .map(Json)
        .map_err(|e| map_pricing_error(req_id.0, &e))
}

pub(super) async fn calculate_ugc_price(
    Extension(req_id): Extension<RequestId>,
    Json(req): Json<UgcPriceRequest>,
) -> Result<Json<Quote>, ApiError> {
    req.quote()
        .map(Json)
        .map_err(|e| map_pricing_error(req_id.0, &e))
}

pub(super) async fn apply_discount(Json(req): Json<DiscountRequest>) -> Json<DiscountResponse> {
    Json(DiscountResponse {
        price: req.discounted(),
    })
}

pub(super) async fn price_recommendation_range(
    Json(req): Json<PriceRangeRequest>,
) -> Json<PriceRange> {
    Json(req.range())
}
