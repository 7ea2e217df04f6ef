//! Per-platform pricing formulas.
//!
//! Every formula is a pure product of profile fields and table multipliers.
//! Prices come back unrounded; [`round_price`] and [`Quote`] are the
//! presentation step.

use serde::Serialize;

use crate::categories::{ContentFormat, EngagementTier, InstagramDeliverable, YoutubeFormat};
use crate::ugc::ugc_score_multiplier;
use crate::Profile;

/// Share of a dedicated post's price paid for an integrated placement.
pub const INTEGRATED_PLACEMENT_FACTOR: f64 = 0.4;

/// YouTube base rate per 1000 subscribers.
pub const BASE_CPM_YOUTUBE: f64 = 12.00;

pub const DEFAULT_DISCOUNT_RATE: f64 = 0.3;

const TIKTOK_ENGAGED_VIEW_RATE: f64 = 0.0275;
const TIKTOK_FOLLOWER_CPM: f64 = 1.50;

const RANGE_LOW_FACTOR: f64 = 0.7;
const RANGE_HIGH_FACTOR: f64 = 1.3;

#[allow(clippy::cast_precision_loss)]
fn per_thousand(count: u64) -> f64 {
    count as f64 / 1000.0
}

fn apply_placement(price: f64, integrated: bool) -> f64 {
    if integrated {
        price * INTEGRATED_PLACEMENT_FACTOR
    } else {
        price
    }
}

/// Views expected to produce an interaction: `avg_views * rate / 100`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engaged_views(avg_views: u64, engagement_rate: f64) -> f64 {
    avg_views as f64 * (engagement_rate / 100.0)
}

/// Bucket an engagement rate (percentage points). `1.0` and `3.0` are both medium.
#[must_use]
pub fn engagement_rate_tier(rate: f64) -> EngagementTier {
    if rate < 1.0 {
        EngagementTier::Low
    } else if rate <= 3.0 {
        EngagementTier::Medium
    } else {
        EngagementTier::High
    }
}

#[must_use]
pub fn calculate_tiktok_price(profile: &Profile, integrated: bool) -> f64 {
    let engaged = engaged_views(profile.avg_views, profile.engagement_rate);
    let base =
        engaged * TIKTOK_ENGAGED_VIEW_RATE + per_thousand(profile.followers) * TIKTOK_FOLLOWER_CPM;
    let price = base * profile.content_type.factor() * profile.brand_size.factor();
    apply_placement(price, integrated)
}

#[must_use]
pub fn calculate_instagram_price(
    profile: &Profile,
    deliverable: InstagramDeliverable,
    content_format: ContentFormat,
    integrated: bool,
) -> f64 {
    let engagement_mult = engagement_rate_tier(profile.engagement_rate).multiplier();
    let price = per_thousand(profile.followers)
        * deliverable.cpm()
        * engagement_mult
        * profile.page_type.multiplier()
        * content_format.multiplier();
    apply_placement(price, integrated)
}

/// Returns `0.0` when subscribers or average views are missing or zero.
///
/// The views/subscribers ratio is used as-is and may exceed `1.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_youtube_price(profile: &Profile, format_type: YoutubeFormat) -> f64 {
    let (Some(subscribers), Some(views)) = (
        profile.subscribers.filter(|&n| n > 0),
        profile.avg_youtube_views.filter(|&n| n > 0),
    ) else {
        return 0.0;
    };

    let engagement_mult = views as f64 / subscribers as f64;
    per_thousand(subscribers)
        * BASE_CPM_YOUTUBE
        * engagement_mult
        * format_type.multiplier()
        * profile.niche_multiplier
}

/// Returns `0.0` when the base deliverable price or UGC score is missing or zero.
#[must_use]
pub fn calculate_ugc_price(profile: &Profile) -> f64 {
    let (Some(base_price), Some(score)) = (
        profile.base_deliverable_price.filter(|&p| p != 0.0),
        profile.ugc_score.filter(|&s| s > 0),
    ) else {
        return 0.0;
    };

    base_price
        * ugc_score_multiplier(score)
        * profile.niche_multiplier
        * profile.brand_size.factor()
}

/// `price * (1 - discount_rate)`. The rate is not range-checked.
#[must_use]
pub fn apply_discount(price: f64, discount_rate: f64) -> f64 {
    price * (1.0 - discount_rate)
}

#[must_use]
pub fn apply_default_discount(price: f64) -> f64 {
    apply_discount(price, DEFAULT_DISCOUNT_RATE)
}

/// Round to two decimal places from the exact binary value, ties to even.
///
/// `2.675` is stored just below the tie and comes out as `2.67`; `0.125` is an
/// exact tie and comes out as `0.12`.
#[must_use]
pub fn round_price(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// ±30% band around a point estimate, each bound rounded to cents.
#[must_use]
pub fn price_recommendation_range(price: f64) -> (f64, f64) {
    (
        round_price(price * RANGE_LOW_FACTOR),
        round_price(price * RANGE_HIGH_FACTOR),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl From<(f64, f64)> for PriceRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

/// A presentable price: rounded point estimate plus its recommendation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub price: f64,
    pub range: PriceRange,
}

impl Quote {
    /// Build a quote from an unrounded formula result.
    #[must_use]
    pub fn from_price(raw: f64) -> Self {
        Self {
            price: round_price(raw),
            range: price_recommendation_range(raw).into(),
        }
    }
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
