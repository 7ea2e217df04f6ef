//! Caller-facing quote requests.
//!
//! Each request mirrors one pricing operation and fills in the same defaults
//! the HTTP routes have always applied for missing fields. Categorical
//! strings are parsed on [`quote`](TiktokPriceRequest::quote), so an unknown
//! value fails with [`PricingError::UnrecognizedCategory`] before any
//! arithmetic runs.

use serde::Deserialize;

use crate::pricing::{
    apply_discount, calculate_instagram_price, calculate_tiktok_price, calculate_ugc_price,
    calculate_youtube_price, price_recommendation_range, round_price, PriceRange, Quote,
    DEFAULT_DISCOUNT_RATE,
};
use crate::{
    BrandSize, ContentFormat, ContentType, InstagramDeliverable, PageType, PricingError, Profile,
    YoutubeFormat,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiktokPriceRequest {
    pub followers: u64,
    pub avg_engagements: u64,
    pub avg_views: u64,
    pub engagement_rate: f64,
    pub content_type: String,
    pub brand_size: String,
    pub integrated: bool,
}

impl Default for TiktokPriceRequest {
    fn default() -> Self {
        Self {
            followers: 0,
            avg_engagements: 0,
            avg_views: 0,
            engagement_rate: 0.0,
            content_type: ContentType::default().to_string(),
            brand_size: BrandSize::default().to_string(),
            integrated: false,
        }
    }
}

impl TiktokPriceRequest {
    /// # Errors
    ///
    /// Returns [`PricingError::UnrecognizedCategory`] for an unknown
    /// `content_type` or `brand_size`.
    pub fn quote(&self) -> Result<Quote, PricingError> {
        let profile = Profile {
            followers: self.followers,
            avg_engagements: self.avg_engagements,
            avg_views: self.avg_views,
            engagement_rate: self.engagement_rate,
            content_type: self.content_type.parse()?,
            brand_size: self.brand_size.parse()?,
            ..Profile::default()
        };
        Ok(Quote::from_price(calculate_tiktok_price(
            &profile,
            self.integrated,
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstagramPriceRequest {
    pub followers: u64,
    pub avg_engagements: u64,
    pub avg_views: u64,
    pub engagement_rate: f64,
    pub content_type: String,
    pub page_type: String,
    pub brand_size: String,
    pub deliverable: String,
    pub content_format: String,
    pub integrated: bool,
}

impl Default for InstagramPriceRequest {
    fn default() -> Self {
        Self {
            followers: 0,
            avg_engagements: 0,
            avg_views: 0,
            engagement_rate: 0.0,
            content_type: ContentType::default().to_string(),
            page_type: PageType::default().to_string(),
            brand_size: BrandSize::default().to_string(),
            deliverable: InstagramDeliverable::default().to_string(),
            content_format: ContentFormat::default().to_string(),
            integrated: false,
        }
    }
}

impl InstagramPriceRequest {
    /// # Errors
    ///
    /// Returns [`PricingError::UnrecognizedCategory`] for an unknown
    /// `deliverable`, `content_format`, `page_type`, `content_type` or
    /// `brand_size`.
    pub fn quote(&self) -> Result<Quote, PricingError> {
        let deliverable: InstagramDeliverable = self.deliverable.parse()?;
        let content_format: ContentFormat = self.content_format.parse()?;
        let profile = Profile {
            followers: self.followers,
            avg_engagements: self.avg_engagements,
            avg_views: self.avg_views,
            engagement_rate: self.engagement_rate,
            content_type: self.content_type.parse()?,
            page_type: self.page_type.parse()?,
            brand_size: self.brand_size.parse()?,
            ..Profile::default()
        };
        Ok(Quote::from_price(calculate_instagram_price(
            &profile,
            deliverable,
            content_format,
            self.integrated,
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YoutubePriceRequest {
    pub followers: u64,
    pub avg_engagements: u64,
    pub avg_views: u64,
    pub engagement_rate: f64,
    pub subscribers: u64,
    pub avg_youtube_views: u64,
    pub niche_multiplier: f64,
    pub format_type: String,
}

impl Default for YoutubePriceRequest {
    fn default() -> Self {
        Self {
            followers: 0,
            avg_engagements: 0,
            avg_views: 0,
            engagement_rate: 0.0,
            subscribers: 0,
            avg_youtube_views: 0,
            niche_multiplier: 1.0,
            format_type: YoutubeFormat::default().to_string(),
        }
    }
}

impl YoutubePriceRequest {
    /// # Errors
    ///
    /// Returns [`PricingError::UnrecognizedCategory`] for an unknown `format_type`.
    pub fn quote(&self) -> Result<Quote, PricingError> {
        let format_type: YoutubeFormat = self.format_type.parse()?;
        let profile = Profile {
            followers: self.followers,
            avg_engagements: self.avg_engagements,
            avg_views: self.avg_views,
            engagement_rate: self.engagement_rate,
            subscribers: Some(self.subscribers),
            avg_youtube_views: Some(self.avg_youtube_views),
            niche_multiplier: self.niche_multiplier,
            ..Profile::default()
        };
        Ok(Quote::from_price(calculate_youtube_price(
            &profile,
            format_type,
        )))
    }
}

pub const DEFAULT_UGC_BASE_PRICE: f64 = 100.0;
pub const DEFAULT_UGC_SCORE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UgcPriceRequest {
    pub base_price: f64,
    pub ugc_score: u32,
    pub brand_size: String,
    pub niche_multiplier: f64,
}

impl Default for UgcPriceRequest {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_UGC_BASE_PRICE,
            ugc_score: DEFAULT_UGC_SCORE,
            brand_size: BrandSize::default().to_string(),
            niche_multiplier: 1.0,
        }
    }
}

impl UgcPriceRequest {
    /// # Errors
    ///
    /// Returns [`PricingError::UnrecognizedCategory`] for an unknown `brand_size`.
    pub fn quote(&self) -> Result<Quote, PricingError> {
        let profile = Profile {
            base_deliverable_price: Some(self.base_price),
            ugc_score: Some(self.ugc_score),
            brand_size: self.brand_size.parse()?,
            niche_multiplier: self.niche_multiplier,
            ..Profile::default()
        };
        Ok(Quote::from_price(calculate_ugc_price(&profile)))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscountRequest {
    pub price: f64,
    pub discount_rate: f64,
}

impl Default for DiscountRequest {
    fn default() -> Self {
        Self {
            price: 0.0,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl DiscountRequest {
    /// Discounted price rounded to cents.
    #[must_use]
    pub fn discounted(&self) -> f64 {
        round_price(apply_discount(self.price, self.discount_rate))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceRangeRequest {
    pub price: f64,
}

impl PriceRangeRequest {
    #[must_use]
    pub fn range(&self) -> PriceRange {
        price_recommendation_range(self.price).into()
    }
}
