use serde::{Deserialize, Serialize};

use crate::{BrandSize, ContentType, PageType, PricingError};

/// Everything any pricing formula may read about a creator and the brand
/// they are quoting for. Built fresh per quote and discarded afterwards.
///
/// `avg_engagements` is carried for interface compatibility; no formula
/// consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub followers: u64,
    pub avg_engagements: u64,
    pub avg_views: u64,
    /// Percentage points: `2.5` means 2.5%.
    pub engagement_rate: f64,
    pub subscribers: Option<u64>,
    pub avg_youtube_views: Option<u64>,
    pub content_type: ContentType,
    pub page_type: PageType,
    pub brand_size: BrandSize,
    pub niche_multiplier: f64,
    pub base_deliverable_price: Option<f64>,
    pub ugc_score: Option<u32>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            followers: 0,
            avg_engagements: 0,
            avg_views: 0,
            engagement_rate: 0.0,
            subscribers: None,
            avg_youtube_views: None,
            content_type: ContentType::default(),
            page_type: PageType::default(),
            brand_size: BrandSize::default(),
            niche_multiplier: 1.0,
            base_deliverable_price: None,
            ugc_score: None,
        }
    }
}

/// Raw, string-keyed profile as supplied by a caller.
///
/// Missing fields take the documented defaults. Categorical strings are
/// checked when converting into a [`Profile`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub followers: u64,
    pub avg_engagements: u64,
    pub avg_views: u64,
    pub engagement_rate: f64,
    pub subscribers: Option<u64>,
    pub avg_youtube_views: Option<u64>,
    pub content_type: String,
    pub page_type: String,
    pub brand_size: String,
    pub niche_multiplier: f64,
    pub base_deliverable_price: Option<f64>,
    pub ugc_score: Option<u32>,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            followers: 0,
            avg_engagements: 0,
            avg_views: 0,
            engagement_rate: 0.0,
            subscribers: None,
            avg_youtube_views: None,
            content_type: ContentType::default().to_string(),
            page_type: PageType::default().to_string(),
            brand_size: BrandSize::default().to_string(),
            niche_multiplier: 1.0,
            base_deliverable_price: None,
            ugc_score: None,
        }
    }
}

impl TryFrom<ProfileInput> for Profile {
    type Error = PricingError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        Ok(Self {
            followers: input.followers,
            avg_engagements: input.avg_engagements,
            avg_views: input.avg_views,
            engagement_rate: input.engagement_rate,
            subscribers: input.subscribers,
            avg_youtube_views: input.avg_youtube_views,
            content_type: input.content_type.parse()?,
            page_type: input.page_type.parse()?,
            brand_size: input.brand_size.parse()?,
            niche_multiplier: input.niche_multiplier,
            base_deliverable_price: input.base_deliverable_price,
            ugc_score: input.ugc_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_takes_defaults() {
        let input: ProfileInput = serde_json::from_str("{}").expect("deserialize");
        let profile = Profile::try_from(input).expect("valid profile");
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.niche_multiplier, 1.0);
    }

    #[test]
    fn converts_categorical_strings() {
        let input: ProfileInput = serde_json::from_value(serde_json::json!({
            "followers": 12_000,
            "engagement_rate": 2.5,
            "content_type": "meme",
            "page_type": "creator",
            "brand_size": "big",
        }))
        .expect("deserialize");
        let profile = Profile::try_from(input).expect("valid profile");
        assert_eq!(profile.followers, 12_000);
        assert_eq!(profile.content_type, ContentType::Meme);
        assert_eq!(profile.page_type, PageType::Creator);
        assert_eq!(profile.brand_size, BrandSize::Big);
    }

    #[test]
    fn rejects_unknown_page_type() {
        let input = ProfileInput {
            page_type: "agency".to_string(),
            ..ProfileInput::default()
        };
        let err = Profile::try_from(input).unwrap_err();
        assert_eq!(
            err,
            PricingError::UnrecognizedCategory {
                field: "page_type",
                value: "agency".to_string(),
            }
        );
    }
}
