pub mod app_config;
pub mod brands;
pub mod categories;
pub mod config;
pub mod error;
pub mod pricing;
pub mod profile;
pub mod requests;
pub mod ugc;

pub use app_config::{AppConfig, BrandLookupConfig, Environment};
pub use brands::{BrandDetails, Niche};
pub use categories::{
    BrandSize, ContentFormat, ContentType, EngagementTier, InstagramDeliverable, PageType,
    YoutubeFormat,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, PricingError};
pub use pricing::{
    apply_default_discount, apply_discount, calculate_instagram_price, calculate_tiktok_price,
    calculate_ugc_price, calculate_youtube_price, engaged_views, engagement_rate_tier,
    price_recommendation_range, round_price, PriceRange, Quote,
};
pub use profile::{Profile, ProfileInput};
pub use requests::{
    DiscountRequest, InstagramPriceRequest, PriceRangeRequest, TiktokPriceRequest,
    UgcPriceRequest, YoutubePriceRequest,
};
pub use ugc::{score_ugc_questionnaire, ugc_score_multiplier, QuestionnaireAnswers, ScoreBand};
