//! Closed categorical attributes and the multiplier tables keyed by them.
//!
//! Each enum's string form is the table key accepted from callers. Parsing
//! anything else yields [`PricingError::UnrecognizedCategory`] naming the
//! field, so the pricing formulas never see a value outside the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PricingError;

/// Shared plumbing for string-keyed categories.
trait Category: Copy + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
}

fn parse_category<T: Category>(value: &str) -> Result<T, PricingError> {
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == value)
        .ok_or_else(|| PricingError::UnrecognizedCategory {
            field: T::FIELD,
            value: value.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[default]
    NonSector,
    Sector,
    Personal,
    Meme,
}

impl ContentType {
    /// `CONTENT_TYPE_FACTORS`
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            ContentType::NonSector => 1.0,
            ContentType::Sector => 1.2,
            ContentType::Personal => 1.5,
            ContentType::Meme => 0.7,
        }
    }
}

impl Category for ContentType {
    const FIELD: &'static str = "content_type";
    const ALL: &'static [Self] = &[
        ContentType::NonSector,
        ContentType::Sector,
        ContentType::Personal,
        ContentType::Meme,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ContentType::NonSector => "non-sector",
            ContentType::Sector => "sector",
            ContentType::Personal => "personal",
            ContentType::Meme => "meme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandSize {
    #[default]
    Startup,
    Small,
    Mid,
    Big,
}

impl BrandSize {
    /// `BRAND_SIZE_FACTORS`
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            BrandSize::Startup => 1.0,
            BrandSize::Small => 1.1,
            BrandSize::Mid => 1.3,
            BrandSize::Big => 1.5,
        }
    }
}

impl Category for BrandSize {
    const FIELD: &'static str = "brand_size";
    const ALL: &'static [Self] = &[
        BrandSize::Startup,
        BrandSize::Small,
        BrandSize::Mid,
        BrandSize::Big,
    ];

    fn as_str(self) -> &'static str {
        match self {
            BrandSize::Startup => "startup",
            BrandSize::Small => "small",
            BrandSize::Mid => "mid",
            BrandSize::Big => "big",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Personal,
    Creator,
    Business,
}

impl PageType {
    /// `PAGE_TYPE_MULTIPLIERS`
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            PageType::Personal => 1.0,
            PageType::Creator => 1.1,
            PageType::Business => 1.2,
        }
    }
}

impl Category for PageType {
    const FIELD: &'static str = "page_type";
    const ALL: &'static [Self] = &[PageType::Personal, PageType::Creator, PageType::Business];

    fn as_str(self) -> &'static str {
        match self {
            PageType::Personal => "personal",
            PageType::Creator => "creator",
            PageType::Business => "business",
        }
    }
}

/// Instagram content *format*, distinct from the profile's [`ContentType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Image,
    #[default]
    Video,
    Carousel,
}

impl ContentFormat {
    /// `IG_CONTENT_TYPE_MULTIPLIERS`
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            ContentFormat::Image => 1.0,
            ContentFormat::Video => 1.2,
            ContentFormat::Carousel => 1.1,
        }
    }
}

impl Category for ContentFormat {
    const FIELD: &'static str = "content_format";
    const ALL: &'static [Self] = &[
        ContentFormat::Image,
        ContentFormat::Video,
        ContentFormat::Carousel,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Image => "image",
            ContentFormat::Video => "video",
            ContentFormat::Carousel => "carousel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstagramDeliverable {
    #[default]
    Reel,
    Post,
    Story,
}

impl InstagramDeliverable {
    /// `CPM_TABLE_INSTAGRAM`: base rate per 1000 followers.
    #[must_use]
    pub fn cpm(self) -> f64 {
        match self {
            InstagramDeliverable::Reel => 7.50,
            InstagramDeliverable::Post => 8.00,
            InstagramDeliverable::Story => 6.00,
        }
    }
}

impl Category for InstagramDeliverable {
    const FIELD: &'static str = "deliverable";
    const ALL: &'static [Self] = &[
        InstagramDeliverable::Reel,
        InstagramDeliverable::Post,
        InstagramDeliverable::Story,
    ];

    fn as_str(self) -> &'static str {
        match self {
            InstagramDeliverable::Reel => "reel",
            InstagramDeliverable::Post => "post",
            InstagramDeliverable::Story => "story",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YoutubeFormat {
    Integration,
    Shorts,
    #[default]
    Dedicated,
}

impl YoutubeFormat {
    /// `FORMAT_MULTIPLIERS`
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            YoutubeFormat::Integration => 0.6,
            YoutubeFormat::Shorts => 0.3,
            YoutubeFormat::Dedicated => 1.0,
        }
    }
}

impl Category for YoutubeFormat {
    const FIELD: &'static str = "format_type";
    const ALL: &'static [Self] = &[
        YoutubeFormat::Integration,
        YoutubeFormat::Shorts,
        YoutubeFormat::Dedicated,
    ];

    fn as_str(self) -> &'static str {
        match self {
            YoutubeFormat::Integration => "integration",
            YoutubeFormat::Shorts => "shorts",
            YoutubeFormat::Dedicated => "dedicated",
        }
    }
}

/// Engagement bucket derived from an engagement rate, never parsed from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTier {
    Low,
    Medium,
    High,
}

impl EngagementTier {
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            EngagementTier::Low => 0.8,
            EngagementTier::Medium => 1.0,
            EngagementTier::High => 1.2,
        }
    }
}

impl fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngagementTier::Low => write!(f, "low"),
            EngagementTier::Medium => write!(f, "medium"),
            EngagementTier::High => write!(f, "high"),
        }
    }
}

macro_rules! string_forms {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = PricingError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_category(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

string_forms!(
    ContentType,
    BrandSize,
    PageType,
    ContentFormat,
    InstagramDeliverable,
    YoutubeFormat,
);
