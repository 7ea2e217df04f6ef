use super::*;
use crate::{BrandSize, ContentType, PageType};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

const CONTENT_TYPES: [ContentType; 4] = [
    ContentType::NonSector,
    ContentType::Sector,
    ContentType::Personal,
    ContentType::Meme,
];

const BRAND_SIZES: [BrandSize; 4] = [
    BrandSize::Startup,
    BrandSize::Small,
    BrandSize::Mid,
    BrandSize::Big,
];

fn tiktok_profile() -> Profile {
    Profile {
        followers: 10_000,
        avg_views: 50_000,
        engagement_rate: 4.0,
        content_type: ContentType::Sector,
        brand_size: BrandSize::Mid,
        ..Profile::default()
    }
}

fn instagram_profile(followers: u64, engagement_rate: f64) -> Profile {
    Profile {
        followers,
        engagement_rate,
        ..Profile::default()
    }
}

// ---------------------------------------------------------------------------
// Engagement helpers
// ---------------------------------------------------------------------------

#[test]
fn engaged_views_applies_percentage() {
    assert_close(engaged_views(50_000, 4.0), 2_000.0);
    assert_close(engaged_views(0, 10.0), 0.0);
    assert_close(engaged_views(1_000, 0.0), 0.0);
}

#[test]
fn engagement_tier_boundaries_are_medium_inclusive() {
    assert_eq!(engagement_rate_tier(0.999), EngagementTier::Low);
    assert_eq!(engagement_rate_tier(1.0), EngagementTier::Medium);
    assert_eq!(engagement_rate_tier(3.0), EngagementTier::Medium);
    assert_eq!(engagement_rate_tier(3.001), EngagementTier::High);
}

// ---------------------------------------------------------------------------
// TikTok
// ---------------------------------------------------------------------------

#[test]
fn tiktok_dedicated_price() {
    // (2000 * 0.0275 + 10 * 1.5) * 1.2 * 1.3
    assert_close(calculate_tiktok_price(&tiktok_profile(), false), 109.2);
}

#[test]
fn tiktok_integrated_is_forty_percent_of_dedicated() {
    for content_type in CONTENT_TYPES {
        for brand_size in BRAND_SIZES {
            let profile = Profile {
                content_type,
                brand_size,
                ..tiktok_profile()
            };
            let dedicated = calculate_tiktok_price(&profile, false);
            let integrated = calculate_tiktok_price(&profile, true);
            assert_eq!(integrated, dedicated * INTEGRATED_PLACEMENT_FACTOR);
        }
    }
}

#[test]
fn tiktok_is_non_decreasing_in_followers_and_engagement() {
    for content_type in CONTENT_TYPES {
        for brand_size in BRAND_SIZES {
            let mut previous = f64::MIN;
            for followers in [0, 1, 999, 1_000, 25_000, 1_000_000] {
                let profile = Profile {
                    followers,
                    content_type,
                    brand_size,
                    ..tiktok_profile()
                };
                let price = calculate_tiktok_price(&profile, false);
                assert!(price >= previous, "price fell at followers={followers}");
                previous = price;
            }

            let mut previous = f64::MIN;
            for engagement_rate in [0.0, 0.5, 1.0, 3.0, 7.5, 100.0] {
                let profile = Profile {
                    engagement_rate,
                    content_type,
                    brand_size,
                    ..tiktok_profile()
                };
                let price = calculate_tiktok_price(&profile, false);
                assert!(price >= previous, "price fell at rate={engagement_rate}");
                previous = price;
            }
        }
    }
}

#[test]
fn tiktok_empty_profile_is_free() {
    assert_close(calculate_tiktok_price(&Profile::default(), false), 0.0);
}

// ---------------------------------------------------------------------------
// Instagram
// ---------------------------------------------------------------------------

#[test]
fn instagram_post_carousel_for_creator_page() {
    let profile = Profile {
        page_type: PageType::Creator,
        ..instagram_profile(20_000, 2.0)
    };
    // 20 * 8.00 * 1.0 * 1.1 * 1.1
    let price = calculate_instagram_price(
        &profile,
        InstagramDeliverable::Post,
        ContentFormat::Carousel,
        false,
    );
    assert_close(price, 193.6);

    let integrated = calculate_instagram_price(
        &profile,
        InstagramDeliverable::Post,
        ContentFormat::Carousel,
        true,
    );
    assert_eq!(integrated, price * INTEGRATED_PLACEMENT_FACTOR);
}

#[test]
fn instagram_engagement_boundaries() {
    let price_at = |rate: f64| {
        calculate_instagram_price(
            &instagram_profile(1_000, rate),
            InstagramDeliverable::Reel,
            ContentFormat::Image,
            false,
        )
    };
    assert_close(price_at(0.999), 7.5 * 0.8);
    assert_close(price_at(1.0), 7.5);
    assert_close(price_at(3.0), 7.5);
    assert_close(price_at(3.001), 7.5 * 1.2);
}

#[test]
fn instagram_story_video_business_high_engagement() {
    let profile = Profile {
        page_type: PageType::Business,
        ..instagram_profile(50_000, 5.0)
    };
    // 50 * 6.00 * 1.2 * 1.2 * 1.2
    let price = calculate_instagram_price(
        &profile,
        InstagramDeliverable::Story,
        ContentFormat::Video,
        false,
    );
    assert_close(price, 518.4);
}

// ---------------------------------------------------------------------------
// YouTube
// ---------------------------------------------------------------------------

#[test]
fn youtube_integration_with_niche_multiplier() {
    let profile = Profile {
        subscribers: Some(100_000),
        avg_youtube_views: Some(25_000),
        niche_multiplier: 1.5,
        ..Profile::default()
    };
    // 100 * 12 * 0.25 * 0.6 * 1.5
    assert_close(
        calculate_youtube_price(&profile, YoutubeFormat::Integration),
        270.0,
    );
}

#[test]
fn youtube_ratio_above_one_is_not_capped() {
    let profile = Profile {
        subscribers: Some(1_000),
        avg_youtube_views: Some(5_000),
        ..Profile::default()
    };
    assert_close(
        calculate_youtube_price(&profile, YoutubeFormat::Dedicated),
        60.0,
    );
}

#[test]
fn youtube_without_data_is_zero() {
    let cases = [
        (None, Some(5_000)),
        (Some(1_000), None),
        (Some(0), Some(5_000)),
        (Some(1_000), Some(0)),
        (None, None),
    ];
    for (subscribers, avg_youtube_views) in cases {
        let profile = Profile {
            followers: 1_000_000,
            subscribers,
            avg_youtube_views,
            niche_multiplier: 3.0,
            ..Profile::default()
        };
        assert_eq!(
            calculate_youtube_price(&profile, YoutubeFormat::Dedicated),
            0.0,
            "subscribers={subscribers:?} views={avg_youtube_views:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// UGC
// ---------------------------------------------------------------------------

#[test]
fn ugc_price_combines_score_niche_and_brand() {
    let profile = Profile {
        base_deliverable_price: Some(100.0),
        ugc_score: Some(9),
        niche_multiplier: 1.2,
        brand_size: BrandSize::Small,
        ..Profile::default()
    };
    // 100 * 1.1 * 1.2 * 1.1
    assert_close(calculate_ugc_price(&profile), 145.2);
}

#[test]
fn ugc_score_outside_bands_uses_neutral_multiplier() {
    let profile = Profile {
        base_deliverable_price: Some(80.0),
        ugc_score: Some(150),
        ..Profile::default()
    };
    assert_close(calculate_ugc_price(&profile), 80.0);
}

#[test]
fn ugc_without_data_is_zero() {
    let cases = [
        (None, Some(5)),
        (Some(100.0), None),
        (Some(0.0), Some(5)),
        (Some(100.0), Some(0)),
    ];
    for (base_deliverable_price, ugc_score) in cases {
        let profile = Profile {
            base_deliverable_price,
            ugc_score,
            brand_size: BrandSize::Big,
            ..Profile::default()
        };
        assert_eq!(calculate_ugc_price(&profile), 0.0);
    }
}

// ---------------------------------------------------------------------------
// Presentation helpers
// ---------------------------------------------------------------------------

#[test]
fn discount_default_and_explicit() {
    assert_close(apply_discount(100.0, 0.3), 70.0);
    assert_close(apply_default_discount(100.0), 70.0);
    assert_close(apply_discount(100.0, 0.0), 100.0);
}

#[test]
fn discount_rate_is_not_clamped() {
    assert_close(apply_discount(100.0, 1.5), -50.0);
    assert_close(apply_discount(100.0, -0.5), 150.0);
}

#[test]
fn recommendation_range_is_thirty_percent_band() {
    assert_eq!(price_recommendation_range(100.0), (70.0, 130.0));
    assert_eq!(price_recommendation_range(0.0), (0.0, 0.0));
    assert_eq!(price_recommendation_range(33.333), (23.33, 43.33));
}

#[test]
fn round_price_to_cents() {
    assert_eq!(round_price(109.199_999_999), 109.2);
    assert_eq!(round_price(12.345_6), 12.35);
    assert_eq!(round_price(0.0), 0.0);
}

#[test]
fn round_price_ties_go_to_even_cent() {
    assert_eq!(round_price(0.125), 0.12);
    assert_eq!(round_price(0.375), 0.38);
    assert_eq!(round_price(-0.125), -0.12);
}

#[test]
fn round_price_uses_stored_binary_value() {
    // 2.675 is stored as 2.67499999...
    assert_eq!(round_price(2.675), 2.67);
    assert_eq!(round_price(1.005), 1.0);
}

#[test]
fn ugc_quote_rounds_like_decimal_rounding() {
    let profile = Profile {
        base_deliverable_price: Some(2.675),
        ugc_score: Some(5),
        ..Profile::default()
    };
    assert_eq!(Quote::from_price(calculate_ugc_price(&profile)).price, 2.67);
}

#[test]
fn quote_rounds_price_and_attaches_range() {
    let quote = Quote::from_price(193.600_000_000_1);
    assert_eq!(quote.price, 193.6);
    assert_eq!(quote.range, PriceRange { low: 135.52, high: 251.68 });
}
