use clap::{Args, Parser, Subcommand};
use creatrate_core::{
    DiscountRequest, InstagramPriceRequest, PriceRangeRequest, QuestionnaireAnswers,
    TiktokPriceRequest, UgcPriceRequest, YoutubePriceRequest,
};
use creatrate_scraper::BrandClassifier;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "creatrate-cli")]
#[command(about = "Creator deal pricing from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Audience metrics shared by the TikTok and Instagram quotes.
#[derive(Debug, Args, PartialEq)]
struct AudienceArgs {
    #[arg(long, default_value_t = 0)]
    followers: u64,
    #[arg(long, default_value_t = 0)]
    avg_engagements: u64,
    #[arg(long, default_value_t = 0)]
    avg_views: u64,
    /// Engagement rate in percentage points (2.5 means 2.5%)
    #[arg(long, default_value_t = 0.0)]
    engagement_rate: f64,
    #[arg(long, default_value = "non-sector")]
    content_type: String,
    #[arg(long, default_value = "startup")]
    brand_size: String,
    /// Price as an integrated placement instead of a dedicated post
    #[arg(long)]
    integrated: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a UGC creator questionnaire
    Score {
        #[arg(long, default_value = "")]
        skill_level: String,
        #[arg(long, default_value = "")]
        editing: String,
        #[arg(long, default_value = "")]
        complexity: String,
        #[arg(long, default_value = "")]
        content_type: String,
        #[arg(long, default_value = "")]
        equipment: String,
    },
    /// Quote a TikTok post
    Tiktok {
        #[command(flatten)]
        audience: AudienceArgs,
    },
    /// Quote an Instagram deliverable
    Instagram {
        #[command(flatten)]
        audience: AudienceArgs,
        #[arg(long, default_value = "personal")]
        page_type: String,
        /// reel, post or story
        #[arg(long, default_value = "reel")]
        deliverable: String,
        /// image, video or carousel
        #[arg(long, default_value = "video")]
        content_format: String,
    },
    /// Quote a YouTube video
    Youtube {
        #[arg(long, default_value_t = 0)]
        subscribers: u64,
        #[arg(long, default_value_t = 0)]
        avg_youtube_views: u64,
        #[arg(long, default_value_t = 1.0)]
        niche_multiplier: f64,
        /// integration, shorts or dedicated
        #[arg(long, default_value = "dedicated")]
        format_type: String,
    },
    /// Quote a UGC deliverable
    Ugc {
        #[arg(long, default_value_t = 100.0)]
        base_price: f64,
        #[arg(long, default_value_t = 5)]
        ugc_score: u32,
        #[arg(long, default_value = "startup")]
        brand_size: String,
        #[arg(long, default_value_t = 1.0)]
        niche_multiplier: f64,
    },
    /// Estimate a brand's size and niche from a web search
    Brand { name: String },
    /// Recommendation band (±30%) around a price
    Range {
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Apply a discount to a price
    Discount {
        #[arg(allow_negative_numbers = true)]
        price: f64,
        /// Fraction taken off; not clamped, so negative rates mark up
        #[arg(long, default_value_t = 0.3, allow_negative_numbers = true)]
        rate: f64,
    },
}

fn tiktok_request(audience: AudienceArgs) -> TiktokPriceRequest {
    TiktokPriceRequest {
        followers: audience.followers,
        avg_engagements: audience.avg_engagements,
        avg_views: audience.avg_views,
        engagement_rate: audience.engagement_rate,
        content_type: audience.content_type,
        brand_size: audience.brand_size,
        integrated: audience.integrated,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = creatrate_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "running command");
    match cli.command {
        Commands::Score {
            skill_level,
            editing,
            complexity,
            content_type,
            equipment,
        } => {
            let answers = QuestionnaireAnswers {
                skill_level,
                editing,
                complexity,
                content_type,
                equipment,
            };
            print_json(&serde_json::json!({ "ugc_score": answers.score() }))?;
        }
        Commands::Tiktok { audience } => {
            print_json(&tiktok_request(audience).quote()?)?;
        }
        Commands::Instagram {
            audience,
            page_type,
            deliverable,
            content_format,
        } => {
            let req = InstagramPriceRequest {
                followers: audience.followers,
                avg_engagements: audience.avg_engagements,
                avg_views: audience.avg_views,
                engagement_rate: audience.engagement_rate,
                content_type: audience.content_type,
                page_type,
                brand_size: audience.brand_size,
                deliverable,
                content_format,
                integrated: audience.integrated,
            };
            print_json(&req.quote()?)?;
        }
        Commands::Youtube {
            subscribers,
            avg_youtube_views,
            niche_multiplier,
            format_type,
        } => {
            let req = YoutubePriceRequest {
                subscribers,
                avg_youtube_views,
                niche_multiplier,
                format_type,
                ..YoutubePriceRequest::default()
            };
            print_json(&req.quote()?)?;
        }
        Commands::Ugc {
            base_price,
            ugc_score,
            brand_size,
            niche_multiplier,
        } => {
            let req = UgcPriceRequest {
                base_price,
                ugc_score,
                brand_size,
                niche_multiplier,
            };
            print_json(&req.quote()?)?;
        }
        Commands::Brand { name } => {
            let classifier = BrandClassifier::new(&config.brand_lookup)?;
            print_json(&classifier.estimate_brand_details(&name).await)?;
        }
        Commands::Range { price } => {
            print_json(&PriceRangeRequest { price }.range())?;
        }
        Commands::Discount { price, rate } => {
            let req = DiscountRequest {
                price,
                discount_rate: rate,
            };
            print_json(&serde_json::json!({ "price": req.discounted() }))?;
        }
    }

    Ok(())
}
