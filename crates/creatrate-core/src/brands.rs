use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BrandSize;

/// Content niche inferred for a brand. `General` when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    #[default]
    General,
    Beauty,
    Fashion,
    Tech,
    Fitness,
    Food,
    Travel,
    Gaming,
}

impl Niche {
    /// Keyword niches in scan order. `General` is the fallback, not a keyword.
    pub const KEYWORDS: [Niche; 7] = [
        Niche::Beauty,
        Niche::Fashion,
        Niche::Tech,
        Niche::Fitness,
        Niche::Food,
        Niche::Travel,
        Niche::Gaming,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Niche::General => "general",
            Niche::Beauty => "beauty",
            Niche::Fashion => "fashion",
            Niche::Tech => "tech",
            Niche::Fitness => "fitness",
            Niche::Food => "food",
            Niche::Travel => "travel",
            Niche::Gaming => "gaming",
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse brand classification produced by the brand lookup.
///
/// The default (`startup`, `general`) is also the answer whenever the lookup
/// could not reach its search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandDetails {
    pub brand_size: BrandSize,
    pub niche: Niche,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_startup_general() {
        let details = BrandDetails::default();
        assert_eq!(details.brand_size, BrandSize::Startup);
        assert_eq!(details.niche, Niche::General);
    }

    #[test]
    fn serializes_as_plain_strings() {
        let details = BrandDetails {
            brand_size: BrandSize::Big,
            niche: Niche::Gaming,
        };
        let json = serde_json::to_value(details).expect("serialize");
        assert_eq!(json["brand_size"], "big");
        assert_eq!(json["niche"], "gaming");
    }

    #[test]
    fn keywords_exclude_general() {
        assert!(!Niche::KEYWORDS.contains(&Niche::General));
        assert_eq!(Niche::KEYWORDS[0].as_str(), "beauty");
        assert_eq!(Niche::KEYWORDS[6].to_string(), "gaming");
    }
}
