//! Keyword heuristics over a search result page.

use creatrate_core::{BrandDetails, BrandSize, Niche};

/// Size keywords in scan order. A later matching entry overwrites an
/// earlier one, so `big` beats `mid` beats `small` beats `startup`.
const BRAND_SIZE_KEYWORDS: [(BrandSize, &[&str]); 4] = [
    (BrandSize::Startup, &["indie", "small batch", "new brand"]),
    (BrandSize::Small, &["niche", "boutique"]),
    (BrandSize::Mid, &["established", "retail"]),
    (BrandSize::Big, &["global", "mass market", "fortune"]),
];

/// Classify a brand from free text, case-insensitively.
///
/// Matching is plain substring membership, so `"retailer"` counts as
/// `"retail"`. Last match wins for both size and niche.
#[must_use]
pub fn classify_text(text: &str) -> BrandDetails {
    let text = text.to_lowercase();
    let mut details = BrandDetails::default();

    for (size, keywords) in BRAND_SIZE_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            details.brand_size = size;
        }
    }

    for niche in Niche::KEYWORDS {
        if text.contains(niche.as_str()) {
            details.niche = niche;
        }
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(classify_text(""), BrandDetails::default());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let details = classify_text("A BOUTIQUE label for BEAUTY lovers");
        assert_eq!(details.brand_size, BrandSize::Small);
        assert_eq!(details.niche, Niche::Beauty);
    }

    #[test]
    fn later_size_category_wins() {
        // indie (startup) and global (big) both match; big is declared last.
        let details = classify_text("an indie brand that went global");
        assert_eq!(details.brand_size, BrandSize::Big);
    }

    #[test]
    fn later_niche_keyword_wins() {
        // beauty precedes gaming in the keyword list.
        let details = classify_text("gaming headsets and beauty blenders");
        assert_eq!(details.niche, Niche::Gaming);
    }

    #[test]
    fn multi_word_keywords_match() {
        assert_eq!(
            classify_text("a small batch roaster").brand_size,
            BrandSize::Startup
        );
        assert_eq!(
            classify_text("sold in the mass market").brand_size,
            BrandSize::Big
        );
    }

    #[test]
    fn substring_membership_counts() {
        let details = classify_text("largest retailer of techwear");
        assert_eq!(details.brand_size, BrandSize::Mid);
        assert_eq!(details.niche, Niche::Tech);
    }

    #[test]
    fn unmatched_text_keeps_defaults() {
        let details = classify_text("lorem ipsum dolor sit amet");
        assert_eq!(details, BrandDetails::default());
    }
}
