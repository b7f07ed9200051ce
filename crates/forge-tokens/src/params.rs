//! Brand parameters: base hue and chroma for the brand and its neutrals.
//!
//! Everything here is a table lookup keyed by the classification, plus an
//! additive chroma nudge for tone words. Seed variance is applied later by
//! the fingerprint; these are the pre-variance anchors.

use serde::{Deserialize, Serialize};

use crate::classify::{Category, Classification, Mood};

/// Bounds for the brand chroma.
pub const BRAND_CHROMA_MIN: f64 = 0.08;
/// Upper bound for the brand chroma.
pub const BRAND_CHROMA_MAX: f64 = 0.22;
/// Neutrals never exceed this chroma.
pub const NEUTRAL_CHROMA_CAP: f64 = 0.015;

/// Where inside a mood's neutral chroma range the neutral lands.
const NEUTRAL_RANGE_BIAS: f64 = 0.4;

/// Tone words and the chroma they add. Each word counts at most once.
const TONE_MODIFIERS: [(&str, f64); 14] = [
    ("playful", 0.03),
    ("bold", 0.04),
    ("vibrant", 0.03),
    ("energetic", 0.02),
    ("innovative", 0.02),
    ("luxurious", 0.01),
    ("warm", 0.01),
    ("minimal", -0.03),
    ("understated", -0.02),
    ("calm", -0.02),
    ("muted", -0.04),
    ("professional", -0.01),
    ("technical", -0.01),
    ("trustworthy", -0.01),
];

/// Pre-variance color anchors for one brand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandParameters {
    /// Category hue before seed variance, in degrees.
    pub brand_hue_base: f64,
    /// Brand chroma after tone modifiers, in `[0.08, 0.22]`.
    pub brand_chroma: f64,
    /// Degrees added to the final brand hue to place the neutrals.
    pub neutral_hue_offset: f64,
    /// Neutral chroma, at most 0.015.
    pub neutral_chroma: f64,
}

/// `(hue_base, chroma_base, neutral_hue_offset)` per category.
#[must_use]
pub const fn category_anchor(category: Category) -> (f64, f64, f64) {
    match category {
        Category::Fintech => (250.0, 0.14, 20.0),
        Category::Health => (165.0, 0.12, -30.0),
        Category::Legal => (230.0, 0.10, 15.0),
        Category::Education => (280.0, 0.15, -20.0),
        Category::Ecommerce => (20.0, 0.18, 25.0),
        Category::Productivity => (210.0, 0.13, 30.0),
        Category::Creative => (320.0, 0.19, -25.0),
        Category::Developer => (190.0, 0.13, 35.0),
        Category::Social => (340.0, 0.17, 20.0),
        Category::Food => (35.0, 0.17, -15.0),
        Category::Travel => (200.0, 0.15, 25.0),
        Category::RealEstate => (45.0, 0.11, 30.0),
        Category::Sales => (260.0, 0.14, -20.0),
        Category::General => (240.0, 0.12, 20.0),
    }
}

/// `(min, max)` neutral chroma per mood.
#[must_use]
pub const fn neutral_chroma_range(mood: Mood) -> (f64, f64) {
    match mood {
        Mood::Playful => (0.010, 0.020),
        Mood::Luxurious => (0.006, 0.014),
        Mood::Bold => (0.012, 0.024),
        Mood::Minimal => (0.000, 0.006),
        Mood::Calm => (0.006, 0.012),
        Mood::Warm => (0.010, 0.018),
        Mood::Technical | Mood::Professional => (0.004, 0.010),
        Mood::Trustworthy => (0.005, 0.012),
        Mood::Innovative => (0.008, 0.016),
    }
}

/// Sum of the tone modifiers present in `statement` or in the mood name.
#[must_use]
pub fn tone_chroma_delta(statement: &str, mood: Mood) -> f64 {
    let tone = format!("{} {}", statement.to_lowercase(), mood.name());
    TONE_MODIFIERS
        .iter()
        .filter(|(word, _)| tone.contains(word))
        .map(|(_, delta)| delta)
        .sum()
}

impl BrandParameters {
    /// Derive the anchors for a classified brand.
    #[must_use]
    pub fn derive(classification: &Classification, statement: &str) -> Self {
        let (hue, chroma, offset) = category_anchor(classification.category);
        let delta = tone_chroma_delta(statement, classification.mood);
        let brand_chroma = round_to((chroma + delta).clamp(BRAND_CHROMA_MIN, BRAND_CHROMA_MAX), 4);

        let (lo, hi) = neutral_chroma_range(classification.mood);
        let neutral_chroma = round_to((hi - lo).mul_add(NEUTRAL_RANGE_BIAS, lo).min(NEUTRAL_CHROMA_CAP), 4);

        Self {
            brand_hue_base: hue,
            brand_chroma,
            neutral_hue_offset: offset,
            neutral_chroma,
        }
    }
}

/// Round to `places` decimal places.
#[must_use]
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MatchSource;

    fn classified(category: Category, mood: Mood) -> Classification {
        Classification {
            category,
            mood,
            matched_keywords: Vec::new(),
            match_source: MatchSource::Default,
            score: 0,
        }
    }

    #[test]
    fn legal_professional_anchors() {
        let p = BrandParameters::derive(&classified(Category::Legal, Mood::Professional), "");
        assert_eq!(p.brand_hue_base, 230.0);
        assert_eq!(p.brand_chroma, 0.09);
        assert_eq!(p.neutral_hue_offset, 15.0);
        assert_eq!(p.neutral_chroma, 0.0064);
    }

    #[test]
    fn playful_raises_chroma() {
        let plain = BrandParameters::derive(&classified(Category::Sales, Mood::Professional), "");
        let playful = BrandParameters::derive(&classified(Category::Sales, Mood::Playful), "playful");
        assert!(playful.brand_chroma > plain.brand_chroma);
    }

    #[test]
    fn minimal_lowers_chroma() {
        let p = BrandParameters::derive(&classified(Category::Productivity, Mood::Minimal), "");
        assert_eq!(p.brand_chroma, 0.10);
    }

    #[test]
    fn chroma_clamped_high() {
        let p = BrandParameters::derive(
            &classified(Category::Creative, Mood::Bold),
            "bold vibrant energetic playful innovative",
        );
        assert_eq!(p.brand_chroma, BRAND_CHROMA_MAX);
    }

    #[test]
    fn chroma_clamped_low() {
        let p = BrandParameters::derive(
            &classified(Category::Legal, Mood::Minimal),
            "muted understated calm",
        );
        assert_eq!(p.brand_chroma, BRAND_CHROMA_MIN);
    }

    #[test]
    fn tone_word_counts_once() {
        // "minimal" in both statement and mood name applies once.
        let delta = tone_chroma_delta("minimal minimal", Mood::Minimal);
        assert!((delta + 0.03).abs() < 1e-12, "delta = {delta}");
    }

    #[test]
    fn neutral_chroma_capped() {
        let p = BrandParameters::derive(&classified(Category::Ecommerce, Mood::Bold), "");
        assert_eq!(p.neutral_chroma, NEUTRAL_CHROMA_CAP);
    }

    #[test]
    fn neutral_chroma_never_exceeds_cap() {
        for mood in Mood::ALL {
            let p = BrandParameters::derive(&classified(Category::General, mood), "");
            assert!(p.neutral_chroma <= NEUTRAL_CHROMA_CAP, "{mood:?}: {}", p.neutral_chroma);
            assert!(p.neutral_chroma >= 0.0);
        }
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.123_456, 4), 0.1235);
        assert_eq!(round_to(0.1 + 0.2, 2), 0.3);
    }
}
