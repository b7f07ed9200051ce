//! Seed-driven personality: hue variance and structural profiles.
//!
//! Two brands in the same category and mood share anchors but not
//! fingerprints. The seed nudges both hues by up to ±12° and shifts the
//! radius and shadow profiles one notch either side of the mood's bias.
//! This is the only place the seed touches discrete choices.

use forge_color::oklch::normalize_hue;
use serde::{Deserialize, Serialize};

use crate::classify::Mood;
use crate::params::BrandParameters;
use crate::seed::{
    map_to_range, SALT_BRAND_HUE, SALT_NEUTRAL_HUE, SALT_RADIUS_PROFILE, SALT_SHADOW_PROFILE,
};

/// Largest hue shift the seed may apply, in degrees.
pub const HUE_VARIANCE_LIMIT: f64 = 12.0;

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Corner radius personality, from sharpest to roundest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadiusProfile {
    Sharp,
    Balanced,
    Soft,
    Rounded,
}

impl RadiusProfile {
    /// Profiles in notch order.
    pub const ALL: [Self; 4] = [Self::Sharp, Self::Balanced, Self::Soft, Self::Rounded];

    /// Multiplier applied to the non-full radii.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sharp => 0.5,
            Self::Balanced => 1.0,
            Self::Soft => 1.35,
            Self::Rounded => 1.75,
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Balanced => "balanced",
            Self::Soft => "soft",
            Self::Rounded => "rounded",
        }
    }
}

/// Elevation personality, from flattest to deepest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowProfile {
    Subtle,
    Standard,
    Pronounced,
    Bold,
}

impl ShadowProfile {
    /// Profiles in notch order.
    pub const ALL: [Self; 4] = [Self::Subtle, Self::Standard, Self::Pronounced, Self::Bold];

    /// `(blur, opacity)` multipliers.
    #[must_use]
    pub const fn multipliers(self) -> (f64, f64) {
        match self {
            Self::Subtle => (0.7, 0.6),
            Self::Standard => (1.0, 1.0),
            Self::Pronounced => (1.3, 1.25),
            Self::Bold => (1.6, 1.5),
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Standard => "standard",
            Self::Pronounced => "pronounced",
            Self::Bold => "bold",
        }
    }
}

/// `(radius, shadow)` bias indices per mood.
const fn profile_bias(mood: Mood) -> (usize, usize) {
    match mood {
        Mood::Playful => (3, 2),
        Mood::Luxurious => (1, 1),
        Mood::Bold => (1, 3),
        Mood::Minimal => (0, 0),
        Mood::Calm => (2, 0),
        Mood::Warm => (2, 1),
        Mood::Technical => (0, 1),
        Mood::Trustworthy | Mood::Professional => (1, 1),
        Mood::Innovative => (2, 2),
    }
}

/// Move `bias` by the seed's -1/0/+1 draw for `salt`, staying inside `len`.
fn perturbed_index(seed: u32, bias: usize, len: usize, salt: u32) -> usize {
    let step = map_to_range(seed, -1.0, 2.0, salt).floor() as i64;
    let max = i64::try_from(len.saturating_sub(1)).unwrap_or(0);
    let idx = i64::try_from(bias).unwrap_or(0).saturating_add(step).clamp(0, max);
    usize::try_from(idx).unwrap_or(0)
}

/// Seed draw in `[-12, 12]`, rounded to whole degrees.
///
/// Halves round toward positive infinity: `-4.5` becomes `-4`.
fn hue_variance(seed: u32, salt: u32) -> i32 {
    let draw = map_to_range(seed, -HUE_VARIANCE_LIMIT, HUE_VARIANCE_LIMIT, salt)
        .clamp(-HUE_VARIANCE_LIMIT, HUE_VARIANCE_LIMIT);
    (draw + 0.5).floor() as i32
}

// ---------------------------------------------------------------------------
// Fingerprint
// ---------------------------------------------------------------------------

/// The seed-derived variance bundle for one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingerprint {
    pub seed: u32,
    /// Whole degrees in `[-12, 12]`.
    pub brand_hue_variance: i32,
    /// Whole degrees in `[-12, 12]`.
    pub neutral_hue_variance: i32,
    pub radius_profile: RadiusProfile,
    pub shadow_profile: ShadowProfile,
}

impl Fingerprint {
    /// Derive the fingerprint for `seed` under `mood`.
    #[must_use]
    pub fn derive(seed: u32, mood: Mood) -> Self {
        let (radius_bias, shadow_bias) = profile_bias(mood);
        let radius_idx =
            perturbed_index(seed, radius_bias, RadiusProfile::ALL.len(), SALT_RADIUS_PROFILE);
        let shadow_idx =
            perturbed_index(seed, shadow_bias, ShadowProfile::ALL.len(), SALT_SHADOW_PROFILE);

        Self {
            seed,
            brand_hue_variance: hue_variance(seed, SALT_BRAND_HUE),
            neutral_hue_variance: hue_variance(seed, SALT_NEUTRAL_HUE),
            radius_profile: RadiusProfile::ALL[radius_idx],
            shadow_profile: ShadowProfile::ALL[shadow_idx],
        }
    }

    /// Resolve final hues from the pre-variance anchors.
    #[must_use]
    pub fn resolve_hues(&self, params: &BrandParameters) -> ResolvedHues {
        let brand_hue_final = normalize_hue(params.brand_hue_base + f64::from(self.brand_hue_variance));
        let neutral_hue_base = normalize_hue(brand_hue_final + params.neutral_hue_offset);
        let neutral_hue_final = normalize_hue(neutral_hue_base + f64::from(self.neutral_hue_variance));
        ResolvedHues {
            brand_hue_final,
            neutral_hue_base,
            neutral_hue_final,
        }
    }
}

/// Hues after seed variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHues {
    pub brand_hue_final: f64,
    pub neutral_hue_base: f64,
    pub neutral_hue_final: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
