//! Structural tokens: corner radii, elevation shadows, border widths.
//!
//! Each mood owns a base set. The fingerprint's profiles then scale it:
//! the radius profile multiplies the three bounded radii, the shadow
//! profile multiplies every shadow's blur and opacity. Profiles are always
//! applied to the base table, never to an already-scaled set, so deriving
//! twice gives the same numbers.
//!
//! Shadows are kept as structured values and only become CSS text at the
//! export boundary.

use forge_color::Oklch;
use serde::{Deserialize, Serialize};

use crate::classify::Mood;
use crate::fingerprint::{RadiusProfile, ShadowProfile};
use crate::params::round_to;

/// Radius used for pills and circles. Never scaled.
pub const RADIUS_FULL: f64 = 9999.0;

// ---------------------------------------------------------------------------
// Shadow
// ---------------------------------------------------------------------------

/// One drop shadow, in CSS pixels with an OKLCH color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color_l: f64,
    pub color_c: f64,
    pub color_h: f64,
    pub opacity: f64,
}

impl Shadow {
    /// Shadow color without its opacity.
    #[must_use]
    pub const fn color(&self) -> Oklch {
        Oklch::new(self.color_l, self.color_c, self.color_h)
    }

    /// Scale blur and opacity. Opacity saturates at 1.
    #[must_use]
    pub fn scaled(self, blur: f64, opacity: f64) -> Self {
        Self {
            blur: round_to(self.blur * blur, 1),
            opacity: round_to((self.opacity * opacity).min(1.0), 3),
            ..self
        }
    }

    /// CSS `box-shadow` value, e.g. `0px 4px 8px oklch(0.200 0.0000 0.00 / 0.090)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.color().to_css_alpha(self.opacity)
        )
    }
}

/// The five elevation levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowSet {
    pub xs: Shadow,
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

/// `(offset_y, blur)` per elevation, before mood scaling.
const LADDER_GEOMETRY: [(f64, f64); 5] = [(1.0, 2.0), (1.0, 3.0), (4.0, 8.0), (10.0, 20.0), (20.0, 40.0)];

/// Opacity growth per elevation, relative to the mood's base opacity.
const LADDER_OPACITY: [f64; 5] = [1.0, 1.25, 1.5, 1.75, 2.0];

impl ShadowSet {
    fn from_array([xs, sm, md, lg, xl]: [Shadow; 5]) -> Self {
        Self { xs, sm, md, lg, xl }
    }

    /// `(name, shadow)` pairs, lowest elevation first.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, &Shadow); 5] {
        [
            ("xs", &self.xs),
            ("sm", &self.sm),
            ("md", &self.md),
            ("lg", &self.lg),
            ("xl", &self.xl),
        ]
    }

    /// Build a ladder from a base opacity, a blur scale and a tint.
    fn ladder(base_opacity: f64, blur_scale: f64, tint: Oklch) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            let (offset_y, blur) = LADDER_GEOMETRY[i];
            Shadow {
                offset_x: 0.0,
                offset_y,
                blur: round_to(blur * blur_scale, 1),
                color_l: tint.l,
                color_c: tint.c,
                color_h: tint.h,
                opacity: round_to(base_opacity * LADDER_OPACITY[i], 3),
            }
        }))
    }

    /// Light-mode base shadows for `mood`.
    #[must_use]
    pub fn for_mood(mood: Mood) -> Self {
        let (opacity, blur, tint) = match mood {
            Mood::Playful => (0.08, 1.2, Oklch::new(0.35, 0.04, 300.0)),
            Mood::Luxurious => (0.10, 1.5, Oklch::new(0.15, 0.01, 60.0)),
            Mood::Bold => (0.14, 1.0, Oklch::new(0.10, 0.0, 0.0)),
            Mood::Minimal => (0.04, 0.8, Oklch::new(0.20, 0.0, 0.0)),
            Mood::Calm => (0.05, 1.4, Oklch::new(0.30, 0.02, 220.0)),
            Mood::Warm => (0.07, 1.2, Oklch::new(0.25, 0.03, 50.0)),
            Mood::Technical => (0.06, 0.7, Oklch::new(0.20, 0.01, 250.0)),
            Mood::Trustworthy => (0.07, 1.0, Oklch::new(0.20, 0.02, 250.0)),
            Mood::Innovative => (0.09, 1.3, Oklch::new(0.25, 0.04, 280.0)),
            Mood::Professional => (0.06, 1.0, Oklch::new(0.20, 0.0, 0.0)),
        };
        Self::ladder(opacity, blur, tint)
    }

    /// Fixed shadows for dark surfaces. Deeper and darker than any light
    /// set, and independent of mood and profile.
    #[must_use]
    pub fn dark() -> Self {
        const BLACK: Oklch = Oklch::BLACK;
        let shadow = |offset_y: f64, blur: f64, opacity: f64| Shadow {
            offset_x: 0.0,
            offset_y,
            blur,
            color_l: BLACK.l,
            color_c: BLACK.c,
            color_h: BLACK.h,
            opacity,
        };
        Self {
            xs: shadow(1.0, 2.0, 0.30),
            sm: shadow(2.0, 4.0, 0.35),
            md: shadow(6.0, 12.0, 0.45),
            lg: shadow(12.0, 24.0, 0.55),
            xl: shadow(24.0, 48.0, 0.65),
        }
    }

    /// Apply a shadow profile to every level.
    #[must_use]
    pub fn with_profile(&self, profile: ShadowProfile) -> Self {
        let (blur, opacity) = profile.multipliers();
        Self {
            xs: self.xs.scaled(blur, opacity),
            sm: self.sm.scaled(blur, opacity),
            md: self.md.scaled(blur, opacity),
            lg: self.lg.scaled(blur, opacity),
            xl: self.xl.scaled(blur, opacity),
        }
    }
}

// ---------------------------------------------------------------------------
// Radii and borders
// ---------------------------------------------------------------------------

/// `(sm, md, lg)` base radii in px.
#[must_use]
pub const fn base_radii(mood: Mood) -> (f64, f64, f64) {
    match mood {
        Mood::Playful => (6.0, 12.0, 20.0),
        Mood::Luxurious => (2.0, 4.0, 8.0),
        Mood::Bold | Mood::Trustworthy => (4.0, 8.0, 12.0),
        Mood::Minimal | Mood::Technical => (2.0, 4.0, 6.0),
        Mood::Calm | Mood::Warm => (6.0, 10.0, 16.0),
        Mood::Innovative => (6.0, 12.0, 18.0),
        Mood::Professional => (4.0, 6.0, 10.0),
    }
}

/// `(subtle, default, strong)` border widths in px.
#[must_use]
pub const fn base_borders(mood: Mood) -> (f64, f64, f64) {
    match mood {
        Mood::Minimal => (0.5, 1.0, 1.5),
        Mood::Luxurious => (0.5, 1.0, 2.0),
        Mood::Bold | Mood::Playful => (1.0, 2.0, 3.0),
        Mood::Calm
        | Mood::Warm
        | Mood::Technical
        | Mood::Trustworthy
        | Mood::Innovative
        | Mood::Professional => (1.0, 1.0, 2.0),
    }
}

// ---------------------------------------------------------------------------
// StructuralTokenSet
// ---------------------------------------------------------------------------

/// Final structural tokens for one brand, keyed by fixed token names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralTokenSet {
    pub radius_sm: f64,
    pub radius_md: f64,
    pub radius_lg: f64,
    pub radius_full: f64,
    pub shadow_xs: Shadow,
    pub shadow_sm: Shadow,
    pub shadow_md: Shadow,
    pub shadow_lg: Shadow,
    pub shadow_xl: Shadow,
    pub border_subtle: f64,
    pub border_default: f64,
    pub border_strong: f64,
}

impl StructuralTokenSet {
    /// Derive the tokens for `mood` under the given profiles.
    #[must_use]
    pub fn derive(mood: Mood, radius: RadiusProfile, shadow: ShadowProfile) -> Self {
        let (sm, md, lg) = base_radii(mood);
        let k = radius.multiplier();
        let shadows = ShadowSet::for_mood(mood).with_profile(shadow);
        let (border_subtle, border_default, border_strong) = base_borders(mood);

        Self {
            radius_sm: round_to(sm * k, 2),
            radius_md: round_to(md * k, 2),
            radius_lg: round_to(lg * k, 2),
            radius_full: RADIUS_FULL,
            shadow_xs: shadows.xs,
            shadow_sm: shadows.sm,
            shadow_md: shadows.md,
            shadow_lg: shadows.lg,
            shadow_xl: shadows.xl,
            border_subtle,
            border_default,
            border_strong,
        }
    }

    /// The shadows as a set.
    #[must_use]
    pub const fn shadows(&self) -> ShadowSet {
        ShadowSet {
            xs: self.shadow_xs,
            sm: self.shadow_sm,
            md: self.shadow_md,
            lg: self.shadow_lg,
            xl: self.shadow_xl,
        }
    }

    /// `(name, px)` radius pairs.
    #[must_use]
    pub const fn radii(&self) -> [(&'static str, f64); 4] {
        [
            ("sm", self.radius_sm),
            ("md", self.radius_md),
            ("lg", self.radius_lg),
            ("full", self.radius_full),
        ]
    }

    /// `(name, px)` border pairs.
    #[must_use]
    pub const fn borders(&self) -> [(&'static str, f64); 3] {
        [
            ("subtle", self.border_subtle),
            ("default", self.border_default),
            ("strong", self.border_strong),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn balanced_standard_equals_base() {
        let t = StructuralTokenSet::derive(Mood::Professional, RadiusProfile::Balanced, ShadowProfile::Standard);
        assert_eq!((t.radius_sm, t.radius_md, t.radius_lg), base_radii(Mood::Professional));
        assert_eq!(t.shadows(), ShadowSet::for_mood(Mood::Professional));
    }

    #[test]
    fn radius_profile_scales_bounded_radii_only() {
        let t = StructuralTokenSet::derive(Mood::Playful, RadiusProfile::Rounded, ShadowProfile::Standard);
        assert_eq!(t.radius_sm, 10.5);
        assert_eq!(t.radius_md, 21.0);
        assert_eq!(t.radius_lg, 35.0);
        assert_eq!(t.radius_full, RADIUS_FULL);

        let sharp = StructuralTokenSet::derive(Mood::Playful, RadiusProfile::Sharp, ShadowProfile::Standard);
        assert_eq!(sharp.radius_sm, 3.0);
        assert_eq!(sharp.radius_full, RADIUS_FULL);
    }

    #[test]
    fn shadow_profile_scales_blur_and_opacity() {
        let base = ShadowSet::for_mood(Mood::Professional);
        let bold = base.with_profile(ShadowProfile::Bold);
        assert_eq!(bold.md.blur, 12.8);
        assert_eq!(bold.md.opacity, 0.135);
        assert_eq!(bold.md.offset_y, base.md.offset_y);
        assert_eq!(bold.md.color(), base.md.color());
    }

    #[test]
    fn opacity_saturates_at_one() {
        let s = Shadow {
            offset_x: 0.0,
            offset_y: 1.0,
            blur: 2.0,
            color_l: 0.0,
            color_c: 0.0,
            color_h: 0.0,
            opacity: 0.9,
        };
        assert_eq!(s.scaled(1.0, 1.5).opacity, 1.0);
    }

    #[test]
    fn derivation_is_idempotent() {
        for mood in Mood::ALL {
            for radius in RadiusProfile::ALL {
                for shadow in ShadowProfile::ALL {
                    let a = StructuralTokenSet::derive(mood, radius, shadow);
                    let b = StructuralTokenSet::derive(mood, radius, shadow);
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn profile_application_does_not_compound() {
        let base = ShadowSet::for_mood(Mood::Warm);
        let once = base.with_profile(ShadowProfile::Pronounced);
        let again = base.with_profile(ShadowProfile::Pronounced);
        assert_eq!(once, again);
    }

    #[test]
    fn elevation_increases_blur_and_opacity() {
        for mood in Mood::ALL {
            let set = ShadowSet::for_mood(mood);
            let levels = set.named();
            for pair in levels.windows(2) {
                assert!(pair[0].1.blur < pair[1].1.blur, "{mood:?}");
                assert!(pair[0].1.opacity < pair[1].1.opacity, "{mood:?}");
            }
        }
    }

    #[test]
    fn dark_shadows_are_deeper_than_any_light_set() {
        let dark = ShadowSet::dark();
        for mood in Mood::ALL {
            for shadow in ShadowProfile::ALL {
                let light = ShadowSet::for_mood(mood).with_profile(shadow);
                for ((_, d), (_, l)) in dark.named().iter().zip(light.named().iter()) {
                    assert!(d.opacity > l.opacity, "{mood:?}/{shadow:?}");
                }
            }
        }
    }

    #[test]
    fn shadow_css_format() {
        let s = ShadowSet::for_mood(Mood::Professional).md;
        assert_eq!(s.to_css(), "0px 4px 8px oklch(0.200 0.0000 0.00 / 0.090)");
        let d = ShadowSet::dark().xl;
        assert_eq!(d.to_css(), "0px 24px 48px oklch(0.000 0.0000 0.00 / 0.650)");
    }

    #[test]
    fn serializes_with_token_names() {
        let t = StructuralTokenSet::derive(Mood::Calm, RadiusProfile::Soft, ShadowProfile::Subtle);
        let json = serde_json::to_value(t).unwrap();
        for key in [
            "radiusSm", "radiusMd", "radiusLg", "radiusFull", "shadowXs", "shadowSm", "shadowMd",
            "shadowLg", "shadowXl", "borderSubtle", "borderDefault", "borderStrong",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["shadowMd"].get("offsetY").is_some());
    }
}
