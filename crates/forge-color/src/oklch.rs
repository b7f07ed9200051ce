// SPDX-License-Identifier: MIT
//
// OKLCH value type and the conversion pipeline behind it.
//
// Single-character variable names (r, g, b, l, c, h, s, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   OKLCH → Oklab → Linear sRGB → sRGB → hex
//   OKLCH → CSS
//
// Token values are stored exactly as derived (no gamut clipping), because a
// snapshot must replay bit-for-bit. Gamut mapping only happens when an sRGB
// fallback is requested.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A perceptual color as an OKLCH triple.
///
/// Equality is exact: two tokens derived from the same inputs must compare
/// equal field for field.
///
/// # Examples
///
/// ```
/// use forge_color::Oklch;
///
/// let brand = Oklch::new(0.66, 0.14, 250.0);
/// assert_eq!(brand.to_css(), "oklch(0.660 0.1400 250.00)");
/// assert!(brand.to_hex().starts_with('#'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma: 0.0 (gray) to ~0.37 (most vivid).
    pub c: f64,

    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f64,
}

impl Oklch {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH components.
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 0.0, 0.0);

    // ─── Component edits ─────────────────────────────────────────────────

    /// Return a copy with a different lightness (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    // ─── sRGB ────────────────────────────────────────────────────────────

    /// Convert to sRGB, clamping each channel into 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB, gamut mapping first so the hue survives.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_gamut().to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// `#rrggbb` fallback for consumers without OKLCH support.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether this color is displayable in sRGB without clipping.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        const EPS: f64 = 1e-7;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let inside = |v: f64| (-EPS..=1.0 + EPS).contains(&v);
        inside(r) && inside(g) && inside(b)
    }

    /// Reduce chroma until the color fits in sRGB, keeping L and H.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0;
        let mut hi = self.c;
        for _ in 0..20 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }

    /// WCAG 2.1 relative luminance of the gamut-mapped color.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let (r, g, b) = self.to_gamut().to_srgb();
        0.2126f64.mul_add(
            srgb_to_linear(r),
            0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
        )
    }

    // ─── CSS ─────────────────────────────────────────────────────────────

    /// CSS Color 4 form, e.g. `oklch(0.660 0.1400 250.00)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("oklch({:.3} {:.4} {:.2})", self.l, self.c, self.h)
    }

    /// CSS Color 4 form with an alpha channel.
    #[must_use]
    pub fn to_css_alpha(self, alpha: f64) -> String {
        format!(
            "oklch({:.3} {:.4} {:.2} / {:.3})",
            self.l,
            self.c,
            self.h,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Default for Oklch {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ─── OKLCH → Oklab ──────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

// ─── Oklab → Linear sRGB ────────────────────────────────────────────────────
//
// Matrices from Björn Ottosson's Oklab definition, via LMS cone space.

#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Apply the sRGB transfer curve to one linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB transfer curve from one component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
