//! Accessibility guardrails for generated colors.
//!
//! The primary action surface (step 500 of the primary scale) carries white
//! label text on every generated brand, so its lightness is clamped into a
//! band where that pairing stays legible. Decorative steps are left alone.
//!
//! Contrast is measured in sRGB relative luminance (the WCAG definition),
//! but the adjustment happens in OKLCH lightness, where it is perceptually
//! uniform and leaves hue untouched.

use forge_color::Oklch;

/// Lowest lightness allowed for the primary action surface.
pub const ACTION_LIGHTNESS_MIN: f64 = 0.50;
/// Highest lightness allowed for the primary action surface.
pub const ACTION_LIGHTNESS_MAX: f64 = 0.65;

/// Clamp a primary action lightness into `[0.50, 0.65]`.
#[must_use]
pub const fn ensure_primary_button_lightness(l: f64) -> f64 {
    l.clamp(ACTION_LIGHTNESS_MIN, ACTION_LIGHTNESS_MAX)
}

/// WCAG 2.1 contrast ratio between two colors, in `[1, 21]`.
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Oklch, b: Oklch) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast of white label text on `surface`.
#[must_use]
pub fn contrast_with_white(surface: Oklch) -> f64 {
    contrast_ratio(Oklch::WHITE, surface)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Guardrail ───────────────────────────────────────────────────

    #[test]
    fn guardrail_clamps_both_ends() {
        assert_eq!(ensure_primary_button_lightness(0.80), 0.65);
        assert_eq!(ensure_primary_button_lightness(0.30), 0.50);
        assert_eq!(ensure_primary_button_lightness(0.57), 0.57);
    }

    #[test]
    fn guardrail_is_idempotent() {
        for l in [0.0, 0.25, 0.5, 0.6, 0.65, 0.9, 1.0] {
            let once = ensure_primary_button_lightness(l);
            assert_eq!(ensure_primary_button_lightness(once), once);
        }
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Oklch::BLACK, Oklch::WHITE);
        assert!(approx_eq(ratio, 21.0, 0.05), "B/W contrast: {ratio}");
    }

    #[test]
    fn same_color_is_1() {
        let c = Oklch::new(0.5, 0.1, 180.0);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-9));
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Oklch::new(0.7, 0.12, 30.0);
        let b = Oklch::new(0.3, 0.05, 260.0);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn white_text_readable_on_guarded_surface() {
        // Worst case is the top of the band on a near-gray surface.
        for hue in (0..360).step_by(15) {
            let surface = Oklch::new(ACTION_LIGHTNESS_MAX, 0.14, f64::from(hue));
            let ratio = contrast_with_white(surface);
            assert!(ratio >= 3.0, "hue {hue}: {ratio}");
        }
    }

    #[test]
    fn darker_surface_gives_more_contrast() {
        let top = contrast_with_white(Oklch::new(ACTION_LIGHTNESS_MAX, 0.1, 250.0));
        let bottom = contrast_with_white(Oklch::new(ACTION_LIGHTNESS_MIN, 0.1, 250.0));
        assert!(bottom > top);
        assert!(bottom >= 4.5, "bottom of band: {bottom}");
    }
}
