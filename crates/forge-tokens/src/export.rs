//! Flat and CSS renderings of a snapshot.
//!
//! Downstream generators read tokens field by field, so both forms are
//! order-stable: metadata first, then light colors, dark colors, action,
//! radii, shadows, borders.

use crate::scale::{Mode, ModePalette};
use crate::snapshot::TokenSnapshot;
use crate::structural::ShadowSet;

/// One dotted key per token, values as strings, in a fixed order.
///
/// Colors are CSS `oklch()` values; lengths are bare px numbers.
#[must_use]
pub fn flat_record(snapshot: &TokenSnapshot) -> Vec<(String, String)> {
    let fp = &snapshot.fingerprint;
    let mut out: Vec<(String, String)> = vec![
        ("meta.version".into(), snapshot.version.to_string()),
        ("meta.category".into(), snapshot.category.name().into()),
        ("meta.mood".into(), snapshot.mood.name().into()),
        ("meta.matchSource".into(), snapshot.match_source.name().into()),
        ("meta.matchedKeywords".into(), snapshot.matched_keywords.join(",")),
        ("meta.seed".into(), fp.seed.to_string()),
        ("meta.radiusProfile".into(), fp.radius_profile.name().into()),
        ("meta.shadowProfile".into(), fp.shadow_profile.name().into()),
        ("brand.hueBase".into(), snapshot.brand_hue_base.to_string()),
        ("brand.hueVariance".into(), fp.brand_hue_variance.to_string()),
        ("brand.hueFinal".into(), snapshot.brand_hue_final.to_string()),
        ("brand.chroma".into(), snapshot.brand_chroma.to_string()),
        ("neutral.hueOffset".into(), snapshot.neutral_hue_offset.to_string()),
        ("neutral.hueBase".into(), snapshot.neutral_hue_base.to_string()),
        ("neutral.hueVariance".into(), fp.neutral_hue_variance.to_string()),
        ("neutral.hueFinal".into(), snapshot.neutral_hue_final.to_string()),
        ("neutral.chroma".into(), snapshot.neutral_chroma.to_string()),
    ];

    for (mode, palette) in [(Mode::Light, &snapshot.light), (Mode::Dark, &snapshot.dark)] {
        let mode = mode.name();
        for (name, scale) in palette.named() {
            for (step, color) in scale.iter() {
                out.push((format!("color.{mode}.{name}.{step}"), color.to_css()));
            }
        }
    }

    out.push(("action.primary".into(), snapshot.primary_action.to_css()));
    out.push(("action.contrast".into(), snapshot.primary_action_contrast.to_string()));

    let tokens = &snapshot.structural_tokens;
    for (name, px) in tokens.radii() {
        out.push((format!("radius.{name}"), px.to_string()));
    }
    for (name, shadow) in tokens.shadows().named() {
        out.push((format!("shadow.{name}"), shadow.to_css()));
    }
    for (name, shadow) in snapshot.dark_shadows.named() {
        out.push((format!("shadow.dark.{name}"), shadow.to_css()));
    }
    for (name, px) in tokens.borders() {
        out.push((format!("border.{name}"), px.to_string()));
    }
    out
}

/// CSS custom properties: light tokens on `:root`, dark overrides on
/// `[data-theme="dark"]`.
///
/// Each color carries a gamut-mapped hex comment for tools that cannot read
/// `oklch()`.
#[must_use]
pub fn css_variables(snapshot: &TokenSnapshot) -> String {
    let tokens = &snapshot.structural_tokens;
    let mut css = String::new();

    css.push_str(&format!(
        "/* brandforge: {} / {} / seed {} */\n",
        snapshot.category.name(),
        snapshot.mood.name(),
        snapshot.fingerprint.seed
    ));

    css.push_str(":root {\n");
    write_palette(&mut css, &snapshot.light);
    css.push_str(&format!(
        "  --color-action: {}; /* {} */\n",
        snapshot.primary_action.to_css(),
        snapshot.primary_action.to_hex()
    ));
    for (name, px) in tokens.radii() {
        css.push_str(&format!("  --radius-{name}: {px}px;\n"));
    }
    write_shadows(&mut css, &tokens.shadows());
    for (name, px) in tokens.borders() {
        css.push_str(&format!("  --border-{name}: {px}px;\n"));
    }
    css.push_str("}\n\n[data-theme=\"dark\"] {\n");
    write_palette(&mut css, &snapshot.dark);
    write_shadows(&mut css, &snapshot.dark_shadows);
    css.push_str("}\n");
    css
}

fn write_palette(css: &mut String, palette: &ModePalette) {
    for (name, scale) in palette.named() {
        for (step, color) in scale.iter() {
            css.push_str(&format!(
                "  --color-{name}-{step}: {}; /* {} */\n",
                color.to_css(),
                color.to_hex()
            ));
        }
    }
}

fn write_shadows(css: &mut String, shadows: &ShadowSet) {
    for (name, shadow) in shadows.named() {
        css.push_str(&format!("  --shadow-{name}: {};\n", shadow.to_css()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
