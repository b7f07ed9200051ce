//! # forge-tokens — Deterministic Brand-to-Token Synthesis
//!
//! Turns a handful of free-text brand signals into a complete design-token
//! set: primary, neutral and semantic color scales in light and dark mode,
//! corner radii, elevation shadows and border widths. The same input always
//! yields the same snapshot. There is no randomness and no I/O.
//!
//! # Architecture
//!
//! ```text
//! BrandRequest { directive, productName, brandStatement, pitch }
//!     │
//!     ├──────────────────────────────┐
//!     ▼                              ▼
//! classify.rs:    category + mood    seed.rs: FNV-1a of directive::name
//!     │                              │
//!     ▼                              ▼
//! params.rs:      hue/chroma anchors fingerprint.rs: hue variance, profiles
//!     │                              │
//!     └──────────────┬───────────────┘
//!                    ▼
//! scale.rs:       11-step scales, light + dark (contrast.rs guards step 500)
//!                    │
//!                    ▼
//! structural.rs:  radii, shadows, borders
//!                    │
//!                    ▼
//! snapshot.rs:    TokenSnapshot (export.rs renders flat / CSS)
//! ```
//!
//! # Determinism
//!
//! The seed depends only on the directive and the product name. The brand
//! statement may change the mood, and through it chroma and profiles, but
//! never the seed.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
// Score and variance casts are bounded by construction.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod classify;
pub mod contrast;
pub mod error;
pub mod export;
pub mod fingerprint;
pub mod params;
pub mod scale;
pub mod seed;
pub mod signal;
pub mod snapshot;
pub mod structural;

pub use classify::{Category, Classification, MatchSource, Mood, classify};
pub use error::SnapshotError;
pub use fingerprint::{Fingerprint, RadiusProfile, ShadowProfile};
pub use params::BrandParameters;
pub use scale::{ColorScale, Mode, ModePalette, PaletteInputs, Step};
pub use signal::{BrandRequest, BrandSignal, SignalSource};
pub use snapshot::{SNAPSHOT_VERSION, TokenSnapshot};
pub use structural::{Shadow, ShadowSet, StructuralTokenSet};

use tracing::debug;

/// Run the full pipeline for one request.
#[must_use]
pub fn synthesize(request: &BrandRequest) -> TokenSnapshot {
    let span = tracing::debug_span!("synthesize", product = %request.product_name);
    let _guard = span.enter();

    let classification = classify(&request.signal());
    debug!(
        category = classification.category.name(),
        mood = classification.mood.name(),
        source = classification.match_source.name(),
        score = classification.score,
        "classified"
    );

    let params = BrandParameters::derive(&classification, &request.brand_statement);
    let seed = seed::seed(&request.directive, &request.product_name);
    let fingerprint = Fingerprint::derive(seed, classification.mood);
    let hues = fingerprint.resolve_hues(&params);
    debug!(
        seed,
        brand_hue = hues.brand_hue_final,
        brand_chroma = params.brand_chroma,
        neutral_hue = hues.neutral_hue_final,
        radius = fingerprint.radius_profile.name(),
        shadow = fingerprint.shadow_profile.name(),
        "fingerprinted"
    );

    let (light, dark) = ModePalette::pair(PaletteInputs {
        brand_hue: hues.brand_hue_final,
        brand_chroma: params.brand_chroma,
        neutral_hue: hues.neutral_hue_final,
        neutral_chroma: params.neutral_chroma,
    });
    let primary_action = light.primary.get(Step::S500);
    let primary_action_contrast =
        params::round_to(contrast::contrast_with_white(primary_action), 2);
    tracing::trace!(l = primary_action.l, primary_action_contrast, "action surface");

    let structural_tokens = StructuralTokenSet::derive(
        classification.mood,
        fingerprint.radius_profile,
        fingerprint.shadow_profile,
    );

    TokenSnapshot {
        version: SNAPSHOT_VERSION,
        inputs: request.clone(),
        category: classification.category,
        mood: classification.mood,
        matched_keywords: classification.matched_keywords,
        match_source: classification.match_source,
        brand_hue_base: params.brand_hue_base,
        brand_hue_final: hues.brand_hue_final,
        brand_chroma: params.brand_chroma,
        neutral_hue_offset: params.neutral_hue_offset,
        neutral_hue_base: hues.neutral_hue_base,
        neutral_hue_final: hues.neutral_hue_final,
        neutral_chroma: params.neutral_chroma,
        fingerprint,
        light,
        dark,
        primary_action,
        primary_action_contrast,
        structural_tokens,
        dark_shadows: ShadowSet::dark(),
    }
}
