//! The immutable output record.
//!
//! A [`TokenSnapshot`] carries every resolved value together with the inputs
//! and decisions that produced it, so a stored snapshot can be checked for
//! reproducibility and its color scales re-derived without the original text.
//! Field declaration order is serialization order.

use forge_color::Oklch;
use serde::{Deserialize, Serialize};

use crate::classify::{Category, MatchSource, Mood};
use crate::error::SnapshotError;
use crate::fingerprint::Fingerprint;
use crate::scale::{ModePalette, PaletteInputs};
use crate::signal::BrandRequest;
use crate::structural::{ShadowSet, StructuralTokenSet};

/// Current snapshot layout revision.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything one synthesis call produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    pub version: u32,
    pub inputs: BrandRequest,

    pub category: Category,
    pub mood: Mood,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    pub match_source: MatchSource,

    pub brand_hue_base: f64,
    pub brand_hue_final: f64,
    pub brand_chroma: f64,
    pub neutral_hue_offset: f64,
    pub neutral_hue_base: f64,
    pub neutral_hue_final: f64,
    pub neutral_chroma: f64,

    pub fingerprint: Fingerprint,

    pub light: ModePalette,
    pub dark: ModePalette,
    /// Light primary step 500, the surface white button text sits on.
    pub primary_action: Oklch,
    /// WCAG ratio of white text on `primary_action`, two decimals.
    pub primary_action_contrast: f64,

    pub structural_tokens: StructuralTokenSet,
    pub dark_shadows: ShadowSet,
}

impl TokenSnapshot {
    /// The anchors both palettes are a pure function of.
    #[must_use]
    pub const fn palette_inputs(&self) -> PaletteInputs {
        PaletteInputs {
            brand_hue: self.brand_hue_final,
            brand_chroma: self.brand_chroma,
            neutral_hue: self.neutral_hue_final,
            neutral_chroma: self.neutral_chroma,
        }
    }

    /// Rebuild `(light, dark)` from the stored hues and chromas alone.
    #[must_use]
    pub fn rederive_scales(&self) -> (ModePalette, ModePalette) {
        ModePalette::pair(self.palette_inputs())
    }

    /// Whether the stored palettes match what the stored anchors produce.
    #[must_use]
    pub fn scales_consistent(&self) -> bool {
        self.rederive_scales() == (self.light, self.dark)
    }

    /// Run the engine again on the recorded inputs.
    #[must_use]
    pub fn replay(&self) -> Self {
        crate::synthesize(&self.inputs)
    }

    /// Whether replaying the recorded inputs yields this exact record.
    #[must_use]
    pub fn is_reproducible(&self) -> bool {
        self.replay() == *self
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a stored snapshot.
    ///
    /// The version is checked before the body, so records from another
    /// layout revision fail with [`SnapshotError::UnsupportedVersion`]
    /// instead of an arbitrary field error.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] for malformed JSON or a malformed
    /// body, and [`SnapshotError::UnsupportedVersion`] for a version other
    /// than [`SNAPSHOT_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let found = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0);
        if found != u64::from(SNAPSHOT_VERSION) {
            return Err(SnapshotError::UnsupportedVersion { found });
        }
        Ok(serde_json::from_value(value)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
