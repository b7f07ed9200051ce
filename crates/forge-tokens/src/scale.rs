//! Eleven-step perceptual color scales, light and dark.
//!
//! A scale is one hue expanded across fixed lightness stops. Lightness comes
//! from a table, never from chroma; chroma follows a bell curve that peaks at
//! steps 500-600 so the middle of the scale carries the brand and the ends
//! stay usable as tints and text colors.
//!
//! ```text
//!  step   50    100   200   300   400   500   600   700   800   900   950
//!  L(lt) .985  .962  .918  .852  .762  .660  .565  .480  .395  .310  .140
//!  L(dk) .930  .880  .800  .720  .640  .570  .500  .420  .340  .250  .180
//!  C×    .22   .30   .50   .72   .90  1.00  1.00   .88   .70   .52   .35
//! ```

use std::collections::BTreeMap;
use std::fmt;

use forge_color::Oklch;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::contrast::ensure_primary_button_lightness;
use crate::params::round_to;

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One of the eleven fixed scale stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Step {
    /// All steps, lightest first.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// Numeric key, e.g. `500`.
    #[must_use]
    pub const fn key(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Position in [`Step::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Step for a numeric key.
    #[must_use]
    pub fn from_key(key: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Light-mode lightness per step.
pub const LIGHT_LIGHTNESS: [f64; 11] = [
    0.985, 0.962, 0.918, 0.852, 0.762, 0.660, 0.565, 0.480, 0.395, 0.310, 0.140,
];

/// Dark-mode lightness per step. Same ordering, compressed for dark surfaces.
pub const DARK_LIGHTNESS: [f64; 11] = [
    0.930, 0.880, 0.800, 0.720, 0.640, 0.570, 0.500, 0.420, 0.340, 0.250, 0.180,
];

/// Chroma bell curve, relative to the scale's base chroma.
pub const CHROMA_CURVE: [f64; 11] = [
    0.22, 0.30, 0.50, 0.72, 0.90, 1.00, 1.00, 0.88, 0.70, 0.52, 0.35,
];

/// Light or dark surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Lightness table for this mode.
    #[must_use]
    pub const fn lightness(self) -> &'static [f64; 11] {
        match self {
            Self::Light => &LIGHT_LIGHTNESS,
            Self::Dark => &DARK_LIGHTNESS,
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// An ordered mapping of the eleven steps to OKLCH colors.
///
/// Serializes as a JSON object keyed `"50"` … `"950"` in step order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    colors: [Oklch; 11],
}

impl ColorScale {
    /// Expand `(hue, chroma_base)` over the lightness table of `mode`.
    #[must_use]
    pub fn synthesize(hue: f64, chroma_base: f64, mode: Mode) -> Self {
        let lightness = mode.lightness();
        let colors = std::array::from_fn(|i| {
            Oklch::new(lightness[i], round_to(chroma_base * CHROMA_CURVE[i], 4), hue)
        });
        Self { colors }
    }

    /// Same steps, hue and chroma, re-expressed at the dark lightness table.
    #[must_use]
    pub fn to_dark(&self) -> Self {
        let colors = std::array::from_fn(|i| self.colors[i].with_lightness(DARK_LIGHTNESS[i]));
        Self { colors }
    }

    /// Apply the primary action guardrail to step 500 only.
    #[must_use]
    pub fn with_action_guardrail(mut self) -> Self {
        let slot = &mut self.colors[Step::S500.index()];
        *slot = slot.with_lightness(ensure_primary_button_lightness(slot.l));
        self
    }

    /// Color at `step`.
    #[must_use]
    pub const fn get(&self, step: Step) -> Oklch {
        self.colors[step.index()]
    }

    /// `(step, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Step, Oklch)> + '_ {
        Step::ALL.into_iter().zip(self.colors.iter().copied())
    }

    /// Whether lightness strictly decreases from 50 to 950.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.colors.windows(2).all(|w| w[0].l > w[1].l)
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Step::ALL.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(&step.key().to_string(), &color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Oklch>::deserialize(deserializer)?;
        if raw.len() != Step::ALL.len() {
            return Err(de::Error::invalid_length(raw.len(), &"exactly 11 scale steps"));
        }
        let mut colors = [Oklch::default(); 11];
        let mut seen = [false; 11];
        for (key, color) in raw {
            let step = key
                .parse::<u16>()
                .ok()
                .and_then(Step::from_key)
                .ok_or_else(|| de::Error::custom(format!("unknown scale step `{key}`")))?;
            colors[step.index()] = color;
            seen[step.index()] = true;
        }
        if seen.iter().all(|s| *s) {
            Ok(Self { colors })
        } else {
            Err(de::Error::custom("scale is missing steps"))
        }
    }
}

// ---------------------------------------------------------------------------
// Semantic hues
// ---------------------------------------------------------------------------

/// Status colors that stay recognizable across every brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantic {
    Success,
    Warning,
    Error,
    Info,
}

impl Semantic {
    /// All semantic roles, in output order.
    pub const ALL: [Self; 4] = [Self::Success, Self::Warning, Self::Error, Self::Info];

    /// Fixed hue. Never harmonized to the brand.
    #[must_use]
    pub const fn hue(self) -> f64 {
        match self {
            Self::Success => 145.0,
            Self::Warning => 45.0,
            Self::Error => 25.0,
            Self::Info => 220.0,
        }
    }

    /// Fixed base chroma.
    #[must_use]
    pub const fn chroma(self) -> f64 {
        match self {
            Self::Success => 0.15,
            Self::Warning => 0.16,
            Self::Error => 0.19,
            Self::Info => 0.14,
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Light-mode scale for this role.
    #[must_use]
    pub fn scale(self) -> ColorScale {
        ColorScale::synthesize(self.hue(), self.chroma(), Mode::Light)
    }
}

// ---------------------------------------------------------------------------
// ModePalette
// ---------------------------------------------------------------------------

/// Every scale for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModePalette {
    pub primary: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
}

/// The inputs a palette pair is a pure function of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteInputs {
    pub brand_hue: f64,
    pub brand_chroma: f64,
    pub neutral_hue: f64,
    pub neutral_chroma: f64,
}

impl ModePalette {
    /// Light palette for the given anchors.
    #[must_use]
    pub fn light(inputs: PaletteInputs) -> Self {
        Self {
            primary: ColorScale::synthesize(inputs.brand_hue, inputs.brand_chroma, Mode::Light)
                .with_action_guardrail(),
            neutral: ColorScale::synthesize(inputs.neutral_hue, inputs.neutral_chroma, Mode::Light),
            success: Semantic::Success.scale(),
            warning: Semantic::Warning.scale(),
            error: Semantic::Error.scale(),
            info: Semantic::Info.scale(),
        }
    }

    /// Dark palette derived from a light one.
    ///
    /// The primary scale is re-synthesized on the dark table so the bell
    /// curve is applied afresh; every other scale keeps its hue and chroma
    /// and only moves in lightness.
    #[must_use]
    pub fn dark(inputs: PaletteInputs, light: &Self) -> Self {
        Self {
            primary: ColorScale::synthesize(inputs.brand_hue, inputs.brand_chroma, Mode::Dark)
                .with_action_guardrail(),
            neutral: light.neutral.to_dark(),
            success: light.success.to_dark(),
            warning: light.warning.to_dark(),
            error: light.error.to_dark(),
            info: light.info.to_dark(),
        }
    }

    /// Both palettes for the given anchors.
    #[must_use]
    pub fn pair(inputs: PaletteInputs) -> (Self, Self) {
        let light = Self::light(inputs);
        let dark = Self::dark(inputs, &light);
        (light, dark)
    }

    /// `(name, scale)` pairs in output order.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, &ColorScale); 6] {
        [
            ("primary", &self.primary),
            ("neutral", &self.neutral),
            (Semantic::Success.name(), &self.success),
            (Semantic::Warning.name(), &self.warning),
            (Semantic::Error.name(), &self.error),
            (Semantic::Info.name(), &self.info),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
