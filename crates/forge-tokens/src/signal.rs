//! Brand signal inputs.
//!
//! A [`BrandRequest`] is what callers hand the engine; a [`BrandSignal`] is
//! the same text viewed as an ordered list of tagged sources, which is the
//! shape the classifier scores.

use serde::{Deserialize, Serialize};

/// Where a piece of brand text came from.
///
/// Declaration order is scoring order: when two sources tie on keyword hits,
/// the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalSource {
    Directive,
    ProductName,
    BrandStatement,
    Pitch,
}

impl SignalSource {
    /// All sources in scoring order.
    pub const ALL: [Self; 4] = [
        Self::Directive,
        Self::ProductName,
        Self::BrandStatement,
        Self::Pitch,
    ];

    /// Wire name of this source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Directive => "directive",
            Self::ProductName => "productName",
            Self::BrandStatement => "brandStatement",
            Self::Pitch => "pitch",
        }
    }
}

/// The four free-text fields the engine consumes.
///
/// Absent fields are empty strings and simply contribute no keyword hits.
/// `brand_statement` is expected to be tone, positioning and values already
/// joined by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandRequest {
    pub directive: String,
    pub product_name: String,
    pub brand_statement: String,
    pub pitch: String,
}

impl BrandRequest {
    /// Request with just a directive and a product name.
    #[must_use]
    pub fn new(directive: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            product_name: product_name.into(),
            ..Self::default()
        }
    }

    /// Builder: set the brand statement.
    #[must_use]
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.brand_statement = statement.into();
        self
    }

    /// Builder: set the pitch.
    #[must_use]
    pub fn with_pitch(mut self, pitch: impl Into<String>) -> Self {
        self.pitch = pitch.into();
        self
    }

    /// Text of one source.
    #[must_use]
    pub fn text(&self, source: SignalSource) -> &str {
        match source {
            SignalSource::Directive => &self.directive,
            SignalSource::ProductName => &self.product_name,
            SignalSource::BrandStatement => &self.brand_statement,
            SignalSource::Pitch => &self.pitch,
        }
    }

    /// View this request as an ordered brand signal.
    #[must_use]
    pub fn signal(&self) -> BrandSignal<'_> {
        BrandSignal {
            parts: SignalSource::ALL.map(|source| (self.text(source), source)),
        }
    }
}

/// Ordered `(text, source)` pairs borrowed from a [`BrandRequest`].
#[derive(Debug, Clone, Copy)]
pub struct BrandSignal<'a> {
    parts: [(&'a str, SignalSource); 4],
}

impl<'a> BrandSignal<'a> {
    /// Iterate the sources in scoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, SignalSource)> + '_ {
        self.parts.iter().copied()
    }

    /// Text of one source.
    #[must_use]
    pub fn text(&self, source: SignalSource) -> &'a str {
        self.parts
            .iter()
            .find(|(_, s)| *s == source)
            .map_or("", |(text, _)| text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
