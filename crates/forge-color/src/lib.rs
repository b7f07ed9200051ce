// SPDX-License-Identifier: MIT
//
// forge-color — OKLCH color primitives for brandforge.
//
// The token engine does all of its work in OKLCH: scales are tables of
// lightness, chroma and hue, and nothing ever round-trips through RGB while
// tokens are being derived. This crate owns the edge of that world: the
// value type itself, the Oklab math needed to reach sRGB, gamut mapping
// for hex fallbacks, the WCAG luminance primitives, and the CSS text forms
// the exporters write.

pub mod oklch;

pub use oklch::Oklch;
