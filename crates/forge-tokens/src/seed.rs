//! Text hashing and seed-derived draws.
//!
//! Every "random" decision in the engine is a re-hash of the brand seed with
//! a distinct salt. There is no PRNG state: each draw is independent and can
//! be recomputed in isolation from the seed alone.

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Salt for the brand hue variance draw.
pub const SALT_BRAND_HUE: u32 = 3;
/// Salt for the neutral hue variance draw.
pub const SALT_NEUTRAL_HUE: u32 = 4;
/// Salt for the radius profile offset.
pub const SALT_RADIUS_PROFILE: u32 = 5;
/// Salt for the shadow profile offset.
pub const SALT_SHADOW_PROFILE: u32 = 6;

/// 32-bit FNV-1a over the UTF-16 code units of `text`.
///
/// For ASCII input this is byte-for-byte the classic FNV-1a.
#[must_use]
pub fn hash(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// The brand seed: depends only on the directive and the product name.
#[must_use]
pub fn seed(directive: &str, product_name: &str) -> u32 {
    let key = format!(
        "{}::{}",
        directive.trim().to_lowercase(),
        product_name.trim().to_lowercase()
    );
    hash(&key)
}

/// Draw a value in `[min, max)` from `seed`, keyed by `salt`.
///
/// The hash of `"{seed}:{salt}"` is reduced modulo 10 000, so draws have a
/// resolution of 1/10 000 of the range.
#[must_use]
pub fn map_to_range(seed: u32, min: f64, max: f64, salt: u32) -> f64 {
    let unit = f64::from(hash(&format!("{seed}:{salt}")) % 10_000) / 10_000.0;
    (max - min).mul_add(unit, min)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
