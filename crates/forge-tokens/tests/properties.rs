use forge_tokens::contrast::{ACTION_LIGHTNESS_MAX, ACTION_LIGHTNESS_MIN};
use forge_tokens::params::{BRAND_CHROMA_MAX, BRAND_CHROMA_MIN, NEUTRAL_CHROMA_CAP};
use forge_tokens::scale::Semantic;
use forge_tokens::{BrandRequest, ColorScale, Mode, Step, TokenSnapshot, seed, synthesize};
use proptest::prelude::*;

/// Words that actually move the classifier and the mood reader.
const VOCAB: &[&str] = &[
    "legal", "case", "bank", "payments", "health", "clinic", "course", "learn", "shop", "store",
    "tasks", "notes", "design", "art", "code", "api", "chat", "community", "recipe", "food",
    "travel", "trip", "property", "rent", "crm", "sales", "playful", "bold", "minimal", "calm",
    "warm", "luxurious", "technical", "trustworthy", "innovative", "professional", "muted",
];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        prop::collection::vec(prop::sample::select(VOCAB), 0..6).prop_map(|w| w.join(" ")),
    ]
}

fn request() -> impl Strategy<Value = BrandRequest> {
    (text(), text(), text(), text()).prop_map(|(d, n, s, p)| {
        BrandRequest::new(d, n).with_statement(s).with_pitch(p)
    })
}

fn all_scales(snap: &TokenSnapshot) -> Vec<(&'static str, ColorScale)> {
    [&snap.light, &snap.dark]
        .into_iter()
        .flat_map(|palette| palette.named().map(|(name, scale)| (name, *scale)))
        .collect()
}

proptest! {
    #[test]
    fn synthesis_is_deterministic(req in request()) {
        let a = synthesize(&req);
        let b = synthesize(&req);
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn variance_and_chroma_stay_bounded(req in request()) {
        let snap = synthesize(&req);
        prop_assert!((-12..=12).contains(&snap.fingerprint.brand_hue_variance));
        prop_assert!((-12..=12).contains(&snap.fingerprint.neutral_hue_variance));
        prop_assert!(snap.neutral_chroma <= NEUTRAL_CHROMA_CAP);
        prop_assert!((BRAND_CHROMA_MIN..=BRAND_CHROMA_MAX).contains(&snap.brand_chroma));
        prop_assert!((0.0..360.0).contains(&snap.brand_hue_final));
        prop_assert!((0.0..360.0).contains(&snap.neutral_hue_final));
    }

    #[test]
    fn every_scale_is_monotonic(req in request()) {
        let snap = synthesize(&req);
        for (name, scale) in all_scales(&snap) {
            prop_assert!(scale.is_monotonic(), "{} not monotonic", name);
        }
    }

    #[test]
    fn chroma_peaks_mid_scale(hue in 0.0f64..360.0, chroma in 0.001f64..0.4) {
        for mode in [Mode::Light, Mode::Dark] {
            let scale = ColorScale::synthesize(hue, chroma, mode);
            let mid = scale.get(Step::S500).c.max(scale.get(Step::S600).c);
            prop_assert!(mid >= scale.get(Step::S50).c);
            prop_assert!(mid >= scale.get(Step::S950).c);
        }
    }

    #[test]
    fn action_surface_stays_in_band(req in request()) {
        let snap = synthesize(&req);
        for palette in [&snap.light, &snap.dark] {
            let l = palette.primary.get(Step::S500).l;
            prop_assert!((ACTION_LIGHTNESS_MIN..=ACTION_LIGHTNESS_MAX).contains(&l), "l = {}", l);
        }
        prop_assert!((ACTION_LIGHTNESS_MIN..=ACTION_LIGHTNESS_MAX).contains(&snap.primary_action.l));
    }

    #[test]
    fn semantic_hues_never_move(req in request()) {
        let snap = synthesize(&req);
        for palette in [&snap.light, &snap.dark] {
            let roles = [
                (Semantic::Success, &palette.success),
                (Semantic::Warning, &palette.warning),
                (Semantic::Error, &palette.error),
                (Semantic::Info, &palette.info),
            ];
            for (role, scale) in roles {
                for (_, color) in scale.iter() {
                    prop_assert_eq!(color.h, role.hue());
                }
            }
        }
    }

    #[test]
    fn seed_ignores_statement_and_pitch(req in request(), statement in text(), pitch in text()) {
        let other = req.clone().with_statement(statement).with_pitch(pitch);
        prop_assert_eq!(synthesize(&req).fingerprint.seed, synthesize(&other).fingerprint.seed);
        prop_assert_eq!(
            synthesize(&req).fingerprint.seed,
            seed::seed(&req.directive, &req.product_name)
        );
    }

    #[test]
    fn json_roundtrip_rederives_scales(req in request()) {
        let snap = synthesize(&req);
        let back = TokenSnapshot::from_json(&snap.to_json().unwrap()).unwrap();
        let (light, dark) = back.rederive_scales();
        prop_assert_eq!(light, snap.light);
        prop_assert_eq!(dark, snap.dark);
        prop_assert_eq!(back, snap);
    }
}
