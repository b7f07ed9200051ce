//! Signal classification: which product category and which mood a brand is.
//!
//! Category is decided by whole-word keyword hits across every signal source.
//! Mood is read from the brand statement alone, by substring, in a fixed
//! priority order; a brand that states no tone inherits its category's mood.
//!
//! Both vocabularies are closed enums with static tables. Table order is
//! part of the contract: it breaks category ties and sets mood priority.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::signal::{BrandSignal, SignalSource};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Product category a brand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fintech,
    Health,
    Legal,
    Education,
    Ecommerce,
    Productivity,
    Creative,
    Developer,
    Social,
    Food,
    Travel,
    RealEstate,
    Sales,
    /// Fallback when no category keyword matches anywhere.
    General,
}

impl Category {
    /// Scored categories in tie-break order. `General` is never scored.
    pub const SCORED: [Self; 13] = [
        Self::Fintech,
        Self::Health,
        Self::Legal,
        Self::Education,
        Self::Ecommerce,
        Self::Productivity,
        Self::Creative,
        Self::Developer,
        Self::Social,
        Self::Food,
        Self::Travel,
        Self::RealEstate,
        Self::Sales,
    ];

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fintech => "fintech",
            Self::Health => "health",
            Self::Legal => "legal",
            Self::Education => "education",
            Self::Ecommerce => "ecommerce",
            Self::Productivity => "productivity",
            Self::Creative => "creative",
            Self::Developer => "developer",
            Self::Social => "social",
            Self::Food => "food",
            Self::Travel => "travel",
            Self::RealEstate => "real-estate",
            Self::Sales => "sales",
            Self::General => "general",
        }
    }

    /// Keyword vocabulary, matched as whole words, case-insensitively.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Fintech => &[
                "finance", "financial", "fintech", "bank", "banking", "payment", "payments",
                "invoice", "invoices", "budget", "accounting", "crypto", "wallet", "investing",
                "investment", "trading", "loan", "loans",
            ],
            Self::Health => &[
                "health", "healthcare", "medical", "clinic", "patient", "patients", "doctor",
                "wellness", "fitness", "therapy", "hospital", "nurse", "symptom",
            ],
            Self::Legal => &[
                "legal", "law", "lawyer", "lawyers", "attorney", "case", "cases", "contract",
                "contracts", "compliance", "court", "litigation", "paralegal",
            ],
            Self::Education => &[
                "education", "learning", "course", "courses", "student", "students", "teacher",
                "school", "tutor", "tutoring", "classroom", "quiz", "lesson", "lessons", "study",
            ],
            Self::Ecommerce => &[
                "shop", "store", "ecommerce", "e-commerce", "retail", "cart", "checkout",
                "marketplace", "inventory", "merchant", "storefront", "orders",
            ],
            Self::Productivity => &[
                "task", "tasks", "project", "projects", "todo", "productivity", "workflow",
                "kanban", "planner", "schedule", "calendar", "notes", "habit",
            ],
            Self::Creative => &[
                "design", "creative", "art", "music", "photo", "photography", "video",
                "portfolio", "studio", "artist", "gallery",
            ],
            Self::Developer => &[
                "developer", "developers", "api", "code", "devops", "deploy", "deployment",
                "github", "debug", "infrastructure", "monitoring", "cli", "sdk", "database",
            ],
            Self::Social => &[
                "social", "community", "chat", "friends", "network", "forum", "dating",
                "messaging", "events", "followers",
            ],
            Self::Food => &[
                "food", "restaurant", "recipe", "recipes", "meal", "meals", "kitchen", "cafe",
                "grocery", "catering",
            ],
            Self::Travel => &[
                "travel", "trip", "trips", "booking", "hotel", "flight", "flights", "vacation",
                "itinerary", "tour",
            ],
            Self::RealEstate => &[
                "real estate", "property", "properties", "rental", "rentals", "tenant",
                "tenants", "landlord", "mortgage", "housing", "realtor",
            ],
            Self::Sales => &[
                "crm", "sales", "lead", "leads", "pipeline", "customer", "customers", "deal",
                "deals", "prospect", "prospects",
            ],
            Self::General => &[],
        }
    }

    /// Mood used when the brand statement names none.
    #[must_use]
    pub const fn default_mood(self) -> Mood {
        match self {
            Self::Fintech | Self::RealEstate => Mood::Trustworthy,
            Self::Health => Mood::Calm,
            Self::Legal | Self::Sales | Self::General => Mood::Professional,
            Self::Education | Self::Food => Mood::Warm,
            Self::Ecommerce => Mood::Bold,
            Self::Productivity => Mood::Minimal,
            Self::Creative | Self::Social => Mood::Playful,
            Self::Developer => Mood::Technical,
            Self::Travel => Mood::Innovative,
        }
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Emotional register of a brand. Drives chroma, neutrals and structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Playful,
    Luxurious,
    Bold,
    Minimal,
    Calm,
    Warm,
    Technical,
    Trustworthy,
    Innovative,
    Professional,
}

impl Mood {
    /// All moods in detection priority order.
    pub const ALL: [Self; 10] = [
        Self::Playful,
        Self::Luxurious,
        Self::Bold,
        Self::Minimal,
        Self::Calm,
        Self::Warm,
        Self::Technical,
        Self::Trustworthy,
        Self::Innovative,
        Self::Professional,
    ];

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Playful => "playful",
            Self::Luxurious => "luxurious",
            Self::Bold => "bold",
            Self::Minimal => "minimal",
            Self::Calm => "calm",
            Self::Warm => "warm",
            Self::Technical => "technical",
            Self::Trustworthy => "trustworthy",
            Self::Innovative => "innovative",
            Self::Professional => "professional",
        }
    }

    /// Substrings that select this mood from a lowercase brand statement.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Playful => &["playful", "fun", "whimsical", "quirky", "cheerful", "joyful"],
            Self::Luxurious => &["luxury", "luxurious", "premium", "elegant", "exclusive", "sophisticated"],
            Self::Bold => &["bold", "daring", "energetic", "vibrant", "powerful", "fearless"],
            Self::Minimal => &["minimal", "clean", "simple", "understated", "focused"],
            Self::Calm => &["calm", "serene", "peaceful", "gentle", "soothing", "mindful"],
            Self::Warm => &["warm", "friendly", "welcoming", "approachable", "caring", "human"],
            Self::Technical => &["technical", "precise", "engineered", "data-driven", "analytical"],
            Self::Trustworthy => &["trust", "reliable", "secure", "dependable", "safe", "stable"],
            Self::Innovative => &["innovative", "futuristic", "cutting-edge", "modern", "disruptive", "visionary"],
            Self::Professional => &["professional", "corporate", "authoritative", "serious", "formal", "expert"],
        }
    }

    /// First mood (in priority order) whose keyword occurs in `statement`.
    #[must_use]
    pub fn detect(statement: &str) -> Option<Self> {
        let lower = statement.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.keywords().iter().any(|kw| lower.contains(kw)))
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Which input decided the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchSource {
    Directive,
    ProductName,
    BrandStatement,
    Pitch,
    /// Nothing matched; the category is the fallback.
    Default,
}

impl From<SignalSource> for MatchSource {
    fn from(source: SignalSource) -> Self {
        match source {
            SignalSource::Directive => Self::Directive,
            SignalSource::ProductName => Self::ProductName,
            SignalSource::BrandStatement => Self::BrandStatement,
            SignalSource::Pitch => Self::Pitch,
        }
    }
}

impl MatchSource {
    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Directive => SignalSource::Directive.name(),
            Self::ProductName => SignalSource::ProductName.name(),
            Self::BrandStatement => SignalSource::BrandStatement.name(),
            Self::Pitch => SignalSource::Pitch.name(),
            Self::Default => "default",
        }
    }
}

/// Outcome of scoring a brand signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: Category,
    pub mood: Mood,
    /// Keywords of the winning category that hit, in vocabulary order.
    pub matched_keywords: Vec<String>,
    pub match_source: MatchSource,
    /// Total keyword hits of the winning category.
    pub score: u32,
}

struct CompiledCategory {
    category: Category,
    patterns: Vec<(&'static str, Regex)>,
}

/// Whole-word patterns for every scored category, built once per process.
fn compiled_vocabulary() -> &'static [CompiledCategory] {
    static VOCABULARY: OnceLock<Vec<CompiledCategory>> = OnceLock::new();
    VOCABULARY.get_or_init(|| {
        Category::SCORED
            .into_iter()
            .map(|category| CompiledCategory {
                category,
                patterns: category
                    .keywords()
                    .iter()
                    .filter_map(|&kw| match whole_word(kw) {
                        Ok(re) => Some((kw, re)),
                        Err(err) => {
                            tracing::error!(keyword = kw, %err, "keyword pattern rejected");
                            None
                        }
                    })
                    .collect(),
            })
            .collect()
    })
}

fn whole_word(keyword: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
}

fn count_hits(re: &Regex, text: &str) -> u32 {
    u32::try_from(re.find_iter(text).count()).unwrap_or(u32::MAX)
}

/// Score `signal` against the category vocabulary and read its mood.
#[must_use]
pub fn classify(signal: &BrandSignal<'_>) -> Classification {
    let mut best: Option<(Category, u32, SignalSource, Vec<String>)> = None;

    for compiled in compiled_vocabulary() {
        let mut total = 0u32;
        let mut per_source = [0u32; 4];
        let mut matched = Vec::new();

        for (kw, re) in &compiled.patterns {
            let mut kw_hits = 0u32;
            for (idx, (text, _)) in signal.iter().enumerate() {
                let hits = count_hits(re, text);
                per_source[idx] = per_source[idx].saturating_add(hits);
                kw_hits = kw_hits.saturating_add(hits);
            }
            if kw_hits > 0 {
                matched.push((*kw).to_string());
            }
            total = total.saturating_add(kw_hits);
        }

        if total == 0 {
            continue;
        }

        tracing::trace!(category = compiled.category.name(), total, "category scored");

        let best_total = best.as_ref().map_or(0, |(_, t, _, _)| *t);
        if total > best_total {
            best = Some((compiled.category, total, strongest_source(per_source), matched));
        }
    }

    let (category, score, match_source, matched_keywords) = match best {
        Some((category, total, source, matched)) => (category, total, source.into(), matched),
        None => (Category::General, 0, MatchSource::Default, Vec::new()),
    };

    let mood = Mood::detect(signal.text(SignalSource::BrandStatement))
        .unwrap_or_else(|| category.default_mood());

    Classification {
        category,
        mood,
        matched_keywords,
        match_source,
        score,
    }
}

/// Source with the most hits; earlier sources win ties.
fn strongest_source(per_source: [u32; 4]) -> SignalSource {
    let mut best = (SignalSource::Directive, 0u32);
    for (source, hits) in SignalSource::ALL.into_iter().zip(per_source) {
        if hits > best.1 {
            best = (source, hits);
        }
    }
    best.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::BrandRequest;
    use pretty_assertions::assert_eq;

    fn run(req: &BrandRequest) -> Classification {
        classify(&req.signal())
    }

    // ── Category ────────────────────────────────────────────────────

    #[test]
    fn legal_case_tracker_is_legal_professional() {
        let c = run(&BrandRequest::new("legal case tracker", "Casewell"));
        assert_eq!(c.category, Category::Legal);
        assert_eq!(c.mood, Mood::Professional);
        assert_eq!(c.matched_keywords, vec!["legal".to_string(), "case".to_string()]);
        assert_eq!(c.match_source, MatchSource::Directive);
        assert_eq!(c.score, 2);
    }

    #[test]
    fn crm_is_sales() {
        let c = run(&BrandRequest::new("Build a CRM", "Acme"));
        assert_eq!(c.category, Category::Sales);
        assert_eq!(c.matched_keywords, vec!["crm".to_string()]);
    }

    #[test]
    fn empty_input_falls_back_to_general() {
        let c = run(&BrandRequest::default());
        assert_eq!(c.category, Category::General);
        assert_eq!(c.mood, Mood::Professional);
        assert_eq!(c.match_source, MatchSource::Default);
        assert!(c.matched_keywords.is_empty());
        assert_eq!(c.score, 0);
    }

    #[test]
    fn keywords_match_whole_words_only() {
        // "Casewell" must not count as "case", "lawn" must not count as "law".
        let c = run(&BrandRequest::new("lawn mowing", "Casewell"));
        assert_eq!(c.category, Category::General);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = run(&BrandRequest::new("BANKING for everyone", ""));
        assert_eq!(c.category, Category::Fintech);
    }

    #[test]
    fn multi_word_keyword_matches() {
        let c = run(&BrandRequest::new("a real estate listing board", ""));
        assert_eq!(c.category, Category::RealEstate);
        assert_eq!(c.matched_keywords, vec!["real estate".to_string()]);
    }

    #[test]
    fn ties_go_to_earlier_category() {
        // One fintech hit, one health hit: fintech is earlier in the table.
        let c = run(&BrandRequest::new("payment clinic", ""));
        assert_eq!(c.category, Category::Fintech);
        let c = run(&BrandRequest::new("clinic payment", ""));
        assert_eq!(c.category, Category::Fintech);
    }

    #[test]
    fn higher_total_beats_table_order() {
        let c = run(&BrandRequest::new("payment for patients at the clinic", ""));
        assert_eq!(c.category, Category::Health);
    }

    #[test]
    fn hits_accumulate_across_sources() {
        let req = BrandRequest::new("a recipe app", "Bank")
            .with_pitch("meal plans for your kitchen");
        let c = run(&req);
        assert_eq!(c.category, Category::Food);
        assert_eq!(c.score, 3);
        assert_eq!(c.match_source, MatchSource::Pitch);
    }

    #[test]
    fn source_ties_go_to_earlier_source() {
        let req = BrandRequest::new("invoice", "").with_pitch("budget");
        let c = run(&req);
        assert_eq!(c.match_source, MatchSource::Directive);
    }

    #[test]
    fn repeated_keyword_counts_once_in_matched_list() {
        let c = run(&BrandRequest::new("tasks tasks tasks", ""));
        assert_eq!(c.category, Category::Productivity);
        assert_eq!(c.score, 3);
        assert_eq!(c.matched_keywords, vec!["tasks".to_string()]);
    }

    // ── Mood ────────────────────────────────────────────────────────

    #[test]
    fn statement_mood_overrides_default() {
        let req = BrandRequest::new("legal case tracker", "Casewell")
            .with_statement("Warm and approachable counsel");
        assert_eq!(run(&req).mood, Mood::Warm);
    }

    #[test]
    fn mood_priority_order() {
        // Both playful and calm words: playful is earlier.
        assert_eq!(Mood::detect("calm but playful"), Some(Mood::Playful));
        assert_eq!(Mood::detect("Serene, Minimal"), Some(Mood::Minimal));
    }

    #[test]
    fn mood_is_substring_match() {
        assert_eq!(Mood::detect("trustworthy partner"), Some(Mood::Trustworthy));
    }

    #[test]
    fn mood_not_read_from_directive() {
        let c = run(&BrandRequest::new("a playful banking app", ""));
        assert_eq!(c.category, Category::Fintech);
        assert_eq!(c.mood, Mood::Trustworthy);
    }

    #[test]
    fn every_scored_category_has_vocabulary() {
        for category in Category::SCORED {
            assert!(!category.keywords().is_empty(), "{category:?} has no keywords");
        }
        assert!(Category::General.keywords().is_empty());
    }

    #[test]
    fn category_wire_names_match_serde() {
        for category in Category::SCORED {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.name()));
        }
    }
}
