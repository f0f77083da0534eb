//! Keyword vocabulary used to derive trait scores and tags from free text.
//!
//! The vocabulary is plain data: each trait and each tag owns a list of
//! keywords. [`KeywordExtractor`] compiles the dictionary into word-boundary
//! patterns once and then scores any number of descriptions without further
//! allocation of patterns.

use std::collections::BTreeSet;

use regex::Regex;
use thiserror::Error;

use crate::{Trait, TraitScores};

const ADVENTURE_KEYWORDS: &[&str] = &[
    "hike", "trek", "adventure", "zipline", "kayak", "climb", "safari", "rafting", "outdoor",
];
const RELAX_KEYWORDS: &[&str] = &[
    "relax", "spa", "quiet", "peaceful", "calm", "serene", "retreat",
];
const NATURE_KEYWORDS: &[&str] = &[
    "park", "mountain", "forest", "valley", "lake", "trail", "wildlife", "waterfall",
];
const CULTURE_KEYWORDS: &[&str] = &[
    "museum", "historic", "heritage", "culture", "tradition", "site", "temple", "art",
];
const LUXURY_KEYWORDS: &[&str] = &[
    "luxury",
    "fine dining",
    "resort",
    "exclusive",
    "high-end",
    "5-star",
    "boutique",
    "premium",
];

const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "beach",
        &[
            "beach", "coast", "island", "seaside", "shore", "waves", "bay", "lagoon",
        ],
    ),
    (
        "mountain",
        &["mountain", "hill", "peak", "range", "ridge", "summit"],
    ),
    ("desert", &["desert", "dune", "sands", "arid", "oasis"]),
    (
        "spiritual",
        &[
            "temple",
            "ashram",
            "pilgrimage",
            "spiritual",
            "monastery",
            "holy",
            "divine",
        ],
    ),
    (
        "wildlife",
        &[
            "safari",
            "national park",
            "jungle",
            "wildlife",
            "zoo",
            "reserve",
            "nature trail",
            "animal",
        ],
    ),
    (
        "historic",
        &["fort", "ruins", "monument", "castle", "citadel", "tomb"],
    ),
    (
        "urban",
        &[
            "shopping",
            "nightlife",
            "skyline",
            "market",
            "restaurant",
            "bar",
            "café",
            "bustling",
        ],
    ),
];

/// Errors raised while compiling a keyword dictionary.
#[derive(Debug, Error)]
pub enum KeywordError {
    /// A keyword was empty after trimming.
    #[error("empty keyword for '{entry}'")]
    EmptyKeyword {
        /// Trait or tag the keyword belongs to.
        entry: String,
    },
    /// The word-boundary pattern for a keyword failed to compile.
    #[error("invalid pattern for keyword '{keyword}': {source}")]
    Pattern {
        /// Offending keyword.
        keyword: String,
        /// Error reported by the regex engine.
        #[source]
        source: regex::Error,
    },
}

/// Trait and tag keyword lists.
///
/// [`KeywordDictionary::default`] yields the built-in travel vocabulary.
///
/// # Examples
/// ```
/// use wayfarer_core::{KeywordDictionary, Trait};
///
/// let dictionary = KeywordDictionary::default();
/// assert!(dictionary.trait_keywords(Trait::Relax).contains(&"spa".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDictionary {
    traits: Vec<(Trait, Vec<String>)>,
    tags: Vec<(String, Vec<String>)>,
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        let traits = [
            (Trait::Adventure, ADVENTURE_KEYWORDS),
            (Trait::Relax, RELAX_KEYWORDS),
            (Trait::Nature, NATURE_KEYWORDS),
            (Trait::Culture, CULTURE_KEYWORDS),
            (Trait::Luxury, LUXURY_KEYWORDS),
        ]
        .into_iter()
        .map(|(kind, words)| (kind, owned(words)))
        .collect();
        let tags = TAG_KEYWORDS
            .iter()
            .map(|(tag, words)| ((*tag).to_owned(), owned(words)))
            .collect();
        Self { traits, tags }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

impl KeywordDictionary {
    /// A dictionary with no keywords at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            traits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Replace the keywords counted towards `kind`.
    #[must_use]
    pub fn with_trait_keywords<I, S>(mut self, kind: Trait, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords.into_iter().map(Into::into).collect();
        self.traits.retain(|(existing, _)| *existing != kind);
        self.traits.push((kind, keywords));
        self
    }

    /// Replace the keywords that assign `tag`.
    #[must_use]
    pub fn with_tag_keywords<I, S>(mut self, tag: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tag = tag.into();
        let keywords = keywords.into_iter().map(Into::into).collect();
        self.tags.retain(|(existing, _)| *existing != tag);
        self.tags.push((tag, keywords));
        self
    }

    /// Keywords counted towards `kind`; empty when the trait has none.
    #[must_use]
    pub fn trait_keywords(&self, kind: Trait) -> &[String] {
        self.traits
            .iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, words)| words.as_slice())
            .unwrap_or_default()
    }

    /// Tag names in dictionary order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|(tag, _)| tag.as_str())
    }
}

/// Tags and trait scores derived from one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordProfile {
    /// Tags with at least one matching keyword.
    pub tags: BTreeSet<String>,
    /// Per trait, the number of distinct keywords present.
    pub traits: TraitScores,
}

/// Compiled form of a [`KeywordDictionary`].
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    traits: Vec<(Trait, Vec<Regex>)>,
    tags: Vec<(String, Vec<Regex>)>,
}

impl KeywordExtractor {
    /// Compile every keyword into a case-insensitive word-boundary pattern.
    ///
    /// # Errors
    /// Returns [`KeywordError`] when a keyword is blank or cannot be compiled.
    pub fn new(dictionary: &KeywordDictionary) -> Result<Self, KeywordError> {
        let traits = dictionary
            .traits
            .iter()
            .map(|(kind, words)| Ok((*kind, compile_all(kind.as_str(), words)?)))
            .collect::<Result<_, KeywordError>>()?;
        let tags = dictionary
            .tags
            .iter()
            .map(|(tag, words)| Ok((tag.clone(), compile_all(tag, words)?)))
            .collect::<Result<_, KeywordError>>()?;
        Ok(Self { traits, tags })
    }

    /// Score `text` against the dictionary.
    ///
    /// A keyword contributes at most once however often it appears.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{KeywordDictionary, KeywordExtractor, Trait};
    ///
    /// let extractor = KeywordExtractor::new(&KeywordDictionary::default())
    ///     .expect("built-in dictionary compiles");
    /// let profile = extractor.extract("A quiet spa retreat by the lagoon. Quiet!");
    /// assert_eq!(profile.traits.get(Trait::Relax), 3);
    /// assert!(profile.tags.contains("beach"));
    /// ```
    #[must_use]
    pub fn extract(&self, text: &str) -> KeywordProfile {
        let text = text.to_lowercase();
        let mut profile = KeywordProfile::default();

        for (kind, patterns) in &self.traits {
            let hits = patterns.iter().filter(|p| p.is_match(&text)).count();
            profile
                .traits
                .set(*kind, u32::try_from(hits).unwrap_or(u32::MAX));
        }

        for (tag, patterns) in &self.tags {
            if patterns.iter().any(|p| p.is_match(&text)) {
                profile.tags.insert(tag.clone());
            }
        }

        profile
    }
}

fn compile_all(entry: &str, words: &[String]) -> Result<Vec<Regex>, KeywordError> {
    words.iter().map(|word| compile(entry, word)).collect()
}

fn compile(entry: &str, word: &str) -> Result<Regex, KeywordError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(KeywordError::EmptyKeyword {
            entry: entry.to_owned(),
        });
    }
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    Regex::new(&pattern).map_err(|source| KeywordError::Pattern {
        keyword: word.to_owned(),
        source,
    })
}

/// Luxury score implied by a price band label.
///
/// Recognised bands are `Low`, `Medium`, `Medium-high` and `High`, matched
/// case-insensitively after trimming.
///
/// # Examples
/// ```
/// use wayfarer_core::luxury_from_cost_band;
///
/// assert_eq!(luxury_from_cost_band(" medium-HIGH "), Some(4));
/// assert_eq!(luxury_from_cost_band("unknown"), None);
/// ```
#[must_use]
pub fn luxury_from_cost_band(band: &str) -> Option<u32> {
    match band.trim().to_lowercase().as_str() {
        "low" => Some(1),
        "medium" => Some(3),
        "medium-high" => Some(4),
        "high" => Some(5),
        _ => None,
    }
}

/// Upper price bounds (inclusive) for luxury scores 1 to 4; anything above
/// the last bound scores 5.
const PRICE_BANDS: [(f64, u32); 4] = [(10.0, 1), (30.0, 2), (70.0, 3), (150.0, 4)];

/// Luxury score implied by a price or entry fare.
///
/// The fractional part is dropped before banding, and a missing or NaN price
/// counts as zero.
///
/// # Examples
/// ```
/// use wayfarer_core::luxury_from_price;
///
/// assert_eq!(luxury_from_price(Some(25.0)), 2);
/// assert_eq!(luxury_from_price(Some(500.0)), 5);
/// assert_eq!(luxury_from_price(None), 1);
/// ```
#[must_use]
pub fn luxury_from_price(price: Option<f64>) -> u32 {
    let whole = price.filter(|p| !p.is_nan()).map_or(0.0, f64::trunc);
    PRICE_BANDS
        .iter()
        .find(|(bound, _)| whole <= *bound)
        .map_or(5, |&(_, score)| score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(&KeywordDictionary::default()).expect("default dictionary compiles")
    }

    #[rstest]
    fn counts_each_keyword_once(extractor: KeywordExtractor) {
        let profile = extractor.extract("Hike, hike and hike again before a trek.");
        assert_eq!(profile.traits.get(Trait::Adventure), 2);
    }

    #[rstest]
    #[case("The market is artful", Trait::Culture, 0)]
    #[case("Street art and a museum", Trait::Culture, 2)]
    #[case("Parking available", Trait::Nature, 0)]
    fn respects_word_boundaries(
        extractor: KeywordExtractor,
        #[case] text: &str,
        #[case] kind: Trait,
        #[case] expected: u32,
    ) {
        assert_eq!(extractor.extract(text).traits.get(kind), expected);
    }

    #[rstest]
    fn matches_multi_word_and_punctuated_keywords(extractor: KeywordExtractor) {
        let profile = extractor.extract("A 5-star resort with FINE DINING and a national park");
        assert_eq!(profile.traits.get(Trait::Luxury), 3);
        assert!(profile.tags.contains("wildlife"));
    }

    #[rstest]
    fn assigns_tags_from_any_keyword(extractor: KeywordExtractor) {
        let profile = extractor.extract("Ancient temple ruins above the seaside café");
        let tags: Vec<_> = profile.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["beach", "historic", "spiritual", "urban"]);
    }

    #[rstest]
    fn empty_text_scores_nothing(extractor: KeywordExtractor) {
        assert_eq!(extractor.extract(""), KeywordProfile::default());
    }

    #[rstest]
    fn custom_dictionary_replaces_entries() {
        let dictionary = KeywordDictionary::empty()
            .with_trait_keywords(Trait::Relax, ["hammock"])
            .with_trait_keywords(Trait::Relax, ["siesta"])
            .with_tag_keywords("tropical", ["palm"]);
        assert_eq!(dictionary.trait_keywords(Trait::Relax), ["siesta"]);
        assert!(dictionary.trait_keywords(Trait::Luxury).is_empty());

        let extractor = KeywordExtractor::new(&dictionary).expect("dictionary compiles");
        let profile = extractor.extract("Siesta under a palm");
        assert_eq!(profile.traits, TraitScores::default().with_score(Trait::Relax, 1));
        assert_eq!(dictionary.tags().collect::<Vec<_>>(), vec!["tropical"]);
        assert!(profile.tags.contains("tropical"));
    }

    #[rstest]
    fn blank_keyword_is_rejected() {
        let dictionary = KeywordDictionary::empty().with_tag_keywords("broken", ["  "]);
        let err = KeywordExtractor::new(&dictionary).expect_err("blank keyword should fail");
        assert!(matches!(err, KeywordError::EmptyKeyword { entry } if entry == "broken"));
    }

    #[rstest]
    #[case("Low", Some(1))]
    #[case("medium", Some(3))]
    #[case("Medium-high", Some(4))]
    #[case(" HIGH ", Some(5))]
    #[case("Luxury", None)]
    #[case("", None)]
    fn maps_cost_bands(#[case] band: &str, #[case] expected: Option<u32>) {
        assert_eq!(luxury_from_cost_band(band), expected);
    }

    #[rstest]
    #[case(Some(10.0), 1)]
    #[case(Some(10.01), 1)]
    #[case(Some(11.0), 2)]
    #[case(Some(30.0), 2)]
    #[case(Some(30.5), 2)]
    #[case(Some(31.0), 3)]
    #[case(Some(70.0), 3)]
    #[case(Some(150.0), 4)]
    #[case(Some(151.0), 5)]
    #[case(Some(f64::INFINITY), 5)]
    #[case(Some(0.0), 1)]
    #[case(Some(f64::NAN), 1)]
    #[case(None, 1)]
    fn maps_prices_to_luxury(#[case] price: Option<f64>, #[case] expected: u32) {
        assert_eq!(luxury_from_price(price), expected);
    }
}
