//! TF-IDF text vectorisation.
//!
//! Documents are tokenised into runs of two or more word characters, English
//! stop words are dropped, and each remaining term is weighted by its raw
//! count times a smoothed inverse document frequency:
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! Every vector is L2-normalised, so the dot product of two vectors is their
//! cosine similarity.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Sparse, L2-normalised term-weight vector.
///
/// Entries are ordered by term index and never hold a zero weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Report whether the vector has no non-zero entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(term index, weight)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Dot product with another vector; `0.0` when either is empty.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "dot product accumulation")]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut left = self.entries.iter().peekable();
        let mut right = other.entries.iter().peekable();
        let mut total = 0.0;
        while let (Some(&&(li, lw)), Some(&&(ri, rw))) = (left.peek(), right.peek()) {
            match li.cmp(&ri) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    total += lw * rw;
                    left.next();
                    right.next();
                }
            }
        }
        total
    }

    /// Component-wise mean of `vectors`; empty when there are none.
    ///
    /// The result is not normalised, so its dot product with a vector is the
    /// mean of the inputs' dot products with that vector.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging weights over a vector count far below f64 limits"
    )]
    pub fn centroid<'a, I>(vectors: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut sums: BTreeMap<usize, f64> = BTreeMap::new();
        let mut count = 0_usize;
        for vector in vectors {
            count += 1;
            for &(index, weight) in &vector.entries {
                *sums.entry(index).or_default() += weight;
            }
        }
        if count == 0 {
            return Self::default();
        }
        let count = count as f64;
        let entries = sums
            .into_iter()
            .map(|(index, sum)| (index, sum / count))
            .filter(|&(_, weight)| weight != 0.0)
            .collect();
        Self { entries }
    }

    #[expect(clippy::float_arithmetic, reason = "L2 normalisation")]
    fn normalised(mut entries: Vec<(usize, f64)>) -> Self {
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        for (_, weight) in &mut entries {
            *weight /= norm;
        }
        Self { entries }
    }
}

/// Split lowercase `text` into runs of at least two word characters.
///
/// Word characters are alphanumerics and the underscore.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().nth(1).is_some())
        .map(str::to_lowercase)
}

/// The English stop-word list used by [`TfidfVectorizer::fit`].
///
/// This is the short NLTK list: function words only, so descriptive terms
/// such as "old", "new" or "high" stay in the vocabulary.
#[must_use]
pub fn english_stop_words() -> HashSet<String> {
    stop_words::get(stop_words::LANGUAGE::English)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Vocabulary and inverse document frequencies learnt from a corpus.
///
/// # Examples
/// ```
/// use wayfarer_recommender::TfidfVectorizer;
///
/// let vectorizer = TfidfVectorizer::fit(&["quiet beach", "busy beach bar"]);
/// let quiet = vectorizer.transform("a quiet beach");
/// let bar = vectorizer.transform("beach bar");
/// assert!(quiet.dot(&bar) > 0.0);
/// assert!(vectorizer.transform("mountain").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary of `documents`, ignoring English stop words.
    #[must_use]
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        Self::fit_with_stop_words(documents, english_stop_words())
    }

    /// Learn the vocabulary of `documents`, ignoring `stop_words`.
    ///
    /// Terms are indexed in lexicographic order.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "document counts are far below f64 precision limits"
    )]
    pub fn fit_with_stop_words<S: AsRef<str>>(
        documents: &[S],
        stop_words: HashSet<String>,
    ) -> Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let terms: BTreeSet<String> = tokenize(document.as_ref())
                .filter(|term| !stop_words.contains(term))
                .collect();
            for term in terms {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        let total = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, frequency)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + total) / (1.0 + frequency as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self {
            vocabulary,
            idf,
            stop_words,
        }
    }

    /// Vectorise `text`; terms outside the vocabulary are ignored.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "term counts are far below f64 precision limits"
    )]
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for term in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_default() += 1;
            }
        }
        let entries = counts
            .into_iter()
            .filter_map(|(index, count)| {
                self.idf
                    .get(index)
                    .map(|idf| (index, count as f64 * idf))
            })
            .collect();
        SparseVector::normalised(entries)
    }

    /// Number of distinct terms learnt.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary
            .get(term)
            .and_then(|&index| self.idf.get(index).copied())
    }

    /// Report whether `term` is ignored as a stop word.
    #[must_use]
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }
}
