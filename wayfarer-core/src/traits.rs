//! The five travel traits describing a destination's character.
//!
//! The enum gives compile-time safety for trait lookups and fixes the order
//! in which scores are laid out as vectors.
//!
//! # Examples
//! ```
//! use wayfarer_core::{Trait, TraitScores};
//!
//! assert_eq!(Trait::Adventure.as_str(), "adventure");
//! let scores = TraitScores::default().with_score(Trait::Luxury, 4);
//! assert_eq!(scores.as_vector(), [0.0, 0.0, 0.0, 0.0, 4.0]);
//! ```

use serde::{Deserialize, Serialize};

/// A quality whose intensity is scored for every destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trait {
    /// Outdoor activity and thrill seeking.
    Adventure,
    /// Calm, restful places.
    Relax,
    /// Landscapes, parks and wildlife.
    Nature,
    /// Heritage, museums and tradition.
    Culture,
    /// High-end stays and dining.
    Luxury,
}

impl Trait {
    /// Every trait in vector order.
    pub const ALL: [Self; 5] = [
        Self::Adventure,
        Self::Relax,
        Self::Nature,
        Self::Culture,
        Self::Luxury,
    ];

    /// Return the trait as a lowercase `&str`, matching the column name.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Trait;
    ///
    /// assert_eq!(Trait::Nature.as_str(), "nature");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adventure => "adventure",
            Self::Relax => "relax",
            Self::Nature => "nature",
            Self::Culture => "culture",
            Self::Luxury => "luxury",
        }
    }

    /// Position of the trait inside a trait vector.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Adventure => 0,
            Self::Relax => 1,
            Self::Nature => 2,
            Self::Culture => 3,
            Self::Luxury => 4,
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adventure" => Ok(Self::Adventure),
            "relax" => Ok(Self::Relax),
            "nature" => Ok(Self::Nature),
            "culture" => Ok(Self::Culture),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("unknown trait '{s}'")),
        }
    }
}

/// Non-negative intensity scores for the five traits.
///
/// Serialises as five flat fields so that a [`Destination`](crate::Destination)
/// renders every trait as its own column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitScores {
    /// Adventure score.
    #[serde(default)]
    pub adventure: u32,
    /// Relax score.
    #[serde(default)]
    pub relax: u32,
    /// Nature score.
    #[serde(default)]
    pub nature: u32,
    /// Culture score.
    #[serde(default)]
    pub culture: u32,
    /// Luxury score.
    #[serde(default)]
    pub luxury: u32,
}

impl TraitScores {
    /// Build scores from values laid out in [`Trait::ALL`] order.
    #[must_use]
    pub const fn from_array(values: [u32; 5]) -> Self {
        let [adventure, relax, nature, culture, luxury] = values;
        Self {
            adventure,
            relax,
            nature,
            culture,
            luxury,
        }
    }

    /// Return the score for a trait.
    #[must_use]
    pub const fn get(&self, kind: Trait) -> u32 {
        match kind {
            Trait::Adventure => self.adventure,
            Trait::Relax => self.relax,
            Trait::Nature => self.nature,
            Trait::Culture => self.culture,
            Trait::Luxury => self.luxury,
        }
    }

    /// Overwrite the score for a trait.
    pub const fn set(&mut self, kind: Trait, score: u32) {
        match kind {
            Trait::Adventure => self.adventure = score,
            Trait::Relax => self.relax = score,
            Trait::Nature => self.nature = score,
            Trait::Culture => self.culture = score,
            Trait::Luxury => self.luxury = score,
        }
    }

    /// Set a score while returning `self` for chaining.
    #[must_use]
    pub const fn with_score(mut self, kind: Trait, score: u32) -> Self {
        self.set(kind, score);
        self
    }

    /// Scores as a fixed-order numeric vector.
    #[must_use]
    pub fn as_vector(&self) -> [f64; 5] {
        Trait::ALL.map(|kind| f64::from(self.get(kind)))
    }
}
