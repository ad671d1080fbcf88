//! Phenotype - the heritable trait set of a tumor cell
//!
//! A phenotype is a subset of three traits: acid-resistant (A), glycolytic (G)
//! and hyperplastic (H). The empty set is the "normal" phenotype. The domain is
//! closed (8 values), so it is stored as a 3-bit set and every value is
//! canonical by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::OncoError;

/// A single heritable trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trait {
    AcidResistant = 0b001,
    Glycolytic = 0b010,
    Hyperplastic = 0b100,
}

impl Trait {
    /// All traits in canonical (alphabetical letter) order
    pub const ALL: [Trait; 3] = [Trait::AcidResistant, Trait::Glycolytic, Trait::Hyperplastic];

    #[inline]
    fn bit(self) -> u8 {
        self as u8
    }

    pub fn letter(self) -> char {
        match self {
            Trait::AcidResistant => 'A',
            Trait::Glycolytic => 'G',
            Trait::Hyperplastic => 'H',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Trait::AcidResistant),
            'G' => Some(Trait::Glycolytic),
            'H' => Some(Trait::Hyperplastic),
            _ => None,
        }
    }
}

/// Set of traits expressed by a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phenotype(u8);

impl Phenotype {
    pub const NORMAL: Phenotype = Phenotype(0);

    /// All 8 phenotypes, ordered by bit pattern
    pub const ALL: [Phenotype; 8] = [
        Phenotype(0),
        Phenotype(1),
        Phenotype(2),
        Phenotype(3),
        Phenotype(4),
        Phenotype(5),
        Phenotype(6),
        Phenotype(7),
    ];

    pub fn from_traits(traits: &[Trait]) -> Self {
        traits.iter().fold(Self::NORMAL, |p, t| p.with(*t))
    }

    /// Index in `0..8`, stable across runs (used for census buckets)
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn contains(self, t: Trait) -> bool {
        self.0 & t.bit() != 0
    }

    #[must_use]
    pub fn with(self, t: Trait) -> Self {
        Phenotype(self.0 | t.bit())
    }

    #[must_use]
    pub fn without(self, t: Trait) -> Self {
        Phenotype(self.0 & !t.bit())
    }

    pub fn is_normal(self) -> bool {
        self.0 == 0
    }

    pub fn acid_resistant(self) -> bool {
        self.contains(Trait::AcidResistant)
    }

    pub fn glycolytic(self) -> bool {
        self.contains(Trait::Glycolytic)
    }

    pub fn hyperplastic(self) -> bool {
        self.contains(Trait::Hyperplastic)
    }

    pub fn trait_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Traits present, in canonical order
    pub fn present(self) -> impl Iterator<Item = Trait> {
        Trait::ALL.into_iter().filter(move |t| self.contains(*t))
    }

    /// Traits absent, in canonical order
    pub fn absent(self) -> impl Iterator<Item = Trait> {
        Trait::ALL.into_iter().filter(move |t| !self.contains(*t))
    }

    /// Traits in `self` but not in `other`
    pub fn difference(self, other: Phenotype) -> Phenotype {
        Phenotype(self.0 & !other.0)
    }

    /// Canonical name: sorted trait letters, or "normal"
    pub fn canonical_name(self) -> String {
        if self.is_normal() {
            "normal".to_string()
        } else {
            self.present().map(Trait::letter).collect()
        }
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl FromStr for Phenotype {
    type Err = OncoError;

    /// Accepts "normal" (or the empty string) and any ordering of trait
    /// letters, e.g. "HA" parses to "AH".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("normal") {
            return Ok(Phenotype::NORMAL);
        }

        let mut phenotype = Phenotype::NORMAL;
        for c in s.chars() {
            let t = Trait::from_letter(c)
                .ok_or_else(|| OncoError::UnknownPhenotype(s.to_string()))?;
            if phenotype.contains(t) {
                return Err(OncoError::UnknownPhenotype(s.to_string()));
            }
            phenotype = phenotype.with(t);
        }
        Ok(phenotype)
    }
}

impl Serialize for Phenotype {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for Phenotype {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        let names: Vec<String> = Phenotype::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            vec!["normal", "A", "G", "AG", "H", "AH", "GH", "AGH"]
        );
    }

    #[test]
    fn test_parse_any_order() {
        let p: Phenotype = "HGA".parse().unwrap();
        assert_eq!(p.to_string(), "AGH");
        let p: Phenotype = "ha".parse().unwrap();
        assert_eq!(p, Phenotype::from_traits(&[Trait::AcidResistant, Trait::Hyperplastic]));
        assert_eq!("normal".parse::<Phenotype>().unwrap(), Phenotype::NORMAL);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("X".parse::<Phenotype>().is_err());
        assert!("AA".parse::<Phenotype>().is_err());
    }

    #[test]
    fn test_round_trip_all() {
        for p in Phenotype::ALL {
            assert_eq!(p.to_string().parse::<Phenotype>().unwrap(), p);
        }
    }

    #[test]
    fn test_present_and_absent_partition() {
        for p in Phenotype::ALL {
            let present: Vec<_> = p.present().collect();
            let absent: Vec<_> = p.absent().collect();
            assert_eq!(present.len() + absent.len(), 3);
            assert_eq!(present.len() as u32, p.trait_count());
            assert_eq!(Phenotype::from_traits(&present), p);
        }
    }

    #[test]
    fn test_trait_flags() {
        let p: Phenotype = "AG".parse().unwrap();
        assert!(p.acid_resistant());
        assert!(p.glycolytic());
        assert!(!p.hyperplastic());
        assert!(!p.is_normal());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let p: Phenotype = "GH".parse().unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"GH\"");
        let back: Phenotype = serde_json::from_str("\"HG\"").unwrap();
        assert_eq!(back, p);
    }
}
