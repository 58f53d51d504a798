//! Primitive types shared across the crate.
//!
//! Allele states are stored as raw `u8` values (0/1 for biallelic loci) so
//! that chromosome blocks stay compact and can be copied segment-wise with
//! `copy_from_slice`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Allele state at a single locus on a single homolog.
pub type Allele = u8;

/// Number of homologs carried by a diploid individual.
pub const DIPLOID: usize = 2;

/// Homolog slot holding the maternally derived gamete.
pub const MATERNAL: usize = 0;

/// Homolog slot holding the paternally derived gamete.
pub const PATERNAL: usize = 1;

/// Sex of the parent performing a meiosis.
///
/// Selects which sex-specific genetic map governs crossover placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" | "f" => Ok(Self::Female),
            "male" | "m" => Ok(Self::Male),
            _ => Err(format!("Unknown sex: {s}. Available: female, male")),
        }
    }
}

/// Parental role of a gamete source in a cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentRole {
    Mother,
    Father,
}

impl ParentRole {
    /// Sex whose map is used for this parent's meiosis.
    #[inline]
    pub fn sex(self) -> Sex {
        match self {
            Self::Mother => Sex::Female,
            Self::Father => Sex::Male,
        }
    }

    /// Homolog slot the gamete from this parent occupies in the offspring.
    #[inline]
    pub fn homolog(self) -> usize {
        match self {
            Self::Mother => MATERNAL,
            Self::Father => PATERNAL,
        }
    }
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mother => write!(f, "mother"),
            Self::Father => write!(f, "father"),
        }
    }
}
