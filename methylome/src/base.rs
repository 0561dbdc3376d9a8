use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

use crate::error::RowError;

/// Reference nucleotide reported for an alignment position.
///
/// The four canonical bases get their own variants. Anything else the aligner
/// emits (`N`, lowercase soft-masked bases, gap symbols) is kept verbatim in
/// `Other`, so a table written back to disk shows the same character.
///
/// # Variants
/// - `A`: Adenine
/// - `C`: Cytosine
/// - `G`: Guanine
/// - `T`: Thymine
/// - `Other`: any other single character, matched case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    Other(char),
}

impl Base {
    /// The four bases counted in every row, in column order.
    pub const NUCLEOTIDES: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Maps a single character onto a `Base`.
    ///
    /// # Examples
    /// ```
    /// use methylome::Base;
    ///
    /// assert_eq!(Base::parse_char('C'), Base::C);
    /// assert_eq!(Base::parse_char('c'), Base::Other('c'));
    /// ```
    pub fn parse_char(base: char) -> Self {
        match base {
            'A' => Base::A,
            'C' => Base::C,
            'G' => Base::G,
            'T' => Base::T,
            other => Base::Other(other),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
            Base::Other(c) => c,
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Base {
    type Err = RowError;

    /// Parses a REF field. The field must hold exactly one character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Base::parse_char(c)),
            _ => Err(RowError::InvalidReference(s.to_string())),
        }
    }
}

impl Serialize for Base {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Base {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        match Base::from_str(&s) {
            Ok(base) => Ok(base),
            Err(e) => Err(de::Error::custom(e.to_string())),
        }
    }
}
