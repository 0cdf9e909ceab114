//! Analytical perspective definitions.
//!
//! A [`Perspective`] is the geopolitical viewpoint an intelligence requirement
//! is written from. Analysts may select several at once; with no selection the
//! dialogue falls back to [`Perspective::Neutral`].

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geopolitical viewpoint for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    Us,
    Norway,
    China,
    Eu,
    Russia,
    #[default]
    Neutral,
}

impl Perspective {
    /// All perspectives, in selector order
    pub const ALL: [Perspective; 6] = [
        Perspective::Us,
        Perspective::Eu,
        Perspective::Norway,
        Perspective::China,
        Perspective::Russia,
        Perspective::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Perspective::Us => "us",
            Perspective::Norway => "norway",
            Perspective::China => "china",
            Perspective::Eu => "eu",
            Perspective::Russia => "russia",
            Perspective::Neutral => "neutral",
        }
    }

    /// Parse a list of raw tokens into a de-duplicated perspective list.
    ///
    /// Fails on the first unknown token; nothing is returned partially.
    pub fn parse_list<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Perspective>, DomainError> {
        let mut parsed: Vec<Perspective> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let perspective: Perspective = token.as_ref().parse()?;
            if !parsed.contains(&perspective) {
                parsed.push(perspective);
            }
        }
        Ok(parsed)
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Perspective {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| DomainError::InvalidPerspective(s.to_string()))
    }
}
