use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::FinderError;

/// One reference sketch as reported by `mash info -t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    pub hashes: u64,
    pub length: u64,
    pub sketch_id: String,
    pub comment: String,
}

/// One pairwise comparison as reported by `mash dist`.
///
/// All hits produced by a single run share the same `query_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct MashHit {
    pub ref_id: String,
    pub query_id: String,
    pub distance: f64,
    pub p_value: f64,
    pub matching_hashes: u64,
    pub total_hashes: u64,
}

impl MashHit {
    pub fn hash_ratio(&self) -> String {
        format!("{}/{}", self.matching_hashes, self.total_hashes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionMode {
    /// Every hit tied with the lowest mash distance.
    Standard,
    /// The n lowest-distance hits.
    #[value(name = "best_n")]
    BestN,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Standard => write!(f, "standard"),
            SelectionMode::BestN => write!(f, "best_n"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = FinderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "standard" => Ok(SelectionMode::Standard),
            "best_n" => Ok(SelectionMode::BestN),
            other => Err(FinderError::InvalidMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_display() {
        for mode in [SelectionMode::Standard, SelectionMode::BestN] {
            let parsed: SelectionMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!("nearest".parse::<SelectionMode>().is_err());
    }

    #[test]
    fn hash_ratio_formatting() {
        let hit = MashHit {
            ref_id: "ref".to_string(),
            query_id: "query".to_string(),
            distance: 0.1,
            p_value: 0.0,
            matching_hashes: 857,
            total_hashes: 1000,
        };
        assert_eq!(hit.hash_ratio(), "857/1000");
    }
}
