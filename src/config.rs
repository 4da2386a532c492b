//! Run configuration: the enums shared by the command line and the optional
//! TOML file, and the file format itself.

use crate::search::{DistanceMetric, HeuristicName, SearchEngineName, SearchLimits};
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    #[clap(help = "Walk from the start to the first survivor.")]
    Position,
    #[clap(help = "Visit every survivor, in any order.")]
    Survivors,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time limit of {0} seconds")]
    InvalidTimeLimit(f64),
}

/// Defaults for a planner run. Every field may be omitted. A missing
/// `heuristic` follows the problem kind and a missing `metric` is chosen
/// from the map.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchConfig {
    pub problem: ProblemKind,
    pub engine: SearchEngineName,
    pub heuristic: Option<HeuristicName>,
    pub metric: Option<DistanceMetric>,
    pub max_expansions: Option<usize>,
    /// Seconds.
    pub time_limit: Option<f64>,
    pub memory_limit_mb: Option<usize>,
    pub verbosity: Verbosity,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            problem: ProblemKind::Survivors,
            engine: SearchEngineName::Astar,
            heuristic: None,
            metric: None,
            max_expansions: None,
            time_limit: None,
            memory_limit_mb: None,
            verbosity: Verbosity::Normal,
        }
    }
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        fs::read_to_string(path)?.parse()
    }

    pub fn heuristic(&self) -> HeuristicName {
        match (self.heuristic, self.problem) {
            (Some(heuristic), _) => heuristic,
            (None, ProblemKind::Position) => HeuristicName::Manhattan,
            (None, ProblemKind::Survivors) => HeuristicName::Survivor,
        }
    }

    pub fn limits(&self) -> Result<SearchLimits, ConfigError> {
        let time_limit = self
            .time_limit
            .map(|secs| {
                Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeLimit(secs))
            })
            .transpose()?;
        Ok(SearchLimits {
            max_expansions: self.max_expansions,
            time_limit,
            memory_limit_mb: self.memory_limit_mb,
        })
    }
}

impl FromStr for SearchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
