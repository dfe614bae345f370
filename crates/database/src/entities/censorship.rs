//! Censorship classification of a movie

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CensorshipLevel {
    Censored,
    #[default]
    NotCensored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown censorship level: {0}")]
pub struct UnknownCensorshipLevel(pub String);

impl CensorshipLevel {
    pub const VALUES: &'static [&'static str] = &["censored", "not_censored"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CensorshipLevel::Censored => "censored",
            CensorshipLevel::NotCensored => "not_censored",
        }
    }
}

impl FromStr for CensorshipLevel {
    type Err = UnknownCensorshipLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "censored" => Ok(CensorshipLevel::Censored),
            "not_censored" => Ok(CensorshipLevel::NotCensored),
            _ => Err(UnknownCensorshipLevel(s.to_string())),
        }
    }
}

impl fmt::Display for CensorshipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
