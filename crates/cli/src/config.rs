//! Play settings, loaded from TOML and overridden by command-line flags

use anyhow::{bail, Context, Result};
use chess_core::Color;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Which side the human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    White,
    Black,
    /// Engine plays both sides
    None,
}

impl HumanSide {
    pub fn color(self) -> Option<Color> {
        match self {
            HumanSide::White => Some(Color::White),
            HumanSide::Black => Some(Color::Black),
            HumanSide::None => None,
        }
    }
}

impl FromStr for HumanSide {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "white" | "w" => Ok(HumanSide::White),
            "black" | "b" => Ok(HumanSide::Black),
            "none" => Ok(HumanSide::None),
            other => bail!("unknown human color '{}' (expected white, black or none)", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Search depth in plies
    pub depth: u8,
    pub human_color: HumanSide,
    /// Ply limit for engine self-play
    pub max_moves: u32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            human_color: HumanSide::White,
            max_moves: 200,
        }
    }
}

impl PlayConfig {
    /// Load settings from a TOML file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PlayConfig = toml::from_str(contents)?;
        Ok(config.normalized())
    }

    /// Clamp values into their usable range.
    pub fn normalized(mut self) -> Self {
        self.depth = self.depth.max(1);
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
