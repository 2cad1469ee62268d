//! Tactical configuration: formation templates, play styles and the
//! intensity dials that modify a team's derived ratings.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::Position;

use crate::models::Position::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "5-3-2")]
    F532,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "4-5-1")]
    F451,
}

impl Formation {
    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F532 => "5-3-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F451 => "4-5-1",
        }
    }

    /// Ordered slot template, goalkeeper first.
    pub fn positions(&self) -> &'static [Position; 11] {
        match self {
            Formation::F442 => &[GK, LB, CB, CB, RB, LM, CM, CM, RM, ST, ST],
            Formation::F433 => &[GK, LB, CB, CB, RB, CDM, CM, CM, LW, ST, RW],
            Formation::F352 => &[GK, CB, CB, CB, LWB, CDM, CM, CM, RWB, ST, ST],
            Formation::F532 => &[GK, LWB, CB, CB, CB, RWB, CM, CM, CM, ST, ST],
            Formation::F4231 => &[GK, LB, CB, CB, RB, CDM, CDM, CAM, LW, RW, ST],
            Formation::F451 => &[GK, LB, CB, CB, RB, LM, CM, CM, CM, RM, ST],
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "4-4-2" => Some(Formation::F442),
            "4-3-3" => Some(Formation::F433),
            "3-5-2" => Some(Formation::F352),
            "5-3-2" => Some(Formation::F532),
            "4-2-3-1" => Some(Formation::F4231),
            "4-5-1" => Some(Formation::F451),
            _ => None,
        }
    }

    /// Unknown codes fall back to 4-4-2 rather than erroring.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Formation::F442)
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::F442
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    Balanced,
    Possession,
    Counter,
    HighPress,
    LongBall,
}

impl PlayStyle {
    /// (attack, defense, midfield) multiplier triple.
    pub fn modifiers(&self) -> (f32, f32, f32) {
        match self {
            PlayStyle::Balanced => (1.0, 1.0, 1.0),
            PlayStyle::Possession => (0.9, 1.0, 1.15),
            PlayStyle::Counter => (1.15, 0.9, 0.9),
            PlayStyle::HighPress => (1.0, 1.1, 1.05),
            PlayStyle::LongBall => (1.1, 1.0, 0.9),
        }
    }
}

impl Default for PlayStyle {
    fn default() -> Self {
        PlayStyle::Balanced
    }
}

/// Team tactical settings supplied by the caller.
///
/// Intensities are a 1-10 scale. `defensive_line` is accepted and validated
/// but currently has no effect on ratings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TacticalProfile {
    #[serde(default)]
    pub formation: Formation,
    #[serde(default = "default_intensity")]
    pub attacking_intensity: u8,
    #[serde(default = "default_intensity")]
    pub defensive_line: u8,
    #[serde(default = "default_intensity")]
    pub pressing_intensity: u8,
    #[serde(default)]
    pub play_style: PlayStyle,
}

fn default_intensity() -> u8 {
    5
}

impl Default for TacticalProfile {
    fn default() -> Self {
        Self {
            formation: Formation::F442,
            attacking_intensity: 5,
            defensive_line: 5,
            pressing_intensity: 5,
            play_style: PlayStyle::Balanced,
        }
    }
}

impl TacticalProfile {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("attacking_intensity", self.attacking_intensity),
            ("defensive_line", self.defensive_line),
            ("pressing_intensity", self.pressing_intensity),
        ] {
            if !(1..=10).contains(&value) {
                return Err(EngineError::IntensityOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
