use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// Kinds of timeline events. The engine currently emits only `Goal`;
/// the other variants exist for the hosting game's event feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    Substitution,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    /// Jittered up to ±2 minutes around the 5-minute phase that produced it,
    /// so the first phase can report minute 3 and the last minute 92.
    pub minute: u8,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub side: Side,
    pub player: String,
    pub description: String,
}

/// Immutable outcome of one simulated match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    /// Accumulated expected goals, rounded to 2 decimals.
    pub home_xg: f32,
    pub away_xg: f32,
    /// Time-ordered (stable for equal minutes).
    pub events: Vec<MatchEvent>,
    /// One decimal place each; the pair sums to 100.
    pub home_possession: f32,
    pub away_possession: f32,
    pub home_shots: u16,
    pub away_shots: u16,
    pub home_shots_on_target: u16,
    pub away_shots_on_target: u16,
}

impl MatchResult {
    pub fn score(&self) -> (u8, u8) {
        (self.home_score, self.away_score)
    }

    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }

    pub fn winner(&self) -> Option<Side> {
        if self.home_score > self.away_score {
            Some(Side::Home)
        } else if self.away_score > self.home_score {
            Some(Side::Away)
        } else {
            None
        }
    }
}

pub(crate) fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
