use serde::{Deserialize, Serialize};

/// Nominal playing position of a player card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    ST,
}

/// Which team-rating a player's nominal position contributes to.
///
/// Wing-backs (LWB/RWB) belong to no group: they fill formation slots but
/// are excluded from all three rating averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingGroup {
    Attack,
    Defense,
    Midfield,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    /// Positions eligible to be picked as the shooter when a chance falls.
    pub fn is_forward_leaning(&self) -> bool {
        matches!(
            self,
            Position::ST | Position::LW | Position::RW | Position::CAM | Position::CM
        )
    }

    /// Positions counted as the defensive back line when discounting xG.
    pub fn is_back_line(&self) -> bool {
        matches!(
            self,
            Position::CB | Position::GK | Position::LB | Position::RB
        )
    }

    pub fn rating_group(&self) -> Option<RatingGroup> {
        match self {
            Position::ST | Position::LW | Position::RW | Position::CAM => {
                Some(RatingGroup::Attack)
            }
            Position::CB | Position::LB | Position::RB | Position::GK => {
                Some(RatingGroup::Defense)
            }
            Position::CM | Position::CDM | Position::LM | Position::RM => {
                Some(RatingGroup::Midfield)
            }
            Position::LWB | Position::RWB => None,
        }
    }
}

/// Immutable per-player input record: identity, the six skill attributes
/// and cumulative season stats. The engine never mutates these; goals and
/// minutes are read-only inputs to form weighting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerAttributes {
    pub name: String,
    pub club: String,
    pub season: String,
    pub position: Position,
    pub overall: u8,
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defense: u8,
    pub physical: u8,
    #[serde(default)]
    pub goals: u16,
    #[serde(default)]
    pub assists: u16,
    #[serde(default)]
    pub minutes: u32,
}

impl PlayerAttributes {
    /// Shooter-selection weight: shooting volume scaled by a finishing-rate
    /// proxy. `max(minutes/90, 1)` keeps low-minute players from dividing
    /// by a fraction of a game.
    pub fn chance_weight(&self) -> f32 {
        let games = (self.minutes as f32 / 90.0).max(1.0);
        self.shooting as f32 * (1.0 + self.goals as f32 / games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(position: Position, shooting: u8, goals: u16, minutes: u32) -> PlayerAttributes {
        PlayerAttributes {
            name: "Test".into(),
            club: "Test FC".into(),
            season: "2023-24".into(),
            position,
            overall: 75,
            pace: 70,
            shooting,
            passing: 70,
            dribbling: 70,
            defense: 50,
            physical: 70,
            goals,
            assists: 0,
            minutes,
        }
    }

    #[test]
    fn rating_groups_partition_positions() {
        assert_eq!(Position::ST.rating_group(), Some(RatingGroup::Attack));
        assert_eq!(Position::CAM.rating_group(), Some(RatingGroup::Attack));
        assert_eq!(Position::GK.rating_group(), Some(RatingGroup::Defense));
        assert_eq!(Position::LB.rating_group(), Some(RatingGroup::Defense));
        assert_eq!(Position::CDM.rating_group(), Some(RatingGroup::Midfield));
        assert_eq!(Position::RM.rating_group(), Some(RatingGroup::Midfield));
        assert_eq!(Position::LWB.rating_group(), None);
        assert_eq!(Position::RWB.rating_group(), None);
    }

    #[test]
    fn chance_weight_scales_with_scoring_rate() {
        // 30 goals over 30 games doubles the weight.
        let prolific = player(Position::ST, 80, 30, 2700);
        assert!((prolific.chance_weight() - 160.0).abs() < 1e-3);

        let quiet = player(Position::ST, 80, 0, 2700);
        assert!((quiet.chance_weight() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn chance_weight_low_minutes_does_not_explode() {
        // 45 minutes played: divisor clamps to 1 full game.
        let cameo = player(Position::ST, 80, 2, 45);
        assert!((cameo.chance_weight() - 240.0).abs() < 1e-3);
    }

    #[test]
    fn position_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&Position::CAM).unwrap();
        assert_eq!(json, "\"CAM\"");
        let back: Position = serde_json::from_str("\"GK\"").unwrap();
        assert_eq!(back, Position::GK);
    }
}
