//! Rating model: roster + tactics -> attack / defense / midfield scalars.

use serde::{Deserialize, Serialize};

use crate::engine::lineup::select_lineup;
use crate::error::{EngineError, Result};
use crate::models::{PlayerAttributes, RatingGroup};
use crate::tactics::TacticalProfile;

/// Neutral baseline used when a positional group ends up empty, so reduced
/// lineups are not crippled and averages never divide by zero.
pub const NEUTRAL_RATING: f32 = 50.0;

/// A roster bound to one tactical profile, with ratings derived once at
/// construction. Ratings are a pure function of (roster, tactics); nothing
/// recomputes them mid-match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamState {
    pub name: String,
    pub players: Vec<PlayerAttributes>,
    pub tactics: TacticalProfile,
    pub attack_rating: f32,
    pub defense_rating: f32,
    pub midfield_rating: f32,
}

impl TeamState {
    pub fn new(
        name: impl Into<String>,
        players: Vec<PlayerAttributes>,
        tactics: TacticalProfile,
    ) -> Result<Self> {
        let name = name.into();
        if players.is_empty() {
            return Err(EngineError::EmptyRoster { team: name });
        }
        tactics.validate()?;

        let (attack, defense, midfield) = compute_ratings(&players, &tactics);
        log::debug!(
            "{name}: ratings atk={attack:.1} def={defense:.1} mid={midfield:.1} \
             ({} {:?})",
            tactics.formation.code(),
            tactics.play_style,
        );

        Ok(Self {
            name,
            players,
            tactics,
            attack_rating: attack,
            defense_rating: defense,
            midfield_rating: midfield,
        })
    }
}

fn compute_ratings(players: &[PlayerAttributes], tactics: &TacticalProfile) -> (f32, f32, f32) {
    let lineup = select_lineup(players, tactics.formation.positions());

    // Partition by nominal position, not by the slot a player was picked for.
    let group = |g: RatingGroup| -> Vec<&PlayerAttributes> {
        lineup
            .iter()
            .copied()
            .filter(|p| p.position.rating_group() == Some(g))
            .collect()
    };

    let attack = group_rating(&group(RatingGroup::Attack), |p| {
        [p.shooting, p.pace, p.dribbling]
    });
    let defense = group_rating(&group(RatingGroup::Defense), |p| [p.defense, p.physical]);
    let midfield = group_rating(&group(RatingGroup::Midfield), |p| {
        [p.passing, p.physical, p.defense]
    });

    apply_tactical_modifiers(attack, defense, midfield, tactics)
}

/// Mean over the group of each player's mean over the key attributes.
fn group_rating<const N: usize>(
    players: &[&PlayerAttributes],
    key_stats: impl Fn(&PlayerAttributes) -> [u8; N],
) -> f32 {
    if players.is_empty() {
        return NEUTRAL_RATING;
    }
    let total: f32 = players
        .iter()
        .map(|&p| {
            let stats = key_stats(p);
            stats.iter().map(|&s| s as f32).sum::<f32>() / N as f32
        })
        .sum();
    total / players.len() as f32
}

/// Modifier order: play-style triple, then pressing, then attacking
/// intensity. Attacking intensity is the risk/reward dial: it buys attack
/// at the cost of defensive solidity.
fn apply_tactical_modifiers(
    attack: f32,
    defense: f32,
    midfield: f32,
    tactics: &TacticalProfile,
) -> (f32, f32, f32) {
    let (mut atk_mod, mut def_mod, mut mid_mod) = tactics.play_style.modifiers();

    let press_factor = tactics.pressing_intensity as f32 / 5.0;
    def_mod *= 0.9 + press_factor * 0.2;
    mid_mod *= 0.95 + press_factor * 0.1;

    let atk_factor = tactics.attacking_intensity as f32 / 5.0;
    atk_mod *= 0.9 + atk_factor * 0.2;
    def_mod *= 1.1 - atk_factor * 0.2;

    (attack * atk_mod, defense * def_mod, midfield * mid_mod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use crate::tactics::{Formation, PlayStyle};
    use crate::models::Position::*;

    fn player(position: Position, overall: u8) -> PlayerAttributes {
        PlayerAttributes {
            name: format!("{position:?} {overall}"),
            club: "Test FC".into(),
            season: "2023-24".into(),
            position,
            overall,
            pace: overall,
            shooting: overall,
            passing: overall,
            dribbling: overall,
            defense: overall,
            physical: overall,
            goals: 0,
            assists: 0,
            minutes: 2700,
        }
    }

    fn full_squad(overall: u8) -> Vec<PlayerAttributes> {
        [GK, LB, CB, CB, RB, CDM, CM, CM, LW, ST, RW]
            .into_iter()
            .map(|pos| player(pos, overall))
            .collect()
    }

    #[test]
    fn uniform_squad_default_tactics_known_values() {
        // All attributes 80; default intensities (5) give factors of 1.0,
        // so attack = 80 * (0.9 + 0.2), defense = 80 * (0.9 + 0.2) * (1.1 - 0.2)
        // and midfield = 80 * (0.95 + 0.1).
        let team = TeamState::new("Uniform", full_squad(80), TacticalProfile::default()).unwrap();
        assert!((team.attack_rating - 88.0).abs() < 1e-3);
        assert!((team.defense_rating - 79.2).abs() < 1e-3);
        assert!((team.midfield_rating - 84.0).abs() < 1e-3);
    }

    #[test]
    fn empty_positional_group_defaults_to_neutral() {
        // Keeper-only roster: no attackers or midfielders make the lineup.
        let team = TeamState::new(
            "Keepers",
            vec![player(GK, 80)],
            TacticalProfile::default(),
        )
        .unwrap();
        // The 50.0 fallback applies before tactical modifiers, so the empty
        // groups land at 50 * 1.1 and 50 * 1.05 under default intensities.
        assert!((team.attack_rating - NEUTRAL_RATING * 1.1).abs() < 1e-3);
        assert!((team.midfield_rating - NEUTRAL_RATING * 1.05).abs() < 1e-3);
        assert!((team.defense_rating - 79.2).abs() < 1e-3);
    }

    #[test]
    fn attacking_intensity_trades_defense_for_attack() {
        let mut aggressive = TacticalProfile::default();
        aggressive.attacking_intensity = 10;
        let mut cautious = TacticalProfile::default();
        cautious.attacking_intensity = 1;

        let squad = full_squad(80);
        let high = TeamState::new("High", squad.clone(), aggressive).unwrap();
        let low = TeamState::new("Low", squad, cautious).unwrap();

        assert!(high.attack_rating > low.attack_rating);
        assert!(high.defense_rating < low.defense_rating);
    }

    #[test]
    fn pressing_intensity_lifts_defense_and_midfield() {
        let mut pressing = TacticalProfile::default();
        pressing.pressing_intensity = 10;

        let squad = full_squad(80);
        let press = TeamState::new("Press", squad.clone(), pressing).unwrap();
        let base = TeamState::new("Base", squad, TacticalProfile::default()).unwrap();

        assert!(press.defense_rating > base.defense_rating);
        assert!(press.midfield_rating > base.midfield_rating);
        assert!((press.attack_rating - base.attack_rating).abs() < 1e-3);
    }

    #[test]
    fn possession_style_boosts_midfield_over_attack() {
        let mut tactics = TacticalProfile::default();
        tactics.play_style = PlayStyle::Possession;

        let squad = full_squad(80);
        let team = TeamState::new("Poss", squad.clone(), tactics).unwrap();
        let base = TeamState::new("Base", squad, TacticalProfile::default()).unwrap();

        assert!(team.midfield_rating > base.midfield_rating);
        assert!(team.attack_rating < base.attack_rating);
    }

    #[test]
    fn defensive_line_is_inert() {
        let mut shifted = TacticalProfile::default();
        shifted.defensive_line = 10;

        let squad = full_squad(75);
        let a = TeamState::new("A", squad.clone(), TacticalProfile::default()).unwrap();
        let b = TeamState::new("B", squad, shifted).unwrap();

        assert_eq!(a.attack_rating, b.attack_rating);
        assert_eq!(a.defense_rating, b.defense_rating);
        assert_eq!(a.midfield_rating, b.midfield_rating);
    }

    #[test]
    fn wing_backs_count_toward_no_group() {
        // 3-5-2 lineup includes LWB/RWB slots; nominal wing-backs must not
        // drag any group average.
        let mut squad: Vec<_> = [GK, CB, CB, CB, CDM, CM, CM, ST, ST]
            .into_iter()
            .map(|pos| player(pos, 80))
            .collect();
        squad.push(player(LWB, 10));
        squad.push(player(RWB, 10));

        let mut tactics = TacticalProfile::default();
        tactics.formation = Formation::F352;
        let team = TeamState::new("Wingbacks", squad, tactics).unwrap();
        // Defense average stays at the CB/GK level (80, then the default
        // modifier chain), untouched by the 10-rated wing-backs.
        assert!((team.defense_rating - 79.2).abs() < 1e-3);
    }

    #[test]
    fn empty_roster_fails_fast() {
        let err = TeamState::new("Ghost", vec![], TacticalProfile::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::EmptyRoster {
                team: "Ghost".into()
            }
        );
    }

    #[test]
    fn invalid_tactics_fail_fast() {
        let mut tactics = TacticalProfile::default();
        tactics.attacking_intensity = 0;
        assert!(TeamState::new("Bad", full_squad(70), tactics).is_err());
    }
}
