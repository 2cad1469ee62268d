//! Match simulation: a discretized stochastic process turning two teams'
//! ratings into a scoreline, an xG trace and a goal timeline.
//!
//! The process is a single synchronous pass over 18 five-minute phases.
//! All randomness comes from the caller-supplied generator, so a fixed seed
//! reproduces a match bit for bit.

pub mod lineup;
pub mod ratings;

use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::models::match_result::{round1, round2};
use crate::models::{EventKind, MatchEvent, MatchResult, PlayerAttributes, Side};
use crate::engine::ratings::{TeamState, NEUTRAL_RATING};

/// Tuned so an unmodified 0-0 matchup averages roughly 2.7 goals per 90'.
pub const BASE_GOAL_PROBABILITY: f32 = 0.03;

const MIDFIELD_CONTRIBUTION: f32 = 0.3;
const HOME_ATTACK_BOOST: f32 = 1.10;
const HOME_DEFENSE_BOOST: f32 = 1.05;
const CHANCES_PER_PHASE: u32 = 3;
const XG_MIN: f32 = 0.05;
const XG_MAX: f32 = 0.95;
const MISS_ON_TARGET_PROB: f32 = 0.3;

pub struct MatchSimulator<'a> {
    home: &'a TeamState,
    away: &'a TeamState,
}

#[derive(Default)]
struct SideTally {
    score: u8,
    xg: f32,
    shots: u16,
    shots_on_target: u16,
}

impl<'a> MatchSimulator<'a> {
    pub fn new(home: &'a TeamState, away: &'a TeamState) -> Self {
        Self { home, away }
    }

    /// Run the full 90-minute simulation, drawing from `rng`.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchResult {
        let home_attack = effective_attack(self.home) * HOME_ATTACK_BOOST;
        let home_defense = effective_defense(self.home) * HOME_DEFENSE_BOOST;
        let away_attack = effective_attack(self.away);
        let away_defense = effective_defense(self.away);

        let home_chance_prob = chance_probability(home_attack, away_defense);
        let away_chance_prob = chance_probability(away_attack, home_defense);

        let mut home_tally = SideTally::default();
        let mut away_tally = SideTally::default();
        let mut events = Vec::new();

        for phase_minute in (5..=90).step_by(5) {
            for _ in 0..CHANCES_PER_PHASE {
                if rng.gen::<f32>() < home_chance_prob {
                    self.resolve_chance(
                        Side::Home,
                        phase_minute,
                        &mut home_tally,
                        &mut events,
                        rng,
                    );
                }
                if rng.gen::<f32>() < away_chance_prob {
                    self.resolve_chance(
                        Side::Away,
                        phase_minute,
                        &mut away_tally,
                        &mut events,
                        rng,
                    );
                }
            }
        }

        // Stable by minute, so simultaneous goals keep creation order.
        events.sort_by_key(|e| e.minute);

        // Possession is territorial control, decoupled from the goal
        // process: the midfield-rating ratio of the two sides.
        let total_midfield = self.home.midfield_rating + self.away.midfield_rating;
        let home_possession = self.home.midfield_rating / total_midfield * 100.0;

        log::debug!(
            "{} {} - {} {} (xG {:.2} - {:.2})",
            self.home.name,
            home_tally.score,
            away_tally.score,
            self.away.name,
            home_tally.xg,
            away_tally.xg,
        );

        MatchResult {
            home_team: self.home.name.clone(),
            away_team: self.away.name.clone(),
            home_score: home_tally.score,
            away_score: away_tally.score,
            home_xg: round2(home_tally.xg),
            away_xg: round2(away_tally.xg),
            events,
            home_possession: round1(home_possession),
            away_possession: round1(100.0 - home_possession),
            home_shots: home_tally.shots,
            away_shots: away_tally.shots,
            home_shots_on_target: home_tally.shots_on_target,
            away_shots_on_target: away_tally.shots_on_target,
        }
    }

    /// Seeded convenience wrapper: same seed, same inputs, same result.
    pub fn simulate_seeded(&self, seed: u64) -> MatchResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.simulate(&mut rng)
    }

    fn resolve_chance<R: Rng + ?Sized>(
        &self,
        side: Side,
        phase_minute: u8,
        tally: &mut SideTally,
        events: &mut Vec<MatchEvent>,
        rng: &mut R,
    ) {
        let (attacking, defending) = match side {
            Side::Home => (self.home, self.away),
            Side::Away => (self.away, self.home),
        };

        let shooter = select_shooter(&attacking.players, rng);
        let xg = chance_xg(shooter, &defending.players);

        tally.xg += xg;
        tally.shots += 1;

        log::trace!(
            "chance: {} ({:?}) xG {:.2} at {}'",
            shooter.name,
            side,
            xg,
            phase_minute
        );

        if rng.gen::<f32>() < xg {
            tally.score += 1;
            tally.shots_on_target += 1;
            let minute = (phase_minute as i32 + rng.gen_range(-2..=2)) as u8;
            events.push(MatchEvent {
                minute,
                kind: EventKind::Goal,
                side,
                player: shooter.name.clone(),
                description: format!("Goal! {} scores for {}", shooter.name, attacking.name),
            });
        } else if rng.gen::<f32>() < MISS_ON_TARGET_PROB {
            // Saved or blocked on target.
            tally.shots_on_target += 1;
        }
    }
}

fn effective_attack(team: &TeamState) -> f32 {
    team.attack_rating + team.midfield_rating * MIDFIELD_CONTRIBUTION
}

fn effective_defense(team: &TeamState) -> f32 {
    team.defense_rating + team.midfield_rating * MIDFIELD_CONTRIBUTION
}

/// Probability that one attacking trial produces a chance. Can reach 0 for
/// overwhelming defenses; never raises.
fn chance_probability(attack_strength: f32, opponent_defense: f32) -> f32 {
    (attack_strength / 100.0) * (1.0 - opponent_defense / 200.0) * BASE_GOAL_PROBABILITY
}

/// Weighted pick from the forward-leaning positions, falling back to the
/// whole roster when a team has none. All-zero weights (a roster of
/// zero-shooting players) degrade to a uniform pick.
fn select_shooter<'p, R: Rng + ?Sized>(
    roster: &'p [PlayerAttributes],
    rng: &mut R,
) -> &'p PlayerAttributes {
    let pool: Vec<&PlayerAttributes> = {
        let forwards: Vec<&PlayerAttributes> = roster
            .iter()
            .filter(|p| p.position.is_forward_leaning())
            .collect();
        if forwards.is_empty() {
            roster.iter().collect()
        } else {
            forwards
        }
    };

    let weights: Vec<f32> = pool.iter().map(|p| p.chance_weight()).collect();
    match WeightedIndex::new(&weights) {
        Ok(dist) => pool[dist.sample(rng)],
        Err(_) => pool[rng.gen_range(0..pool.len())],
    }
}

/// Per-chance expected-goals value, clamped to [0.05, 0.95].
fn chance_xg(shooter: &PlayerAttributes, defending_roster: &[PlayerAttributes]) -> f32 {
    let mut xg = shooter.shooting as f32 / 100.0;

    let back_line: Vec<&PlayerAttributes> = defending_roster
        .iter()
        .filter(|p| p.position.is_back_line())
        .collect();
    let avg_defense = if back_line.is_empty() {
        NEUTRAL_RATING
    } else {
        back_line.iter().map(|p| p.defense as f32).sum::<f32>() / back_line.len() as f32
    };
    xg *= 1.0 - avg_defense / 300.0;

    if let Some(gk) = defending_roster.iter().find(|p| p.position.is_goalkeeper()) {
        xg *= 1.0 - gk.overall as f32 / 300.0;
    }

    xg.clamp(XG_MIN, XG_MAX)
}
