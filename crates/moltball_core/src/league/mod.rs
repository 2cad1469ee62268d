//! League orchestration: double round-robin fixtures, matchday batches and
//! a ranked standings table.

use std::collections::VecDeque;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::ratings::TeamState;
use crate::engine::MatchSimulator;
use crate::error::{EngineError, Result};
use crate::models::MatchResult;

/// Per-team cumulative record, mutated only when a match is finalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingsEntry {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsEntry {
    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += u32::from(scored);
        self.goals_against += u32::from(conceded);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);

        if scored > conceded {
            self.won += 1;
            self.points += 3;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += 1;
        }
    }
}

/// One league run: owns its teams, a mutable order-depleting fixture queue
/// and the standings. Single-writer; concurrent callers must serialize
/// externally. Independent runs share no state.
pub struct LeagueSimulator {
    teams: Vec<TeamState>,
    standings: Vec<StandingsEntry>,
    fixtures: VecDeque<(usize, usize)>,
    results: Vec<MatchResult>,
}

impl LeagueSimulator {
    /// Build a league over `teams`, generating and shuffling the full double
    /// round-robin fixture list once. Team order is the encounter order used
    /// to break full ties in the table.
    pub fn new<R: Rng + ?Sized>(teams: Vec<TeamState>, rng: &mut R) -> Result<Self> {
        if teams.len() < 2 {
            return Err(EngineError::NotEnoughTeams(teams.len()));
        }
        for (i, team) in teams.iter().enumerate() {
            if teams[..i].iter().any(|t| t.name == team.name) {
                return Err(EngineError::DuplicateTeam(team.name.clone()));
            }
        }

        let fixtures = generate_fixtures(teams.len(), rng);
        log::debug!("league of {} teams, {} fixtures", teams.len(), fixtures.len());

        let standings = vec![StandingsEntry::default(); teams.len()];
        Ok(Self {
            teams,
            standings,
            fixtures,
            results: Vec::new(),
        })
    }

    /// Simulate the next batch of up to `count` fixtures and fold them into
    /// the standings. An exhausted queue returns fewer (or no) results.
    pub fn simulate_matchday<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Vec<MatchResult> {
        let mut matchday = Vec::new();

        for _ in 0..count {
            let Some((home_idx, away_idx)) = self.fixtures.pop_front() else {
                break;
            };

            let result =
                MatchSimulator::new(&self.teams[home_idx], &self.teams[away_idx]).simulate(rng);

            self.standings[home_idx].record(result.home_score, result.away_score);
            self.standings[away_idx].record(result.away_score, result.home_score);

            self.results.push(result.clone());
            matchday.push(result);
        }

        matchday
    }

    pub fn fixtures_remaining(&self) -> usize {
        self.fixtures.len()
    }

    /// All results produced so far, in play order.
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Table sorted descending by (points, goal difference, goals for);
    /// teams equal on all three keys keep encounter order.
    pub fn standings(&self) -> Vec<(&str, &StandingsEntry)> {
        let mut table: Vec<(&str, &StandingsEntry)> = self
            .teams
            .iter()
            .zip(&self.standings)
            .map(|(team, entry)| (team.name.as_str(), entry))
            .collect();

        table.sort_by(|a, b| {
            (b.1.points, b.1.goal_difference, b.1.goals_for).cmp(&(
                a.1.points,
                a.1.goal_difference,
                a.1.goals_for,
            ))
        });
        table
    }
}

/// Every ordered pair (i, j), i != j, exactly once: n * (n - 1) fixtures,
/// shuffled once. No further constraints (a team may appear in consecutive
/// fixtures).
fn generate_fixtures<R: Rng + ?Sized>(n: usize, rng: &mut R) -> VecDeque<(usize, usize)> {
    let mut fixtures = Vec::with_capacity(n * (n - 1));
    for i in 0..n {
        for j in (i + 1)..n {
            fixtures.push((i, j));
            fixtures.push((j, i));
        }
    }
    fixtures.shuffle(rng);
    fixtures.into()
}
