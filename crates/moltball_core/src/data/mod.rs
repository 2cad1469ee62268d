//! Programmatic sample squads for demos and tests. Not a data-ingestion
//! layer: real rosters come from the hosting application.

use rand::prelude::*;

use crate::engine::ratings::TeamState;
use crate::error::Result;
use crate::models::{PlayerAttributes, Position};
use crate::tactics::TacticalProfile;

use crate::models::Position::*;

const STARTER_TEMPLATE: [Position; 11] = [GK, LB, CB, CB, RB, CDM, CM, CM, LW, ST, RW];
const SUBSTITUTE_COUNT: usize = 7;

/// Build an 18-player sample team centered on `overall`: 11 starters on a
/// fixed template plus 7 slightly weaker substitutes at random positions.
pub fn sample_team<R: Rng + ?Sized>(
    name: &str,
    overall: u8,
    tactics: TacticalProfile,
    rng: &mut R,
) -> Result<TeamState> {
    let mut players = Vec::with_capacity(STARTER_TEMPLATE.len() + SUBSTITUTE_COUNT);

    for pos in STARTER_TEMPLATE {
        players.push(sample_starter(name, pos, overall, rng));
    }
    for i in 0..SUBSTITUTE_COUNT {
        let pos = STARTER_TEMPLATE[rng.gen_range(0..STARTER_TEMPLATE.len())];
        players.push(sample_substitute(name, i + 1, pos, overall, rng));
    }

    TeamState::new(name, players, tactics)
}

fn sample_starter<R: Rng + ?Sized>(
    club: &str,
    pos: Position,
    overall: u8,
    rng: &mut R,
) -> PlayerAttributes {
    let varied = (overall as i32 + rng.gen_range(-10..=10)).clamp(60, 99) as u8;
    let is_back = matches!(pos, CB | LB | RB | CDM);

    PlayerAttributes {
        name: format!("{club} {pos:?}"),
        club: club.into(),
        season: "2023-24".into(),
        position: pos,
        overall: varied,
        pace: rng.gen_range(50..=95),
        shooting: if pos.is_goalkeeper() {
            20
        } else {
            rng.gen_range(40..=90)
        },
        passing: rng.gen_range(50..=90),
        dribbling: rng.gen_range(50..=95),
        defense: if is_back {
            rng.gen_range(60..=95)
        } else {
            rng.gen_range(30..=60)
        },
        physical: rng.gen_range(60..=90),
        goals: rng.gen_range(0..=30),
        assists: rng.gen_range(0..=20),
        minutes: rng.gen_range(1000..=3000),
    }
}

fn sample_substitute<R: Rng + ?Sized>(
    club: &str,
    index: usize,
    pos: Position,
    overall: u8,
    rng: &mut R,
) -> PlayerAttributes {
    let varied = (overall as i32 + rng.gen_range(-15..=5)).clamp(60, 99) as u8;

    PlayerAttributes {
        name: format!("{club} Sub {index}"),
        club: club.into(),
        season: "2023-24".into(),
        position: pos,
        overall: varied,
        pace: rng.gen_range(45..=90),
        shooting: rng.gen_range(35..=85),
        passing: rng.gen_range(45..=85),
        dribbling: rng.gen_range(45..=90),
        defense: rng.gen_range(40..=85),
        physical: rng.gen_range(55..=85),
        goals: rng.gen_range(0..=15),
        assists: rng.gen_range(0..=10),
        minutes: rng.gen_range(500..=1500),
    }
}
