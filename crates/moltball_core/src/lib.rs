//! # moltball_core - Statistical Football Simulation Engine
//!
//! The match "physics engine" behind the Moltball card game: per-player
//! attributes plus tactical settings in, scorelines, shot and possession
//! statistics, expected goals and a goal timeline out.
//!
//! ## Features
//! - Deterministic simulation: the caller threads the RNG, so a fixed seed
//!   reproduces a match bit for bit
//! - Roster + tactics -> attack/defense/midfield ratings with greedy lineup
//!   selection and tactical modifiers
//! - Double round-robin league runs with matchday batching and a ranked
//!   standings table
//!
//! The engine is synchronous and does no I/O; hosting applications own
//! persistence, transport and roster ingestion.

pub mod data;
pub mod engine;
pub mod error;
pub mod league;
pub mod models;
pub mod tactics;

pub use engine::ratings::TeamState;
pub use engine::MatchSimulator;
pub use error::{EngineError, Result};
pub use league::{LeagueSimulator, StandingsEntry};
pub use models::{EventKind, MatchEvent, MatchResult, PlayerAttributes, Position, Side};
pub use tactics::{Formation, PlayStyle, TacticalProfile};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
