//! Moltball demo CLI
//!
//! Runs the simulation engine against generated sample squads: a single
//! match or a whole league season with a printed standings table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use moltball_core::data::sample_team;
use moltball_core::{
    EventKind, Formation, LeagueSimulator, MatchResult, MatchSimulator, PlayStyle, StandingsEntry,
    TacticalProfile, TeamState,
};

#[derive(Parser)]
#[command(name = "moltball")]
#[command(about = "Moltball match and league simulation demo", long_about = None)]
struct Cli {
    /// RNG seed; omit for a different run every time
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one match between two sample teams
    Match {
        /// Average overall of the home squad
        #[arg(long, default_value_t = 82)]
        home_overall: u8,

        /// Average overall of the away squad
        #[arg(long, default_value_t = 78)]
        away_overall: u8,
    },

    /// Simulate a league season over sample teams
    League {
        /// Number of teams
        #[arg(long, default_value_t = 6)]
        teams: usize,

        /// Fixtures per matchday
        #[arg(long, default_value_t = 3)]
        matchday_size: usize,

        /// Matchdays to simulate (0 = play out the whole season)
        #[arg(long, default_value_t = 0)]
        matchdays: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("seeded run: {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    match cli.command {
        Commands::Match {
            home_overall,
            away_overall,
        } => run_match(home_overall, away_overall, &mut rng),
        Commands::League {
            teams,
            matchday_size,
            matchdays,
        } => run_league(teams, matchday_size, matchdays, &mut rng),
    }
}

fn run_match(home_overall: u8, away_overall: u8, rng: &mut ChaCha8Rng) -> Result<()> {
    let home = sample_team("Home United", home_overall, TacticalProfile::default(), rng)?;
    let away = sample_team("Away City", away_overall, TacticalProfile::default(), rng)?;

    let result = MatchSimulator::new(&home, &away).simulate(rng);
    print_match(&result);
    Ok(())
}

fn run_league(
    team_count: usize,
    matchday_size: usize,
    matchdays: usize,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let teams = build_league_teams(team_count, rng)?;
    let mut league = LeagueSimulator::new(teams, rng)?;

    let mut matchday = 0;
    while league.fixtures_remaining() > 0 {
        if matchdays > 0 && matchday >= matchdays {
            break;
        }
        matchday += 1;

        println!("\n=== MATCHDAY {matchday} ===");
        for result in league.simulate_matchday(matchday_size, rng) {
            print_match(&result);
        }
        print_standings(&league.standings());
    }

    Ok(())
}

/// Sample squads with varied tactics, cycling through the formation and
/// play-style catalogs so league demos exercise the whole tactics surface.
fn build_league_teams(count: usize, rng: &mut ChaCha8Rng) -> Result<Vec<TeamState>> {
    const NAMES: [&str; 8] = [
        "AI United",
        "Bot City",
        "Neural Network FC",
        "Deep Learning",
        "Machine Learning",
        "Reinforcement",
        "Gradient Rovers",
        "Tensor Town",
    ];
    const FORMATIONS: [Formation; 6] = [
        Formation::F433,
        Formation::F442,
        Formation::F532,
        Formation::F352,
        Formation::F451,
        Formation::F4231,
    ];
    const STYLES: [PlayStyle; 5] = [
        PlayStyle::HighPress,
        PlayStyle::Balanced,
        PlayStyle::Counter,
        PlayStyle::Possession,
        PlayStyle::LongBall,
    ];

    (0..count)
        .map(|i| {
            let name = if i < NAMES.len() {
                NAMES[i].to_string()
            } else {
                format!("Club {}", i + 1)
            };
            let tactics = TacticalProfile {
                formation: FORMATIONS[i % FORMATIONS.len()],
                play_style: STYLES[i % STYLES.len()],
                ..TacticalProfile::default()
            };
            let overall = rng.gen_range(74..=84);
            Ok(sample_team(&name, overall, tactics, rng)?)
        })
        .collect()
}

fn print_match(result: &MatchResult) {
    println!(
        "\n{} {} - {} {}",
        result.home_team, result.home_score, result.away_score, result.away_team
    );
    println!("   xG: {:.2} - {:.2}", result.home_xg, result.away_xg);
    println!(
        "   Possession: {:.1}% - {:.1}%",
        result.home_possession, result.away_possession
    );
    println!(
        "   Shots: {} ({}) - {} ({})",
        result.home_shots,
        result.home_shots_on_target,
        result.away_shots,
        result.away_shots_on_target
    );
    for event in &result.events {
        if event.kind == EventKind::Goal {
            println!("   {}' {}", event.minute, event.player);
        }
    }
}

fn print_standings(table: &[(&str, &StandingsEntry)]) {
    println!("{}", "=".repeat(70));
    println!(
        "{:<4} {:<22} {:<3} {:<3} {:<3} {:<3} {:<4} {:<4} {:<5} {:<4}",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    println!("{}", "=".repeat(70));
    for (pos, (team, entry)) in table.iter().enumerate() {
        println!(
            "{:<4} {:<22} {:<3} {:<3} {:<3} {:<3} {:<4} {:<4} {:<+5} {:<4}",
            pos + 1,
            team,
            entry.played,
            entry.won,
            entry.drawn,
            entry.lost,
            entry.goals_for,
            entry.goals_against,
            entry.goal_difference,
            entry.points
        );
    }
    println!("{}", "=".repeat(70));
}
