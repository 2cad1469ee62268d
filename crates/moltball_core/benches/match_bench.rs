use criterion::{black_box, criterion_group, criterion_main, Criterion};
use moltball_core::data::sample_team;
use moltball_core::{MatchSimulator, TacticalProfile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_simulate_match(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let home = sample_team("Home", 82, TacticalProfile::default(), &mut rng).unwrap();
    let away = sample_team("Away", 78, TacticalProfile::default(), &mut rng).unwrap();
    let sim = MatchSimulator::new(&home, &away);

    let mut seed = 0u64;
    c.bench_function("simulate_match", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(sim.simulate_seeded(seed))
        })
    });
}

fn bench_team_ratings(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let team = sample_team("Home", 82, TacticalProfile::default(), &mut rng).unwrap();

    c.bench_function("team_ratings", |b| {
        b.iter(|| {
            black_box(
                moltball_core::TeamState::new(
                    "Rebuilt",
                    team.players.clone(),
                    team.tactics,
                )
                .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_simulate_match, bench_team_ratings);
criterion_main!(benches);
