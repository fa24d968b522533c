criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_root_qtable,
        solving_root_minimax,
        sweeping_all_counts,
        solving_synthetic_game,
        propagating_synthetic_absorption,
}

fn table() -> Transitions {
    Transitions::synthetic(Rules::Expanded, &mut SmallRng::seed_from_u64(0))
}

fn building_root_qtable(c: &mut criterion::Criterion) {
    let ref table = table();
    let ref rewards = Rewards::bases();
    let ref values = Snapshot::default();
    c.bench_function("build the 0-0 QTable", |b| {
        b.iter(|| QTable::build(Count::root(), values, table, rewards, Rules::Expanded))
    });
}

fn solving_root_minimax(c: &mut criterion::Criterion) {
    let ref table = table();
    let ref qtable = QTable::build(
        Count::root(),
        &Snapshot::default(),
        table,
        &Rewards::bases(),
        Rules::Expanded,
    )
    .expect("valid table");
    c.bench_function("solve a 78-choice minimax LP", |b| {
        b.iter(|| Minimax::new(Count::root(), qtable, MAX_USAGE).solve())
    });
}

fn sweeping_all_counts(c: &mut criterion::Criterion) {
    let ref table = table();
    let game = Game::new(table, Rewards::bases(), Config::default()).expect("valid game");
    let ref values = Snapshot::default();
    c.bench_function("sweep all 12 counts", |b| b.iter(|| game.sweep(values)));
}

fn solving_synthetic_game(c: &mut criterion::Criterion) {
    let ref table = table();
    let game = Game::new(table, Rewards::bases(), Config::default()).expect("valid game");
    c.bench_function("solve a synthetic game to convergence", |b| {
        b.iter(|| game.solve())
    });
}

fn propagating_synthetic_absorption(c: &mut criterion::Criterion) {
    let ref table = table();
    let game = Game::new(table, Rewards::bases(), Config::default()).expect("valid game");
    let ref equilibria = game.sweep(&Snapshot::default()).expect("solvable sweep");
    let counts = Count::all().collect::<Vec<_>>();
    c.bench_function("propagate outcome probabilities", |b| {
        b.iter(|| Propagator::new(equilibria, table, Rules::Expanded).absorb(&counts))
    });
}

use atbat::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
