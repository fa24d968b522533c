use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn count(balls: u8, strikes: u8) -> Count {
    Count::new(balls, strikes).unwrap()
}

/// Three locations, so a 0.7 usage cap is satisfiable.
fn locations() -> [Choice; 3] {
    [
        Choice::from((Pitch::FourSeam, Zone::from(2))),
        Choice::from((Pitch::Slider, Zone::from(14))),
        Choice::from((Pitch::Changeup, Zone::from(8))),
    ]
}

fn uniform(swing: Outcome, take: Outcome) -> Transitions {
    Transitions::constant(
        locations(),
        Cell::from((Distribution::certain(swing), Distribution::certain(take))),
    )
}

fn synthetic(rules: Rules, seed: u64) -> Transitions {
    Transitions::synthetic(rules, &mut SmallRng::seed_from_u64(seed))
}

#[test]
fn full_count_with_no_way_to_reach_base_is_worth_nothing() {
    let table = uniform(Outcome::Out, Outcome::Strike);
    let full = count(3, 2);
    let game = Game::with_counts(&table, Rewards::bases(), Config::default(), [full]).unwrap();
    let solution = game.solve().unwrap();
    assert_eq!(solution.convergence(), Convergence::Converged { sweeps: 1 });
    assert!(solution.value(full).unwrap().abs() < 1e-9);
    let policy = solution.policy(full).unwrap();
    assert!((policy.mass() - 1.0).abs() < 1e-6);
    assert!(policy.peak() <= MAX_USAGE + 1e-6);
    assert!((solution.resolution(full).unwrap().get(Terminal::Out) - 1.0).abs() < 1e-9);
}

#[test]
fn batter_who_only_takes_balls_always_walks() {
    let table = uniform(Outcome::Out, Outcome::Ball);
    let game = Game::new(&table, Rewards::bases(), Config::default()).unwrap();
    let solution = game.solve().unwrap();
    // the walk value travels one ball per sweep from the three-ball counts
    assert_eq!(solution.convergence(), Convergence::Converged { sweeps: 5 });
    for c in Count::all() {
        assert!((solution.value(c).unwrap() - 1.0).abs() < 1e-9);
        assert!((solution.response(c).unwrap().take - 1.0).abs() < 1e-9);
    }
    let root = solution.resolution(Count::root()).unwrap();
    assert!((root.get(Terminal::Single) - 1.0).abs() < 1e-9);
}

#[test]
fn sweep_budget_exhaustion_is_reported_not_raised() {
    let table = uniform(Outcome::Out, Outcome::Ball);
    let config = Config {
        max_sweeps: 2,
        ..Config::default()
    };
    let solution = Game::new(&table, Rewards::bases(), config)
        .unwrap()
        .solve()
        .unwrap();
    match solution.convergence() {
        Convergence::Exhausted { sweeps, residual } => {
            assert_eq!(sweeps, 2);
            assert!((residual - 1.0).abs() < 1e-9);
        }
        converged => panic!("expected exhaustion, got {}", converged),
    }
    assert!(!solution.is_converged());
    assert!((solution.value(count(2, 0)).unwrap() - 1.0).abs() < 1e-9);
    assert!(solution.value(count(1, 0)).unwrap().abs() < 1e-9);
    assert_eq!(solution.absorption().len(), Count::N);
}

#[test]
fn seeding_with_the_fixed_point_converges_at_once() {
    let table = uniform(Outcome::Out, Outcome::Ball);
    let seed = Count::all().map(|c| (c, 1.0)).collect::<Snapshot>();
    let solution = Game::new(&table, Rewards::bases(), Config::default())
        .unwrap()
        .seeded(seed)
        .solve()
        .unwrap();
    assert_eq!(solution.convergence(), Convergence::Converged { sweeps: 1 });
}

#[test]
fn synthetic_game_converges_within_bounds() {
    let table = synthetic(Rules::Expanded, 42);
    let solution = Game::new(&table, Rewards::bases(), Config::default())
        .unwrap()
        .solve()
        .unwrap();
    assert!(solution.is_converged());
    for (c, eq) in solution.iter() {
        assert!(eq.value >= 0.0, "negative value at {}", c);
        assert!(eq.value <= 4.0, "value above a homerun at {}", c);
        assert!((eq.policy.mass() - 1.0).abs() < 1e-6);
        assert!(eq.policy.peak() <= MAX_USAGE + 1e-6);
        assert!((eq.response.swing + eq.response.take - 1.0).abs() < 1e-9);
    }
    for (_, resolution) in solution.absorption().iter() {
        assert!(resolution.is_complete());
    }
}

#[test]
fn every_sweep_is_non_negative() {
    let table = synthetic(Rules::Expanded, 5);
    let solution = Game::new(&table, Rewards::bases(), Config::default())
        .unwrap()
        .solve()
        .unwrap();
    for c in Count::all() {
        assert!(solution.history().values(c).iter().all(|v| *v >= 0.0));
    }
}

#[test]
fn resolving_is_idempotent() {
    let table = synthetic(Rules::Expanded, 9);
    let game = Game::new(&table, Rewards::bases(), Config::default()).unwrap();
    let a = game.solve().unwrap();
    let b = game.solve().unwrap();
    for c in Count::all() {
        let delta = (a.value(c).unwrap() - b.value(c).unwrap()).abs();
        assert!(delta < THETA);
    }
    assert_eq!(a.convergence().sweeps(), b.convergence().sweeps());
}

#[test]
fn binary_rules_yield_on_base_probabilities() {
    let table = synthetic(Rules::Binary, 17);
    let config = Config {
        rules: Rules::Binary,
        ..Config::default()
    };
    let solution = Game::new(&table, Rewards::onbase(), config)
        .unwrap()
        .solve()
        .unwrap();
    for c in Count::all() {
        let value = solution.value(c).unwrap();
        assert!((0.0..=1.0 + 1e-9).contains(&value));
        let resolution = solution.resolution(c).unwrap();
        assert!(resolution
            .iter()
            .all(|(t, _)| t == Terminal::Out || t == Terminal::Hit));
    }
}

#[test]
fn counts_that_escape_the_state_space_are_rejected() {
    let table = synthetic(Rules::Expanded, 1);
    assert!(matches!(
        Game::with_counts(&table, Rewards::bases(), Config::default(), [Count::root()]),
        Err(Error::OpenStateSpace(c)) if c == Count::root()
    ));
}

#[test]
fn rewards_must_cover_the_rules() {
    let table = synthetic(Rules::Binary, 1);
    let config = Config {
        rules: Rules::Binary,
        ..Config::default()
    };
    assert!(matches!(
        Game::new(&table, Rewards::bases(), config),
        Err(Error::MissingReward(Terminal::Hit))
    ));
}

#[test]
fn outcomes_outside_the_rules_are_rejected() {
    let table = uniform(Outcome::Hit, Outcome::Ball);
    assert!(matches!(
        Game::new(&table, Rewards::bases(), Config::default()),
        Err(Error::InadmissibleOutcome(Outcome::Hit, Rules::Expanded))
    ));
}

#[test]
fn a_lone_location_cannot_honor_the_usage_cap() {
    let table = Transitions::constant(
        [Choice::from((Pitch::Cutter, Zone::from(5)))],
        Cell::from((
            Distribution::certain(Outcome::Out),
            Distribution::certain(Outcome::Strike),
        )),
    );
    let game = Game::new(&table, Rewards::bases(), Config::default()).unwrap();
    assert!(matches!(
        game.solve(),
        Err(Error::Unsolvable { cause, .. }) if *cause == Error::Infeasible
    ));
    let full = count(3, 2);
    let game = Game::with_counts(&table, Rewards::bases(), Config::default(), [full]).unwrap();
    assert_eq!(
        game.solve().map(|_| ()),
        Err(Error::Unsolvable {
            count: full,
            cause: Box::new(Error::Infeasible),
        })
    );
    let uncapped = Config {
        max_usage: 1.0,
        ..Config::default()
    };
    let game = Game::new(&table, Rewards::bases(), uncapped).unwrap();
    assert!(game.solve().is_ok());
}

#[test]
fn sweeps_read_only_the_frozen_snapshot() {
    let table = uniform(Outcome::Out, Outcome::Ball);
    let game = Game::new(&table, Rewards::bases(), Config::default()).unwrap();
    let equilibria = game.sweep(&Snapshot::default()).unwrap();
    for (c, eq) in equilibria {
        let expected = if c.balls() == 3 { 1.0 } else { 0.0 };
        assert!((eq.value - expected).abs() < 1e-9);
    }
}

#[test]
fn solution_serializes_and_reports() {
    let table = uniform(Outcome::Out, Outcome::Ball);
    let solution = Game::new(&table, Rewards::bases(), Config::default())
        .unwrap()
        .solve()
        .unwrap();
    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["convergence"]["status"], "converged");
    let walked = json["absorption"]["00"]["single"].as_f64().unwrap();
    assert!((walked - 1.0).abs() < 1e-9);
    assert!(json["equilibria"]["32"]["policy"].is_object());
    assert!(json["history"]["00"].as_array().unwrap().len() == 6);
    let report = solution.to_string();
    assert!(report.starts_with("expanded rules, converged after 5 sweeps"));
    assert!(report.contains("count 32"));
}

#[test]
fn endless_fouls_leave_counts_unresolved_but_keep_the_solution() {
    let mut table = Transitions::default();
    for choice in locations() {
        let take = match choice.zone.is_strike() {
            true => Outcome::Strike,
            false => Outcome::Ball,
        };
        let cell = Cell::from((
            Distribution::certain(Outcome::Foul),
            Distribution::certain(take),
        ));
        for c in Count::all() {
            table.insert(choice, c, cell.clone());
        }
    }
    let seed = Count::all().map(|c| (c, 0.5)).collect::<Snapshot>();
    let solution = Game::new(&table, Rewards::bases(), Config::default())
        .unwrap()
        .seeded(seed)
        .solve()
        .unwrap();
    assert_eq!(solution.absorption().len(), Count::N);
    for stuck in [count(0, 2), count(1, 2), count(2, 2)] {
        assert!(!solution.absorption().is_resolved(stuck));
        assert!(solution.resolution(stuck).is_none());
        assert!((solution.value(stuck).unwrap() - 0.5).abs() < 1e-9);
        assert!((solution.response(stuck).unwrap().swing - 1.0).abs() < 1e-9);
    }
    let json = serde_json::to_value(&solution).unwrap();
    assert!(json["absorption"]["02"].is_null());
    let report = solution.to_string();
    assert!(report.contains("never resolves"));
    assert!(!report.contains("-0.000"));
}
