//! Integration tests for chromosim

use chromosim::config::ShortParentPolicy;
use chromosim::report::{ConsoleReporter, NullReporter};
use chromosim::{rank_population, Config, Error, Individual, Simulation, StatsHistory};

/// n=4, winners=2, rounds=1, c_0=6, c_max=6, states=2, chances=0
fn scenario_config() -> Config {
    Config::classic(4, 2, 1, 6, 6, 0.0, 2)
}

#[test]
fn test_full_simulation_cycle() {
    let mut config = Config::default();
    config.population.rounds = 50;

    let mut sim = Simulation::new_with_seed(config, 12345).unwrap();
    let mut history = StatsHistory::new();
    let population = sim.run(&mut history).unwrap();

    assert_eq!(population.len(), 100);
    assert_eq!(history.len(), 51);
    for individual in &population {
        assert!(!individual.is_empty());
        assert!(individual.len() <= 20);
        assert!(individual.genes().iter().all(|&g| g < 5));
        assert_eq!(individual.generation(), 50);
    }
    for pair in population.windows(2) {
        assert!(pair[0].fitness() >= pair[1].fitness());
    }
    for stats in &history.snapshots {
        assert!(stats.best_fitness >= stats.boundary_fitness);
        assert!(stats.boundary_fitness >= stats.worst_fitness);
        assert_eq!(stats.population, 100);
    }
}

#[test]
fn test_seeded_scenario_matches_recorded_run() {
    let mut sim = Simulation::new_with_seed(scenario_config(), 2024).unwrap();
    let mut history = StatsHistory::new();
    let population = sim.run(&mut history).unwrap();

    let fixture: Vec<(String, i32)> = population
        .iter()
        .map(|i| (i.to_string(), i.fitness()))
        .collect();
    assert_eq!(
        fixture,
        vec![
            ("ABABB".to_string(), 0),
            ("BABBA".to_string(), -1),
            ("ABBBBB".to_string(), -1),
            ("BABBBA".to_string(), -2),
        ]
    );

    let rows: Vec<(Option<u32>, &str, i32, i32, i32)> = history
        .snapshots
        .iter()
        .map(|s| {
            (
                s.round,
                s.best_chromosome.as_str(),
                s.best_fitness,
                s.boundary_fitness,
                s.worst_fitness,
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (None, "BABBBB", -1, -2, -3),
            (Some(1), "ABABB", 0, -1, -2),
        ]
    );
    assert!(history.snapshots.iter().all(|s| s.mutations == 0));
}

#[test]
fn test_seeded_scenario_is_reproducible() {
    let record = |seed| {
        let mut sim = Simulation::new_with_seed(scenario_config(), seed).unwrap();
        let mut history = StatsHistory::new();
        let population = sim.run(&mut history).unwrap();
        (population, history)
    };

    let (first_population, first_history) = record(2024);
    let (second_population, second_history) = record(2024);

    assert_eq!(first_population, second_population);
    assert_eq!(first_history, second_history);
}

#[test]
fn test_seeded_scenario_invariants() {
    let mut sim = Simulation::new_with_seed(scenario_config(), 77).unwrap();

    let mut initial = sim.initialize_population(4);
    assert_eq!(initial.len(), 4);
    assert!(initial.iter().all(|i| i.len() == 6));

    rank_population(&mut initial);
    let winners = &initial[..2];
    let children = sim.evolve(&initial).unwrap();

    assert_eq!(children.len(), 4);
    for child in &children {
        let genes = child.genes();
        assert!(genes.len() <= 6);
        assert_eq!(child.mutations(), 0);

        // Without mutation each child is a prefix of one winner followed by
        // a suffix of the other, possibly cut short at the max length.
        let spliced = (0..2).any(|a| {
            let (first, second) = (&winners[a], &winners[1 - a]);
            (2..=5).any(|prefix| {
                prefix < genes.len()
                    && genes[..prefix] == first.genes()[..prefix]
                    && (1..=4).any(|suffix| second.genes()[6 - suffix..].starts_with(&genes[prefix..]))
            })
        });
        assert!(spliced, "{} is not a splice of the winners", child);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let run = |seed| {
        let mut sim = Simulation::new_with_seed(Config::default(), seed).unwrap();
        sim.initialize_population(100)
    };

    assert_ne!(run(1), run(2));
}

#[test]
fn test_fitness_improves_over_run() {
    let mut config = Config::default();
    config.population.rounds = 60;

    let mut sim = Simulation::new_with_seed(config, 99999).unwrap();
    let mut history = StatsHistory::new();
    sim.run(&mut history).unwrap();

    let first = &history.snapshots[0];
    let last = history.latest().unwrap();
    assert!(last.mean_fitness > first.mean_fitness);
}

#[test]
fn test_console_report_output() {
    let mut config = scenario_config();
    config.population.rounds = 3;

    let mut sim = Simulation::new_with_seed(config, 5).unwrap();
    let mut reporter = ConsoleReporter::new(Vec::new(), 1);
    sim.run(&mut reporter).unwrap();

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(text.matches("Best chromosome: ").count(), 4);
    assert!(text.contains("Round 1\n"));
    assert!(text.contains("Round 3\n"));
    assert!(!text.contains("Round 4\n"));
}

#[test]
fn test_strict_policy_surfaces_breed_error() {
    let mut config = Config::classic(10, 3, 5, 1, 4, 0.0, 3);
    config.breeding.short_parent = ShortParentPolicy::Strict;

    let mut sim = Simulation::new_with_seed(config, 3).unwrap();
    let err = sim.run(NullReporter).unwrap_err();

    assert!(matches!(err, Error::Breed(_)));
}

#[test]
fn test_clamp_policy_survives_short_chromosomes() {
    // Single-gene founders force clamping on the first round
    let config = Config::classic(10, 3, 20, 1, 4, 0.1, 3);

    let mut sim = Simulation::new_with_seed(config, 3).unwrap();
    let population = sim.run(NullReporter).unwrap();

    assert_eq!(population.len(), 10);
    assert!(population.iter().all(|i| (1..=4).contains(&i.len())));
}

#[test]
fn test_unbounded_segment_config_runs() {
    let yaml = "
population: { size: 6, winners: 2, rounds: 3 }
chromosome: { initial_length: 4, max_length: 8, alphabet_size: 3 }
breeding:
  mutation_rate: 0.0
  min_segment: 1
  max_segment: 18446744073709551615
  prefix_extra_gene: true
  short_parent: clamp
";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.breeding.max_segment, usize::MAX);

    let mut sim = Simulation::new_with_seed(config, 11).unwrap();
    let population = sim.run(NullReporter).unwrap();

    assert_eq!(population.len(), 6);
    assert!(population.iter().all(|i| (1..=8).contains(&i.len())));
}

#[test]
fn test_config_file_drives_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let mut config = Config::classic(30, 5, 4, 5, 9, 0.02, 4);
    config.logging.report_interval = 2;
    config.save(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    let mut sim = Simulation::new_with_seed(loaded, 8).unwrap();
    let population = sim.run(NullReporter).unwrap();

    assert_eq!(population.len(), 30);
    assert!(population.iter().all(|i: &Individual| i.len() <= 9));
}

#[test]
fn test_stats_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats_history.json");

    let mut sim = Simulation::new_with_seed(scenario_config(), 1).unwrap();
    let mut history = StatsHistory::new();
    sim.run(&mut history).unwrap();
    history.save(&path).unwrap();

    let loaded = StatsHistory::load(&path).unwrap();
    assert_eq!(loaded.len(), history.len());
    assert_eq!(loaded.best_series(), history.best_series());
}
