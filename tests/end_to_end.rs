//! End-to-end GA scenarios over small, fully known instances.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use u_timetable::ga::{
    GaConfig, GaRunner, evaluate_population, fitness, fitness_lower_bound, initialize_population,
};
use u_timetable::kpi::ScheduleKpi;
use u_timetable::models::{DomainModel, Gene, ProblemDimensions, StudentTimetable};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn single_cell_model(num_classes: usize, available: bool) -> DomainModel {
    DomainModel::from_parts(
        vec![1; num_classes],
        vec![3; num_classes],
        vec![vec![available]],
        vec![vec![5]],
    )
    .unwrap()
}

#[test]
fn single_cell_available_stays_at_floor() {
    init_tracing();
    let model = single_cell_model(1, true);
    for generations in [0, 1, 25] {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(generations)
            .with_seed(42);
        let result = GaRunner::new(&model, config).unwrap().run().unwrap();

        assert_eq!(result.best.schedule.genes(), &[Gene::new(0, 0)]);
        assert!((result.best.fitness - 0.2).abs() < 1e-12);
        assert!(result.history.iter().all(|f| (f - 0.2).abs() < 1e-12));
    }
}

#[test]
fn single_cell_unavailable_converges_to_conflict_floor() {
    init_tracing();
    let num_classes = 4;
    let model = single_cell_model(num_classes, false);
    let config = GaConfig::default()
        .with_population_size(10)
        .with_max_generations(30)
        .with_seed(7);
    let result = GaRunner::new(&model, config).unwrap().run().unwrap();

    let floor = num_classes as f64 * (1.0 + 0.2);
    assert!((result.best.fitness - floor).abs() < 1e-9);
    assert!(result.history.iter().all(|f| (f - floor).abs() < 1e-9));

    let kpi = ScheduleKpi::calculate(&result.best.schedule, &model).unwrap();
    assert_eq!(kpi.conflicts, num_classes);
    assert_eq!(kpi.double_bookings, 1);
}

#[test]
fn zero_generations_reports_initial_best() {
    let model = DomainModel::random(ProblemDimensions::default(), &mut StdRng::seed_from_u64(3))
        .unwrap();
    let config = GaConfig::default().with_max_generations(0).with_seed(99);
    let result = GaRunner::new(&model, config.clone())
        .unwrap()
        .run()
        .unwrap();

    // Replay the initial population from the same seed.
    let mut rng = StdRng::seed_from_u64(99);
    let initial = initialize_population(&model, config.population_size, &mut rng);
    let evaluated = evaluate_population(initial, &model, false).unwrap();
    let expected = evaluated
        .iter()
        .map(|c| c.fitness)
        .fold(f64::INFINITY, f64::min);

    assert_eq!(result.generations, 0);
    assert_eq!(result.best.fitness, expected);
    assert!(evaluated.iter().any(|c| c.schedule == result.best.schedule));
}

#[test]
fn full_pipeline_is_reproducible() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(2024);
        let model = DomainModel::random(ProblemDimensions::default(), &mut rng).unwrap();
        let config = GaConfig::default().with_max_generations(40);
        GaRunner::new(&model, config)
            .unwrap()
            .run_with_rng(&mut rng, &mut ())
            .unwrap()
    };
    let a = run();
    let b = run();
    assert_eq!(a.best.schedule, b.best.schedule);
    assert_eq!(a.best.fitness.to_bits(), b.best.fitness.to_bits());
    assert_eq!(a.history, b.history);
}

#[test]
fn search_never_loses_ground() {
    init_tracing();
    let model = DomainModel::random(
        ProblemDimensions::new(12, 6, 8),
        &mut StdRng::seed_from_u64(11),
    )
    .unwrap();
    let config = GaConfig::default()
        .with_max_generations(100)
        .with_seed(5)
        .with_parallel(true);
    let result = GaRunner::new(&model, config).unwrap().run().unwrap();

    assert!(result.best.fitness <= result.history[0]);
    assert!(result.best.fitness >= fitness_lower_bound(12));
    assert_eq!(fitness(&result.best.schedule, &model).unwrap(), result.best.fitness);

    let placed: usize = (0..model.num_students())
        .map(|s| StudentTimetable::project(&result.best.schedule, &model, s).len())
        .sum();
    assert_eq!(placed, 12);
}
