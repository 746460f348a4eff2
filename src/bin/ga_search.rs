//! Repeated genetic search for the maximum of f on [2, 4]. The best x of every generation of every
//! run is written to the results file that the `extremum_plot` binary marks on the curve.
use extremum_plot::Utils::logger::{init_logger, save_history_to_csv, save_points_to_file};
use extremum_plot::numerical::genetic_algorithm::{GAConfig, GeneticAlgorithm};
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = GAConfig::default();
    config.validate()?;
    init_logger(config.loglevel.as_deref())?;

    let mut ga = GeneticAlgorithm::new(config.clone());
    let mut points = Vec::new();
    let mut history = Vec::new();
    for (run, result) in ga.solve_runs().into_iter().enumerate() {
        info!(
            "run {}: best f({:.10}) = {:.10} after {} generations, {} ms",
            run + 1,
            result.best_x,
            result.best_fx,
            result.generations,
            result.elapsed_ms
        );
        points.extend(result.best_points());
        history.extend(result.history);
    }

    save_points_to_file(&points, &config.results_path)?;
    save_history_to_csv(&history, &config.history_path)?;
    info!(
        "{} points saved to {}, history saved to {}",
        points.len(),
        config.results_path.display(),
        config.history_path.display()
    );
    Ok(())
}
