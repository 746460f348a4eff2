//! Real-coded genetic algorithm searching for the maximum of the target function on a closed interval.
//!
//! One individual is one x. Selection is a tournament, crossover takes the midpoint of the two
//! parents, mutation shifts x by a small uniform delta and clamps it back into the domain.
//! The search stops after `stagnation_limit` generations without improving the best value.
//! The best x of every generation is what ends up in the results file that the plot reads.
use crate::Utils::plot_task::{TaskError, check_loglevel};
use crate::numerical::target_function::{Domain, target_function};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::Instant;

/// parameters of the search
#[derive(Debug, Clone, PartialEq)]
pub struct GAConfig {
    pub domain: Domain,
    pub tournament_size: usize,
    pub population_size: usize,
    pub crossover_prob: f64,
    pub mutation_prob: f64,
    /// width of the interval the mutation delta is drawn from, centered on zero
    pub mutation_step: f64,
    pub stagnation_limit: usize,
    /// number of independent runs performed by the `ga_search` binary
    pub runs: usize,
    pub seed: Option<u64>,
    pub results_path: PathBuf,
    pub history_path: PathBuf,
    pub loglevel: Option<String>,
}

impl Default for GAConfig {
    fn default() -> Self {
        GAConfig {
            domain: Domain::default(),
            tournament_size: 3,
            population_size: 200,
            crossover_prob: 0.7,
            mutation_prob: 0.1,
            mutation_step: 0.1,
            stagnation_limit: 20,
            runs: 10,
            seed: None,
            results_path: PathBuf::from("results.txt"),
            history_path: PathBuf::from("ga_history.csv"),
            loglevel: Some("info".to_string()),
        }
    }
}

impl GAConfig {
    pub fn validate(&self) -> Result<(), TaskError> {
        if !(self.domain.min < self.domain.max)
            || !self.domain.min.is_finite()
            || !self.domain.max.is_finite()
        {
            return Err(TaskError::InvalidValue(format!(
                "domain min ({}) must be less than max ({}), both finite",
                self.domain.min, self.domain.max
            )));
        }
        if !self.mutation_step.is_finite() || self.mutation_step < 0.0 {
            return Err(TaskError::InvalidValue(format!(
                "mutation_step must be finite and non-negative, got {}",
                self.mutation_step
            )));
        }
        if self.population_size == 0 || self.tournament_size == 0 {
            return Err(TaskError::InvalidValue(
                "population_size and tournament_size must be positive".to_string(),
            ));
        }
        for (name, p) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(TaskError::InvalidValue(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.stagnation_limit == 0 {
            return Err(TaskError::InvalidValue(
                "stagnation_limit must be positive".to_string(),
            ));
        }
        if let Some(level) = &self.loglevel {
            check_loglevel(level)?;
        }
        Ok(())
    }
}

/// best individual found so far, recorded once per generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    pub x: f64,
    pub fx: f64,
}

#[derive(Debug, Clone)]
pub struct GAResult {
    pub best_x: f64,
    pub best_fx: f64,
    pub generations: usize,
    pub history: Vec<GenerationRecord>,
    pub elapsed_ms: u128,
}

impl GAResult {
    /// x of the best individual of every generation, in generation order
    pub fn best_points(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.x).collect()
    }
}

pub struct GeneticAlgorithm {
    pub config: GAConfig,
    rng: StdRng,
}

impl GeneticAlgorithm {
    pub fn new(config: GAConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GeneticAlgorithm { config, rng }
    }

    fn fitness(x: f64) -> f64 {
        target_function(x)
    }

    fn gen_individual(&mut self) -> f64 {
        let domain = self.config.domain;
        domain.min + domain.width() * self.rng.random::<f64>()
    }

    fn gen_population(&mut self) -> Vec<f64> {
        (0..self.config.population_size)
            .map(|_| self.gen_individual())
            .collect()
    }

    fn tournament_selection(&mut self, population: &[f64]) -> f64 {
        let mut best = population[self.rng.random_range(0..population.len())];
        for _ in 1..self.config.tournament_size {
            let contender = population[self.rng.random_range(0..population.len())];
            if Self::fitness(contender) > Self::fitness(best) {
                best = contender;
            }
        }
        best
    }

    fn crossover(&mut self, p1: f64, p2: f64) -> f64 {
        if self.rng.random::<f64>() < self.config.crossover_prob {
            (p1 + p2) / 2.0
        } else {
            p1
        }
    }

    fn mutate(&mut self, individual: f64) -> f64 {
        if self.rng.random::<f64>() < self.config.mutation_prob {
            let delta = (self.rng.random::<f64>() - 0.5) * self.config.mutation_step;
            self.config.domain.clamp(individual + delta)
        } else {
            individual
        }
    }

    /// one complete run, until the best value stagnates
    pub fn solve(&mut self) -> GAResult {
        let start = Instant::now();
        let mut population = self.gen_population();
        let mut best_x = population[0];
        let mut best_fx = Self::fitness(best_x);
        let mut stagnation = 0;
        let mut generation = 0;
        let mut history = Vec::new();

        while stagnation < self.config.stagnation_limit {
            let mut children = Vec::with_capacity(population.len());
            for _ in 0..population.len() {
                let p1 = self.tournament_selection(&population);
                let p2 = self.tournament_selection(&population);
                let child = self.crossover(p1, p2);
                children.push(self.mutate(child));
            }
            population = children;

            let mut improved = false;
            for &x in &population {
                let fx = Self::fitness(x);
                if fx > best_fx {
                    best_x = x;
                    best_fx = fx;
                    improved = true;
                }
            }
            if improved {
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            info!("generation {}: x = {:.10}; f(x) = {:.10}", generation, best_x, best_fx);
            history.push(GenerationRecord {
                generation,
                x: best_x,
                fx: best_fx,
            });
            generation += 1;
        }

        let elapsed_ms = start.elapsed().as_millis();
        debug!("run finished after {} generations in {} ms", generation, elapsed_ms);
        GAResult {
            best_x,
            best_fx,
            generations: generation,
            history,
            elapsed_ms,
        }
    }

    /// `config.runs` independent runs sharing the same random stream
    pub fn solve_runs(&mut self) -> Vec<GAResult> {
        (0..self.config.runs).map(|_| self.solve()).collect()
    }
}
