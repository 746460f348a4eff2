//! Settings of the plotting task. The binary runs with `PlotTask::default()`: domain, curve size,
//! file paths, figure size and dpi are compile-time constants. Tests build their own tasks pointing
//! at temporary directories.
use crate::numerical::target_function::{Domain, N_CURVE_POINTS};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_RESULTS_PATH: &str = "results.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "plot.png";
pub const DEFAULT_FIGSIZE: (f64, f64) = (8.0, 5.0);
pub const DEFAULT_DPI: u32 = 300;
pub const DEFAULT_TITLE: &str = "Function graph with marked points";

const LOGLEVELS: [&str; 6] = ["debug", "info", "warn", "error", "off", "none"];

#[derive(Debug)]
pub enum TaskError {
    InvalidValue(String),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::InvalidValue(msg) => write!(f, "invalid task value: {}", msg),
        }
    }
}

impl std::error::Error for TaskError {}

pub fn check_loglevel(level: &str) -> Result<(), TaskError> {
    if LOGLEVELS.contains(&level) {
        Ok(())
    } else {
        Err(TaskError::InvalidValue(format!(
            "loglevel must be one of {:?}, got '{}'",
            LOGLEVELS, level
        )))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotTask {
    pub domain: Domain,
    pub n_points: usize,
    pub results_path: PathBuf,
    pub output_path: PathBuf,
    /// figure size in inches
    pub figsize: (f64, f64),
    pub dpi: u32,
    pub title: String,
    pub loglevel: Option<String>,
}

impl Default for PlotTask {
    fn default() -> Self {
        PlotTask {
            domain: Domain::default(),
            n_points: N_CURVE_POINTS,
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            figsize: DEFAULT_FIGSIZE,
            dpi: DEFAULT_DPI,
            title: DEFAULT_TITLE.to_string(),
            loglevel: Some("info".to_string()),
        }
    }
}

impl PlotTask {
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
        if self.n_points < 2 {
            return Err(TaskError::InvalidValue(format!(
                "n_points must be at least 2, got {}",
                self.n_points
            )));
        }
        if !(self.figsize.0 > 0.0 && self.figsize.1 > 0.0) || self.dpi == 0 {
            return Err(TaskError::InvalidValue(format!(
                "figure size {:?} and dpi {} must be positive",
                self.figsize, self.dpi
            )));
        }
        if let Some(level) = &self.loglevel {
            check_loglevel(level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let task = PlotTask::default();
        assert_eq!(task.domain, Domain::new(2.0, 4.0));
        assert_eq!(task.n_points, 400);
        assert_eq!(task.figsize, (8.0, 5.0));
        assert_eq!(task.dpi, 300);
        assert_eq!(task.results_path, PathBuf::from("results.txt"));
        assert_eq!(task.output_path, PathBuf::from("plot.png"));
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_inverted_domain_rejected() {
        let task = PlotTask {
            domain: Domain::new(4.0, 2.0),
            ..PlotTask::default()
        };
        assert!(matches!(task.validate(), Err(TaskError::InvalidValue(_))));
    }

    #[test]
    fn test_nan_domain_rejected() {
        let task = PlotTask {
            domain: Domain::new(f64::NAN, 4.0),
            ..PlotTask::default()
        };
        assert!(task.validate().is_err());
    }

    #[test]
    fn test_too_few_points_rejected() {
        let task = PlotTask {
            n_points: 1,
            ..PlotTask::default()
        };
        assert!(task.validate().is_err());
    }

    #[test]
    fn test_empty_figure_rejected() {
        let task = PlotTask {
            dpi: 0,
            ..PlotTask::default()
        };
        assert!(task.validate().is_err());
        let task = PlotTask {
            figsize: (8.0, -5.0),
            ..PlotTask::default()
        };
        assert!(task.validate().is_err());
    }

    #[test]
    fn test_unknown_loglevel_rejected() {
        let task = PlotTask {
            loglevel: Some("verbose".to_string()),
            ..PlotTask::default()
        };
        assert!(task.validate().is_err());
        assert!(check_loglevel("off").is_ok());
    }
}
