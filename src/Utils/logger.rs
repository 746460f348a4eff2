use crate::Utils::plot_task::{TaskError, check_loglevel};
use crate::numerical::genetic_algorithm::GenerationRecord;
use csv::Writer;
use simplelog::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Install the terminal logger. "off"/"none" disables logging, None means info.
/// A logger that is already installed is kept.
pub fn init_logger(loglevel: Option<&str>) -> Result<(), TaskError> {
    let log_option = match loglevel {
        Some(level) => {
            check_loglevel(level)?;
            match level {
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => LevelFilter::Off,
            }
        }
        None => LevelFilter::Info,
    };
    if log_option == LevelFilter::Off {
        return Ok(());
    }
    let _ = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    Ok(())
}

/// one value per line, the format the plot reads back
pub fn save_points_to_file(points: &[f64], filename: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for x in points {
        writeln!(file, "{}", x)?;
    }
    file.flush()?;
    Ok(())
}

pub fn save_history_to_csv(history: &[GenerationRecord], filename: &Path) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["generation", "x", "f(x)"])?;
    for record in history {
        writer.write_record(&[
            record.generation.to_string(),
            record.x.to_string(),
            record.fx.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::sample_points::load_sample_points;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_points_read_back_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let points = vec![2.531, 2.5310000001, 3.0, 2.531, 1.0 / 3.0];
        save_points_to_file(&points, &path).unwrap();
        let loaded = load_sample_points(&path).unwrap();
        assert_eq!(loaded, vec![2.531, 2.5310000001, 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_history_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let history = vec![
            GenerationRecord {
                generation: 0,
                x: 2.5,
                fx: 1.0,
            },
            GenerationRecord {
                generation: 1,
                x: 2.53,
                fx: 1.2,
            },
        ];
        save_history_to_csv(&history, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["generation,x,f(x)", "0,2.5,1", "1,2.53,1.2"]);
    }

    #[test]
    fn test_init_logger_levels() {
        assert!(init_logger(Some("off")).is_ok());
        assert!(init_logger(Some("warn")).is_ok());
        // second install is ignored
        assert!(init_logger(None).is_ok());
        assert!(init_logger(Some("loud")).is_err());
    }
}
