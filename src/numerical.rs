/// genetic algorithm looking for the maximum of the target function
pub mod genetic_algorithm;
/// reading the results file: one float per line, exact duplicates dropped
pub mod sample_points;
/// f(x) = cos(e^x)/sin(ln x), scalar and vectorized, and the uniform grid it is drawn on
pub mod target_function;
