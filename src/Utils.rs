//! different utility modules used throughout the project
/// red-yellow-green gradient for the sample markers
pub mod colormap;
/// terminal logger setup and tiny writers to save search results into files
pub mod logger;
/// figure with the reference curve and the marked sample points, PNG output
pub mod plots;
/// settings of the plotting task: defaults and validation
pub mod plot_task;
