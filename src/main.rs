use extremum_plot::Utils::logger::init_logger;
use extremum_plot::Utils::plot_task::PlotTask;
use extremum_plot::Utils::plots::plot_results;
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let task = PlotTask::default();
    init_logger(task.loglevel.as_deref())?;
    let summary = plot_results(&task)?;
    info!(
        "plotted {} sample points over a {}-point curve",
        summary.points_x.len(),
        summary.curve_len
    );
    Ok(())
}
