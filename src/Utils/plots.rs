use crate::Utils::colormap::gradient_colors;
use crate::Utils::plot_task::{DEFAULT_DPI, DEFAULT_FIGSIZE, DEFAULT_TITLE, PlotTask};
use crate::numerical::sample_points::load_sample_points;
use crate::numerical::target_function::target_function_vec;
use itertools::{Itertools, MinMaxResult};
use log::{info, warn};
use nalgebra::DVector;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::fmt;
use std::ops::Range;
use std::path::Path;

#[derive(Debug)]
pub enum PlotError {
    InvalidFigure(String),
    Render(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotError::InvalidFigure(msg) => write!(f, "invalid figure: {}", msg),
            PlotError::Render(msg) => write!(f, "rendering failed: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {}

fn render_err<E: fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Everything that ends up in the picture. Built once, drawn onto any plotters backend.
#[derive(Debug, Clone)]
pub struct Figure {
    pub curve_x: DVector<f64>,
    pub curve_y: DVector<f64>,
    pub points_x: Vec<f64>,
    pub points_y: Vec<f64>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// inches
    pub figsize: (f64, f64),
    pub dpi: u32,
}

impl Figure {
    pub fn new(
        curve: (DVector<f64>, DVector<f64>),
        points_x: Vec<f64>,
        points_y: Vec<f64>,
    ) -> Self {
        Figure {
            curve_x: curve.0,
            curve_y: curve.1,
            points_x,
            points_y,
            title: DEFAULT_TITLE.to_string(),
            x_label: "x".to_string(),
            y_label: "f(x)".to_string(),
            figsize: DEFAULT_FIGSIZE,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_size(mut self, figsize: (f64, f64), dpi: u32) -> Self {
        self.figsize = figsize;
        self.dpi = dpi;
        self
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.figsize.0 * self.dpi as f64).round() as u32,
            (self.figsize.1 * self.dpi as f64).round() as u32,
        )
    }

    // fonts and strokes are given for 100 dpi
    fn scale(&self) -> f64 {
        self.dpi as f64 / 100.0
    }

    fn check(&self) -> Result<(), PlotError> {
        if self.curve_x.len() != self.curve_y.len() {
            return Err(PlotError::InvalidFigure(format!(
                "curve has {} x values and {} y values",
                self.curve_x.len(),
                self.curve_y.len()
            )));
        }
        if self.points_x.len() != self.points_y.len() {
            return Err(PlotError::InvalidFigure(format!(
                "{} sample points but {} evaluations",
                self.points_x.len(),
                self.points_y.len()
            )));
        }
        let (w, h) = self.pixel_size();
        if w == 0 || h == 0 {
            return Err(PlotError::InvalidFigure(format!(
                "empty image {}x{}",
                w, h
            )));
        }
        Ok(())
    }

    fn drawable_curve(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        finite_pairs(self.curve_x.iter(), self.curve_y.iter())
    }

    /// sample points that can be drawn, with their index in the full sequence
    fn drawable_points(&self) -> impl Iterator<Item = (usize, (f64, f64))> + '_ {
        self.points_x
            .iter()
            .zip(self.points_y.iter())
            .map(|(&x, &y)| (x, y))
            .enumerate()
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite())
    }

    /// Axis ranges covering the drawn curve and the drawn markers, with a 5% margin.
    /// A point with a non-finite x or f(x) takes no part in either range.
    pub fn axis_ranges(&self) -> (Range<f64>, Range<f64>) {
        let pairs: Vec<(f64, f64)> = self
            .drawable_curve()
            .chain(self.drawable_points().map(|(_, p)| p))
            .collect();
        (
            padded_range(pairs.iter().map(|p| p.0)),
            padded_range(pairs.iter().map(|p| p.1)),
        )
    }

    pub fn draw_on<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), PlotError> {
        self.check()?;
        let s = self.scale();
        let font = |size: f64| ("sans-serif", size * s);
        let stroke = (1.5 * s).round().max(1.0) as u32;
        let radius = (4.0 * s).round() as i32;
        let legend_len = (20.0 * s) as i32;

        root.fill(&WHITE).map_err(render_err)?;
        let (x_range, y_range) = self.axis_ranges();
        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, font(16.0))
            .margin((10.0 * s) as i32)
            .x_label_area_size((35.0 * s) as i32)
            .y_label_area_size((50.0 * s) as i32)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;

        // the mesh is the grid
        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .label_style(font(10.0))
            .axis_desc_style(font(12.0))
            .draw()
            .map_err(render_err)?;

        let series: Vec<(f64, f64)> = self.drawable_curve().collect();
        chart
            .draw_series(LineSeries::new(series, BLUE.stroke_width(stroke)))
            .map_err(render_err)?
            .label("f(x)")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_len, y)], BLUE.stroke_width(stroke))
            });

        // markers go on top of the curve; colors follow the full sequence, unplottable points are skipped
        let colors = gradient_colors(self.points_x.len());
        chart
            .draw_series(self.drawable_points().map(|(i, (x, y))| {
                EmptyElement::at((x, y))
                    + Circle::new((0, 0), radius, colors[i].filled())
                    + Circle::new((0, 0), radius, BLACK.stroke_width(stroke))
            }))
            .map_err(render_err)?;

        chart
            .configure_series_labels()
            .label_font(font(10.0))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;
        Ok(())
    }

    /// render into a PNG, overwriting `path`
    pub fn save_png(&self, path: &Path) -> Result<(), PlotError> {
        self.check()?;
        let size = self.pixel_size();
        let root = BitMapBackend::new(path, size).into_drawing_area();
        self.draw_on(&root)?;
        root.present().map_err(render_err)?;
        info!(
            "figure {}x{} saved to {}",
            size.0,
            size.1,
            path.display()
        );
        Ok(())
    }
}

fn finite_pairs<'a>(
    xs: impl Iterator<Item = &'a f64> + 'a,
    ys: impl Iterator<Item = &'a f64> + 'a,
) -> impl Iterator<Item = (f64, f64)> + 'a {
    xs.zip(ys)
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
}

fn padded_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    match values.filter(|v| v.is_finite()).minmax() {
        MinMaxResult::NoElements => -1.0..1.0,
        MinMaxResult::OneElement(v) => (v - 1.0)..(v + 1.0),
        MinMaxResult::MinMax(lo, hi) => {
            let pad = if hi > lo { 0.05 * (hi - lo) } else { 1.0 };
            (lo - pad)..(hi + pad)
        }
    }
}

/// what was plotted: deduplicated sample points, their evaluations, curve size
#[derive(Debug, Clone)]
pub struct PlotSummary {
    pub points_x: Vec<f64>,
    pub points_y: Vec<f64>,
    pub curve_len: usize,
}

/// curve, read points, evaluate them, render, save
pub fn plot_results(task: &PlotTask) -> Result<PlotSummary, Box<dyn Error>> {
    task.validate()?;
    let curve = task.domain.reference_curve(task.n_points);
    info!(
        "reference curve: {} points on [{}, {}]",
        curve.0.len(),
        task.domain.min,
        task.domain.max
    );

    let points_x = load_sample_points(&task.results_path)?;
    let points_y: Vec<f64> =
        target_function_vec(&DVector::from_vec(points_x.clone())).iter().copied().collect();
    let n_bad = points_y.iter().filter(|y| !y.is_finite()).count();
    if n_bad > 0 {
        warn!("f is not finite at {} of {} sample points", n_bad, points_y.len());
    }

    let curve_len = curve.0.len();
    let figure = Figure::new(curve, points_x.clone(), points_y.clone())
        .with_title(&task.title)
        .with_size(task.figsize, task.dpi);
    figure.save_png(&task.output_path)?;

    Ok(PlotSummary {
        points_x,
        points_y,
        curve_len,
    })
}
