use std::path::Path;

use log::info;
use plotters::prelude::*;

use pscurve_scaling::{ContactProbability, DistanceWindow, HistogramKind, PowerLawFit};

use crate::consts::*;
use crate::errors::PlotError;

fn check_range(left: f64, right: f64) -> Result<(), PlotError> {
    if left > 0.0 && right > left {
        Ok(())
    } else {
        Err(PlotError::InvalidRange(left, right))
    }
}

/// Points that can be drawn on log axes inside the given ranges.
fn drawable_points(
    x: &[f64],
    y: &[f64],
    x_range: DistanceWindow,
    y_range: (f64, f64),
) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .filter(|&(&x, &y)| {
            y > 0.0 && x >= x_range.left && x <= x_range.right && y >= y_range.0 && y <= y_range.1
        })
        .map(|(&x, &y)| (x, y))
        .collect()
}

///
/// Y axis of the aggregate figure: from the last bin's probability / 100 up
/// to the probability at the left end of the plot * 100.
///
/// Falls back to the positive range of the data (or a fixed range) when either
/// bound would be 0.
///
pub fn aggregate_y_range(result: &ContactProbability, plot_range: DistanceWindow) -> (f64, f64) {
    let probabilities = result.aggregate().probabilities();
    let n = probabilities.len();

    let lower = probabilities[n - 1] / 100.0;
    let anchor = result.edges.bisect_left(plot_range.left).min(n - 1);
    let upper = probabilities[anchor] * 100.0;
    if lower > 0.0 && upper > lower {
        return (lower, upper);
    }

    let positive = result
        .edges
        .left_edges()
        .iter()
        .zip(&probabilities)
        .filter(|&(&x, &p)| p > 0.0 && x >= plot_range.left && x <= plot_range.right)
        .map(|(_, &p)| p);

    let (min, max) = positive.fold((f64::INFINITY, 0.0f64), |(lo, hi), p| (lo.min(p), hi.max(p)));
    if max > 0.0 {
        (min / 100.0, max * 100.0)
    } else {
        DEFAULT_Y_RANGE
    }
}

fn fit_color(index: usize) -> RGBAColor {
    match index {
        0 => RED.to_rgba(),
        1 => GREEN.to_rgba(),
        _ => Palette99::pick(index).to_rgba(),
    }
}

fn orientation_color(kind: HistogramKind) -> RGBAColor {
    match kind {
        HistogramKind::Inner => BLUE.to_rgba(),
        HistogramKind::Outer => RED.to_rgba(),
        HistogramKind::Left => GREEN.to_rgba(),
        HistogramKind::Right => MAGENTA.to_rgba(),
        HistogramKind::All => BLACK.to_rgba(),
    }
}

///
/// Draw the aggregate contact probability curve with its power-law fits.
///
/// # Arguments
/// - path: output SVG path
/// - experiment: name shown in the caption and legend
/// - result: the computed curves
/// - fits: fitted regimes to overlay
/// - plot_range: x axis range in bp
pub fn plot_contact_probability<T: AsRef<Path>>(
    path: T,
    experiment: &str,
    result: &ContactProbability,
    fits: &[PowerLawFit],
    plot_range: DistanceWindow,
) -> Result<(), PlotError> {
    check_range(plot_range.left, plot_range.right)?;
    let y_range = aggregate_y_range(result, plot_range);

    let path = path.as_ref();
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(experiment, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (plot_range.left..plot_range.right).log_scale(),
            (y_range.0..y_range.1).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|v| format!("{:.0e}", v))
        .y_label_formatter(&|v| format!("{:.0e}", v))
        .draw()?;

    let curve = drawable_points(
        result.edges.left_edges(),
        &result.aggregate().probabilities(),
        plot_range,
        y_range,
    );
    chart
        .draw_series(LineSeries::new(curve, BLUE))?
        .label(experiment)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    for (i, fit) in fits.iter().enumerate() {
        let color = fit_color(i);
        let line = drawable_points(&fit.x, &fit.y, plot_range, y_range);
        chart
            .draw_series(LineSeries::new(line, color.stroke_width(2)))?
            .label(format!("{:.5} {:.5}", fit.slope, fit.pearson_r))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("Wrote {:?}", path);
    Ok(())
}

///
/// Draw the inner, outer, left and right contact probability curves.
///
/// # Arguments
/// - path: output SVG path
/// - experiment: name shown in the caption
/// - result: the computed curves
/// - plot_range: x axis range in bp
pub fn plot_orientations<T: AsRef<Path>>(
    path: T,
    experiment: &str,
    result: &ContactProbability,
    plot_range: DistanceWindow,
) -> Result<(), PlotError> {
    check_range(plot_range.left, plot_range.right)?;
    let y_range = IOLR_Y_RANGE;

    let path = path.as_ref();
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(experiment, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (plot_range.left..plot_range.right).log_scale(),
            (y_range.0..y_range.1).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|v| format!("{:.0e}", v))
        .y_label_formatter(&|v| format!("{:.0e}", v))
        .draw()?;

    for kind in [
        HistogramKind::Inner,
        HistogramKind::Outer,
        HistogramKind::Left,
        HistogramKind::Right,
    ] {
        let color = orientation_color(kind);
        let curve = drawable_points(
            result.edges.left_edges(),
            &result.table(kind).probabilities(),
            plot_range,
            y_range,
        );
        chart
            .draw_series(LineSeries::new(curve, color))?
            .label(kind.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("Wrote {:?}", path);
    Ok(())
}
