use druid::{AppLauncher, WindowDesc};
use log::{error, info};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::TRANSPARENT;
use plotters_druid::Plot;

use crate::chart::BenchmarkChart;
use crate::error::PlotError;

const WINDOW_SIZE: (f64, f64) = (1280.0, 900.0);

/// Opens a window showing the chart and blocks until it is closed.
pub fn render_plot(chart: BenchmarkChart) -> Result<(), PlotError> {
    info!(
        "Showing '{}' with {} series in the {} theme",
        chart.title,
        chart.series.len(),
        chart.theme.name
    );
    let title = chart.title;
    let main_window = WindowDesc::new(chart_builder(chart))
        .title(title)
        .window_size(WINDOW_SIZE)
        .resizable(true);

    AppLauncher::with_window(main_window)
        .launch(())
        .map_err(|e| PlotError::Display(e.to_string()))
}

fn chart_builder(chart: BenchmarkChart) -> impl FnOnce() -> Plot<()> {
    move || {
        Plot::new(move |_size, _data, root| {
            if let Err(e) = draw_chart(root, &chart) {
                error!("Could not draw benchmark chart: {e}");
            }
        })
    }
}

/// Draws the chart onto `root`, whatever backend it renders to.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BenchmarkChart,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let theme = &chart.theme;
    root.fill(&theme.figure_background)?;

    //The chart will be put on the window
    let mut builder = ChartBuilder::on(root);
    builder
        .caption(chart.title, ("sans-serif", 24).into_font().color(&theme.text))
        .margin(20)
        .set_left_and_bottom_label_area_size(60);

    let mut chart_context =
        builder.build_cartesian_2d(chart.x_range.clone(), chart.y_range.clone())?;

    chart_context.plotting_area().fill(&theme.plot_background)?;

    // darkgrid: white major grid, no minor grid and no spines
    chart_context
        .configure_mesh()
        .bold_line_style(theme.grid_line.stroke_width(1))
        .light_line_style(TRANSPARENT)
        .axis_style(TRANSPARENT)
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .label_style(("sans-serif", 14).into_font().color(&theme.text))
        .draw()?;

    if !chart.series.is_empty() {
        // legend heading: an entry with text and no line
        chart_context
            .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
            .label(chart.legend_title);
    }

    for series in chart.series.iter() {
        let color = series.color;
        chart_context
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !chart.series.is_empty() {
        chart_context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(("sans-serif", 14).into_font().color(&theme.text))
            .background_style(theme.figure_background.mix(0.8))
            .border_style(theme.plot_background)
            .draw()?;
    }

    root.present()
}
