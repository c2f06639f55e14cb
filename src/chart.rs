use log::debug;
use plotters::style::{Color, HSLColor, RGBColor};
use std::collections::HashMap;
use std::ops::Range;

use crate::benchmark_reader::BenchmarkRecord;

pub const TITLE: &str = "Time to render mandelbrot set";

/// Heading of the legend, naming what tells the lines apart.
pub const LEGEND_TITLE: &str = "executable";

/// Share of the data span added on both ends of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Colors and backgrounds the chart is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub figure_background: RGBColor,
    pub plot_background: RGBColor,
    pub grid_line: RGBColor,
    pub text: RGBColor,
    pub palette: [RGBColor; 10],
}

/// Light blue-grey plot area with white grid lines and no axis spines.
pub const DARKGRID: Theme = Theme {
    name: "darkgrid",
    figure_background: RGBColor(255, 255, 255),
    plot_background: RGBColor(234, 234, 242),
    grid_line: RGBColor(255, 255, 255),
    text: RGBColor(38, 38, 38),
    palette: [
        RGBColor(76, 114, 176),
        RGBColor(221, 132, 82),
        RGBColor(85, 168, 104),
        RGBColor(196, 78, 82),
        RGBColor(129, 114, 179),
        RGBColor(147, 120, 96),
        RGBColor(218, 139, 195),
        RGBColor(140, 140, 140),
        RGBColor(204, 185, 116),
        RGBColor(100, 181, 205),
    ],
};

impl Theme {
    /// Colors for `count` series. The palette is used while it lasts;
    /// past that every series gets an evenly spaced hue instead.
    pub fn series_colors(&self, count: usize) -> Vec<RGBColor> {
        if count <= self.palette.len() {
            return self.palette[..count].to_vec();
        }
        (0..count)
            .map(|i| {
                let (r, g, b) = HSLColor(i as f64 / count as f64, 0.65, 0.6)
                    .to_backend_color()
                    .rgb;
                RGBColor(r, g, b)
            })
            .collect()
    }
}

/// All measurements of one executable, as a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    /// `(size, time)` pairs ordered by size, one per distinct size.
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub legend_title: &'static str,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub theme: Theme,
    pub series: Vec<Series>,
}

impl BenchmarkChart {
    /// Groups the records into one series per executable, in the order the
    /// executables first appear. Repeated measurements of the same size are
    /// drawn as their mean.
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        let theme = DARKGRID;

        let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for record in records {
            let position = *positions
                .entry(record.executable.as_str())
                .or_insert_with(|| {
                    groups.push((record.executable.clone(), Vec::new()));
                    groups.len() - 1
                });
            groups[position].1.push((record.size, record.time));
        }

        let colors = theme.series_colors(groups.len());
        let series = groups
            .into_iter()
            .zip(colors)
            .map(|((label, points), color)| Series {
                label,
                color,
                points: mean_by_size(points),
            })
            .collect::<Vec<Series>>();
        debug!("Built {} series from {} records", series.len(), records.len());

        let points = || series.iter().flat_map(|s| s.points.iter());
        let x_range = padded_range(points().map(|p| p.0));
        let y_range = padded_range(points().map(|p| p.1));

        BenchmarkChart {
            title: TITLE,
            x_label: "size",
            y_label: "time",
            legend_title: LEGEND_TITLE,
            x_range,
            y_range,
            theme,
            series,
        }
    }
}

/// Drops points that are not finite, sorts by size and collapses points
/// sharing a size into their mean time.
fn mean_by_size(mut points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    points.retain(|(size, time)| size.is_finite() && time.is_finite());
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut means: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    let mut count = 0.0;
    for (size, time) in points {
        match means.last_mut() {
            Some(last) if last.0 == size => {
                count += 1.0;
                last.1 += (time - last.1) / count;
            }
            _ => {
                means.push((size, time));
                count = 1.0;
            }
        }
    }
    means
}

/// Smallest range holding every finite value, widened by [`AXIS_MARGIN`].
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let margin = (max - min) * AXIS_MARGIN;
    (min - margin)..(max + margin)
}
