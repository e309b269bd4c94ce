// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::{Itertools, MinMaxResult};

use ratatui::{
    style::Style,
    symbols,
    widgets::{Axis, Block, Chart, Dataset, GraphType},
};

use crate::hydropathy::Profile;

// Minimal half-height of the y range, so that flat profiles still get some room.
const MIN_Y_PAD: f64 = 0.5;
const Y_PAD_FRACTION: f64 = 0.05;

pub const X_TITLE: &str = "Amino Acid Position";
pub const Y_TITLE: &str = "Hydropathy Score";

pub fn chart_title(id: &str) -> String {
    format!("Hydropathy Plot for {}", id)
}

/// Window positions run from 1 to the number of scores.
pub fn x_bounds(num_scores: usize) -> [f64; 2] {
    [1.0, num_scores.max(2) as f64]
}

/// The y range always contains 0, where the reference line is drawn.
pub fn y_bounds(scores: &[f64]) -> [f64; 2] {
    let (lo, hi) = match scores.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(s) => (s, s),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    let pad = ((hi - lo) * Y_PAD_FRACTION).max(MIN_Y_PAD);
    [lo - pad, hi + pad]
}

fn axis_labels(bounds: [f64; 2], precision: usize) -> Vec<String> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect()
}

/// Points of the y = 0 reference line, spanning the x range.
pub fn reference_line(x_bounds: [f64; 2]) -> [(f64, f64); 2] {
    [(x_bounds[0], 0.0), (x_bounds[1], 0.0)]
}

pub struct ChartStyles {
    pub line: Style,
    pub reference: Style,
    pub axis: Style,
}

/// Builds the chart for one profile. `points` are the profile's positions and `reference` the
/// zero line; both are borrowed by the widget.
pub fn profile_chart<'a>(
    profile: &Profile,
    points: &'a [(f64, f64)],
    reference: &'a [(f64, f64)],
    styles: &ChartStyles,
) -> Chart<'a> {
    let xb = x_bounds(profile.scores.len());
    let yb = y_bounds(&profile.scores);
    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(styles.reference)
            .data(reference),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(styles.line)
            .data(points),
    ];
    Chart::new(datasets)
        .block(Block::bordered().title(chart_title(&profile.id)))
        .x_axis(
            Axis::default()
                .title(X_TITLE)
                .style(styles.axis)
                .bounds(xb)
                .labels(axis_labels(xb, 0)),
        )
        .y_axis(
            Axis::default()
                .title(Y_TITLE)
                .style(styles.axis)
                .bounds(yb)
                .labels(axis_labels(yb, 1)),
        )
}
