//! The charting adapter: renders the category breakdown as an SVG doughnut.
//!
//! This module only builds `svg::Document`s from category totals; deciding
//! where (or whether) the document lands on disk is the command layer's job.

use crate::model::CategoryTotal;
use rust_decimal::prelude::ToPrimitive;
use std::f64::consts::PI;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Rectangle, Text};
use svg::Document;

/// The segment palette, cycled when there are more than eight categories.
pub const PALETTE: [&str; 8] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f1c40f", "#9b59b6", "#1abc9c", "#e67e22", "#34495e",
];

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const CENTER: (f64, f64) = (180.0, 180.0);
const OUTER_RADIUS: f64 = 150.0;
const INNER_RADIUS: f64 = 75.0;
const LEGEND_X: f64 = 380.0;
const LEGEND_ROW: f64 = 24.0;
const SWATCH: f64 = 14.0;

/// Builds a doughnut chart from per-category totals: one segment per
/// category, proportional to its share, with a legend down the right edge.
pub struct Doughnut<'d> {
    totals: &'d [CategoryTotal],
}

impl<'d> Doughnut<'d> {
    pub fn from(totals: &'d [CategoryTotal]) -> Self {
        Self { totals }
    }

    pub fn document(&self) -> Document {
        let mut document = Document::new().set("viewBox", (0.0, 0.0, WIDTH, self.height()));
        for segment in self.segments() {
            document = document.add(segment);
        }
        for node in self.legend() {
            document = document.add(node);
        }
        document
    }

    /// The legend can outgrow the chart area when there are many categories.
    fn height(&self) -> f64 {
        HEIGHT.max(40.0 + self.totals.len() as f64 * LEGEND_ROW + 20.0)
    }

    /// Each category's fraction of the grand total. A grand total of zero
    /// (every amount was zero) degrades to an equal split.
    fn shares(&self) -> Vec<f64> {
        let total: f64 = self
            .totals
            .iter()
            .map(|t| t.value().to_f64().unwrap_or_default())
            .sum();
        if total == 0.0 {
            let equal = 1.0 / self.totals.len().max(1) as f64;
            return vec![equal; self.totals.len()];
        }
        self.totals
            .iter()
            .map(|t| t.value().to_f64().unwrap_or_default() / total)
            .collect()
    }

    fn segments(&self) -> Vec<Path> {
        if self.totals.len() == 1 {
            return vec![full_ring(PALETTE[0])];
        }
        let mut paths = Vec::new();
        let mut angle = 0.0;
        for (ix, share) in self.shares().into_iter().enumerate() {
            let start = angle;
            angle += share * 2.0 * PI;
            paths.push(segment(start, angle, PALETTE[ix % PALETTE.len()]));
        }
        paths
    }

    fn legend(&self) -> Vec<Group> {
        self.totals
            .iter()
            .enumerate()
            .map(|(ix, total)| {
                let y = 40.0 + ix as f64 * LEGEND_ROW;
                let swatch = Rectangle::new()
                    .set("x", LEGEND_X)
                    .set("y", y)
                    .set("width", SWATCH)
                    .set("height", SWATCH)
                    .set("fill", PALETTE[ix % PALETTE.len()]);
                let label = Text::new()
                    .set("x", LEGEND_X + SWATCH + 8.0)
                    .set("y", y + SWATCH - 2.0)
                    .set("font-family", "sans-serif")
                    .set("font-size", 14)
                    .add(svg::node::Text::new(format!(
                        "{}: {}",
                        total.category(),
                        total.total()
                    )));
                Group::new().add(swatch).add(label)
            })
            .collect()
    }
}

/// A point on a circle around the chart center. Angles are measured
/// clockwise from twelve o'clock, where the first segment starts.
fn point(angle: f64, radius: f64) -> (f64, f64) {
    let (cx, cy) = CENTER;
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

fn segment(start: f64, end: f64, color: &str) -> Path {
    let large_arc = i32::from(end - start > PI);
    let outer_start = point(start, OUTER_RADIUS);
    let outer_end = point(end, OUTER_RADIUS);
    let inner_start = point(start, INNER_RADIUS);
    let inner_end = point(end, INNER_RADIUS);
    let data = Data::new()
        .move_to(outer_start)
        .elliptical_arc_to((
            OUTER_RADIUS,
            OUTER_RADIUS,
            0,
            large_arc,
            1,
            outer_end.0,
            outer_end.1,
        ))
        .line_to(inner_end)
        .elliptical_arc_to((
            INNER_RADIUS,
            INNER_RADIUS,
            0,
            large_arc,
            0,
            inner_start.0,
            inner_start.1,
        ))
        .close();
    Path::new()
        .set("fill", color)
        .set("stroke", "#fff")
        .set("stroke-width", 1)
        .set("d", data)
}

/// A single category fills the whole ring. The two-arc segment construction
/// degenerates when start and end coincide, so the ring is drawn as two
/// concentric circles with an even-odd fill.
fn full_ring(color: &str) -> Path {
    let data = Data::new()
        .move_to(point(0.0, OUTER_RADIUS))
        .elliptical_arc_to((
            OUTER_RADIUS,
            OUTER_RADIUS,
            0,
            1,
            1,
            point(PI, OUTER_RADIUS).0,
            point(PI, OUTER_RADIUS).1,
        ))
        .elliptical_arc_to((
            OUTER_RADIUS,
            OUTER_RADIUS,
            0,
            1,
            1,
            point(0.0, OUTER_RADIUS).0,
            point(0.0, OUTER_RADIUS).1,
        ))
        .close()
        .move_to(point(0.0, INNER_RADIUS))
        .elliptical_arc_to((
            INNER_RADIUS,
            INNER_RADIUS,
            0,
            1,
            1,
            point(PI, INNER_RADIUS).0,
            point(PI, INNER_RADIUS).1,
        ))
        .elliptical_arc_to((
            INNER_RADIUS,
            INNER_RADIUS,
            0,
            1,
            1,
            point(0.0, INNER_RADIUS).0,
            point(0.0, INNER_RADIUS).1,
        ))
        .close();
    Path::new()
        .set("fill", color)
        .set("fill-rule", "evenodd")
        .set("stroke", "#fff")
        .set("stroke-width", 1)
        .set("d", data)
}
