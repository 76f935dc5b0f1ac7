//! Chart geometry and number formatting shared by the dashboard panels.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::CostCategory;

/// Horizontal placement of one schedule bar on the track, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub left_pct: f64,
    pub width_pct: f64,
}

impl BarLayout {
    /// Bars past the horizon are not clamped; they overflow the track.
    pub fn new(start: f64, duration: f64, horizon: f64) -> Self {
        let horizon = if horizon > 0.0 { horizon } else { 1.0 };
        Self {
            left_pct: start * 100.0 / horizon,
            width_pct: duration * 100.0 / horizon,
        }
    }

    pub fn end_pct(&self) -> f64 {
        self.left_pct + self.width_pct
    }

    pub fn overflows(&self) -> bool {
        self.end_pct() > 100.0
    }

    pub fn style(&self) -> String {
        format!("left: {}%; width: {}%;", self.left_pct, self.width_pct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutGeometry {
    pub center: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            center: 150.0,
            inner_radius: 60.0,
            outer_radius: 120.0,
        }
    }
}

impl DonutGeometry {
    pub fn view_box(&self) -> String {
        let size = self.center * 2.0;
        format!("0 0 {size} {size}")
    }

    fn point(&self, radius: f64, angle: f64) -> (f64, f64) {
        (
            self.center + radius * angle.cos(),
            self.center + radius * angle.sin(),
        )
    }

    /// SVG path of the ring sector between two angles, clockwise.
    fn sector_path(&self, from: f64, to: f64) -> String {
        // a full turn collapses to a zero-length arc
        let to = if to - from >= TAU { from + TAU - 1e-4 } else { to };
        let large_arc = if to - from > std::f64::consts::PI { 1 } else { 0 };
        let (ox0, oy0) = self.point(self.outer_radius, from);
        let (ox1, oy1) = self.point(self.outer_radius, to);
        let (ix1, iy1) = self.point(self.inner_radius, to);
        let (ix0, iy0) = self.point(self.inner_radius, from);
        let (r_out, r_in) = (self.outer_radius, self.inner_radius);

        format!(
            "M {ox0:.3} {oy0:.3} A {r_out} {r_out} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
             L {ix1:.3} {iy1:.3} A {r_in} {r_in} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    pub name: String,
    pub value: u64,
    pub color: String,
    pub fraction: f64,
    pub path: String,
}

/// One slice per non-zero category, sized by its share of the total.
pub fn donut_slices(categories: &[CostCategory], geometry: &DonutGeometry) -> Vec<DonutSlice> {
    let total: u64 = categories.iter().map(|category| category.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    let mut slices = Vec::with_capacity(categories.len());
    for category in categories.iter().filter(|category| category.value > 0) {
        let fraction = category.value as f64 / total as f64;
        let sweep = fraction * TAU;
        slices.push(DonutSlice {
            name: category.name.clone(),
            value: category.value,
            color: category.color.clone(),
            fraction,
            path: geometry.sector_path(angle, angle + sweep),
        });
        angle += sweep;
    }
    slices
}

/// `2450000` → `2,450,000`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency(value: u64) -> String {
    format!("${}", format_grouped(value))
}
