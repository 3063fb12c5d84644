//! Scene description of the wheel, computed from the items and the current
//! rotation. The frontend turns a [`WheelRender`] into SVG without doing any
//! geometry of its own.

use serde::Serialize;
use std::f64::consts::PI;

use crate::config::WheelConfig;
use crate::constants::*;
use crate::palette::item_color;
use crate::wheel_math::{angle_per_segment, normalize_degrees, segment_center_angle};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SliceShape {
    pub index: usize,
    pub display_label: String,
    pub color: &'static str,
    /// Screen angle where the slice starts, before the group rotation.
    pub start_angle: f64,
    pub sweep: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    pub label_rotation: f64,
    pub font_size: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum WheelBody {
    /// Neutral disc drawn when there are no items.
    Placeholder { fill: &'static str },
    Slices(Vec<SliceShape>),
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HubCircle {
    pub radius: f64,
    pub fill: &'static str,
    pub stroke: Option<(&'static str, f64)>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WheelRender {
    pub size: f64,
    pub radius: f64,
    pub rotation: f64,
    /// CSS transition for the rotating group, `None` while settled.
    pub transition: Option<String>,
    pub body: WheelBody,
    pub hub: Vec<HubCircle>,
}

impl WheelRender {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.size, self.size)
    }

    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    pub fn slices(&self) -> &[SliceShape] {
        match &self.body {
            WheelBody::Placeholder { .. } => &[],
            WheelBody::Slices(slices) => slices,
        }
    }

    /// Inline style for the rotating `<g>`.
    pub fn group_style(&self) -> String {
        format!(
            "transform: rotate({}deg); transform-origin: center center; transition: {};",
            self.rotation,
            self.transition.as_deref().unwrap_or("none")
        )
    }
}

/// Shortens labels longer than `max_chars` to `truncate_chars` plus an ellipsis.
pub fn truncate_label(label: &str, max_chars: usize, truncate_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let mut short: String = label.chars().take(truncate_chars).collect();
        short.push_str(LABEL_ELLIPSIS);
        short
    } else {
        label.to_string()
    }
}

pub fn label_font_size(item_count: usize) -> u32 {
    match item_count {
        0..=10 => 12,
        11..=20 => 10,
        _ => 8,
    }
}

/// Keeps text readable: rotation follows the radius, flipped when it would
/// render upside down.
pub fn upright_text_rotation(mid_angle: f64) -> f64 {
    let rotation = normalize_degrees(mid_angle + 90.0);
    if rotation > 90.0 && rotation < 270.0 {
        rotation - 180.0
    } else {
        rotation
    }
}

fn point_on_circle(center: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees * PI / 180.0;
    (center + radius * radians.cos(), center + radius * radians.sin())
}

fn slice_path(center: f64, radius: f64, start: f64, sweep: f64) -> String {
    let (x1, y1) = point_on_circle(center, radius, start);
    let (x2, y2) = point_on_circle(center, radius, start + sweep);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M {c:.3},{c:.3} L {x1:.3},{y1:.3} A {r:.3},{r:.3} 0 {large_arc} 1 {x2:.3},{y2:.3} Z",
        c = center,
        r = radius,
    )
}

fn full_circle_path(center: f64, radius: f64) -> String {
    format!(
        "M {left:.3},{c:.3} A {r:.3},{r:.3} 0 1 1 {right:.3},{c:.3} A {r:.3},{r:.3} 0 1 1 {left:.3},{c:.3} Z",
        left = center - radius,
        right = center + radius,
        c = center,
        r = radius,
    )
}

/// Lays out one slice per item plus the group rotation. Slice angles are
/// shifted so the configured pointer angle lands at the top of the screen.
pub fn render_wheel<S: AsRef<str>>(
    items: &[S],
    rotation: f64,
    is_spinning: bool,
    config: &WheelConfig,
) -> WheelRender {
    let radius = WHEEL_RADIUS;
    let center = radius;
    let item_count = items.len();
    let frame_offset = POINTER_ANGLE - config.pointer_angle;

    let body = if item_count == 0 {
        WheelBody::Placeholder { fill: PLACEHOLDER_COLOR }
    } else {
        let sweep = angle_per_segment(item_count);
        let font_size = label_font_size(item_count);
        let slices = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let start_angle = frame_offset + index as f64 * sweep;
                let mid_angle = frame_offset + segment_center_angle(index, item_count);
                let (label_x, label_y) =
                    point_on_circle(center, radius * LABEL_RADIUS_RATIO, mid_angle);
                let path = if item_count == 1 {
                    full_circle_path(center, radius)
                } else {
                    slice_path(center, radius, start_angle, sweep)
                };
                SliceShape {
                    index,
                    display_label: truncate_label(
                        item.as_ref(),
                        config.label_max_chars,
                        config.label_truncate_chars,
                    ),
                    color: item_color(index),
                    start_angle,
                    sweep,
                    path,
                    label_x,
                    label_y,
                    label_rotation: upright_text_rotation(mid_angle),
                    font_size,
                }
            })
            .collect();
        WheelBody::Slices(slices)
    };

    WheelRender {
        size: radius * 2.0,
        radius,
        rotation,
        transition: is_spinning.then(|| config.transition_css()),
        body,
        hub: vec![
            HubCircle {
                radius: radius * HUB_OUTER_RATIO,
                fill: HUB_OUTER_COLOR,
                stroke: Some((HUB_OUTER_STROKE, HUB_STROKE_WIDTH)),
            },
            HubCircle {
                radius: radius * HUB_INNER_RATIO,
                fill: HUB_INNER_COLOR,
                stroke: None,
            },
        ],
    }
}
