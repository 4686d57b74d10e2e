use glam::Vec2;

use super::contact::RadarContact;
use crate::config::RadarConfig;
use crate::core::canvas::{Canvas, DrawOp, Rgba};

/// Colors for the radar overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub disc: Rgba,
    pub rim: Rgba,
    pub player: Rgba,
    pub contact: Rgba,
    pub focused: Rgba,
    pub indicator: Rgba,
    /// Arrow length for bearing glyphs, in pixels
    pub glyph_length: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            disc: Rgba(0, 255, 0, 26),
            rim: Rgba(0, 255, 0, 255),
            player: Rgba(0, 255, 0, 255),
            contact: Rgba(255, 0, 0, 255),
            focused: Rgba(0, 255, 255, 255),
            indicator: Rgba(255, 96, 0, 255),
            glyph_length: 7.0,
        }
    }
}

/// Screen direction a bearing glyph points at after rotating by `bearing_degrees`
///
/// The glyph rests pointing down (+y) and rotates clockwise on screen.
pub fn glyph_direction(bearing_degrees: f32) -> Vec2 {
    let (sin, cos) = bearing_degrees.to_radians().sin_cos();
    Vec2::new(-sin, cos)
}

/// Arrow-shaped glyph: a shaft ending in a tip with two barbs
fn glyph_ops(anchor: Vec2, bearing_degrees: f32, style: &OverlayStyle) -> Vec<DrawOp> {
    let dir = glyph_direction(bearing_degrees);
    let side = dir.perp();
    let half = style.glyph_length / 2.0;

    let tip = anchor + dir * half;
    let tail = anchor - dir * half;
    let barb_a = tip - dir * half + side * (half * 0.8);
    let barb_b = tip - dir * half - side * (half * 0.8);

    [(tail, tip), (barb_a, tip), (barb_b, tip)]
        .into_iter()
        .map(|(from, to)| DrawOp::Line {
            x1: from.x.round() as i32,
            y1: from.y.round() as i32,
            x2: to.x.round() as i32,
            y2: to.y.round() as i32,
            color: style.indicator,
        })
        .collect()
}

/// Draw operations for one radar frame
pub fn overlay_ops(
    contacts: &[RadarContact],
    focused: Option<&str>,
    radar: &RadarConfig,
    style: &OverlayStyle,
) -> Vec<DrawOp> {
    let center = radar.center().round() as i32;
    let radius = radar.center().floor() as u32;

    let mut ops = vec![
        DrawOp::Clear(Rgba::TRANSPARENT),
        DrawOp::FilledCircle {
            cx: center,
            cy: center,
            radius,
            color: style.disc,
        },
        DrawOp::Circle {
            cx: center,
            cy: center,
            radius,
            color: style.rim,
        },
        DrawOp::FilledCircle {
            cx: center,
            cy: center,
            radius: 3,
            color: style.player,
        },
    ];

    for contact in contacts {
        let point = &contact.point;
        if point.in_bounds {
            let color = if focused == Some(contact.label.as_str()) {
                style.focused
            } else {
                style.contact
            };
            ops.push(DrawOp::FilledCircle {
                cx: point.x.round() as i32,
                cy: point.y.round() as i32,
                radius: 4,
                color,
            });
        } else {
            ops.extend(glyph_ops(point.position(), point.bearing_degrees, style));
        }
    }

    ops
}

/// Rasterize a radar frame
pub fn render(
    contacts: &[RadarContact],
    focused: Option<&str>,
    radar: &RadarConfig,
    style: &OverlayStyle,
) -> Canvas {
    let side = radar.size.ceil() as u32 + 1;
    Canvas::new(side, side)
        .draw_all(overlay_ops(contacts, focused, radar, style))
        .execute_ops()
}
