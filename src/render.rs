//! The render pass: projects generator output through the viewport and
//! emits backend-agnostic draw commands in a fixed back-to-front order.

use crate::geometry;
use crate::relativity::special::Event;
use crate::scene::{LadderBarn, Scene};
use crate::viewport::Viewport;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const LIGHT_CONE_COLOR: Color = Color::rgb(0xff, 0xcc, 0x33);
pub const GRID_COLOR: Color = Color::rgb(0xdd, 0xdd, 0xdd);
/// rgba(0, 0, 200, 0.5) flattened over the white background.
pub const BOOSTED_GRID_COLOR: Color = Color::rgb(0x80, 0x80, 0xe4);
pub const AXIS_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);
pub const HYPERBOLA_COLOR: Color = Color::rgb(0x00, 0x88, 0x00);
pub const TWIN_STATIONARY_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);
pub const TWIN_OUTBOUND_COLOR: Color = Color::rgb(0x00, 0x00, 0xff);
pub const TWIN_RETURN_COLOR: Color = Color::rgb(0xff, 0x00, 0x00);

/// Opacity of the filled region between an extended body's edges.
const STRIP_FILL_ALPHA: f64 = 0.1;

/// Radius of worldline interval markers, in pixels.
const MARKER_RADIUS: f64 = 4.0;

/// One drawing-surface primitive in screen coordinates. Consumable by any
/// 2-D backend; this crate ships a PNG rasterizer and a terminal canvas.
#[derive(Debug, Clone)]
pub enum DrawCmd {
    /// Stroke an open polyline.
    Polyline {
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
    },
    /// Fill a closed polygon at the given opacity.
    Polygon {
        points: Vec<(f64, f64)>,
        color: Color,
        alpha: f64,
    },
    /// Fill a circular marker.
    Disc {
        center: (f64, f64),
        radius: f64,
        color: Color,
    },
}

/// Runs one full render pass. Pure: the output is a function of the scene,
/// β, and the viewport only, and nothing is mutated.
///
/// Layering is fixed back to front: light cone, lab grid, boosted grid,
/// axes, velocity worldlines, body, ladder-barn, twin paths, hyperbolas.
pub fn render(scene: &Scene, beta: f64, vp: &Viewport) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();

    for seg in geometry::light_cone() {
        cmds.push(stroke_segment(vp, seg, LIGHT_CONE_COLOR, 2.6));
    }
    for seg in geometry::grid_lines(0.0) {
        cmds.push(stroke_segment(vp, seg, GRID_COLOR, 1.0));
    }
    for seg in geometry::grid_lines(beta) {
        cmds.push(stroke_segment(vp, seg, BOOSTED_GRID_COLOR, 1.0));
    }
    for seg in geometry::axes() {
        cmds.push(stroke_segment(vp, seg, AXIS_COLOR, 2.0));
    }

    for vel in scene.velocities() {
        let (line, markers) = geometry::velocity_worldline(vel.v, beta);
        cmds.push(stroke_segment(vp, line, vel.color, 2.0));
        for m in markers {
            cmds.push(DrawCmd::Disc {
                center: vp.project(m),
                radius: MARKER_RADIUS,
                color: vel.color,
            });
        }
    }

    if let Some(cat) = scene.cat() {
        let strip = geometry::strip(|_| cat.head, |_| cat.tail, beta);
        push_strip(&mut cmds, vp, &strip, cat.color, 2.0);
        for e in strip.head.iter().chain(strip.tail.iter()) {
            cmds.push(DrawCmd::Disc {
                center: vp.project(*e),
                radius: MARKER_RADIUS,
                color: cat.color,
            });
        }
    }

    if let Some(lb) = scene.ladder_barn() {
        let barn = geometry::strip(|_| lb.barn.head, |_| lb.barn.tail, beta);
        push_strip(&mut cmds, vp, &barn, lb.barn.color, 1.5);
        let ladder = geometry::strip(LadderBarn::ladder_left, LadderBarn::ladder_right, beta);
        push_strip(&mut cmds, vp, &ladder, lb.ladder_color, 2.0);
    }

    if scene.twin_paradox() {
        let [stationary, outbound, ret] = geometry::twin_paths(beta);
        for (path, color) in [
            (stationary, TWIN_STATIONARY_COLOR),
            (outbound, TWIN_OUTBOUND_COLOR),
            (ret, TWIN_RETURN_COLOR),
        ] {
            cmds.push(stroke_polyline(vp, &path, color, 2.0));
        }
    }

    if scene.hyperbolas() {
        for curve in geometry::hyperbolas(beta) {
            cmds.push(stroke_polyline(vp, &curve, HYPERBOLA_COLOR, 2.0));
        }
    }

    cmds
}

fn stroke_segment(vp: &Viewport, seg: geometry::Segment, color: Color, width: f64) -> DrawCmd {
    stroke_polyline(vp, &seg, color, width)
}

fn stroke_polyline(vp: &Viewport, points: &[Event], color: Color, width: f64) -> DrawCmd {
    DrawCmd::Polyline {
        points: points.iter().map(|e| vp.project(*e)).collect(),
        color,
        width,
    }
}

/// Shared fill-then-outline rendering for bodies, the barn, and the ladder:
/// the quad strip between the head line and the reversed tail line is filled
/// translucently, then both edges are stroked.
fn push_strip(
    cmds: &mut Vec<DrawCmd>,
    vp: &Viewport,
    strip: &geometry::Strip,
    color: Color,
    width: f64,
) {
    let mut polygon: Vec<(f64, f64)> = strip.head.iter().map(|e| vp.project(*e)).collect();
    polygon.extend(strip.tail.iter().rev().map(|e| vp.project(*e)));
    cmds.push(DrawCmd::Polygon {
        points: polygon,
        color,
        alpha: STRIP_FILL_ALPHA,
    });
    cmds.push(stroke_polyline(vp, &strip.head, color, width));
    cmds.push(stroke_polyline(vp, &strip.tail, color, width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polyline_points(cmd: &DrawCmd) -> &[(f64, f64)] {
        match cmd {
            DrawCmd::Polyline { points, .. } => points,
            other => panic!("expected a polyline, got {other:?}"),
        }
    }

    #[test]
    fn empty_scene_at_rest_draws_coincident_grids() {
        let scene = Scene::new();
        let vp = Viewport::new(800.0, 600.0);
        let cmds = render(&scene, 0.0, &vp);
        // Light cone (2) + lab grid (110) + boosted grid (110) + axes (2).
        assert_eq!(cmds.len(), 224);
        for i in 0..110 {
            let lab = polyline_points(&cmds[2 + i]);
            let boosted = polyline_points(&cmds[112 + i]);
            for (a, b) in lab.iter().zip(boosted) {
                assert_relative_eq!(a.0, b.0, epsilon = 1e-9);
                assert_relative_eq!(a.1, b.1, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn layering_starts_with_the_light_cone() {
        let scene = Scene::new();
        let cmds = render(&scene, 0.3, &Viewport::new(640.0, 480.0));
        match &cmds[0] {
            DrawCmd::Polyline { color, width, .. } => {
                assert_eq!(*color, LIGHT_CONE_COLOR);
                assert_relative_eq!(*width, 2.6);
            }
            other => panic!("expected the light cone first, got {other:?}"),
        }
    }

    #[test]
    fn body_emits_fill_before_outlines_and_markers() {
        let mut scene = Scene::new();
        scene.add_cat().unwrap();
        let vp = Viewport::new(800.0, 600.0);
        let cmds = render(&scene, 0.5, &vp);
        let body_cmds = &cmds[224..];
        assert!(matches!(body_cmds[0], DrawCmd::Polygon { alpha, .. } if alpha == 0.1));
        assert!(matches!(body_cmds[1], DrawCmd::Polyline { .. }));
        assert!(matches!(body_cmds[2], DrawCmd::Polyline { .. }));
        // 19 samples on each of the two edges.
        let discs = body_cmds[3..].iter().filter(|c| matches!(c, DrawCmd::Disc { .. }));
        assert_eq!(discs.count(), 38);
    }

    #[test]
    fn projected_body_span_contracts_with_boost() {
        let mut scene = Scene::new();
        scene.add_cat().unwrap();
        let vp = Viewport::new(800.0, 600.0);
        let span_at = |beta: f64| {
            let cmds = render(&scene, beta, &vp);
            // Body commands follow the 224 background ones: fill polygon,
            // then the head and tail outlines.
            let head = polyline_points(&cmds[225]).to_vec();
            let tail = polyline_points(&cmds[226]).to_vec();
            // Both edges are straight lines; measure the horizontal gap at
            // the head's first sample height.
            let slope = (tail[1].0 - tail[0].0) / (tail[1].1 - tail[0].1);
            let tail_x_at = |y: f64| tail[0].0 + slope * (y - tail[0].1);
            tail_x_at(head[0].1) - head[0].0
        };
        let rest = span_at(0.0);
        let moving = span_at(0.6);
        assert_relative_eq!(moving, rest / 1.25, epsilon = 1e-6);
    }
}
