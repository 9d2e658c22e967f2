//! Per-entity geometry generators.
//!
//! Each generator is a pure function of (β, entity parameters) producing
//! ordered world-space point sequences over the fixed sampling domain
//! x in [-36, 36], t in [0, 36]. Every emitted point is boosted
//! individually rather than interpolating boosted endpoints; for the
//! linear Lorentz transform the two agree, but the per-point form is kept
//! so the generators stay correct under non-linear transforms.

use crate::relativity::special::{Event, boost};
use crate::viewport::{DOMAIN_T, DOMAIN_X};

/// Lab-time spacing of interval markers and strip samples.
const MARKER_DT: f64 = 2.0;

/// A two-point line segment in world space.
pub type Segment = [Event; 2];

/// The two edge polylines of an extended body, head first.
#[derive(Debug, Clone)]
pub struct Strip {
    pub head: Vec<Event>,
    pub tail: Vec<Event>,
}

/// The invariant light-cone diagonals t = x and t = -x.
pub fn light_cone() -> [Segment; 2] {
    [
        [Event::new(0.0, 0.0), Event::new(DOMAIN_X / 2.0, DOMAIN_T)],
        [Event::new(-DOMAIN_X / 2.0, DOMAIN_T), Event::new(0.0, 0.0)],
    ]
}

/// The lab-frame axes: t-axis at x = 0 and x-axis at t = 0.
pub fn axes() -> [Segment; 2] {
    [
        [Event::new(0.0, 0.0), Event::new(0.0, DOMAIN_T)],
        [Event::new(-DOMAIN_X / 2.0, 0.0), Event::new(DOMAIN_X / 2.0, 0.0)],
    ]
}

/// Grid lines at unit spacing across the full domain, both orientations,
/// each endpoint boosted by β. The undistorted lab grid is the β = 0 case.
pub fn grid_lines(beta: f64) -> Vec<Segment> {
    let half_x = DOMAIN_X / 2.0;
    let mut lines = Vec::with_capacity((DOMAIN_T + DOMAIN_X) as usize + 2);
    for t in 0..=DOMAIN_T as i32 {
        let t = f64::from(t);
        lines.push([
            boost(Event::new(-half_x, t), beta),
            boost(Event::new(half_x, t), beta),
        ]);
    }
    for x in -(half_x as i32)..=half_x as i32 {
        let x = f64::from(x);
        lines.push([
            boost(Event::new(x, 0.0), beta),
            boost(Event::new(x, DOMAIN_T), beta),
        ]);
    }
    lines
}

/// Boosted endpoints of the worldline x = v·t from the origin to the top of
/// the domain, plus interval markers every two lab-time units along the
/// unboosted line, each boosted independently.
pub fn velocity_worldline(v: f64, beta: f64) -> (Segment, Vec<Event>) {
    let line = [
        boost(Event::new(0.0, 0.0), beta),
        boost(Event::new(v * DOMAIN_T, DOMAIN_T), beta),
    ];
    let mut markers = Vec::new();
    let mut t = MARKER_DT;
    while t < DOMAIN_T {
        markers.push(boost(Event::new(v * t, t), beta));
        t += MARKER_DT;
    }
    (line, markers)
}

/// The unified extended-strip generator: samples lab time from 0 to 36 in
/// steps of 2, evaluates both edge functions, and boosts each event. Bodies
/// and the barn pass constant edges; the ladder passes its linear edges.
pub fn strip(
    head_edge: impl Fn(f64) -> f64,
    tail_edge: impl Fn(f64) -> f64,
    beta: f64,
) -> Strip {
    let mut head = Vec::new();
    let mut tail = Vec::new();
    let mut t = 0.0;
    while t <= DOMAIN_T {
        head.push(boost(Event::new(head_edge(t), t), beta));
        tail.push(boost(Event::new(tail_edge(t), t), beta));
        t += MARKER_DT;
    }
    Strip { head, tail }
}

/// The three twin-paradox legs: stationary twin at x = 0 for t in [0, 8],
/// outbound traveler t = 2x and return traveler t = -2x + 8 for x in [0, 2].
pub fn twin_paths(beta: f64) -> [Vec<Event>; 3] {
    let mut stationary = Vec::new();
    let mut t = 0.0;
    while t <= 8.0 {
        stationary.push(boost(Event::new(0.0, t), beta));
        t += 0.5;
    }
    let leg = |t_of_x: fn(f64) -> f64, beta: f64| {
        (0..=20)
            .map(|i| {
                let x = f64::from(i) * 0.1;
                boost(Event::new(x, t_of_x(x)), beta)
            })
            .collect::<Vec<_>>()
    };
    let outbound = leg(|x| 2.0 * x, beta);
    let ret = leg(|x| -2.0 * x + 8.0, beta);
    [stationary, outbound, ret]
}

/// Constant-proper-time loci t = sqrt(x² + τ²) for τ in {2, 4, ..., 34},
/// sampled across x in [-38, 38] and clipped to t < 36. One curve per τ.
pub fn hyperbolas(beta: f64) -> Vec<Vec<Event>> {
    (1..=17)
        .map(|k| {
            let tau = f64::from(k) * 2.0;
            let mut curve = Vec::new();
            for i in 0..=760 {
                let x = -38.0 + f64::from(i) * 0.1;
                let t = (x * x + tau * tau).sqrt();
                if t >= DOMAIN_T {
                    continue;
                }
                curve.push(boost(Event::new(x, t), beta));
            }
            curve
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::relativity::special::gamma;

    #[test]
    fn grid_has_one_line_per_unit_step() {
        let grid = grid_lines(0.0);
        // 37 horizontal (t = 0..=36) plus 73 vertical (x = -36..=36).
        assert_eq!(grid.len(), 110);
    }

    #[test]
    fn velocity_endpoints_match_closed_form_at_0_6() {
        // boost(21.6, 36, 0.6) with γ = 1.25 lands back on the t'-axis.
        let (line, markers) = velocity_worldline(0.6, 0.6);
        assert_relative_eq!(line[0].x, 0.0);
        assert_relative_eq!(line[0].t, 0.0);
        assert_relative_eq!(line[1].x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(line[1].t, 28.8, epsilon = 1e-9);
        // Markers at t = 2, 4, ..., 34.
        assert_eq!(markers.len(), 17);
    }

    #[test]
    fn markers_are_boosted_per_point() {
        let (_, markers) = velocity_worldline(0.5, 0.3);
        for (i, m) in markers.iter().enumerate() {
            let t = 2.0 * (i + 1) as f64;
            let expected = boost(Event::new(0.5 * t, t), 0.3);
            assert_relative_eq!(m.x, expected.x);
            assert_relative_eq!(m.t, expected.t);
        }
    }

    #[test]
    fn body_strip_contracts_by_one_over_gamma() {
        let beta = 0.6;
        let s = strip(|_| 0.0, |_| 2.0, beta);
        assert_eq!(s.head.len(), 19);
        assert_eq!(s.tail.len(), 19);
        // Both boosted edges are parallel lines of slope dx'/dt' = -β.
        // Extrapolating each to t' = 0 gives the body's width at fixed
        // boosted time, which must be the contracted 2/γ.
        let at_t0 = |pts: &[Event]| pts[0].x + beta * pts[0].t;
        let width = at_t0(&s.tail) - at_t0(&s.head);
        assert_relative_eq!(width, 2.0 / gamma(beta), epsilon = 1e-9);
        assert!(width < 2.0);
    }

    #[test]
    fn twin_paths_have_fixed_lab_frame_endpoints() {
        let [stationary, outbound, ret] = twin_paths(0.0);
        assert_eq!(stationary.len(), 17);
        assert_relative_eq!(stationary[16].t, 8.0);
        assert_relative_eq!(outbound[20].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(outbound[20].t, 4.0, epsilon = 1e-9);
        assert_relative_eq!(ret[0].t, 8.0);
        assert_relative_eq!(ret[20].t, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn hyperbolas_stay_below_the_domain_top() {
        let family = hyperbolas(0.4);
        assert_eq!(family.len(), 17);
        for curve in hyperbolas(0.0) {
            assert!(!curve.is_empty());
            for p in curve {
                assert!(p.t < DOMAIN_T);
            }
        }
    }
}
