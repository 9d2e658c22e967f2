//! World-to-screen projection with pan and zoom.
//!
//! X and Y share one uniform scale so angles survive projection: the light
//! cone must render at exactly 45 degrees for any viewport aspect ratio.

use crate::relativity::special::Event;

/// Fixed inset between the drawable domain and the viewport edge, in pixels.
pub const MARGIN: f64 = 32.0;

/// Base world domain fitted into the viewport at zoom 1: 36 spatial by
/// 18 temporal units.
pub const BASE_DOMAIN_X: f64 = 36.0;
pub const BASE_DOMAIN_T: f64 = 18.0;

/// Extended drawable domain: x in [-36, 36], t in [0, 36].
pub const DOMAIN_X: f64 = 72.0;
pub const DOMAIN_T: f64 = 36.0;

/// Non-extended domain used to convert drag pixels into world units.
const PAN_DOMAIN_X: f64 = 24.0;
const PAN_DOMAIN_T: f64 = 12.0;

/// Multiplicative steps applied per discrete zoom gesture.
const ZOOM_IN_STEP: f64 = 1.05;
const ZOOM_OUT_STEP: f64 = 0.95;

/// Viewport state: pixel dimensions plus pan offset (world units) and the
/// uniform zoom factor.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pan_x: f64,
    pub pan_t: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pan_x: 0.0,
            pan_t: 0.0,
            zoom: 2.0,
        }
    }

    /// The shared per-axis scale in pixels per world unit.
    pub fn scale(&self) -> f64 {
        let sx = (self.width - 2.0 * MARGIN) / BASE_DOMAIN_X;
        let sy = (self.height - 2.0 * MARGIN) / BASE_DOMAIN_T;
        sx.min(sy) * self.zoom
    }

    /// Maps a world event to screen pixels. The origin sits at the
    /// horizontal center, one margin above the bottom edge; time increases
    /// upward.
    pub fn project(&self, e: Event) -> (f64, f64) {
        let s = self.scale();
        let origin_x = self.width / 2.0;
        let origin_y = self.height - MARGIN;
        (
            origin_x + (e.x + self.pan_x) * s,
            origin_y - (e.t + self.pan_t) * s,
        )
    }

    /// Accumulates a drag gesture given in pixels. The pixel delta converts
    /// to world units through per-axis scales over the non-extended 24x12
    /// domain; dragging up pans the view down in time.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        let scale_x = (self.width - 2.0 * MARGIN) / PAN_DOMAIN_X;
        let scale_y = (self.height - 2.0 * MARGIN) / PAN_DOMAIN_T;
        self.pan_x += dx / scale_x;
        self.pan_t -= dy / scale_y;
    }

    /// One discrete zoom-in step.
    pub fn zoom_in(&mut self) {
        self.zoom *= ZOOM_IN_STEP;
    }

    /// One discrete zoom-out step.
    pub fn zoom_out(&mut self) {
        self.zoom *= ZOOM_OUT_STEP;
    }
}
