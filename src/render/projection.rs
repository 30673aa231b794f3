//! Screen projection for the sky window
//!
//! Maps horizontal sky coordinates onto the installation canvas through a
//! fixed viewing azimuth and field of view.

use serde::{Deserialize, Serialize};

use crate::core::astronomy::{wrap_degrees_signed, SkyPosition};
use crate::core::config::InstallationConfig;
use crate::core::error::{LunatoneError, Result};

/// Altitude span mapped onto the canvas height, in degrees
pub const ALTITUDE_SPAN_DEG: f64 = 90.0;

/// Projected canvas position for a sky object
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

/// Fixed-window projector from sky coordinates to canvas pixels
#[derive(Debug, Clone)]
pub struct ScreenProjector {
    /// Compass azimuth the canvas faces, in degrees
    view_azimuth_deg: f64,
    /// Horizontal field of view in degrees
    fov_deg: f64,
    /// Canvas size in pixels
    canvas: (f64, f64),
    /// Object radius in pixels, used as the off-canvas margin
    object_radius: f64,
}

impl ScreenProjector {
    /// Create a projector, rejecting degenerate geometry
    pub fn new(
        view_azimuth_deg: f64,
        fov_deg: f64,
        canvas_width: f64,
        canvas_height: f64,
        object_radius: f64,
    ) -> Result<Self> {
        if !(fov_deg > 0.0 && fov_deg <= 360.0) {
            return Err(LunatoneError::InvalidConfiguration(format!(
                "field of view ({fov_deg}) must be in (0, 360]"
            )));
        }
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return Err(LunatoneError::InvalidConfiguration(format!(
                "canvas ({canvas_width} x {canvas_height}) must be positive"
            )));
        }
        if object_radius < 0.0 {
            return Err(LunatoneError::InvalidConfiguration(format!(
                "object radius ({object_radius}) must not be negative"
            )));
        }
        Ok(Self {
            view_azimuth_deg,
            fov_deg,
            canvas: (canvas_width, canvas_height),
            object_radius,
        })
    }

    /// Build a projector from the installation config
    pub fn from_config(config: &InstallationConfig) -> Result<Self> {
        Self::new(
            config.view_azimuth_deg,
            config.field_of_view_deg,
            config.canvas_width,
            config.canvas_height,
            config.moon_radius_px,
        )
    }

    /// Project a sky position onto the canvas
    ///
    /// Horizontal: the signed azimuth offset from the viewing direction,
    /// wrapped into [-180, 180), maps linearly from [-fov/2, fov/2] onto
    /// [0, canvas_width]. Vertical: altitude [0, 90] maps onto
    /// [canvas_height, 0], higher altitude higher on screen.
    ///
    /// The point is visible when the altitude is above the horizon, the
    /// offset lies within the half-window (boundary inclusive), and the
    /// object's disc overlaps the canvas at all.
    pub fn project(&self, pos: &SkyPosition) -> ScreenPoint {
        let offset = wrap_degrees_signed(pos.azimuth_deg - self.view_azimuth_deg);
        let half_fov = self.fov_deg / 2.0;

        let (w, h) = self.canvas;
        let x = (offset + half_fov) / self.fov_deg * w;
        let y = h - (pos.altitude_deg / ALTITUDE_SPAN_DEG) * h;

        let in_window = pos.altitude_deg > 0.0 && offset.abs() <= half_fov;
        let r = self.object_radius;
        let on_canvas = x + r >= 0.0 && x - r <= w && y + r >= 0.0 && y - r <= h;

        ScreenPoint {
            x,
            y,
            visible: in_window && on_canvas,
        }
    }
}
