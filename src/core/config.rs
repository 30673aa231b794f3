//! Installation configuration with documented constants
//!
//! All tunable numbers for the engine are collected here with explanations
//! of their purpose. Values ship with defaults matching the installed site
//! and can be overridden from a TOML file.

use serde::{Deserialize, Serialize};

use crate::core::error::{LunatoneError, Result};

/// Inclusive output range for a mapped control value
///
/// A unit-interval input (phase fraction, normalized altitude) is mapped
/// linearly onto [min, max]. Ranges are allowed to be inverted (min > max)
/// for controls that should fall as the input rises.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
}

impl ControlRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit-interval value onto this range
    pub fn map_unit(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

/// Configuration for the installation engine
///
/// These values describe the fixed observation point, the virtual window the
/// moon is projected through, and the control ranges handed to the sound
/// engine. Changing them reframes the installation; none of them affect the
/// astronomy itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationConfig {
    // === OBSERVATION POINT ===
    /// Fixed numeric UTC offset of the site in hours (negative = west)
    ///
    /// A full timezone database is a non-goal; the installation does not
    /// move and daylight-saving drift is accepted.
    pub utc_offset_hours: f64,

    // === VIEWING WINDOW ===
    /// Compass azimuth the canvas faces, in degrees
    pub view_azimuth_deg: f64,

    /// Horizontal field of view in degrees (0, 360]
    ///
    /// The moon is visible when its azimuth falls within half of this window
    /// on either side of `view_azimuth_deg`.
    pub field_of_view_deg: f64,

    /// Canvas size in pixels
    pub canvas_width: f64,
    pub canvas_height: f64,

    /// Rendered moon radius in pixels, used as the off-canvas margin
    pub moon_radius_px: f64,

    /// Side length of the rasterized phase mask in pixels
    pub mask_diameter_px: u32,

    // === WEATHER ===
    /// Minimum seconds between automatic condition polls
    ///
    /// `force_update` bypasses this; the external scheduler decides how
    /// often `update` is even attempted.
    pub weather_poll_interval_secs: u64,

    // === SOUND MAPPING ===
    /// Control range fed by the phase fraction
    pub phase_control: ControlRange,

    /// Control range fed by the normalized altitude
    pub altitude_control: ControlRange,
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            // Site: fixed point at UTC-3, window facing south
            utc_offset_hours: -3.0,
            view_azimuth_deg: 180.0,
            field_of_view_deg: 120.0,

            // Canvas
            canvas_width: 1280.0,
            canvas_height: 720.0,
            moon_radius_px: 40.0,
            mask_diameter_px: 80,

            // Weather poll cadence (15 minutes)
            weather_poll_interval_secs: 900,

            // Sound mapping (MIDI-style 0-127 controls)
            phase_control: ControlRange::new(0.0, 127.0),
            altitude_control: ControlRange::new(0.0, 127.0),
        }
    }
}

impl InstallationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file, then validate it
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.field_of_view_deg > 0.0 && self.field_of_view_deg <= 360.0) {
            return Err(LunatoneError::InvalidConfiguration(format!(
                "field_of_view_deg ({}) must be in (0, 360]",
                self.field_of_view_deg
            )));
        }

        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(LunatoneError::InvalidConfiguration(format!(
                "canvas dimensions ({} x {}) must be positive",
                self.canvas_width, self.canvas_height
            )));
        }

        if self.moon_radius_px < 0.0 {
            return Err(LunatoneError::InvalidConfiguration(format!(
                "moon_radius_px ({}) must not be negative",
                self.moon_radius_px
            )));
        }

        if self.mask_diameter_px == 0 {
            return Err(LunatoneError::InvalidConfiguration(
                "mask_diameter_px must be at least 1".into(),
            ));
        }

        for (name, range) in [
            ("phase_control", self.phase_control),
            ("altitude_control", self.altitude_control),
        ] {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(LunatoneError::InvalidConfiguration(format!(
                    "{name} range must be finite, got [{}, {}]",
                    range.min, range.max
                )));
            }
        }

        Ok(())
    }
}
