//! Control-value mapping for the parameter sink
//!
//! Assembles one serializable snapshot per update from the astronomical
//! branch and the weather resolver. The sink (the host synth engine) reads
//! the mapped scalars; the exact ranges are configuration, not correctness.

use serde::{Deserialize, Serialize};

use crate::core::astronomy::{self, SkyPosition};
use crate::core::calendar::CalendarTime;
use crate::core::config::InstallationConfig;
use crate::core::error::Result;
use crate::render::projection::{ScreenPoint, ScreenProjector};
use crate::render::shape::MoonShapeMask;
use crate::weather::{Condition, WeatherResolver};

/// Everything downstream consumers need from one engine update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlFrame {
    pub julian_date: f64,
    pub phase: f64,
    pub position: SkyPosition,
    pub screen: ScreenPoint,
    pub condition: Condition,
    /// Phase fraction mapped onto the configured control range
    pub phase_control: f64,
    /// Altitude (clamped to [0, 90] and normalized) mapped onto the
    /// configured control range, damped by the weather attenuation
    pub altitude_control: f64,
}

impl ControlFrame {
    /// Compute a frame for a wall-clock snapshot and resolver state
    ///
    /// Pure except for reading the resolver's effective condition; the mask
    /// is generated separately since only the display loop needs it.
    pub fn compute(
        time: &CalendarTime,
        config: &InstallationConfig,
        resolver: &WeatherResolver,
    ) -> Result<Self> {
        let jd = time.to_julian_date();
        let phase = astronomy::phase_fraction(jd);
        let position = astronomy::simplified_position(jd, time.month, time.hour);
        let screen = ScreenProjector::from_config(config)?.project(&position);
        let condition = resolver.effective_state();

        let altitude_unit = (position.altitude_deg / 90.0).clamp(0.0, 1.0);
        Ok(Self {
            julian_date: jd,
            phase,
            position,
            screen,
            condition,
            phase_control: config.phase_control.map_unit(phase),
            altitude_control: config.altitude_control.map_unit(altitude_unit)
                * condition.attenuation(),
        })
    }

    /// Mask for this frame's phase at the configured diameter
    pub fn mask(&self, config: &InstallationConfig) -> MoonShapeMask {
        MoonShapeMask::generate(self.phase, config.mask_diameter_px)
    }
}
