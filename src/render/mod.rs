//! Projection and mask generation for the rendering surface
//!
//! Everything here is a pure function of sky state. The external display
//! loop consumes `ScreenPoint` and `MoonShapeMask`; this module never
//! paints pixels or touches the weather state.

pub mod projection;
pub mod shape;

pub use projection::{ScreenPoint, ScreenProjector};
pub use shape::{MaskPixel, MoonShapeMask};
