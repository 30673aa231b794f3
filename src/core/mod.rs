pub mod astronomy;
pub mod calendar;
pub mod config;
pub mod error;

pub use calendar::CalendarTime;
pub use config::InstallationConfig;
pub use error::{LunatoneError, Result};
