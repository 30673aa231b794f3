//! Weather resolution for the installation
//!
//! Combines an auto-polled sky condition with a manually cycled override.
//! The resolver owns the only mutable state in the engine; mutation goes
//! through `&mut self`, so a single owner gives the serialized-writer
//! discipline for free.

pub mod source;

use serde::{Deserialize, Serialize};

use crate::weather::source::ConditionSource;

/// A concrete sky condition, the value downstream mapping consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Condition {
    #[default]
    Clear,
    Cloudy,
    Rainy,
    Snowy,
}

impl Condition {
    /// Brightness damping applied to moon-driven controls (1.0 = no damping)
    pub fn attenuation(&self) -> f64 {
        match self {
            Self::Clear => 1.0,
            Self::Cloudy => 0.6,
            Self::Rainy => 0.35,
            Self::Snowy => 0.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
        }
    }
}

/// Nominal weather mode shown to the operator
///
/// `Auto` is a mode selector, never an effective condition; the four
/// concrete modes pin the effective condition regardless of polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WeatherMode {
    #[default]
    Auto,
    Clear,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Auto => Self::Clear,
            Self::Clear => Self::Cloudy,
            Self::Cloudy => Self::Rainy,
            Self::Rainy => Self::Snowy,
            Self::Snowy => Self::Auto,
        }
    }

    fn override_condition(self) -> Option<Condition> {
        match self {
            Self::Auto => None,
            Self::Clear => Some(Condition::Clear),
            Self::Cloudy => Some(Condition::Cloudy),
            Self::Rainy => Some(Condition::Rainy),
            Self::Snowy => Some(Condition::Snowy),
        }
    }
}

/// Layered manual/automatic weather state machine
#[derive(Debug, Clone)]
pub struct WeatherResolver {
    manual_override: Option<Condition>,
    auto_condition: Condition,
    last_poll: Option<u64>,
    poll_interval_secs: u64,
}

impl WeatherResolver {
    /// Initialize with no override and one seeding poll
    ///
    /// A failing source at startup is logged and falls back to `Clear`;
    /// the installation must come up even when the feed is down.
    pub fn new(source: &mut dyn ConditionSource, poll_interval_secs: u64, now_secs: u64) -> Self {
        let mut resolver = Self {
            manual_override: None,
            auto_condition: Condition::default(),
            last_poll: None,
            poll_interval_secs,
        };
        resolver.poll(source, now_secs);
        resolver
    }

    /// Advance the manual mode: Auto -> Clear -> Cloudy -> Rainy -> Snowy -> Auto
    ///
    /// Returns the new nominal mode for operator feedback. Selecting `Auto`
    /// clears the override and falls back to the polled condition.
    pub fn cycle_manual(&mut self) -> WeatherMode {
        let next = self.mode().next();
        self.manual_override = next.override_condition();
        next
    }

    /// Re-poll the condition source if the poll interval has elapsed
    ///
    /// Leaves the manual override untouched. `now_secs` is whatever
    /// monotonic-enough clock the scheduler runs on; the resolver owns no
    /// timer of its own.
    pub fn update(&mut self, source: &mut dyn ConditionSource, now_secs: u64) {
        let due = match self.last_poll {
            Some(last) => now_secs.saturating_sub(last) >= self.poll_interval_secs,
            None => true,
        };
        if due {
            self.poll(source, now_secs);
        }
    }

    /// Re-poll immediately, bypassing the poll-interval gate
    pub fn force_update(&mut self, source: &mut dyn ConditionSource, now_secs: u64) {
        self.poll(source, now_secs);
    }

    /// The resolved concrete condition driving the sound mapping
    pub fn effective_state(&self) -> Condition {
        self.manual_override.unwrap_or(self.auto_condition)
    }

    /// Operator-facing label of the nominal mode, not the effective state
    pub fn display_state(&self) -> &'static str {
        self.mode().label()
    }

    /// Current nominal mode
    pub fn mode(&self) -> WeatherMode {
        match self.manual_override {
            None => WeatherMode::Auto,
            Some(Condition::Clear) => WeatherMode::Clear,
            Some(Condition::Cloudy) => WeatherMode::Cloudy,
            Some(Condition::Rainy) => WeatherMode::Rainy,
            Some(Condition::Snowy) => WeatherMode::Snowy,
        }
    }

    /// Last successfully or unsuccessfully attempted poll time
    pub fn last_poll(&self) -> Option<u64> {
        self.last_poll
    }

    fn poll(&mut self, source: &mut dyn ConditionSource, now_secs: u64) {
        // A source outage keeps the last known condition; never fatal
        match source.current_condition() {
            Ok(condition) => self.auto_condition = condition,
            Err(e) => {
                tracing::warn!("Weather source poll failed, keeping {:?}: {e}", self.auto_condition);
            }
        }
        self.last_poll = Some(now_secs);
    }
}
