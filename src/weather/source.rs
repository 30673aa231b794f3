//! Condition sources for the weather resolver
//!
//! The live feed the installation polls is external; the resolver only sees
//! this trait. The sources here cover tests and the demo binary.

use rand::Rng;

use crate::core::error::{LunatoneError, Result};
use crate::weather::Condition;

/// External supplier of the current sky condition
///
/// Implementations are assumed synchronous from the resolver's point of
/// view; any timeout or retry policy belongs to the caller that schedules
/// the polls.
pub trait ConditionSource {
    fn current_condition(&mut self) -> Result<Condition>;
}

/// Fixed-sequence source for tests; errors once the script runs out
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Condition>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Condition>) -> Self {
        Self { script, next: 0 }
    }

    /// Number of polls served so far
    pub fn polls(&self) -> usize {
        self.next
    }
}

impl ConditionSource for ScriptedSource {
    fn current_condition(&mut self) -> Result<Condition> {
        match self.script.get(self.next) {
            Some(&condition) => {
                self.next += 1;
                Ok(condition)
            }
            None => Err(LunatoneError::WeatherSource(
                "scripted source exhausted".into(),
            )),
        }
    }
}

/// Randomized source for the demo binary, weighted toward clear skies
pub struct SimulatedSource<R: Rng> {
    rng: R,
}

impl<R: Rng> SimulatedSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ConditionSource for SimulatedSource<R> {
    fn current_condition(&mut self) -> Result<Condition> {
        let roll: f64 = self.rng.gen();
        Ok(match roll {
            r if r < 0.45 => Condition::Clear,
            r if r < 0.75 => Condition::Cloudy,
            r if r < 0.92 => Condition::Rainy,
            _ => Condition::Snowy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_then_errors() {
        let mut source = ScriptedSource::new(vec![Condition::Rainy, Condition::Clear]);
        assert_eq!(source.current_condition().unwrap(), Condition::Rainy);
        assert_eq!(source.current_condition().unwrap(), Condition::Clear);
        assert!(source.current_condition().is_err());
        assert_eq!(source.polls(), 2);
    }

    #[test]
    fn test_simulated_source_always_yields_a_condition() {
        let mut source = SimulatedSource::new(rand::thread_rng());
        for _ in 0..100 {
            assert!(source.current_condition().is_ok());
        }
    }
}
