use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::model::{Forecast, format_forecast};

/// Owned recorder holding the most recently recorded location and condition.
///
/// Both fields start out empty and are only changed by [`record_forecast`].
///
/// [`record_forecast`]: ConditionRecorder::record_forecast
#[derive(Debug, Clone, Default)]
pub struct ConditionRecorder {
    last: Forecast,
}

impl ConditionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the current location and condition, returning the summary sentence.
    ///
    /// Never fails. The returned sentence depends only on the arguments.
    pub fn record_forecast(
        &mut self,
        location: impl Into<String>,
        condition: impl Into<String>,
    ) -> String {
        self.last = Forecast::new(location, condition);
        debug!(
            location = %self.last.location,
            condition = %self.last.condition,
            "recorded forecast"
        );
        format_forecast(&self.last.location, &self.last.condition)
    }

    pub fn current_location(&self) -> &str {
        &self.last.location
    }

    pub fn current_condition(&self) -> &str {
        &self.last.condition
    }

    pub fn last_forecast(&self) -> &Forecast {
        &self.last
    }
}

/// Cloneable, thread-safe handle over a single recorded forecast.
///
/// Both fields are replaced under one write lock, so readers never observe a
/// location from one call paired with a condition from another.
#[derive(Debug, Clone, Default)]
pub struct SharedRecorder {
    inner: Arc<RwLock<Forecast>>,
}

impl SharedRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_forecast(
        &self,
        location: impl Into<String>,
        condition: impl Into<String>,
    ) -> String {
        let forecast = Forecast::new(location, condition);
        let summary = forecast.summary();
        debug!(
            location = %forecast.location,
            condition = %forecast.condition,
            "recorded forecast"
        );
        *self.inner.write() = forecast;
        summary
    }

    pub fn current_location(&self) -> String {
        self.inner.read().location.clone()
    }

    pub fn current_condition(&self) -> String {
        self.inner.read().condition.clone()
    }

    /// Consistent copy of both fields.
    pub fn snapshot(&self) -> Forecast {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CONDITION_SEPARATOR;
    use std::thread;

    #[test]
    fn starts_empty() {
        let recorder = ConditionRecorder::new();
        assert_eq!(recorder.current_location(), "");
        assert_eq!(recorder.current_condition(), "");
    }

    #[test]
    fn records_and_returns_sentence() {
        let mut recorder = ConditionRecorder::new();
        let out = recorder.record_forecast("Springfield", "sunny");

        assert_eq!(out, "Springfield - current weather condition: sunny");
        assert_eq!(recorder.current_location(), "Springfield");
        assert_eq!(recorder.current_condition(), "sunny");
    }

    #[test]
    fn empty_strings_are_recorded() {
        let mut recorder = ConditionRecorder::new();
        recorder.record_forecast("Oslo", "fog");

        let out = recorder.record_forecast("", "");
        assert_eq!(out, " - current weather condition: ");
        assert_eq!(recorder.last_forecast(), &Forecast::default());
    }

    #[test]
    fn last_write_wins() {
        let mut recorder = ConditionRecorder::new();
        recorder.record_forecast("Paris", "rain");
        let out = recorder.record_forecast("Tokyo", "clear");

        assert_eq!(out, "Tokyo - current weather condition: clear");
        assert_eq!(recorder.last_forecast(), &Forecast::new("Tokyo", "clear"));
    }

    #[test]
    fn result_does_not_depend_on_prior_state() {
        let mut fresh = ConditionRecorder::new();
        let mut used = ConditionRecorder::new();
        used.record_forecast("Lima", "drizzle");

        assert_eq!(
            fresh.record_forecast("Cairo", "hot"),
            used.record_forecast("Cairo", "hot")
        );
    }

    #[test]
    fn repeated_identical_calls_are_idempotent() {
        let mut recorder = ConditionRecorder::new();
        let first = recorder.record_forecast("Berlin", "overcast");
        for _ in 0..5 {
            assert_eq!(recorder.record_forecast("Berlin", "overcast"), first);
        }
        assert_eq!(recorder.current_location(), "Berlin");
        assert_eq!(recorder.current_condition(), "overcast");
    }

    #[test]
    fn separator_text_in_arguments_round_trips_into_state() {
        let mut recorder = ConditionRecorder::new();
        let loc = format!("x{CONDITION_SEPARATOR}y");
        let out = recorder.record_forecast(loc.clone(), CONDITION_SEPARATOR);

        assert_eq!(out, format!("{loc}{CONDITION_SEPARATOR}{CONDITION_SEPARATOR}"));
        assert_eq!(recorder.current_location(), loc);
        assert_eq!(recorder.current_condition(), CONDITION_SEPARATOR);
    }

    #[test]
    fn shared_handles_see_the_same_state() {
        let recorder = SharedRecorder::new();
        let other = recorder.clone();

        let out = recorder.record_forecast("Springfield", "sunny");
        assert_eq!(out, "Springfield - current weather condition: sunny");
        assert_eq!(other.current_location(), "Springfield");
        assert_eq!(other.current_condition(), "sunny");

        other.record_forecast("Tokyo", "clear");
        assert_eq!(recorder.snapshot(), Forecast::new("Tokyo", "clear"));
    }

    #[test]
    fn concurrent_writers_never_leave_a_mixed_pair() {
        let recorder = SharedRecorder::new();
        let pairs = [("Paris", "rain"), ("Tokyo", "clear"), ("Lima", "drizzle"), ("Oslo", "fog")];

        let handles: Vec<_> = pairs
            .iter()
            .map(|&(loc, cond)| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        recorder.record_forecast(loc, cond);
                        let snap = recorder.snapshot();
                        assert!(pairs.contains(&(snap.location.as_str(), snap.condition.as_str())));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        let last = recorder.snapshot();
        assert!(pairs.contains(&(last.location.as_str(), last.condition.as_str())));
    }
}
