use serde::{Deserialize, Serialize};
use std::fmt;

/// Text placed between the location and the condition in a summary sentence.
pub const CONDITION_SEPARATOR: &str = " - current weather condition: ";

/// Build the summary sentence for a location and condition.
///
/// Inputs are used verbatim: no trimming, escaping or validation.
pub fn format_forecast(location: &str, condition: &str) -> String {
    let mut out =
        String::with_capacity(location.len() + CONDITION_SEPARATOR.len() + condition.len());
    out.push_str(location);
    out.push_str(CONDITION_SEPARATOR);
    out.push_str(condition);
    out
}

/// The last recorded location/condition pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Forecast {
    pub location: String,
    pub condition: String,
}

impl Forecast {
    pub fn new(location: impl Into<String>, condition: impl Into<String>) -> Self {
        Self { location: location.into(), condition: condition.into() }
    }

    pub fn summary(&self) -> String {
        format_forecast(&self.location, &self.condition)
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.location, CONDITION_SEPARATOR, self.condition)
    }
}
