//! Daily weather summary record

use serde::{Deserialize, Serialize};

use super::format_day;

/// One day of forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Weather {
    /// Forecast summary text
    pub forecast: String,
    /// Day string, e.g. `"Mon Sep 03 2018"`
    pub time: String,
}

impl Weather {
    #[must_use]
    pub fn new(forecast: String, epoch_seconds: i64) -> Self {
        Self {
            forecast,
            time: format_day(epoch_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_truncates_time_to_day() {
        let weather = Weather::new("Partly cloudy until afternoon.".to_string(), 1_535_958_000);
        assert_eq!(weather.forecast, "Partly cloudy until afternoon.");
        assert_eq!(weather.time, "Mon Sep 03 2018");
    }
}
