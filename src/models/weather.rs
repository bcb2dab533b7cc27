//! Weather observation model
//!
//! Field names on the wire are camelCase to match the stored document
//! format used by the persistence collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendar::current_day_of_year;
use crate::error::ValidationError;

/// A daily weather observation, the sole input of the ETo pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Maximum temperature [°C]
    pub tmax: f64,
    /// Minimum temperature [°C]
    pub tmin: f64,
    /// Relative humidity [%]
    pub humidity: f64,
    /// Wind speed at 2 m height [m/s]
    pub wind_speed: f64,
    /// Solar radiation [MJ/m²/day]
    pub solar_radiation: f64,
    /// Day of year (1-366)
    pub julian_day: u16,
}

impl WeatherObservation {
    /// Build an observation from a loose JSON record (manual form entry or
    /// an external weather API payload). Missing or non-numeric fields fail
    /// with the same messages the validation stage uses.
    pub fn from_json(record: &Value) -> Result<Self, ValidationError> {
        let tmax = numeric_field(record, "tmax");
        let tmin = numeric_field(record, "tmin");
        let (Some(tmax), Some(tmin)) = (tmax, tmin) else {
            return Err(ValidationError::TypeMismatch(
                "Temperature values (tmax, tmin) must be numbers".to_string(),
            ));
        };

        let humidity = numeric_field(record, "humidity").ok_or_else(|| {
            ValidationError::TypeMismatch("Humidity must be a number".to_string())
        })?;
        let wind_speed = numeric_field(record, "windSpeed").ok_or_else(|| {
            ValidationError::TypeMismatch("Wind speed must be a number".to_string())
        })?;
        let solar_radiation = numeric_field(record, "solarRadiation").ok_or_else(|| {
            ValidationError::TypeMismatch("Solar radiation must be a number".to_string())
        })?;
        let julian_day = numeric_field(record, "julianDay").ok_or_else(|| {
            ValidationError::TypeMismatch("Julian day must be a number".to_string())
        })?;

        Ok(Self {
            tmax,
            tmin,
            humidity,
            wind_speed,
            solar_radiation,
            // Saturating cast; out-of-range days are caught by validation
            julian_day: julian_day as u16,
        })
    }

    /// Fixed illustrative observation paired with today's day of year.
    /// For demos and tests, not production calculations.
    pub fn sample() -> Self {
        Self {
            tmax: 32.5,
            tmin: 22.8,
            humidity: 65.0,
            wind_speed: 2.1,
            solar_radiation: 15.0,
            julian_day: current_day_of_year(),
        }
    }
}

/// Fixed sample inputs for demos and tests
pub fn sample_observation() -> WeatherObservation {
    WeatherObservation::sample()
}

fn numeric_field(record: &Value, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_valid_record() {
        let record = json!({
            "tmax": 32.5,
            "tmin": 22.8,
            "humidity": 65,
            "windSpeed": 2.1,
            "solarRadiation": 15,
            "julianDay": 135
        });
        let obs = WeatherObservation::from_json(&record).unwrap();
        assert_eq!(obs.tmax, 32.5);
        assert_eq!(obs.humidity, 65.0);
        assert_eq!(obs.julian_day, 135);
    }

    #[test]
    fn test_from_json_string_temperature_rejected() {
        let record = json!({
            "tmax": "32.5",
            "tmin": 22.8,
            "humidity": 65,
            "windSpeed": 2.1,
            "solarRadiation": 15,
            "julianDay": 135
        });
        let err = WeatherObservation::from_json(&record).unwrap_err();
        assert!(err.to_string().contains("must be numbers"));
    }

    #[test]
    fn test_from_json_missing_wind_speed() {
        let record = json!({
            "tmax": 32.5,
            "tmin": 22.8,
            "humidity": 65,
            "solarRadiation": 15,
            "julianDay": 135
        });
        let err = WeatherObservation::from_json(&record).unwrap_err();
        assert_eq!(err.to_string(), "Wind speed must be a number");
    }

    #[test]
    fn test_serde_uses_document_field_names() {
        let obs = WeatherObservation::sample();
        let value = serde_json::to_value(obs).unwrap();
        assert!(value.get("windSpeed").is_some());
        assert!(value.get("solarRadiation").is_some());
        assert!(value.get("julianDay").is_some());
    }

    #[test]
    fn test_sample_observation_values() {
        let obs = sample_observation();
        assert_eq!(obs.tmax, 32.5);
        assert_eq!(obs.tmin, 22.8);
        assert_eq!(obs.humidity, 65.0);
        assert_eq!(obs.wind_speed, 2.1);
        assert_eq!(obs.solar_radiation, 15.0);
        assert!((1..=366).contains(&obs.julian_day));
    }
}
