//! Validation for weather observations
//!
//! Checks run in a fixed order and fail fast on the first violation, so the
//! reported message always names the first offending field.

use crate::error::ValidationError;
use crate::models::WeatherObservation;

/// Validate an observation against the physical domain of the ETo pipeline
pub fn validate_observation(observation: &WeatherObservation) -> Result<(), ValidationError> {
    // Typed fields can still smuggle in NaN or infinity, which is the
    // struct-level form of "not a number"
    if !observation.tmax.is_finite() || !observation.tmin.is_finite() {
        return Err(ValidationError::TypeMismatch(
            "Temperature values (tmax, tmin) must be numbers".to_string(),
        ));
    }
    if !observation.humidity.is_finite() {
        return Err(ValidationError::TypeMismatch(
            "Humidity must be a number".to_string(),
        ));
    }
    if !observation.wind_speed.is_finite() {
        return Err(ValidationError::TypeMismatch(
            "Wind speed must be a number".to_string(),
        ));
    }
    if !observation.solar_radiation.is_finite() {
        return Err(ValidationError::TypeMismatch(
            "Solar radiation must be a number".to_string(),
        ));
    }

    if observation.tmax < observation.tmin {
        return Err(ValidationError::RangeViolation(
            "Maximum temperature cannot be less than minimum temperature".to_string(),
        ));
    }
    if observation.tmax < -50.0 || observation.tmax > 60.0 {
        return Err(ValidationError::RangeViolation(
            "Maximum temperature must be between -50°C and 60°C".to_string(),
        ));
    }
    if observation.tmin < -50.0 || observation.tmin > 60.0 {
        return Err(ValidationError::RangeViolation(
            "Minimum temperature must be between -50°C and 60°C".to_string(),
        ));
    }
    if observation.humidity < 0.0 || observation.humidity > 100.0 {
        return Err(ValidationError::RangeViolation(
            "Humidity must be between 0% and 100%".to_string(),
        ));
    }
    if observation.wind_speed < 0.0 || observation.wind_speed > 50.0 {
        return Err(ValidationError::RangeViolation(
            "Wind speed must be between 0 and 50 m/s".to_string(),
        ));
    }
    if observation.solar_radiation < 0.0 || observation.solar_radiation > 50.0 {
        return Err(ValidationError::RangeViolation(
            "Solar radiation must be between 0 and 50 MJ/m²/day".to_string(),
        ));
    }
    if observation.julian_day < 1 || observation.julian_day > 366 {
        return Err(ValidationError::RangeViolation(
            "Julian day must be between 1 and 366".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_observation() -> WeatherObservation {
        WeatherObservation {
            tmax: 32.5,
            tmin: 22.8,
            humidity: 65.0,
            wind_speed: 2.1,
            solar_radiation: 15.0,
            julian_day: 135,
        }
    }

    #[test]
    fn test_valid_observation_passes() {
        assert!(validate_observation(&valid_observation()).is_ok());
    }

    #[test]
    fn test_nan_temperature_is_type_mismatch() {
        let obs = WeatherObservation {
            tmax: f64::NAN,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch(_)));
        assert!(err.to_string().contains("must be numbers"));
    }

    #[test]
    fn test_infinite_humidity_is_type_mismatch() {
        let obs = WeatherObservation {
            humidity: f64::INFINITY,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert_eq!(err.to_string(), "Humidity must be a number");
    }

    #[test]
    fn test_tmax_below_tmin_rejected() {
        let obs = WeatherObservation {
            tmax: 20.0,
            tmin: 25.0,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert!(err
            .to_string()
            .contains("Maximum temperature cannot be less than minimum"));
    }

    #[test]
    fn test_temperature_order_checked_before_range() {
        // tmax is also out of range here, but the ordering check reports first
        let obs = WeatherObservation {
            tmax: -60.0,
            tmin: -55.0,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert!(err.to_string().contains("cannot be less than minimum"));
    }

    #[test]
    fn test_temperature_out_of_range() {
        let obs = WeatherObservation {
            tmax: 65.0,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Maximum temperature must be between -50°C and 60°C"
        );

        let obs = WeatherObservation {
            tmax: 30.0,
            tmin: -55.0,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Minimum temperature must be between -50°C and 60°C"
        );
    }

    #[test]
    fn test_humidity_out_of_range() {
        for humidity in [-1.0, 150.0] {
            let obs = WeatherObservation {
                humidity,
                ..valid_observation()
            };
            let err = validate_observation(&obs).unwrap_err();
            assert_eq!(err.to_string(), "Humidity must be between 0% and 100%");
        }
    }

    #[test]
    fn test_wind_speed_out_of_range() {
        let obs = WeatherObservation {
            wind_speed: 51.0,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert_eq!(err.to_string(), "Wind speed must be between 0 and 50 m/s");
    }

    #[test]
    fn test_solar_radiation_out_of_range() {
        let obs = WeatherObservation {
            solar_radiation: 55.0,
            ..valid_observation()
        };
        let err = validate_observation(&obs).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Solar radiation must be between 0 and 50 MJ/m²/day"
        );
    }

    #[test]
    fn test_julian_day_out_of_range() {
        for julian_day in [0, 367] {
            let obs = WeatherObservation {
                julian_day,
                ..valid_observation()
            };
            let err = validate_observation(&obs).unwrap_err();
            assert_eq!(err.to_string(), "Julian day must be between 1 and 366");
        }
    }

    #[test]
    fn test_domain_edges_accepted() {
        let lower = WeatherObservation {
            tmax: -50.0,
            tmin: -50.0,
            humidity: 0.0,
            wind_speed: 0.0,
            solar_radiation: 0.0,
            julian_day: 1,
        };
        assert!(validate_observation(&lower).is_ok());

        let upper = WeatherObservation {
            tmax: 60.0,
            tmin: 60.0,
            humidity: 100.0,
            wind_speed: 50.0,
            solar_radiation: 50.0,
            julian_day: 366,
        };
        assert!(validate_observation(&upper).is_ok());
    }
}
