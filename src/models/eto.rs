//! ETo calculation result models
//!
//! Results are value objects the caller may persist verbatim, so the serde
//! names follow the stored document format (camelCase, with the historical
//! `es_tmax`/`es_tmin` keys kept as-is).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::SiteLocation;
use crate::WeatherObservation;

/// A completed reference evapotranspiration calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EtoResult {
    /// Reference evapotranspiration [mm/day], non-negative, 2 dp
    pub eto: f64,
    /// Named intermediate quantities, rounded for reporting
    pub intermediate_values: IntermediateValues,
    /// Echo of the validated inputs plus the fixed site parameters
    pub inputs: EtoInputs,
    /// When the calculation ran (not when the weather was observed)
    pub calculation_date: DateTime<Utc>,
    /// Fixed site label
    pub location: String,
}

/// Intermediate physical quantities of the Penman-Monteith pipeline.
///
/// Rounded at the reporting boundary only: 2 dp for magnitudes around one
/// or above, 4 dp for the smaller terms. Non-finite values report as 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntermediateValues {
    /// Mean temperature [°C]
    pub tmean: f64,
    /// Slope of the saturation vapor pressure curve [kPa/°C]
    pub delta: f64,
    /// Atmospheric pressure [kPa]
    pub pressure: f64,
    /// Psychrometric constant [kPa/°C]
    pub gamma: f64,
    /// Saturation vapor pressure at tmax [kPa]
    #[serde(rename = "es_tmax")]
    pub es_tmax: f64,
    /// Saturation vapor pressure at tmin [kPa]
    #[serde(rename = "es_tmin")]
    pub es_tmin: f64,
    /// Mean saturation vapor pressure [kPa]
    pub es: f64,
    /// Actual vapor pressure [kPa]
    pub ea: f64,
    /// Net radiation [MJ/m²/day]
    pub rn: f64,
    /// Net shortwave radiation [MJ/m²/day]
    pub rns: f64,
    /// Net longwave radiation [MJ/m²/day]
    pub rnl: f64,
    /// Extraterrestrial radiation [MJ/m²/day]
    pub ra: f64,
    /// Clear-sky solar radiation [MJ/m²/day]
    pub rso: f64,
    /// Solar declination [rad]
    pub solar_declination: f64,
    /// Sunset hour angle [rad]
    pub sunset_hour_angle: f64,
    /// Wind speed at 2 m [m/s]
    pub u2: f64,
    /// Soil heat flux [MJ/m²/day], zero at the daily timestep
    pub soil_heat_flux: f64,
    /// Radiation term of the combination equation
    pub numerator1: f64,
    /// Aerodynamic term of the combination equation
    pub numerator2: f64,
    /// Denominator of the combination equation
    pub denominator: f64,
}

/// Input echo stored with every result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EtoInputs {
    pub tmax: f64,
    pub tmin: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub solar_radiation: f64,
    pub julian_day: u16,
    pub latitude: f64,
    pub altitude: f64,
}

impl EtoInputs {
    pub(crate) fn new(observation: &WeatherObservation, site: SiteLocation) -> Self {
        Self {
            tmax: observation.tmax,
            tmin: observation.tmin,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed,
            solar_radiation: observation.solar_radiation,
            julian_day: observation.julian_day,
            latitude: site.latitude_deg,
            altitude: site.altitude_m,
        }
    }
}
