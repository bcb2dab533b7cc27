//! FAO-56 Penman-Monteith reference evapotranspiration
//!
//! A single linear pipeline: temperature terms, vapor pressure terms, the
//! radiation balance, then the combination equation. Everything runs on
//! unrounded f64 values; rounding happens once, when the result document is
//! assembled. The computation is pinned to the Palmas site constants.

use chrono::Utc;

use crate::error::EtoCalcResult;
use crate::models::{EtoInputs, EtoResult, IntermediateValues, WeatherObservation};
use crate::types::{PALMAS, PALMAS_LABEL};
use crate::validation::validate_observation;

/// Grass reference crop albedo
const ALBEDO: f64 = 0.23;

/// Stefan-Boltzmann constant [MJ K⁻⁴ m⁻² day⁻¹]
const STEFAN_BOLTZMANN: f64 = 4.903e-9;

/// Solar constant [MJ m⁻² min⁻¹]
const SOLAR_CONSTANT: f64 = 0.082;

/// Soil heat flux [MJ/m²/day], zero under the daily-timestep assumption
const SOIL_HEAT_FLUX: f64 = 0.0;

/// Radiation balance terms for one observation
struct RadiationComponents {
    rn: f64,
    rns: f64,
    rnl: f64,
    ra: f64,
    rso: f64,
    solar_declination: f64,
    sunset_hour_angle: f64,
}

/// Compute daily reference evapotranspiration for an observation.
///
/// Validates the observation first; validation failures surface as
/// [`crate::EtoError`] with the calculation-stage prefix. For valid input
/// the pipeline never fails: non-finite diagnostics are reported as 0 and
/// the final ETo is clamped to be non-negative.
pub fn calculate_eto(observation: &WeatherObservation) -> EtoCalcResult<EtoResult> {
    validate_observation(observation)?;

    let WeatherObservation {
        tmax,
        tmin,
        humidity,
        wind_speed,
        solar_radiation,
        julian_day,
    } = *observation;

    // Mean temperature and the slope of the saturation vapor pressure curve
    let tmean = (tmax + tmin) / 2.0;
    let delta =
        4098.0 * saturation_vapor_pressure(tmean) / ((tmean + 237.3) * (tmean + 237.3));

    // Psychrometric terms from the site pressure
    let pressure = 101.3 * ((293.0 - 0.0065 * PALMAS.altitude_m) / 293.0).powf(5.26);
    let gamma = 0.665 * pressure;

    // Vapor pressure: saturation evaluated at the temperature extremes,
    // actual from relative humidity
    let es_tmax = saturation_vapor_pressure(tmax);
    let es_tmin = saturation_vapor_pressure(tmin);
    let es = (es_tmax + es_tmin) / 2.0;
    let ea = (humidity / 100.0) * es;

    let radiation = net_radiation(solar_radiation, tmax, tmin, ea, julian_day);

    // Wind is measured at 2 m height already, no profile correction
    let u2 = wind_speed;

    // Penman-Monteith combination equation
    let numerator1 = 0.408 * delta * (radiation.rn - SOIL_HEAT_FLUX);
    let numerator2 = gamma * (900.0 / (tmean + 273.0)) * u2 * (es - ea);
    let denominator = delta + gamma * (1.0 + 0.34 * u2);
    let eto = (numerator1 + numerator2) / denominator;

    // f64::max treats NaN as absent, so a degenerate quotient clamps to 0
    let eto = round_to(eto.max(0.0), 2);

    tracing::debug!(
        eto,
        julian_day = u64::from(julian_day),
        "computed reference evapotranspiration"
    );

    Ok(EtoResult {
        eto,
        intermediate_values: IntermediateValues {
            tmean: round_to(tmean, 2),
            delta: round_to(delta, 4),
            pressure: round_to(pressure, 2),
            gamma: round_to(gamma, 4),
            es_tmax: round_to(es_tmax, 4),
            es_tmin: round_to(es_tmin, 4),
            es: round_to(es, 4),
            ea: round_to(ea, 4),
            rn: round_to(radiation.rn, 2),
            rns: round_to(radiation.rns, 2),
            rnl: round_to(radiation.rnl, 2),
            ra: round_to(radiation.ra, 2),
            rso: round_to(radiation.rso, 2),
            solar_declination: round_to(radiation.solar_declination, 4),
            sunset_hour_angle: round_to(radiation.sunset_hour_angle, 4),
            u2: round_to(u2, 2),
            soil_heat_flux: round_to(SOIL_HEAT_FLUX, 2),
            numerator1: round_to(numerator1, 4),
            numerator2: round_to(numerator2, 4),
            denominator: round_to(denominator, 4),
        },
        inputs: EtoInputs::new(observation, PALMAS),
        calculation_date: Utc::now(),
        location: PALMAS_LABEL.to_string(),
    })
}

/// Saturation vapor pressure at a temperature [kPa] (Tetens equation)
fn saturation_vapor_pressure(temperature: f64) -> f64 {
    0.6108 * ((17.27 * temperature) / (temperature + 237.3)).exp()
}

/// Net radiation balance from measured solar radiation, the temperature
/// extremes, actual vapor pressure and the day of year.
fn net_radiation(rs: f64, tmax: f64, tmin: f64, ea: f64, julian_day: u16) -> RadiationComponents {
    use std::f64::consts::PI;

    let day = f64::from(julian_day);

    // Solar geometry for the fixed latitude
    let solar_declination = 0.409 * ((2.0 * PI / 365.0) * day - 1.39).sin();
    let lat_rad = PALMAS.latitude_rad();
    let sunset_hour_angle = (-lat_rad.tan() * solar_declination.tan()).acos();

    // Extraterrestrial radiation, scaled by the inverse relative
    // Earth-Sun distance
    let dr = 1.0 + 0.033 * ((2.0 * PI / 365.0) * day).cos();
    let ra = (24.0 * 60.0 / PI)
        * SOLAR_CONSTANT
        * dr
        * (sunset_hour_angle * lat_rad.sin() * solar_declination.sin()
            + lat_rad.cos() * solar_declination.cos() * sunset_hour_angle.sin());

    // Clear-sky radiation at the site altitude
    let rso = (0.75 + 2e-5 * PALMAS.altitude_m) * ra;

    // Net shortwave
    let rns = (1.0 - ALBEDO) * rs;

    // Net longwave from the Stefan-Boltzmann balance, damped by humidity
    // and cloudiness
    let tmax_k = tmax + 273.16;
    let tmin_k = tmin + 273.16;
    let cloudiness_factor = 1.35 * (rs / rso).min(1.0) - 0.35;
    let vapor_pressure_factor = 0.34 - 0.14 * ea.sqrt();
    let rnl = STEFAN_BOLTZMANN
        * ((tmax_k.powi(4) + tmin_k.powi(4)) / 2.0)
        * vapor_pressure_factor
        * cloudiness_factor;

    RadiationComponents {
        rn: rns - rnl,
        rns,
        rnl,
        ra,
        rso,
        solar_declination,
        sunset_hour_angle,
    }
}

/// Round to a fixed number of decimals for reporting. Non-finite values
/// report as 0 instead of propagating NaN/infinity into stored documents.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
