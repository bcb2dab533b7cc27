//! Common types and fixed site parameters

use serde::{Deserialize, Serialize};

/// A calculation site: latitude and altitude above sea level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SiteLocation {
    /// Degrees, negative for the southern hemisphere
    pub latitude_deg: f64,
    /// Meters above sea level
    pub altitude_m: f64,
}

impl SiteLocation {
    /// Latitude in radians, as used by the radiation equations
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// The Palmas (TO), Brazil reference site. The ETo pipeline is pinned to
/// this location; the radiation sub-pipeline has only been verified for it.
pub const PALMAS: SiteLocation = SiteLocation {
    latitude_deg: -10.0,
    altitude_m: 230.0,
};

/// Display label stored alongside every calculation result
pub const PALMAS_LABEL: &str = "Palmas (TO), Brazil";
