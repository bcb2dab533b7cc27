//! Crop reference data for irrigation advice
//!
//! Single-value FAO crop coefficients for the crops the platform supports.
//! Crop water demand (ETc) is the reference evapotranspiration scaled by
//! the crop coefficient.

use serde::{Deserialize, Serialize};

use crate::eto::round_to;

/// Crops supported by the advisory layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Corn,
    Soybean,
    CommonBean,
    Tomato,
    Coffee,
}

impl CropType {
    /// FAO crop coefficient (Kc), mid-season single value
    pub fn kc(&self) -> f64 {
        match self {
            CropType::Corn => 1.2,
            CropType::Soybean => 1.15,
            CropType::CommonBean => 1.05,
            CropType::Tomato => 1.15,
            CropType::Coffee => 1.0,
        }
    }

    /// Growth cycle length in days, None for perennials
    pub fn cycle_days(&self) -> Option<(u16, u16)> {
        match self {
            CropType::Corn => Some((120, 150)),
            CropType::Soybean => Some((100, 140)),
            CropType::CommonBean => Some((65, 100)),
            CropType::Tomato => Some((120, 150)),
            CropType::Coffee => None,
        }
    }

    /// Seasonal water demand range [mm] (per year for perennials)
    pub fn water_demand_mm(&self) -> (u16, u16) {
        match self {
            CropType::Corn => (500, 800),
            CropType::Soybean => (450, 700),
            CropType::CommonBean => (300, 500),
            CropType::Tomato => (600, 1000),
            CropType::Coffee => (1200, 1800),
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Corn => write!(f, "Corn"),
            CropType::Soybean => write!(f, "Soybean"),
            CropType::CommonBean => write!(f, "Common bean"),
            CropType::Tomato => write!(f, "Tomato"),
            CropType::Coffee => write!(f, "Coffee"),
        }
    }
}

/// Crop evapotranspiration [mm/day]: ETc = Kc * ETo, reported at 2 dp
pub fn crop_evapotranspiration(eto: f64, crop: CropType) -> f64 {
    round_to(crop.kc() * eto, 2)
}
