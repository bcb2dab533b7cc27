//! Reference evapotranspiration (ETo) engine for the Demeter irrigation
//! advisory platform.
//!
//! Implements the FAO-56 Penman-Monteith method for the fixed Palmas (TO)
//! site. The crate is a pure, synchronous calculation core: callers hand it
//! a [`WeatherObservation`] and get back an [`EtoResult`] they can persist
//! verbatim. Weather fetching, storage and the advisory chat layer live
//! outside this crate.

pub mod calendar;
pub mod error;
pub mod eto;
pub mod models;
pub mod types;
pub mod validation;

pub use calendar::{current_day_of_year, day_of_year};
pub use error::{EtoError, ValidationError};
pub use eto::calculate_eto;
pub use models::*;
pub use types::{SiteLocation, PALMAS};
pub use validation::validate_observation;
