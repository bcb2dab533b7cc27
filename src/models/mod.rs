//! Domain models for the ETo engine

mod crop;
mod eto;
mod weather;

pub use crop::*;
pub use eto::*;
pub use weather::*;
