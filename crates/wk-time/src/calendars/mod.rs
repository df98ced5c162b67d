//! Concrete holiday calendars.

/// Dutch holidays and observances.
pub mod netherlands;

pub use netherlands::Netherlands;
