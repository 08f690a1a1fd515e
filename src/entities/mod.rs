// Entity Models
//
// - Driver: identity (case-insensitive name) + ordered trips + summary
// - Trip: immutable value
// - DriverRegistry: lookup and registration order

pub mod driver;
pub mod trip;

pub use driver::{driver_key, Driver, DriverRegistry};
pub use trip::Trip;
