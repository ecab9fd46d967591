//! A collection of common data structures.

pub mod charging_profile;
pub mod common_types;
pub mod data_transfer;
pub mod meter_value;

pub use charging_profile::*;
pub use common_types::*;
pub use data_transfer::*;
pub use meter_value::*;
