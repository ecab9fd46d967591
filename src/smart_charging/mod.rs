pub mod clear_charging_profile;
pub use clear_charging_profile::{ClearChargingProfileRequest, ClearChargingProfileResponse};

pub mod get_composite_schedule;
pub use get_composite_schedule::{GetCompositeScheduleRequest, GetCompositeScheduleResponse};

pub mod set_charging_profile;
pub use set_charging_profile::{SetChargingProfileRequest, SetChargingProfileResponse};
