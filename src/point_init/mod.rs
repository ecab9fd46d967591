//! # A collection of messages initiated by the charge point
pub mod authorize;
pub mod boot_notification;
pub mod data_transfer;
pub mod diagnostic_status_notification;
pub mod firmware_status_notification;
pub mod heartbeat;
pub mod meter_values;
pub mod start_transaction;
pub mod status_notification;
pub mod stop_transaction;

pub use authorize::*;
pub use boot_notification::*;
pub use data_transfer::*;
pub use diagnostic_status_notification::*;
pub use firmware_status_notification::*;
pub use heartbeat::*;
pub use meter_values::*;
pub use start_transaction::*;
pub use status_notification::*;
pub use stop_transaction::*;
