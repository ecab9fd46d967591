//! A collection of messages initiated by the central server
pub mod change_availability;
pub mod change_configuration;
pub mod clear_cache;
pub mod clear_charging_profile;
pub mod get_composite_schedule;
pub mod get_configuration;
pub mod get_diagnostics;
pub mod get_local_list_version;
pub mod remote_start_transaction;
pub mod remote_stop_transaction;
pub mod reset;
pub mod send_local_list;
pub mod set_charging_profile;
pub mod trigger_message;
pub mod unlock_connector;
pub mod update_firmware;

pub use change_availability::*;
pub use change_configuration::*;
pub use clear_cache::*;
pub use clear_charging_profile::*;
pub use get_composite_schedule::*;
pub use get_configuration::*;
pub use get_diagnostics::*;
pub use get_local_list_version::*;
pub use remote_start_transaction::*;
pub use remote_stop_transaction::*;
pub use reset::*;
pub use send_local_list::*;
pub use set_charging_profile::*;
pub use trigger_message::*;
pub use unlock_connector::*;
pub use update_firmware::*;

pub use crate::common::data_transfer::*;
