//! The OCPP-J runtime: the station-side components that turn the message
//! definitions in [`crate::point_init`] and [`crate::server_init`] into a
//! running Charge Point — transport, dispatch, persistence, timers and the
//! per-domain managers that sit on top of them.

pub mod authorization;
pub mod config;
pub mod connectors;
pub mod device_model;
pub mod dispatcher;
pub mod events;
pub mod fifo;
pub mod maintenance;
pub mod meter_values_manager;
pub mod schema_registry;
pub mod security;
pub mod status_manager;
pub mod timer;
pub mod transaction_manager;
pub mod transport;
pub mod worker_pool;
