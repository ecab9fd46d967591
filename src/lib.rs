#![allow(dead_code, unused_imports)]
pub mod authentication_list_management;
pub mod common;
pub mod common_types;
pub mod error;
pub mod firmware_management;
pub mod point_init;
pub mod runtime;
pub mod server_init;
pub mod smart_charging;
pub mod validate;
#[macro_use]
extern crate lazy_static;
