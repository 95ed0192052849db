//! Infrastructure services

mod repeater_service;

pub use repeater_service::{RepeaterService, RepeaterServiceTrait};
