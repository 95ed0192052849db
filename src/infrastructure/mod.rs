//! Infrastructure layer - service implementations and process plumbing

pub mod logging;
pub mod services;
