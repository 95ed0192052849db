//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{RepeaterService, RepeaterServiceTrait};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub repeater_service: Arc<dyn RepeaterServiceTrait>,
}

impl AppState {
    pub fn new(repeater_service: Arc<dyn RepeaterServiceTrait>) -> Self {
        Self { repeater_service }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RepeaterService::new()))
    }
}
