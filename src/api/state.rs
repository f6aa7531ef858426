//! API server state

use std::sync::Arc;

use crate::store::EmployeeStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Shared store handle, established once at startup
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}
