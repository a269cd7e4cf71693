use std::sync::Arc;

use crate::config::BusinessConfig;
use crate::store::PhoneStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PhoneStore>,
    pub business: Arc<BusinessConfig>,
}

impl AppState {
    pub fn new(store: PhoneStore, business: BusinessConfig) -> Self {
        Self {
            store: Arc::new(store),
            business: Arc::new(business),
        }
    }
}
