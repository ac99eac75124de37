use std::sync::Arc;

use bloodlens_core::application::BloodlensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BloodlensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BloodlensService) -> Self {
        Self { args, service }
    }
}
