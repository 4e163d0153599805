pub mod api;
pub mod health;
pub mod metrics_handler;
pub mod quote;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::{pricing::PricingEngine, templates::TemplateSet};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Swapped wholesale on configuration reload
    pub engine: Arc<ArcSwap<PricingEngine>>,
    pub templates: Arc<TemplateSet>,
}

impl AppState {
    pub fn new(engine: PricingEngine, templates: TemplateSet) -> Self {
        Self {
            engine: Arc::new(ArcSwap::from_pointee(engine)),
            templates: Arc::new(templates),
        }
    }
}
