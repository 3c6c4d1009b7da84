//! State

use std::sync::Arc;

use vitrine_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) service_name: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, service_name: String) -> Self {
        Self { app, service_name }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, service_name: String) -> Arc<Self> {
        Arc::new(Self::new(app, service_name))
    }
}
