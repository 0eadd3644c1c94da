use ferrous_blacklist_application::use_cases::LookupHostUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupHostUseCase>,
}
