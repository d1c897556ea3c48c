use std::sync::Arc;
use std::time::Duration;

use crate::player::NormalizeOptions;
use crate::source::PlayerSource;

/// Default bound on one host round-trip.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(2000);

/// Shared application state injected into route handlers via axum::extract::State.
/// Immutable after startup; every request reads its own snapshot from `source`.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PlayerSource>,
    pub fetch_timeout: Duration,
    pub normalize: Arc<NormalizeOptions>,
}

impl AppState {
    pub fn new(source: Arc<dyn PlayerSource>) -> Self {
        Self {
            source,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            normalize: Arc::new(NormalizeOptions::default()),
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize = Arc::new(options);
        self
    }
}
