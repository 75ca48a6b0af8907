use std::sync::Arc;

use roster_business::{BusinessConfig, EhttpFetcher, FetchService};

use crate::widgets::MembersPanelState;

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    /// Transport used for the members request.
    pub fetcher: Arc<dyn FetchService>,
    pub members: MembersPanelState,
}

impl Default for State {
    fn default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let config = BusinessConfig::from_env();
        #[cfg(target_arch = "wasm32")]
        let config = BusinessConfig::default();

        Self::with_fetcher(config, Arc::new(EhttpFetcher))
    }
}

impl State {
    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        Self {
            config,
            fetcher,
            members: MembersPanelState::new(),
        }
    }

    /// State pointing at `members_url` with the real transport.
    pub fn test(members_url: impl Into<String>) -> Self {
        Self::with_fetcher(BusinessConfig::new(members_url), Arc::new(EhttpFetcher))
    }
}
