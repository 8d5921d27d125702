use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{
    config::SiteConfig,
    countdown::TimeLeft,
    session::WizardStore,
    submit::{SimulatedSubmitter, Submitter},
};

#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
    pub wizards: Arc<WizardStore>,
    pub submitter: Arc<dyn Submitter>,
    pub events: broadcast::Sender<ServerEvent>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay));
        Self::with_submitter(config, submitter)
    }

    pub fn with_submitter(config: SiteConfig, submitter: Arc<dyn Submitter>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            wizards: Arc::new(WizardStore::new(config.session_idle)),
            submitter,
            events,
            config,
        }
    }
}

/// Pushed to `/eventi` subscribers by the ticker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerEvent {
    Countdown(TimeLeft),
    Carousel { index: usize },
}

#[cfg(test)]
pub fn test_state() -> AppState {
    let config = SiteConfig::from_lookup(|name| match name {
        "SUBMIT_DELAY_MS" => Some("0".to_string()),
        _ => None,
    })
    .expect("test config");
    AppState::new(config)
}
