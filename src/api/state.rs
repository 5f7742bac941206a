use std::sync::Arc;

use anyhow::Result;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use handlebars::Handlebars;

use crate::api::routes::index;
use crate::core::AppConfig;
use crate::sessions::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub config: AppConfig,
    pub templates: Arc<Handlebars<'static>>,
    // Signs the session cookie. Generated per process so every client
    // session is invalidated on restart.
    cookie_key: Key,
}

impl AppState {
    pub fn new(sessions: SessionRegistry, config: AppConfig) -> Result<Self> {
        Ok(Self {
            sessions,
            config,
            templates: Arc::new(index::templates()?),
            cookie_key: Key::generate(),
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
