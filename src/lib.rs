use anyhow::Result;
use config::Config;
use dotenvy::dotenv;
use std::env;

pub mod api;
pub mod cli;
pub mod display;
pub mod models;
pub mod roster;
pub mod session;
pub mod stats;

use crate::api::ApiClient;
use crate::session::Session;

/// The console's handle on the attendance service: the API client plus the
/// persistent session whose token it sends.
pub struct Console {
    pub api: ApiClient,
    pub session: Session,
}

impl Console {
    /// Exchanges credentials for a token and persists it. On failure the
    /// session is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let response = self.api.login(email, password)?;
        self.session.store(response.token.clone())?;
        self.api.set_token(response.token);
        Ok(())
    }

    /// Clears the session token from memory and disk, regardless of whether
    /// one was stored.
    pub fn logout(&mut self) -> Result<()> {
        self.session.clear()?;
        self.api.clear_token();
        Ok(())
    }
}

pub fn create_default_console() -> Result<Console> {
    dotenv().ok();

    // Load configuration from `config.toml`. The base URL can be overridden
    // through the environment, e.g. when pointing at a staging deployment.
    let settings = Config::builder()
        .add_source(config::File::with_name("config"))
        .build()?;

    let base_url = match env::var("ATTENDANCE_API_URL") {
        Ok(url) => url,
        Err(_) => settings.get_string("console.base_url")?,
    };
    let token_path = settings.get_string("console.token_path")?;

    let session = Session::load(&token_path)?;
    let api = ApiClient::new(base_url, session.token().map(str::to_string));

    Ok(Console { api, session })
}
