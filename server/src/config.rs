use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub auth_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let auth_token = env::var("STATUSGATE_AUTH_TOKEN").unwrap_or_else(|_| "auth".to_string());

        Self { auth_token }
    }
}
