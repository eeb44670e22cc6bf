use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub gemini_api_url: String,
    pub gemini_api_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:9090".into(),
            gemini_api_url:
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
                    .into(),
            gemini_api_key: String::new(),
        }
    }
}

/// Settings resolution order: defaults, then `server.toml`, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("gemini_api_url") {
                settings.gemini_api_url = v.clone();
            }
            if let Some(v) = file_cfg.get("gemini_api_key") {
                settings.gemini_api_key = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("GEMINI_API_URL") {
        settings.gemini_api_url = v;
    }
    if let Ok(v) = std::env::var("APP__GEMINI_API_URL") {
        settings.gemini_api_url = v;
    }

    if let Ok(v) = std::env::var("GEMINI_API_KEY") {
        settings.gemini_api_key = v;
    }
    if let Ok(v) = std::env::var("APP__GEMINI_API_KEY") {
        settings.gemini_api_key = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_bind_and_public_gemini_endpoint() {
        let settings = Settings::default();
        assert_eq!(settings.server_bind, "127.0.0.1:9090");
        assert!(settings.gemini_api_url.contains("generativelanguage"));
        assert!(settings.gemini_api_key.is_empty());
    }
}
