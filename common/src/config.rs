//! Backend endpoint configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Backend origin used when the hosting page supplies none
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Origin of the chat/upload backend and the endpoint URLs derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl BackendConfig {
    /// Build a config from an externally supplied origin.
    ///
    /// Accepts `http`/`https` origins only; a trailing slash is stripped
    /// so endpoint joins stay single-slashed.
    pub fn parse(origin: &str) -> Result<Self> {
        let origin = origin.trim().trim_end_matches('/');
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(Error::Config(format!(
                "backend origin must be an http(s) URL, got {:?}",
                origin
            )));
        }
        Ok(Self {
            origin: origin.to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// URL for `POST /chat`
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.origin)
    }

    /// URL for `POST /upload`
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.origin)
    }
}
