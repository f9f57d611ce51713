// src/core/net.rs

// HTTPS GET via reqwest's blocking client

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::{LOAD_FAILED_MSG, USER_AGENT};

/// Anything that keeps the feed from producing rows.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to feed failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("feed is not a JSON row array: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read captured feed {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FeedError {
    /// Generic retry-later text; details go to the log.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MSG
    }
}

pub fn http_get(url: &str, timeout: Duration) -> Result<String, FeedError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}
