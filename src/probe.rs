// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ProbeError;
use crate::models::ApiSettings;
use crate::utils::fmt_timestamp;
use chrono::{DateTime, Utc};

pub const PING_PATH: &str = "/_functions/financial/ping";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Outcome of one ping: an HTTP status, or a transport error message.
pub type PingResult = Result<u16, String>;

pub trait PingClient {
    fn ping(&self, url: &str, api_key: &str) -> PingResult;
}

pub struct HttpPingClient {
    client: reqwest::blocking::Client,
}

impl HttpPingClient {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: crate::utils::http_client()?,
        })
    }
}

impl PingClient for HttpPingClient {
    fn ping(&self, url: &str, api_key: &str) -> PingResult {
        self.client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .map(|resp| resp.status().as_u16())
            .map_err(|e| e.to_string())
    }
}

pub fn ping_url(site_url: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), PING_PATH)
}

/// Runs one connectivity check and records the outcome in `settings`.
/// `last_sync` only moves on success.
pub fn test_connection(
    settings: &mut ApiSettings,
    client: &dyn PingClient,
) -> Result<DateTime<Utc>, ProbeError> {
    if !settings.has_credentials() {
        return Err(ProbeError::MissingCredentials);
    }
    let url = ping_url(&settings.site_url);
    log::debug!("pinging {}", url);
    match client.ping(&url, &settings.api_key) {
        Ok(status) if (200..300).contains(&status) => {
            let now = Utc::now();
            settings.connected = true;
            settings.last_sync = Some(now);
            log::debug!("connected to {} ({})", settings.site_url, status);
            Ok(now)
        }
        Ok(status) => {
            settings.connected = false;
            log::warn!("ping {} returned {}", url, status);
            Err(ProbeError::Status(status))
        }
        Err(msg) => {
            settings.connected = false;
            log::warn!("ping {} failed: {}", url, msg);
            Err(ProbeError::Transport(msg))
        }
    }
}

/// Status line shown under the integration settings, if any.
pub fn status_line(settings: &ApiSettings) -> Option<String> {
    if settings.connected {
        let last = settings
            .last_sync
            .as_ref()
            .map(fmt_timestamp)
            .unwrap_or_else(|| "Never".to_string());
        Some(format!("Connected! Last Sync: {}", last))
    } else if settings.has_credentials() {
        Some("Not Connected".to_string())
    } else {
        None
    }
}
