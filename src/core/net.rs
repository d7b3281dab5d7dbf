// src/core/net.rs

// Blocking HTTPS GET; called once before the window opens.

use std::{error::Error, time::Duration};
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let t = std::time::Instant::now();
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }

    // Pages are read as UTF-8 regardless of the declared charset.
    let bytes = resp.bytes()?;
    logd!("Net: GET {} → {} bytes in {:?}", url, bytes.len(), t.elapsed());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
