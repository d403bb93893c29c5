// src/core/scanner/headers_scanner.rs

use reqwest::header::HeaderMap;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ScanConfig;
use crate::core::models::{
    HeaderScanError, HeaderSet, ReferenceSets, Result, ScanOutcome, ScanResult,
};

/// Builds the URL requested for a domain. The scheme is always HTTPS.
pub fn target_url(domain: &str) -> std::result::Result<Url, url::ParseError> {
    Url::parse(&format!("https://{}", domain))
}

/// Classifies a set of response headers against the reference lists.
///
/// `missing` lists every required header absent from the response, in the
/// reference set's (lexicographic) order. The other three categories list
/// the response's own header names, once each and in response order, for
/// every name found in the matching reference set. A header may land in
/// several categories.
pub fn classify_headers(domain: &str, status: u16, headers: &HeaderMap, sets: &ReferenceSets) -> ScanResult {
    // HeaderName is already lower case, but the reference sets normalize anyway.
    let found: HeaderSet = headers.keys().map(|name| name.as_str()).collect();

    let missing: Vec<String> = sets
        .missing
        .iter()
        .filter(|name| !found.contains(name))
        .map(String::from)
        .collect();

    let present_in = |reference: &HeaderSet| -> Vec<String> {
        headers
            .keys()
            .map(|name| name.as_str())
            .filter(|name| reference.contains(name))
            .map(String::from)
            .collect()
    };

    let result = ScanResult {
        domain: domain.to_string(),
        outcome: ScanOutcome::Connected { status },
        missing,
        insecure: present_in(&sets.insecure),
        security: present_in(&sets.security),
        fingerprint: present_in(&sets.fingerprint),
    };

    debug!(
        domain,
        missing = ?result.missing,
        insecure = ?result.insecure,
        security = ?result.security,
        fingerprint = ?result.fingerprint,
        "Classified response headers."
    );
    result
}

/// Fetches a domain's response headers and classifies them.
///
/// One client is built per run and shared by every scan. Each scan is a
/// single GET with no retry.
pub struct HeadersScanner {
    client: reqwest::Client,
    sets: ReferenceSets,
}

impl HeadersScanner {
    pub fn new(config: &ScanConfig, sets: ReferenceSets) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        // No User-Agent is sent unless one was configured.
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build()?;
        Ok(Self { client, sets })
    }

    /// Scans `https://<domain>/`.
    ///
    /// Never fails: an unreachable domain, a timeout or a domain that does
    /// not form a valid URL all yield [`ScanResult::failed`].
    pub async fn scan(&self, domain: &str) -> ScanResult {
        match target_url(domain) {
            Ok(url) => self.scan_url(domain, url.as_str()).await,
            Err(e) => {
                warn!(domain, error = %e, "Domain does not form a valid URL.");
                ScanResult::failed(domain, format!("invalid URL: {}", e))
            }
        }
    }

    /// Scans an explicit URL and records the result under `domain`.
    pub async fn scan_url(&self, domain: &str, url: &str) -> ScanResult {
        info!(domain, url, "Starting headers scan.");
        match self.fetch_headers(url).await {
            Ok((status, headers)) => {
                info!(domain, status, headers = headers.keys_len(), "Received HTTP response.");
                classify_headers(domain, status, &headers, &self.sets)
            }
            Err(e) => {
                warn!(domain, error = %e, "Headers scan failed.");
                ScanResult::failed(domain, e.to_string())
            }
        }
    }

    async fn fetch_headers(&self, url: &str) -> Result<(u16, HeaderMap)> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HeaderScanError::Network {
                url: url.to_string(),
                reason: if e.is_timeout() { "timed out".to_string() } else { e.to_string() },
            })?;
        // Only the headers are needed; the body is dropped with the response.
        Ok((response.status().as_u16(), response.headers().clone()))
    }
}
