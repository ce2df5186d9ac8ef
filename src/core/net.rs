// src/core/net.rs
//
// The fetch capability. Every call is self-contained: one GET, one body,
// nothing held between calls except reqwest's connection pool.

use std::{thread, time::Duration};

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::USER_AGENT;
use crate::core::html;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("table #{region} not found on {url}")]
    RegionMissing { url: String, region: String },
}

/// Something that can hand back page HTML for a URL within a bounded wait.
pub trait PageSource {
    fn fetch_page(&self, url: &str, wait: Duration) -> Result<String, FetchError>;

    /// Outer HTML of each named table region, in the order asked for.
    /// Any missing region fails the whole call.
    fn fetch_regions(
        &self,
        url: &str,
        region_ids: &[&str],
        wait: Duration,
    ) -> Result<Vec<String>, FetchError> {
        let doc = self.fetch_page(url, wait)?;
        region_ids
            .iter()
            .map(|id| {
                html::extract_region(&doc, id).ok_or_else(|| FetchError::RegionMissing {
                    url: url.to_string(),
                    region: id.to_string(),
                })
            })
            .collect()
    }
}

/// Blocking HTTP source. Sleeps `pause` after every request, successful or not.
pub struct HttpSource {
    client: Client,
    pause: Duration,
}

impl HttpSource {
    pub fn new(pause: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, pause })
    }

    fn get(&self, url: &str, wait: Duration) -> Result<String, FetchError> {
        let http = |source| FetchError::Http { url: url.to_string(), source };

        let resp = self.client.get(url).timeout(wait).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text().map_err(http)
    }
}

impl PageSource for HttpSource {
    fn fetch_page(&self, url: &str, wait: Duration) -> Result<String, FetchError> {
        log::debug!("GET {url}");
        let result = self.get(url, wait);
        if !self.pause.is_zero() {
            thread::sleep(self.pause); // be polite
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static(&'static str);

    impl PageSource for Static {
        fn fetch_page(&self, _url: &str, _wait: Duration) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn fetch_regions_in_requested_order() {
        let src = Static(r#"<table id="b"><tr><td>2</td></tr></table><table id="a"><tr><td>1</td></tr></table>"#);
        let got = src.fetch_regions("u", &["a", "b"], Duration::from_secs(1)).unwrap();
        assert!(got[0].contains(">1<"));
        assert!(got[1].contains(">2<"));
    }

    #[test]
    fn missing_region_names_it() {
        let src = Static(r#"<table id="a"></table>"#);
        let err = src.fetch_regions("u", &["a", "zz"], Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, FetchError::RegionMissing { ref region, .. } if region == "zz"));
    }
}
