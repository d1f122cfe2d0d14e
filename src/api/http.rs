//! HTTP client for the rankings API.
//!
//! The engine never talks to the network itself; this client only produces
//! the record snapshots it consumes.

use crate::{
    api::types::{records_from_value, StreakRange, Trends},
    records::{PlayerRecord, RankingStat},
    Result,
};
use log::{debug, info};
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client, Request,
};
use serde_json::Value;


/// Players requested from `/rankings` when no limit is given.
pub const DEFAULT_LIMIT: u32 = 360;

/// Thin wrapper over a `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct RankingsClient {
    client: Client,
    base_url: String,
}

impl RankingsClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/rankings?limit=..&stat=..`
    pub fn rankings_request(&self, limit: u32, stat: RankingStat) -> Result<Request> {
        let limit = limit.to_string();
        let request = self
            .client
            .get(format!("{}/rankings", self.base_url))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&[("limit", limit.as_str()), ("stat", stat.query_key())])
            .build()?;
        Ok(request)
    }

    /// `GET {base}/trends?range=..`
    pub fn trends_request(&self, range: StreakRange) -> Result<Request> {
        let request = self
            .client
            .get(format!("{}/trends", self.base_url))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&[("range", range.games().to_string())])
            .build()?;
        Ok(request)
    }

    /// Fetch one ranked record snapshot.
    pub async fn fetch_rankings(&self, limit: u32, stat: RankingStat) -> Result<Vec<PlayerRecord>> {
        let request = self.rankings_request(limit, stat)?;
        debug!("GET {}", request.url());

        let value = self
            .client
            .execute(request)
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let records = records_from_value(value)?;
        info!("fetched {} ranked players ({})", records.len(), stat);
        Ok(records)
    }

    pub async fn fetch_trends(&self, range: StreakRange) -> Result<Trends> {
        let request = self.trends_request(range)?;
        debug!("GET {}", request.url());

        let trends = self
            .client
            .execute(request)
            .await?
            .error_for_status()?
            .json::<Trends>()
            .await?;

        info!(
            "fetched {} hot / {} cold streaks ({})",
            trends.hot.len(),
            trends.cold.len(),
            range
        );
        Ok(trends)
    }
}
