// src/core/net.rs
//
// One GET per query. No retry, no explicit timeout (reqwest's default applies).

use reqwest::blocking::Client;

use crate::{config::consts::USER_AGENT, config::options::QueryOptions, error::MealError};

/// Anything that can hand back the raw response body for an API date
/// (`YYYYMMDD`). The HTTP client implements it; tests use canned bodies.
pub trait MealSource: Send + Sync {
    fn fetch(&self, api_date: &str) -> Result<String, MealError>;
}

pub struct NeisClient {
    http: Client,
    options: QueryOptions,
}

impl NeisClient {
    pub fn new(options: QueryOptions) -> Result<Self, MealError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, options })
    }
}

impl MealSource for NeisClient {
    fn fetch(&self, api_date: &str) -> Result<String, MealError> {
        logd!("Net: GET {} date={}", self.options.endpoint, api_date);

        let resp = self
            .http
            .get(&self.options.endpoint)
            .query(&self.options.query_pairs(api_date))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MealError::Status(status.as_u16()));
        }
        Ok(resp.text()?)
    }
}
