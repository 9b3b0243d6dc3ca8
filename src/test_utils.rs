use crate::http::{HTTPError, HTTPResult};
use crate::youtube::service::{Endpoint, Query, Service};
use reqwest::StatusCode;
use std::fs;
use std::sync::Mutex;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .expect(&format!("could not load test data from {filename}"))
            .trim_end(),
    )
}

/// Serves canned API responses from `tests/data`.
///
/// Fixtures are named after the endpoint and the parameter that selects
/// the resource, plus the page token when there is one:
///
/// - `channels_<forUsername or id>.json`
/// - `subscriptions_<channelId>[_<pageToken>].json`
/// - `search_<channelId>[_<pageToken>].json`
/// - `videos_<first video id>.json`
///
/// A missing fixture is answered with HTTP 404.
#[derive(Debug, Default)]
pub struct TestService {
    requests: Mutex<Vec<(Endpoint, Query)>>,
}

impl TestService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<(Endpoint, Query)> {
        self.requests.lock().unwrap().clone()
    }

    fn fixture(endpoint: Endpoint, query: &Query) -> String {
        let selector = match endpoint {
            Endpoint::Channels => query
                .get("forUsername")
                .or_else(|| query.get("id"))
                .unwrap_or_default()
                .to_string(),
            Endpoint::Subscriptions | Endpoint::Search => {
                let channel_id = query.get("channelId").unwrap_or_default();
                match query.get("pageToken") {
                    Some(token) => format!("{channel_id}_{token}"),
                    None => channel_id.to_string(),
                }
            }
            Endpoint::Videos => query
                .get("id")
                .and_then(|ids| ids.split(',').next())
                .unwrap_or_default()
                .to_string(),
        };
        format!("tests/data/{endpoint}_{selector}.json")
    }
}

impl Service for TestService {
    async fn get(&self, endpoint: Endpoint, query: &Query) -> HTTPResult<String> {
        self.requests
            .lock()
            .unwrap()
            .push((endpoint, query.clone()));
        let filename = Self::fixture(endpoint, query);
        fs::read_to_string(&filename).map_err(|_| HTTPError::Status {
            status: StatusCode::NOT_FOUND,
            reason: Some(format!("no fixture at {filename}")),
        })
    }
}
