// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the YouTube Data API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the YouTube Data API over HTTPS, essentially a specialized HTTPS
//! client that knows the API's endpoints and attaches the API key to
//! every request.

use crate::conf::Settings;
use crate::http::{self, HTTPResult};
use log::debug;
use reqwest::{Client, Request};
use std::fmt;

/// The YouTube Data API resources this tool reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `channels.list`: channel metadata and statistics.
    Channels,

    /// `subscriptions.list`: a channel's subscribers.
    Subscriptions,

    /// `search.list`: videos uploaded by a channel.
    Search,

    /// `videos.list`: per-video statistics.
    Videos,
}

impl Endpoint {
    /// Path of the endpoint relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Channels => "channels",
            Endpoint::Subscriptions => "subscriptions",
            Endpoint::Search => "search",
            Endpoint::Videos => "videos",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Ordered query parameters for a single API request.
///
/// Setting a parameter that already exists replaces its value in place,
/// so a query can be reused from page to page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a parameter and returns the query.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Adds or replaces a parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(param) => param.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Removes a parameter, returning its old value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(pos).1)
    }

    /// The value of a parameter, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        write!(f, "{joined}")
    }
}

/// A service for retrieving raw responses from the YouTube Data API.
///
/// Using this trait, clients can implement different ways of connecting
/// to the API, such as an actual connector for production code, and a
/// mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request against `endpoint` with the given `query`
    /// and returns the raw body.
    fn get(
        &self,
        endpoint: Endpoint,
        query: &Query,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the YouTube Data API directly.
#[derive(Debug)]
pub struct YouTubeService {
    client: Client,
    settings: Settings,
}

impl YouTubeService {
    /// Creates a new YouTube service that sends requests using `settings`.
    pub fn new(settings: Settings) -> HTTPResult<Self> {
        let client = http::client()?;
        Ok(Self { client, settings })
    }

    fn uri(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.settings.api_base(), endpoint.path())
    }

    fn request(&self, endpoint: Endpoint, query: &Query) -> HTTPResult<Request> {
        let mut params = query.iter().collect::<Vec<_>>();
        params.push(("key", self.settings.api_key().expose()));
        let request = self.client.get(self.uri(endpoint)).query(&params).build()?;
        Ok(request)
    }
}

impl Service for YouTubeService {
    async fn get(&self, endpoint: Endpoint, query: &Query) -> HTTPResult<String> {
        let request = self.request(endpoint, query)?;
        debug!("GET {} ?{query}", self.uri(endpoint));

        let resp = self.client.execute(request).await?;
        http::json_body(resp).await
    }
}
